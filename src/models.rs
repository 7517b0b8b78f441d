//! Frontend Models
//!
//! Data structures exchanged with the server and passed between handlers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Body returned by the favorite toggle endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteResponse {
    pub is_favorite: bool,
    pub message: String,
}

/// Toast severity. Names outside the known four are kept as `Other` and used
/// as the style name unchanged (`primary`, `dark`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
    Other(String),
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Other(name) => name,
        }
    }

    /// Bootstrap contextual color used for the toast background
    pub fn style_class(&self) -> &str {
        match self {
            Severity::Error => "danger",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "success" => Ok(Severity::Success),
            "warning" => Ok(Severity::Warning),
            "error" | "danger" => Ok(Severity::Error),
            other if is_style_name(other) => Ok(Severity::Other(other.to_string())),
            other => Err(format!("invalid toast severity: {:?}", other)),
        }
    }
}

/// Non-empty and limited to characters valid in a single class name
fn is_style_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
