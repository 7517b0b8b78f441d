//! UI Configuration
//!
//! Delays, selectors' tuning values and endpoint paths. Defaults match the
//! behavior the site shipped with; a page can override any field through
//! `<meta name="ui-config" content="{...}">`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::dom::{CarouselOptions, Dom, VisibilityOptions};
use crate::error::{UiError, UiResult};

/// Meta tag holding a JSON override of [`UiConfig`]
pub const CONFIG_META_SELECTOR: &str = r#"meta[name="ui-config"]"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Delay before the body fades in
    pub fade_in_delay_ms: u64,
    pub fade_in_transition: String,
    pub reveal: RevealConfig,
    pub carousel: CarouselOptions,
    /// Delay before non-permanent alerts close themselves
    pub alert_dismiss_ms: u64,
    /// Submit buttons are re-enabled after this long, whatever happened
    pub submit_fallback_ms: u64,
    /// Path prefix of the favorite toggle endpoint (property id is appended)
    pub favorite_endpoint: String,
    /// Ignore clicks on a property whose toggle is still in flight
    pub guard_duplicate_favorites: bool,
}

/// Scroll reveal tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub transition: String,
    /// Transform applied before the element is revealed
    pub hidden_transform: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            fade_in_delay_ms: 100,
            fade_in_transition: "opacity 0.5s ease".to_string(),
            reveal: RevealConfig::default(),
            carousel: CarouselOptions::default(),
            alert_dismiss_ms: 5000,
            submit_fallback_ms: 10_000,
            favorite_endpoint: "/customer/toggle-favorite".to_string(),
            guard_duplicate_favorites: true,
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -100px 0px".to_string(),
            transition: "opacity 0.6s ease, transform 0.6s ease".to_string(),
            hidden_transform: "translateY(20px)".to_string(),
        }
    }
}

impl RevealConfig {
    pub fn visibility_options(&self) -> VisibilityOptions {
        VisibilityOptions {
            threshold: self.threshold,
            root_margin: self.root_margin.clone(),
        }
    }
}

impl UiConfig {
    pub fn from_json(json: &str) -> UiResult<Self> {
        let config: UiConfig = serde_json::from_str(json).map_err(|e| UiError::Config(e.to_string()))?;
        if !(0.0..=1.0).contains(&config.reveal.threshold) {
            return Err(UiError::Config(format!(
                "reveal threshold must be within 0..=1, got {}",
                config.reveal.threshold
            )));
        }
        Ok(config)
    }

    pub fn fade_in_delay(&self) -> Duration {
        Duration::from_millis(self.fade_in_delay_ms)
    }

    pub fn alert_dismiss_delay(&self) -> Duration {
        Duration::from_millis(self.alert_dismiss_ms)
    }

    pub fn submit_fallback(&self) -> Duration {
        Duration::from_millis(self.submit_fallback_ms)
    }
}

/// Read the page's config override, falling back to defaults
pub fn load_from_page<D: Dom>(dom: &D) -> UiConfig {
    let Some(content) = dom
        .query(CONFIG_META_SELECTOR)
        .and_then(|meta| dom.attribute(&meta, "content"))
    else {
        return UiConfig::default();
    };

    match UiConfig::from_json(&content) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring ui-config meta tag: {}", err);
            UiConfig::default()
        }
    }
}
