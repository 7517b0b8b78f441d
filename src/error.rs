//! Error Types
//!
//! Failures that cross a fallible seam (network, config, browser bootstrap).
//! Event handlers never surface these to the page; they log and degrade.

use wasm_bindgen::{JsCast, JsValue};

pub type UiResult<T> = Result<T, UiError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UiError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("request failed with HTTP status {0}")]
    Status(u16),

    #[error("invalid response: {0}")]
    Decode(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        let text = value
            .dyn_ref::<js_sys::Error>()
            .map(|err| String::from(err.message()))
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        UiError::Js(text)
    }
}
