//! Crate error type.
//!
//! Nothing in this crate is fatal to the page. Errors travel up to the
//! feature installer that caused them, get logged there, and the remaining
//! features keep going.

use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// `window` is missing (worker or non-browser host).
    #[error("browser window is not available")]
    NoWindow,

    /// `window.document` is missing.
    #[error("document is not available")]
    NoDocument,

    /// `localStorage` is disabled or blocked by privacy settings.
    #[error("localStorage is not available")]
    StorageUnavailable,

    /// A storage read or write threw.
    #[error("storage access failed: {0}")]
    Storage(String),

    /// A DOM call threw or an expected element was missing.
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// The page configuration block could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),
}

impl PageError {
    /// Wrap a thrown DOM exception.
    pub fn dom(value: JsValue) -> Self {
        Self::Dom(js_message(&value))
    }

    /// Wrap a thrown storage exception.
    pub fn storage(value: JsValue) -> Self {
        Self::Storage(js_message(&value))
    }

    /// A required element was not found in markup this crate created.
    pub fn missing(selector: &str) -> Self {
        Self::Dom(format!("missing element `{selector}`"))
    }
}

/// Best-effort human-readable text for a thrown JS value.
fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
