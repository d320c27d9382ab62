use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Fatal startup failures. None of these are retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BootstrapError {
    #[error("no global window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no <head> to attach stylesheets to")]
    NoHead,

    #[error("mount target `{selector}` not found in document")]
    MountTargetMissing { selector: String },

    #[error("application already bootstrapped")]
    AlreadyBootstrapped,

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for BootstrapError {
    fn from(value: JsValue) -> Self {
        Self::Dom(describe_js_error(&value))
    }
}

/// Errors raised by the shared HTTP client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("failed to encode request body for {url}: {message}")]
    Encode { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

/// Best-effort human readable text for a thrown JS value.
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{value:?}")
}
