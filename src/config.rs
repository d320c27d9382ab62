//! API origin configuration.
//!
//! The origin is fixed at build time: Trunk exports the environment of the
//! build to `rustc`, so `FLOW_STUDIO_API_URL=https://... trunk build` bakes
//! the override into the bundle.

/// Origin used when no override is supplied.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Name of the build-time variable carrying the origin override.
pub const API_URL_ENV: &str = "FLOW_STUDIO_API_URL";

/// Resolve the API base origin from an optional override.
///
/// A missing or empty override falls back to [`DEFAULT_API_URL`]. Anything
/// else is returned exactly as given.
pub fn resolve_base_url(override_url: Option<&str>) -> String {
    match override_url {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => DEFAULT_API_URL.to_string(),
    }
}

/// Resolved network configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(override_url: Option<&str>) -> Self {
        Self {
            base_url: resolve_base_url(override_url),
        }
    }

    /// Configuration baked in by the build environment.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("FLOW_STUDIO_API_URL"))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(None)
    }
}
