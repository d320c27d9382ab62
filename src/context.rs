use crate::config::ApiConfig;
use crate::http::HttpClient;

/// Startup-resolved services handed to the component tree.
///
/// Built once by the bootstrap and provided as Leptos context instead of
/// living in a global.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: ApiConfig,
    pub http: HttpClient,
}

impl AppContext {
    /// Configure the shared HTTP client from `config`.
    pub fn new(config: ApiConfig) -> Self {
        let http = HttpClient::new(&config);
        Self { config, http }
    }
}
