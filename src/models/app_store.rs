use leptos::prelude::*;

use crate::http::HealthStatus;

/// Reachability of the configured API origin, as last probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiHealth {
    /// Probe not finished yet
    Checking,
    /// Backend answered; `graph_db` reports its database connection
    Online { graph_db: bool },
    /// Backend unreachable or unhealthy
    Offline(String),
}

impl ApiHealth {
    pub fn label(&self) -> String {
        match self {
            Self::Checking => "Connecting…".to_string(),
            Self::Online { graph_db: true } => "API online".to_string(),
            Self::Online { graph_db: false } => "API online (graph database offline)".to_string(),
            Self::Offline(_) => "API offline".to_string(),
        }
    }

    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Checking => "health health-checking",
            Self::Online { graph_db: true } => "health health-online",
            Self::Online { graph_db: false } => "health health-degraded",
            Self::Offline(_) => "health health-offline",
        }
    }
}

impl From<HealthStatus> for ApiHealth {
    fn from(status: HealthStatus) -> Self {
        if status.is_healthy() {
            Self::Online {
                graph_db: status.neo4j,
            }
        } else {
            Self::Offline(format!("backend reported status `{}`", status.status))
        }
    }
}

/// Application-wide reactive store.
/// Shared with every component via `use_context()`.
#[derive(Clone, Copy)]
pub struct AppStore {
    pub api_health: RwSignal<ApiHealth>,
    /// Active notification (if any)
    pub notification: RwSignal<Option<String>>,
}

impl AppStore {
    pub fn new() -> Self {
        Self {
            api_health: RwSignal::new(ApiHealth::Checking),
            notification: RwSignal::new(None),
        }
    }

    /// Show a notification (auto-dismiss is handled by the component)
    pub fn show_notification(&self, message: impl Into<String>) {
        self.notification.set(Some(message.into()));
    }

    /// Clear the current notification
    pub fn clear_notification(&self) {
        self.notification.set(None);
    }

    /// Record the result of the latest health check
    pub fn set_health(&self, health: ApiHealth) {
        self.api_health.set(health);
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}
