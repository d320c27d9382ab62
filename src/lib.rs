//! Browser entry point of Business OS Studio: resolves the API origin,
//! registers global styles and mounts the Leptos application on `#app`.

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod http;
pub mod logging;
pub mod models;
pub mod styles;

pub use bootstrap::{bootstrap, run, APP_SELECTOR};
pub use config::{ApiConfig, DEFAULT_API_URL};
pub use context::AppContext;
pub use error::{ApiError, BootstrapError};
