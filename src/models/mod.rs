pub mod app_store;

pub use app_store::{ApiHealth, AppStore};
