use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{NotificationBar, StatusBar};
use crate::context::AppContext;
use crate::logging;
use crate::models::{ApiHealth, AppStore};

/// Application chrome around the root view. Expects `AppContext` and
/// `AppStore` in context.
#[component]
pub fn App() -> impl IntoView {
    let store = use_context::<AppStore>().expect("AppStore context missing");
    let context = use_context::<AppContext>().expect("AppContext context missing");

    // One probe per application instance
    let http = context.http;
    spawn_local(async move {
        match http.health().await {
            Ok(status) => {
                logging::info(&format!("API health: {}", status.status));
                store.set_health(ApiHealth::from(status));
            }
            Err(e) => {
                logging::warn(&format!("API health probe failed: {e}"));
                store.set_health(ApiHealth::Offline(e.to_string()));
                store.show_notification(format!("Cannot reach API at {}", http.base_url()));
            }
        }
    });

    view! {
        <StatusBar />
        <NotificationBar />
    }
}
