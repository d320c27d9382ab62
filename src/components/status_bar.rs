use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::AppStore;

/// Top bar showing the API origin and its last probed health.
#[component]
pub fn StatusBar() -> impl IntoView {
    let store = use_context::<AppStore>().expect("AppStore context missing");
    let context = use_context::<AppContext>().expect("AppContext context missing");
    let origin = context.config.base_url().to_string();

    view! {
        <header class="status-bar">
            <span class="status-title">"Business OS Studio"</span>
            <span class="status-origin" title="API origin">{origin}</span>
            <span class=move || store.api_health.get().css_class()>
                {move || store.api_health.get().label()}
            </span>
        </header>
    }
}
