use leptos::prelude::*;

/// Host element for the flow editor, styled by the flow theme sheets.
#[component]
pub fn FlowCanvas() -> impl IntoView {
    view! {
        <div class="flow-canvas flow-theme-default">
            <div class="flow-pane"></div>
            <div class="flow-controls"></div>
            <div class="flow-minimap"></div>
        </div>
    }
}
