use flow_studio_ui::components::FlowCanvas;
use flow_studio_ui::{logging, run};
use leptos::prelude::*;

fn main() {
    logging::init();

    if let Err(e) = run(|| view! { <FlowCanvas /> }) {
        logging::error(&format!("startup failed: {e}"));
        wasm_bindgen::throw_str(&e.to_string());
    }
}
