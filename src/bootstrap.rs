//! One-shot startup sequence: styles, application instance, store, HTTP
//! origin, mount.

use std::sync::atomic::{AtomicBool, Ordering};

use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::app::App;
use crate::config::{ApiConfig, API_URL_ENV};
use crate::context::AppContext;
use crate::error::BootstrapError;
use crate::logging;
use crate::models::AppStore;
use crate::styles::register_stylesheets;

/// Selector of the element the application renders into.
pub const APP_SELECTOR: &str = "#app";

static BOOTSTRAPPED: AtomicBool = AtomicBool::new(false);

fn find_mount_target(document: &Document) -> Result<HtmlElement, BootstrapError> {
    document
        .query_selector(APP_SELECTOR)?
        .ok_or_else(|| BootstrapError::MountTargetMissing {
            selector: APP_SELECTOR.to_string(),
        })?
        .dyn_into::<HtmlElement>()
        .map_err(|el| {
            BootstrapError::Dom(format!(
                "mount target `{APP_SELECTOR}` is <{}>, not an HTML element",
                el.tag_name()
            ))
        })
}

/// Run the startup sequence against `document`, rendering `root` inside the
/// application chrome.
///
/// Steps run in order and the first failure aborts the rest. Nothing is
/// rolled back: stylesheets linked before a mount failure stay linked.
/// The mounted view is never unmounted; it lives as long as the page.
pub fn bootstrap<F, N>(
    document: &Document,
    config: ApiConfig,
    root: F,
) -> Result<(), BootstrapError>
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    register_stylesheets(document)?;

    let context = AppContext::new(config);
    let target = find_mount_target(document)?;

    let handle = mount_to(target, move || {
        provide_context(AppStore::new());
        provide_context(context);
        view! {
            <main class="app">
                <App />
                <section class="workspace">{root()}</section>
            </main>
        }
    });
    handle.forget();

    Ok(())
}

/// Bootstrap the page's application. Only the first call does anything;
/// later calls return [`BootstrapError::AlreadyBootstrapped`].
pub fn run<F, N>(root: F) -> Result<(), BootstrapError>
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    if BOOTSTRAPPED.swap(true, Ordering::SeqCst) {
        return Err(BootstrapError::AlreadyBootstrapped);
    }

    let window = web_sys::window().ok_or(BootstrapError::NoWindow)?;
    let document = window.document().ok_or(BootstrapError::NoDocument)?;
    let config = ApiConfig::from_build_env();
    logging::info(&format!(
        "API origin: {} (override with {API_URL_ENV} at build time)",
        config.base_url()
    ));

    bootstrap(&document, config, root)?;
    logging::info(&format!("mounted on {APP_SELECTOR}"));
    Ok(())
}
