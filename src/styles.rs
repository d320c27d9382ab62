//! Global stylesheet registration.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlLinkElement};

use crate::error::BootstrapError;

/// Stylesheets every page needs before first paint, in cascade order.
pub const GLOBAL_STYLESHEETS: &[&str] = &[
    "styles/design.css",
    "styles/flow/core.css",
    "styles/flow/theme-default.css",
    "styles/flow/controls.css",
    "styles/flow/minimap.css",
];

/// Hrefs from `wanted` that are not already linked, keeping `wanted` order.
pub fn pending_stylesheets<'a, S: AsRef<str>>(
    already_linked: &[S],
    wanted: &[&'a str],
) -> Vec<&'a str> {
    wanted
        .iter()
        .copied()
        .filter(|href| !already_linked.iter().any(|linked| linked.as_ref() == *href))
        .collect()
}

fn linked_stylesheets(document: &Document) -> Result<Vec<String>, BootstrapError> {
    let nodes = document.query_selector_all("link[rel=\"stylesheet\"]")?;
    let mut hrefs = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(link) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlLinkElement>().ok()) {
            // attribute value, not the resolved absolute `href` property
            if let Some(href) = link.get_attribute("href") {
                hrefs.push(href);
            }
        }
    }
    Ok(hrefs)
}

/// Append a `<link rel="stylesheet">` to `<head>` for each global stylesheet
/// that is not linked yet. Returns how many were added.
pub fn register_stylesheets(document: &Document) -> Result<usize, BootstrapError> {
    let head = document.head().ok_or(BootstrapError::NoHead)?;
    let linked = linked_stylesheets(document)?;
    let pending = pending_stylesheets(&linked, GLOBAL_STYLESHEETS);

    for href in &pending {
        let link: HtmlLinkElement = document
            .create_element("link")?
            .dyn_into()
            .map_err(|_| BootstrapError::Dom("created <link> is not an HtmlLinkElement".into()))?;
        link.set_rel("stylesheet");
        link.set_href(href);
        head.append_child(&link)?;
    }

    Ok(pending.len())
}
