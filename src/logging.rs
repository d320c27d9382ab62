use wasm_bindgen::JsValue;

const PREFIX: &str = "[flow-studio]";

/// Route panics to the browser console.
///
/// Safe to call more than once.
pub fn init() {
    console_error_panic_hook::set_once();
}

fn line(message: &str) -> JsValue {
    JsValue::from_str(&format!("{PREFIX} {message}"))
}

pub fn info(message: &str) {
    web_sys::console::log_1(&line(message));
}

pub fn warn(message: &str) {
    web_sys::console::warn_1(&line(message));
}

pub fn error(message: &str) {
    web_sys::console::error_1(&line(message));
}
