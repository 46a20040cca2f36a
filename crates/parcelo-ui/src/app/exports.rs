//! Functions page scripts call as globals.

use crate::app::{confirm_delete, generate_labels};
use gloo::console;
use gloo::utils::window;
use js_sys::{JSON, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

pub(crate) const GENERATE_LABELS_EXPORT: &str = "generateLabels";
pub(crate) const CONFIRM_DELETE_EXPORT: &str = "confirmDelete";

/// Install `window.generateLabels` and `window.confirmDelete`.
pub(crate) fn install_page_exports() {
    let generate = Closure::<dyn Fn(JsValue, JsValue)>::new(
        |order_boxes: JsValue, storage_base_url: JsValue| {
            generate_labels(
                &json_text(&order_boxes),
                &storage_base_url.as_string().unwrap_or_default(),
            );
        },
    );
    install(GENERATE_LABELS_EXPORT, generate.into_js_value());

    let confirm = Closure::<dyn Fn(JsValue, JsValue, JsValue, JsValue)>::new(
        |route: JsValue, message: JsValue, method: JsValue, on_success: JsValue| {
            confirm_delete(
                route.as_string(),
                message.as_string(),
                method.as_string(),
                on_success,
            );
        },
    );
    install(CONFIRM_DELETE_EXPORT, confirm.into_js_value());
}

/// Accept either a JSON string or a plain JS array.
fn json_text(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| JSON::stringify(value).ok().and_then(|text| text.as_string()))
        .unwrap_or_default()
}

fn install(name: &'static str, value: JsValue) {
    if let Err(err) = Reflect::set(&window(), &JsValue::from_str(name), &value) {
        console::error!("page export install failed", name, err);
    }
}
