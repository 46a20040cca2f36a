//! Telephone input wiring.

use crate::core::config::TelephoneSettings;
use crate::features::telephone::logic::sanitize_phone;
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

/// Selector for masked telephone inputs.
pub(crate) const TELEPHONE_SELECTOR: &str = ".telephone";

/// Attach the masking listener to every telephone input on the page.
pub(crate) fn wire_telephone_inputs(settings: TelephoneSettings) {
    let inputs = match document().query_selector_all(TELEPHONE_SELECTOR) {
        Ok(inputs) => inputs,
        Err(err) => {
            console::error!("telephone selector failed", err);
            return;
        }
    };
    for index in 0..inputs.length() {
        let Some(input) = inputs
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlInputElement>().ok())
        else {
            continue;
        };
        let target = input.clone();
        EventListener::new(&input, "input", move |_event| {
            let current = target.value();
            let sanitized = sanitize_phone(&current, settings.max_len);
            if sanitized != current {
                target.set_value(&sanitized);
            }
        })
        .forget();
    }
}
