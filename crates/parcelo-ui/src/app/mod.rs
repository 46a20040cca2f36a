//! Boot wiring that mounts the UI features into the server-rendered page.
//!
//! # Design
//! - Each feature mounts only where its host elements exist; absent hosts are a no-op.
//! - The label sheet is remounted from scratch on every generate call.
//! - Page scripts reach Rust through globals installed on `window`, not wasm exports.

use crate::core::config::StickerSettings;
use crate::features::deletion::state::DeleteRequest;
use crate::features::deletion::view::mount_delete_confirm;
use crate::features::logout::view::mount_logout_confirm;
use crate::features::postcode::view::mount_address_autocompletes;
use crate::features::stickers::logic::parse_order_boxes;
use crate::features::stickers::view::{StickerSheet, StickerSheetProps};
use crate::features::telephone::view::wire_telephone_inputs;
use gloo::console;
use gloo::utils::document;
use page::{
    LABELS_CONTAINER_ID, element_by_id, load_page_config, load_sticker_data, log_page_error,
    set_section_visible,
};
use parcelo_models::StickerPageData;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use yew::AppHandle;

mod exports;
mod page;

thread_local! {
    static STICKER_MOUNT: RefCell<Option<AppHandle<StickerSheet>>> = const { RefCell::new(None) };
}

/// Boot every feature present on the current page.
pub fn run_app() {
    console_error_panic_hook::set_once();
    exports::install_page_exports();
    let config = load_page_config();
    if let Some(data) = load_sticker_data() {
        mount_stickers(data, config.stickers.clone());
    }
    wire_telephone_inputs(config.telephone);
    mount_logout_confirm();
    mount_address_autocompletes(&config.postcoder);
}

/// Regenerate the label sheet from page scripts.
///
/// `order_boxes_json` is a JSON array of order boxes; `null` entries are skipped.
pub fn generate_labels(order_boxes_json: &str, storage_base_url: &str) {
    let order_boxes = match parse_order_boxes(order_boxes_json) {
        Ok(order_boxes) => order_boxes,
        Err(err) => {
            log_page_error("generate labels", &format!("{err:?}"));
            return;
        }
    };
    let config = load_page_config();
    mount_stickers(
        StickerPageData {
            order_boxes,
            storage_base_url: storage_base_url.to_string(),
        },
        config.stickers,
    );
}

/// Ask for confirmation, then send `method` to `route`.
///
/// `on_success` runs after a successful request: a function is called, a
/// DataTables instance is reloaded in place, anything else reloads the page.
pub fn confirm_delete(
    route: Option<String>,
    message: Option<String>,
    method: Option<String>,
    on_success: JsValue,
) {
    match DeleteRequest::from_args(route, message, method) {
        Ok(request) => mount_delete_confirm(request, on_success),
        Err(err) => log_page_error("confirm delete", &format!("{err:?}")),
    }
}

fn mount_stickers(data: StickerPageData, settings: StickerSettings) {
    set_section_visible(!data.order_boxes.is_empty());
    STICKER_MOUNT.with(|slot| {
        if let Some(previous) = slot.borrow_mut().take() {
            previous.destroy();
        }
        let Some(container) = element_by_id(LABELS_CONTAINER_ID) else {
            return;
        };
        container.set_inner_html("");
        let root = match document().create_element("div") {
            Ok(root) => root,
            Err(err) => {
                console::error!("label sheet root creation failed", err);
                return;
            }
        };
        if let Err(err) = container.append_child(&root) {
            console::error!("label sheet root attach failed", err);
            return;
        }
        let props = StickerSheetProps {
            records: Rc::new(data.order_boxes),
            storage_base_url: data.storage_base_url.into(),
            settings,
        };
        let handle = yew::Renderer::<StickerSheet>::with_root_and_props(root, props).render();
        *slot.borrow_mut() = Some(handle);
    });
}
