//! Page data and environment helpers for the boot layer.

use crate::core::config::PageConfig;
use crate::features::stickers::logic::parse_page_data;
use gloo::console;
use gloo::utils::document;
use parcelo_models::StickerPageData;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

pub(crate) const CONFIG_SCRIPT_ID: &str = "parcelo-config";
pub(crate) const STICKER_DATA_ID: &str = "sticker-data";
pub(crate) const STICKER_SECTION_ID: &str = "stickersSection";
pub(crate) const LABELS_CONTAINER_ID: &str = "labelsContainer";

pub(crate) fn load_page_config() -> PageConfig {
    let Some(raw) = script_text(CONFIG_SCRIPT_ID) else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log_page_error("load page config", &format!("{err:?}"));
            PageConfig::default()
        }
    }
}

pub(crate) fn load_sticker_data() -> Option<StickerPageData> {
    let raw = script_text(STICKER_DATA_ID)?;
    match parse_page_data(&raw) {
        Ok(data) => Some(data),
        Err(err) => {
            log_page_error("load sticker data", &format!("{err:?}"));
            None
        }
    }
}

pub(crate) fn element_by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub(crate) fn set_section_visible(visible: bool) {
    let Some(section) =
        element_by_id(STICKER_SECTION_ID).and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let display = if visible { "block" } else { "none" };
    if let Err(err) = section.style().set_property("display", display) {
        console::error!("section visibility update failed", err);
    }
}

fn script_text(id: &str) -> Option<String> {
    element_by_id(id)?
        .text_content()
        .filter(|text| !text.trim().is_empty())
}

pub(crate) fn log_page_error(operation: &'static str, detail: &str) {
    console::error!("page data unavailable", operation, detail);
}
