//! Label sheet paging arithmetic and payload decoding.

use crate::core::error::PageDataError;
use parcelo_models::{OrderBox, StickerPageData};
use std::ops::Range;

/// Row indices shown on `page` (1-indexed), clamped to `total_rows`.
#[must_use]
pub fn page_bounds(page: usize, items_per_page: usize, total_rows: usize) -> Range<usize> {
    let start = page
        .saturating_sub(1)
        .saturating_mul(items_per_page)
        .min(total_rows);
    let end = start.saturating_add(items_per_page).min(total_rows);
    start..end
}

/// Number of pages the row slicing can actually reach (at least one).
#[must_use]
pub fn page_count(total_rows: usize, items_per_page: usize) -> usize {
    total_rows.div_ceil(items_per_page.max(1)).max(1)
}

/// Page total printed in the pager label.
///
/// Rows are halved before dividing by the page size, which matches the label
/// printed by the back office since two stickers share one printed row.
#[must_use]
pub fn reported_total_pages(total_rows: usize, items_per_page: usize) -> usize {
    total_rows.div_ceil(items_per_page.max(1).saturating_mul(2))
}

/// Join the storage prefix and a QR path without validation.
#[must_use]
pub fn resolve_image_src(storage_base_url: &str, qr_code: Option<&str>) -> String {
    format!("{storage_base_url}{}", qr_code.unwrap_or_default())
}

/// Decode the `sticker-data` block rendered by the server.
///
/// # Errors
/// Returns [`PageDataError::Json`] when the payload does not match the schema.
pub fn parse_page_data(raw: &str) -> Result<StickerPageData, PageDataError> {
    serde_json::from_str(raw).map_err(|source| PageDataError::Json {
        operation: "decode sticker data",
        source,
    })
}

/// Decode a bare order-box list handed over by page scripts.
///
/// # Errors
/// Returns [`PageDataError::Json`] when the payload is not a list of order boxes.
pub fn parse_order_boxes(raw: &str) -> Result<Vec<Option<OrderBox>>, PageDataError> {
    serde_json::from_str(raw).map_err(|source| PageDataError::Json {
        operation: "decode order boxes",
        source,
    })
}
