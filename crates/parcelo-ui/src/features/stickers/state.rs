//! Label sheet state.
//!
//! # Design
//! - Rows are rebuilt from scratch on every generate; nothing is patched in place.
//! - The pager only moves one page at a time and refuses to cross either boundary.
//! - Selection is kept here because only one page of checkboxes exists at a time.

use crate::core::config::StickerSettings;
use crate::features::stickers::actions::StickerAction;
use crate::features::stickers::logic::{
    page_bounds, page_count, reported_total_pages, resolve_image_src,
};
use crate::features::stickers::render::{RenderNode, render_page};
use parcelo_models::OrderBox;
use std::collections::BTreeSet;
use std::ops::Range;

/// Order identifiers whose download checkbox is ticked.
pub type Selection = BTreeSet<String>;

/// One printable row derived from an order box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StickerRow {
    /// Order sequence identifier printed on both labels.
    pub order_id: String,
    /// Fully resolved QR image source.
    pub image_src: String,
}

impl StickerRow {
    /// Derive a row from an order box and the storage prefix.
    #[must_use]
    pub fn from_record(record: &OrderBox, storage_base_url: &str) -> Self {
        Self {
            order_id: record.order_sequence_id.clone(),
            image_src: resolve_image_src(storage_base_url, record.qr_code.as_deref()),
        }
    }

    /// Alt text for the QR image.
    #[must_use]
    pub fn qr_alt(&self) -> String {
        format!("QR for {}", self.order_id)
    }
}

/// Current page, page size and row total for the pager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationState {
    current_page: usize,
    items_per_page: usize,
    total_rows: usize,
}

impl PaginationState {
    /// Start on page one.
    #[must_use]
    pub fn new(total_rows: usize, items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
            total_rows,
        }
    }

    /// 1-indexed current page.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Rows per page.
    #[must_use]
    pub const fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Total rows being paged.
    #[must_use]
    pub const fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Whether the previous button is enabled.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether the next button is enabled.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page.saturating_mul(self.items_per_page) < self.total_rows
    }

    /// Step back one page. Returns `false` on the first page.
    pub const fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Step forward one page. Returns `false` once the last row is visible.
    pub const fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Pages reachable by slicing.
    #[must_use]
    pub fn page_count(&self) -> usize {
        page_count(self.total_rows, self.items_per_page)
    }

    /// Page total shown in the pager label.
    #[must_use]
    pub fn reported_total_pages(&self) -> usize {
        reported_total_pages(self.total_rows, self.items_per_page)
    }

    /// Row indices of the current page.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        page_bounds(self.current_page, self.items_per_page, self.total_rows)
    }

    /// Text of the pager label.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "Page {} of {}",
            self.current_page,
            self.reported_total_pages()
        )
    }
}

/// Label sheet owned by one mounted view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StickerBoard {
    rows: Vec<StickerRow>,
    pagination: PaginationState,
    section_visible: bool,
    selected: Selection,
    settings: StickerSettings,
}

impl StickerBoard {
    /// Build the sheet from page records, skipping null entries.
    #[must_use]
    pub fn generate(
        records: &[Option<OrderBox>],
        storage_base_url: &str,
        settings: &StickerSettings,
    ) -> Self {
        let rows: Vec<StickerRow> = records
            .iter()
            .flatten()
            .map(|record| StickerRow::from_record(record, storage_base_url))
            .collect();
        let pagination = PaginationState::new(rows.len(), settings.items_per_page);
        Self {
            rows,
            pagination,
            section_visible: !records.is_empty(),
            selected: Selection::new(),
            settings: settings.clone(),
        }
    }

    /// Every row, across all pages.
    #[must_use]
    pub fn rows(&self) -> &[StickerRow] {
        &self.rows
    }

    /// Pager state.
    #[must_use]
    pub const fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    /// Whether the surrounding results section should be shown.
    #[must_use]
    pub const fn section_visible(&self) -> bool {
        self.section_visible
    }

    /// Settings the sheet was generated with.
    #[must_use]
    pub const fn settings(&self) -> &StickerSettings {
        &self.settings
    }

    /// Ticked order identifiers.
    #[must_use]
    pub const fn selected(&self) -> &Selection {
        &self.selected
    }

    /// Rows on the current page.
    #[must_use]
    pub fn visible_rows(&self) -> &[StickerRow] {
        &self.rows[self.pagination.visible_range()]
    }

    /// Render the rows of `page` into a table.
    #[must_use]
    pub fn render_page(&self, page: usize) -> RenderNode {
        render_page(
            &self.rows,
            page,
            self.pagination.items_per_page(),
            &self.selected,
        )
    }

    /// Apply a user action. Returns `true` when state changed.
    pub fn apply(&mut self, action: StickerAction) -> bool {
        match action {
            StickerAction::Previous => self.pagination.previous(),
            StickerAction::Next => self.pagination.next(),
            StickerAction::Toggle { order_id, checked } => {
                if !self.rows.iter().any(|row| row.order_id == order_id) {
                    return false;
                }
                if checked {
                    self.selected.insert(order_id)
                } else {
                    self.selected.remove(&order_id)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PaginationState, StickerBoard};
    use crate::core::config::StickerSettings;
    use crate::features::stickers::actions::StickerAction;
    use parcelo_models::OrderBox;

    fn records(count: usize) -> Vec<Option<OrderBox>> {
        (1..=count)
            .map(|idx| Some(OrderBox::new(format!("ORD-{idx}"), format!("qr/{idx}.png"))))
            .collect()
    }

    fn board(records: &[Option<OrderBox>]) -> StickerBoard {
        StickerBoard::generate(records, "/storage/", &StickerSettings::default())
    }

    #[test]
    fn generate_yields_one_row_per_record() {
        for count in [0, 1, 7, 8, 9, 20] {
            assert_eq!(board(&records(count)).rows().len(), count);
        }
    }

    #[test]
    fn null_records_are_skipped() {
        let input = vec![
            Some(OrderBox::new("A", "a.png")),
            None,
            Some(OrderBox::new("B", "b.png")),
        ];
        let board = board(&input);
        assert_eq!(board.rows().len(), 2);
        assert_eq!(board.rows()[1].order_id, "B");
        assert_eq!(board.rows()[1].image_src, "/storage/b.png");
        assert_eq!(board.rows()[1].qr_alt(), "QR for B");
    }

    #[test]
    fn visibility_follows_input_length() {
        assert!(!board(&[]).section_visible());
        assert!(board(&records(1)).section_visible());
        assert!(board(&[None]).section_visible());
    }

    #[test]
    fn pager_boundaries_match_row_total() {
        let mut pager = PaginationState::new(20, 8);
        assert!(!pager.has_previous());
        assert!(pager.has_next());
        assert!(!pager.previous());
        assert!(pager.next());
        assert!(pager.next());
        assert_eq!(pager.current_page(), 3);
        assert!(!pager.has_next());
        assert!(!pager.next());
        assert_eq!(pager.current_page(), 3);
        assert_eq!(pager.visible_range(), 16..20);
        assert_eq!(pager.page_count(), 3);
    }

    #[test]
    fn exact_multiple_stops_on_last_full_page() {
        let mut pager = PaginationState::new(16, 8);
        assert!(pager.next());
        assert!(!pager.has_next());
        assert_eq!(pager.visible_range(), 8..16);
    }

    #[test]
    fn pager_label_uses_halved_total() {
        let mut pager = PaginationState::new(20, 8);
        assert_eq!(pager.label(), "Page 1 of 2");
        pager.next();
        pager.next();
        assert_eq!(pager.label(), "Page 3 of 2");
    }

    #[test]
    fn next_then_previous_restores_rows() {
        let mut board = board(&records(20));
        let before: Vec<String> = board
            .visible_rows()
            .iter()
            .map(|row| row.order_id.clone())
            .collect();
        assert!(board.apply(StickerAction::Next));
        assert!(board.apply(StickerAction::Previous));
        let after: Vec<String> = board
            .visible_rows()
            .iter()
            .map(|row| row.order_id.clone())
            .collect();
        assert_eq!(before, after);
        assert_eq!(board.pagination().current_page(), 1);
    }

    #[test]
    fn regenerate_resets_page_and_selection() {
        let input = records(20);
        let mut first = board(&input);
        first.apply(StickerAction::Next);
        first.apply(StickerAction::Toggle {
            order_id: "ORD-9".to_string(),
            checked: true,
        });
        assert_eq!(first.pagination().current_page(), 2);

        let second = board(&input);
        assert_eq!(second.pagination().current_page(), 1);
        assert!(second.selected().is_empty());
    }

    #[test]
    fn selection_survives_paging_and_ignores_unknown_ids() {
        let mut board = board(&records(20));
        assert!(board.apply(StickerAction::Toggle {
            order_id: "ORD-2".to_string(),
            checked: true,
        }));
        assert!(!board.apply(StickerAction::Toggle {
            order_id: "ORD-99".to_string(),
            checked: true,
        }));
        board.apply(StickerAction::Next);
        board.apply(StickerAction::Previous);
        assert!(board.selected().contains("ORD-2"));
        assert!(board.apply(StickerAction::Toggle {
            order_id: "ORD-2".to_string(),
            checked: false,
        }));
        assert!(board.selected().is_empty());
    }

    #[test]
    fn custom_page_size_is_honoured() {
        let settings = StickerSettings {
            items_per_page: 3,
            ..StickerSettings::default()
        };
        let board = StickerBoard::generate(&records(7), "", &settings);
        assert_eq!(board.visible_rows().len(), 3);
        assert_eq!(board.pagination().page_count(), 3);
    }
}
