//! Pure render tree for the label sheet.
//!
//! # Design
//! - Build plain element/text nodes; attaching them to a page is the view's job.
//! - Interactive elements carry their intent as attributes (`data-action`, `data-id`).

use crate::features::stickers::actions::StickerAction;
use crate::features::stickers::logic::page_bounds;
use crate::features::stickers::state::{PaginationState, Selection, StickerBoard, StickerRow};

/// Attribute carrying a pager intent.
pub const ACTION_ATTR: &str = "data-action";
/// Attribute carrying an order identifier on the download checkbox.
pub const ID_ATTR: &str = "data-id";
/// Class marking download checkboxes for bulk actions.
pub const CHECKBOX_CLASS: &str = "downloadRow";
/// Placeholder printed in the date cell.
pub const DATE_PLACEHOLDER: &str = "DATE";
/// Placeholder printed in the box count cell.
pub const BOX_COUNT_PLACEHOLDER: &str = "#ofboxes";
/// Label blocks printed per row.
pub const LABELS_PER_ROW: usize = 2;

/// Element or text node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderNode {
    /// Element with attributes and children.
    Element(ElementNode),
    /// Text content.
    Text(String),
}

/// Element node with ordered attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementNode {
    /// Tag name.
    pub tag: &'static str,
    /// Attributes in insertion order.
    pub attributes: Vec<(&'static str, String)>,
    /// Child nodes.
    pub children: Vec<RenderNode>,
}

impl ElementNode {
    /// Empty element.
    #[must_use]
    pub const fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    /// Add a boolean attribute when `enabled`.
    #[must_use]
    pub fn flag(self, name: &'static str, enabled: bool) -> Self {
        if enabled { self.attr(name, name) } else { self }
    }

    /// Set the class attribute.
    #[must_use]
    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, node: impl Into<RenderNode>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(RenderNode::Text(value.into()))
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the class attribute lists `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|value| value.split_whitespace().any(|item| item == class))
    }
}

impl From<ElementNode> for RenderNode {
    fn from(value: ElementNode) -> Self {
        Self::Element(value)
    }
}

impl RenderNode {
    /// Concatenated text of the subtree.
    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Element(element) => element
                .children
                .iter()
                .map(Self::text_content)
                .collect(),
        }
    }

    /// Elements in document order matching `predicate`, including `self`.
    #[must_use]
    pub fn find_all(&self, predicate: &dyn Fn(&ElementNode) -> bool) -> Vec<&ElementNode> {
        let mut found = Vec::new();
        self.collect_into(predicate, &mut found);
        found
    }

    fn collect_into<'a>(
        &'a self,
        predicate: &dyn Fn(&ElementNode) -> bool,
        found: &mut Vec<&'a ElementNode>,
    ) {
        if let Self::Element(element) = self {
            if predicate(element) {
                found.push(element);
            }
            for child in &element.children {
                child.collect_into(predicate, found);
            }
        }
    }
}

/// Render one sticker row: download checkbox then two label blocks.
#[must_use]
pub fn render_row(row: &StickerRow, checked: bool) -> RenderNode {
    let checkbox = ElementNode::new("input")
        .attr("type", "checkbox")
        .class(CHECKBOX_CLASS)
        .attr(ID_ATTR, row.order_id.clone())
        .flag("checked", checked);
    let mut tr = ElementNode::new("tr").child(
        ElementNode::new("td")
            .class("label-cell checkbox-cell text-center no-print p-3")
            .child(
                ElementNode::new("label")
                    .class("checkbox-wrapper")
                    .child(checkbox),
            ),
    );
    for _ in 0..LABELS_PER_ROW {
        tr = tr
            .child(
                ElementNode::new("td")
                    .class("label-cell text-center")
                    .child(
                        ElementNode::new("div")
                            .attr("style", "font-size: 12px; margin-top: 4px;")
                            .text(row.order_id.clone()),
                    )
                    .child(
                        ElementNode::new("img")
                            .attr("src", row.image_src.clone())
                            .attr("alt", row.qr_alt())
                            .attr("style", "display: block; margin: 0 auto;"),
                    ),
            )
            .child(
                ElementNode::new("td")
                    .class("label-cell date")
                    .text(DATE_PLACEHOLDER),
            )
            .child(
                ElementNode::new("td")
                    .class("label-cell info")
                    .text(BOX_COUNT_PLACEHOLDER),
            );
    }
    tr.into()
}

/// Render the rows of `page` into the labels table.
#[must_use]
pub fn render_page(
    rows: &[StickerRow],
    page: usize,
    items_per_page: usize,
    selected: &Selection,
) -> RenderNode {
    let bounds = page_bounds(page, items_per_page, rows.len());
    rows[bounds]
        .iter()
        .fold(ElementNode::new("table").class("labels-table"), |table, row| {
            table.child(render_row(row, selected.contains(&row.order_id)))
        })
        .into()
}

/// Render the previous/next controls and the page label.
#[must_use]
pub fn render_pager(pagination: &PaginationState, arrow_icon_url: &str) -> RenderNode {
    let arrow_style = format!(
        "background-image: url(\"{arrow_icon_url}\"); background-repeat: no-repeat; \
         background-position: center; padding: 15px; border: none; cursor: pointer;"
    );
    let previous = ElementNode::new("button")
        .attr("type", "button")
        .attr(ACTION_ATTR, pager_value(&StickerAction::Previous))
        .attr("aria-label", "Previous page")
        .attr("style", arrow_style.clone())
        .flag("disabled", !pagination.has_previous());
    let next = ElementNode::new("button")
        .attr("type", "button")
        .attr(ACTION_ATTR, pager_value(&StickerAction::Next))
        .attr("aria-label", "Next page")
        .attr("style", format!("{arrow_style} transform: rotate(180deg);"))
        .flag("disabled", !pagination.has_next());
    ElementNode::new("div")
        .class("pagination-container")
        .child(previous)
        .child(
            ElementNode::new("span")
                .class("no-print")
                .attr("style", "margin: 0 20px; font-weight: bold;")
                .text(pagination.label()),
        )
        .child(next)
        .into()
}

/// Render the whole sheet; empty when there is nothing to print.
#[must_use]
pub fn render_board(board: &StickerBoard) -> Vec<RenderNode> {
    if board.rows().is_empty() {
        return Vec::new();
    }
    vec![
        board.render_page(board.pagination().current_page()),
        render_pager(board.pagination(), &board.settings().arrow_icon_url),
    ]
}

fn pager_value(action: &StickerAction) -> &'static str {
    action.pager_value().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{
        ACTION_ATTR, BOX_COUNT_PLACEHOLDER, CHECKBOX_CLASS, DATE_PLACEHOLDER, ID_ATTR,
        RenderNode, render_board, render_page,
    };
    use crate::core::config::StickerSettings;
    use crate::features::stickers::actions::StickerAction;
    use crate::features::stickers::state::{Selection, StickerBoard};
    use parcelo_models::OrderBox;

    fn board(count: usize) -> StickerBoard {
        let records: Vec<Option<OrderBox>> = (0..count)
            .map(|idx| Some(OrderBox::new(format!("R{idx}"), format!("{idx}.png"))))
            .collect();
        StickerBoard::generate(&records, "https://files.example/", &StickerSettings::default())
    }

    fn checkbox_ids(node: &RenderNode) -> Vec<String> {
        node.find_all(&|el| el.has_class(CHECKBOX_CLASS))
            .into_iter()
            .filter_map(|el| el.attribute(ID_ATTR).map(str::to_string))
            .collect()
    }

    fn pager_button<'a>(nodes: &'a [RenderNode], action: &str) -> &'a super::ElementNode {
        nodes[1]
            .find_all(&|el| el.attribute(ACTION_ATTR) == Some(action))
            .into_iter()
            .next()
            .expect("pager button present")
    }

    #[test]
    fn pages_slice_rows_by_page_size() {
        let board = board(20);
        let ids = |page| checkbox_ids(&board.render_page(page));
        assert_eq!(ids(1), (0..8).map(|idx| format!("R{idx}")).collect::<Vec<_>>());
        assert_eq!(ids(2), (8..16).map(|idx| format!("R{idx}")).collect::<Vec<_>>());
        assert_eq!(ids(3), (16..20).map(|idx| format!("R{idx}")).collect::<Vec<_>>());
    }

    #[test]
    fn render_page_is_idempotent() {
        let board = board(12);
        assert_eq!(board.render_page(2), board.render_page(2));
    }

    #[test]
    fn row_carries_two_label_blocks() {
        let table = board(1).render_page(1);
        let rows = table.find_all(&|el| el.tag == "tr");
        assert_eq!(rows.len(), 1);
        let row = RenderNode::Element(rows[0].clone());
        let images = row.find_all(&|el| el.tag == "img");
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].attribute("src"), Some("https://files.example/0.png"));
        assert_eq!(images[0].attribute("alt"), Some("QR for R0"));
        assert_eq!(row.find_all(&|el| el.has_class("date")).len(), 2);
        assert_eq!(row.find_all(&|el| el.has_class("info")).len(), 2);
        let text = row.text_content();
        assert_eq!(text.matches(DATE_PLACEHOLDER).count(), 2);
        assert_eq!(text.matches(BOX_COUNT_PLACEHOLDER).count(), 2);
        assert_eq!(text.matches("R0").count(), 2);
    }

    #[test]
    fn checked_state_reflects_selection() {
        let board = board(3);
        let mut selected = Selection::new();
        selected.insert("R1".to_string());
        let table = render_page(board.rows(), 1, 8, &selected);
        let checked: Vec<&str> = table
            .find_all(&|el| el.has_class(CHECKBOX_CLASS) && el.attribute("checked").is_some())
            .into_iter()
            .filter_map(|el| el.attribute(ID_ATTR))
            .collect();
        assert_eq!(checked, vec!["R1"]);
    }

    #[test]
    fn pager_disables_at_boundaries() {
        let mut board = board(20);
        let nodes = render_board(&board);
        assert!(pager_button(&nodes, "previous").attribute("disabled").is_some());
        assert!(pager_button(&nodes, "next").attribute("disabled").is_none());
        assert_eq!(nodes[1].text_content(), "Page 1 of 2");

        board.apply(StickerAction::Next);
        board.apply(StickerAction::Next);
        let nodes = render_board(&board);
        assert!(pager_button(&nodes, "previous").attribute("disabled").is_none());
        assert!(pager_button(&nodes, "next").attribute("disabled").is_some());
        assert_eq!(checkbox_ids(&nodes[0]).len(), 4);
    }

    #[test]
    fn single_page_disables_both_buttons() {
        let nodes = render_board(&board(5));
        assert!(pager_button(&nodes, "previous").attribute("disabled").is_some());
        assert!(pager_button(&nodes, "next").attribute("disabled").is_some());
    }

    #[test]
    fn empty_board_renders_nothing() {
        assert!(render_board(&board(0)).is_empty());
        let only_nulls =
            StickerBoard::generate(&[None, None], "", &StickerSettings::default());
        assert!(render_board(&only_nulls).is_empty());
    }

    #[test]
    fn next_button_rotates_shared_arrow() {
        let nodes = render_board(&board(9));
        let next = pager_button(&nodes, "next");
        let style = next.attribute("style").expect("style present");
        assert!(style.contains("left-arrow-icon.svg"));
        assert!(style.contains("rotate(180deg)"));
    }
}
