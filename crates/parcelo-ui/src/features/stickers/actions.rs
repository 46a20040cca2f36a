//! Label sheet actions.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Pager intents round-trip through a `data-action` attribute value.

/// `data-action` value for the previous-page button.
pub const PREVIOUS_ACTION: &str = "previous";
/// `data-action` value for the next-page button.
pub const NEXT_ACTION: &str = "next";

/// User intents handled by the label sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StickerAction {
    /// Step back one page.
    Previous,
    /// Step forward one page.
    Next,
    /// Tick or untick the download checkbox of an order.
    Toggle {
        /// Order sequence identifier carried by the checkbox.
        order_id: String,
        /// New checkbox state.
        checked: bool,
    },
}

impl StickerAction {
    /// Attribute value used to tag pager buttons.
    #[must_use]
    pub const fn pager_value(&self) -> Option<&'static str> {
        match self {
            Self::Previous => Some(PREVIOUS_ACTION),
            Self::Next => Some(NEXT_ACTION),
            Self::Toggle { .. } => None,
        }
    }

    /// Resolve a pager button attribute value.
    #[must_use]
    pub fn from_pager_value(value: &str) -> Option<Self> {
        match value {
            PREVIOUS_ACTION => Some(Self::Previous),
            NEXT_ACTION => Some(Self::Next),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StickerAction;

    #[test]
    fn pager_values_resolve_back() {
        for action in [StickerAction::Previous, StickerAction::Next] {
            let value = action.pager_value().expect("pager action has a value");
            assert_eq!(StickerAction::from_pager_value(value), Some(action));
        }
        assert_eq!(StickerAction::from_pager_value("first"), None);
    }
}
