//! Page configuration for the Web UI features.
//!
//! # Design
//! - Every field has a default so pages may omit the config block entirely.
//! - Validate once on load; features trust the values afterwards.

use crate::core::error::ConfigError;
use serde::Deserialize;

/// Stickers rendered per page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 8;
/// Arrow icon used for the pager buttons (the next button rotates it).
pub const DEFAULT_ARROW_ICON_URL: &str = "../../../icon/left-arrow-icon.svg";
/// Maximum characters kept in a telephone input.
pub const DEFAULT_PHONE_MAX_LEN: usize = 15;
/// Postcoder web service root.
pub const DEFAULT_POSTCODER_BASE_URL: &str = "https://ws.postcoder.com/pcw";
/// Country code sent with autocomplete queries.
pub const DEFAULT_COUNTRY_CODE: &str = "UK";
/// Minimum trimmed query length before suggestions are requested.
pub const DEFAULT_MIN_QUERY_LEN: usize = 3;

/// Root configuration embedded by the server page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct PageConfig {
    /// Label sheet settings.
    pub stickers: StickerSettings,
    /// Telephone masking settings.
    pub telephone: TelephoneSettings,
    /// Postcode lookup settings.
    pub postcoder: PostcoderSettings,
}

/// Label sheet settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StickerSettings {
    /// Rows rendered per page.
    pub items_per_page: usize,
    /// Background image for the pager buttons.
    pub arrow_icon_url: String,
}

impl Default for StickerSettings {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            arrow_icon_url: DEFAULT_ARROW_ICON_URL.to_string(),
        }
    }
}

/// Telephone masking settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TelephoneSettings {
    /// Maximum characters kept after sanitising.
    pub max_len: usize,
}

impl Default for TelephoneSettings {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_PHONE_MAX_LEN,
        }
    }
}

/// Postcode lookup settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PostcoderSettings {
    /// Service root, without a trailing slash.
    pub base_url: String,
    /// Country code used when a host does not provide one.
    pub country_code: String,
    /// Minimum trimmed query length.
    pub min_query_len: usize,
}

impl Default for PostcoderSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_POSTCODER_BASE_URL.to_string(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            min_query_len: DEFAULT_MIN_QUERY_LEN,
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON config block.
    ///
    /// # Errors
    /// Returns [`ConfigError::Json`] for malformed input and
    /// [`ConfigError::InvalidField`] when a value fails validation.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|source| ConfigError::Json { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges the features rely on.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidField`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stickers.items_per_page == 0 {
            return Err(invalid(
                "stickers.items_per_page",
                "must be greater than zero",
                self.stickers.items_per_page,
            ));
        }
        if self.telephone.max_len == 0 {
            return Err(invalid(
                "telephone.max_len",
                "must be greater than zero",
                self.telephone.max_len,
            ));
        }
        if self.postcoder.min_query_len == 0 {
            return Err(invalid(
                "postcoder.min_query_len",
                "must be greater than zero",
                self.postcoder.min_query_len,
            ));
        }
        if self.postcoder.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: "postcoder.base_url",
                reason: "must not be empty",
                value: None,
            });
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str, value: usize) -> ConfigError {
    ConfigError::InvalidField {
        field,
        reason,
        value: Some(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_ITEMS_PER_PAGE, PageConfig};
    use crate::core::error::ConfigError;

    #[test]
    fn empty_block_uses_defaults() {
        let config = PageConfig::from_json("{}").expect("defaults should load");
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.stickers.items_per_page, DEFAULT_ITEMS_PER_PAGE);
        assert_eq!(config.telephone.max_len, 15);
        assert_eq!(config.postcoder.country_code, "UK");
        assert_eq!(config.postcoder.min_query_len, 3);
    }

    #[test]
    fn partial_block_overrides_selected_fields() {
        let config = PageConfig::from_json(r#"{"stickers": {"items_per_page": 4}}"#)
            .expect("partial config should load");
        assert_eq!(config.stickers.items_per_page, 4);
        assert_eq!(
            config.stickers.arrow_icon_url,
            "../../../icon/left-arrow-icon.svg"
        );
    }

    #[test]
    fn zero_items_per_page_is_rejected() {
        let err = PageConfig::from_json(r#"{"stickers": {"items_per_page": 0}}"#)
            .expect_err("zero page size must fail");
        match err {
            ConfigError::InvalidField { field, value, .. } => {
                assert_eq!(field, "stickers.items_per_page");
                assert_eq!(value.as_deref(), Some("0"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = PageConfig::from_json("{").expect_err("malformed json must fail");
        assert!(matches!(err, ConfigError::Json { .. }));
    }

    #[test]
    fn blank_postcoder_base_is_rejected() {
        let err = PageConfig::from_json(r#"{"postcoder": {"base_url": "  "}}"#)
            .expect_err("blank base url must fail");
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "postcoder.base_url",
                ..
            }
        ));
    }
}
