#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! Shared page-data DTOs for the Parcelo web UI.
//!
//! The server renders these payloads into the page (order boxes for the label
//! sheet) or the UI fetches them from the Postcoder service. Keeping the wire
//! shapes here lets the back office and the front-end agree on field names,
//! including the historical `order_sequance_id` spelling.

use serde::{Deserialize, Deserializer, Serialize};

/// One order box as rendered into the label page by the back office.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderBox {
    /// Order sequence identifier printed on the label.
    #[serde(
        rename = "order_sequance_id",
        deserialize_with = "deserialize_identifier"
    )]
    pub order_sequence_id: String,
    /// Storage-relative path of the QR code image.
    #[serde(default)]
    pub qr_code: Option<String>,
}

impl OrderBox {
    /// Build an order box from its identifier and QR path.
    #[must_use]
    pub fn new(order_sequence_id: impl Into<String>, qr_code: impl Into<String>) -> Self {
        Self {
            order_sequence_id: order_sequence_id.into(),
            qr_code: Some(qr_code.into()),
        }
    }
}

/// Label page payload embedded by the server next to the sticker section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StickerPageData {
    /// Order boxes to print. `null` entries are tolerated and skipped later.
    #[serde(default)]
    pub order_boxes: Vec<Option<OrderBox>>,
    /// Prefix joined to each `qr_code` path.
    #[serde(default)]
    pub storage_base_url: String,
}

/// Autocomplete suggestion returned by the Postcoder `find` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressSuggestion {
    /// Display text for the suggestion.
    #[serde(rename = "s")]
    pub summary: String,
    /// Postcoder identifier used to retrieve the full address.
    #[serde(rename = "i")]
    pub id: String,
}

/// Address record returned by the Postcoder `address` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PostcoderAddress {
    /// First address line.
    #[serde(default)]
    pub addressline1: Option<String>,
    /// Second address line.
    #[serde(default)]
    pub addressline2: Option<String>,
    /// Post town.
    #[serde(default)]
    pub posttown: Option<String>,
    /// Postcode.
    #[serde(default)]
    pub postcode: Option<String>,
}

fn deserialize_identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawIdentifier {
        Text(String),
        Signed(i64),
        Unsigned(u64),
        Float(f64),
    }

    Ok(match RawIdentifier::deserialize(deserializer)? {
        RawIdentifier::Text(value) => value,
        RawIdentifier::Signed(value) => value.to_string(),
        RawIdentifier::Unsigned(value) => value.to_string(),
        RawIdentifier::Float(value) => value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{AddressSuggestion, OrderBox, PostcoderAddress, StickerPageData};

    #[test]
    fn order_box_accepts_numeric_identifier() {
        let parsed: OrderBox =
            serde_json::from_str(r#"{"order_sequance_id": 1042, "qr_code": "qr/1042.png"}"#)
                .expect("order box should parse");
        assert_eq!(parsed.order_sequence_id, "1042");
        assert_eq!(parsed.qr_code.as_deref(), Some("qr/1042.png"));
    }

    #[test]
    fn order_box_tolerates_missing_qr_and_extra_fields() {
        let parsed: OrderBox = serde_json::from_str(
            r#"{"order_sequance_id": "ORD-7", "box_number": 3, "weight": 1.5}"#,
        )
        .expect("order box should parse");
        assert_eq!(parsed.order_sequence_id, "ORD-7");
        assert!(parsed.qr_code.is_none());
    }

    #[test]
    fn order_box_serializes_wire_key() {
        let encoded =
            serde_json::to_value(OrderBox::new("ORD-1", "qr/1.png")).expect("serialize");
        assert_eq!(encoded["order_sequance_id"], "ORD-1");
    }

    #[test]
    fn page_data_keeps_null_entries() {
        let parsed: StickerPageData = serde_json::from_str(
            r#"{"order_boxes": [{"order_sequance_id": "A"}, null], "storage_base_url": "/s/"}"#,
        )
        .expect("page data should parse");
        assert_eq!(parsed.order_boxes.len(), 2);
        assert!(parsed.order_boxes[1].is_none());
        assert_eq!(parsed.storage_base_url, "/s/");
    }

    #[test]
    fn postcoder_payloads_map_short_keys() {
        let suggestions: Vec<AddressSuggestion> =
            serde_json::from_str(r#"[{"s": "10 Downing Street, London", "i": "GB|1"}]"#)
                .expect("suggestions should parse");
        assert_eq!(suggestions[0].summary, "10 Downing Street, London");
        assert_eq!(suggestions[0].id, "GB|1");

        let address: PostcoderAddress =
            serde_json::from_str(r#"{"addressline1": "10 Downing Street", "postcode": "SW1A 2AA"}"#)
                .expect("address should parse");
        assert_eq!(address.addressline1.as_deref(), Some("10 Downing Street"));
        assert!(address.posttown.is_none());
    }
}
