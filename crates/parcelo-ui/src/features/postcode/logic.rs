//! Postcoder URL building and address mapping.

use crate::core::config::PostcoderSettings;
use parcelo_models::PostcoderAddress;
use urlencoding::encode;

/// Address values written into the page form.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AddressFields {
    /// First address line.
    pub addressline1: String,
    /// Second address line.
    pub addressline2: String,
    /// Post town.
    pub posttown: String,
    /// Postcode.
    pub postcode: String,
}

impl From<&PostcoderAddress> for AddressFields {
    fn from(value: &PostcoderAddress) -> Self {
        Self {
            addressline1: value.addressline1.clone().unwrap_or_default(),
            addressline2: value.addressline2.clone().unwrap_or_default(),
            posttown: value.posttown.clone().unwrap_or_default(),
            postcode: value.postcode.clone().unwrap_or_default(),
        }
    }
}

/// Autocomplete URL for `query`, or `None` when the trimmed query is too short.
#[must_use]
pub fn find_url(
    settings: &PostcoderSettings,
    api_key: &str,
    query: &str,
    country_code: &str,
) -> Option<String> {
    let query = query.trim();
    if query.chars().count() < settings.min_query_len {
        return None;
    }
    Some(format!(
        "{}/{}/autocomplete/find?query={}&country={}",
        settings.base_url.trim_end_matches('/'),
        encode(api_key),
        encode(query),
        encode(country_code)
    ))
}

/// Address lookup URL for a suggestion identifier.
#[must_use]
pub fn address_url(settings: &PostcoderSettings, api_key: &str, id: &str) -> String {
    format!(
        "{}/{}/address/uk/{}",
        settings.base_url.trim_end_matches('/'),
        encode(api_key),
        encode(id)
    )
}
