//! API helpers for Postcoder lookups.

use crate::core::error::PostcodeError;
use crate::services::http::get_json;
use parcelo_models::{AddressSuggestion, PostcoderAddress};

/// Fetch autocomplete suggestions.
pub(crate) async fn fetch_suggestions(url: &str) -> anyhow::Result<Vec<AddressSuggestion>> {
    get_json("autocomplete find", url).await
}

/// Fetch the first address for a suggestion.
pub(crate) async fn fetch_address(url: &str, id: &str) -> anyhow::Result<PostcoderAddress> {
    let addresses: Vec<PostcoderAddress> = get_json("address lookup", url).await?;
    addresses.into_iter().next().ok_or_else(|| {
        anyhow::Error::new(PostcodeError::EmptyAddress { id: id.to_string() })
    })
}
