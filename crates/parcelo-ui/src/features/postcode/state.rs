//! Postcode lookup state.

use crate::features::postcode::logic::AddressFields;

/// Selector for autocomplete hosts.
pub const HOST_SELECTOR: &str = "[data-postcoder]";
/// Attribute holding the selector of the input that stores the API key.
pub const APIKEY_ATTR: &str = "data-apikey";
/// Attribute holding the address line 1 input selector.
pub const ADDRESSLINE1_ATTR: &str = "data-addressline1";
/// Attribute holding the address line 2 input selector.
pub const ADDRESSLINE2_ATTR: &str = "data-addressline2";
/// Attribute holding the post town input selector.
pub const POSTTOWN_ATTR: &str = "data-posttown";
/// Attribute holding the postcode input selector.
pub const POSTCODE_ATTR: &str = "data-postcode";
/// Optional attribute overriding the configured country code.
pub const COUNTRY_ATTR: &str = "data-countrycode";
/// Optional attribute holding the selector of an existing search input.
pub const SEARCHTERM_ATTR: &str = "data-searchterm";
/// Optional attribute holding the selector of an existing suggestion list.
pub const SUGGESTIONS_ATTR: &str = "data-suggestions";

/// Page elements an autocomplete host reads from and writes to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostcoderTargets {
    /// Selector of the input holding the API key.
    pub api_key_selector: String,
    /// Selector of the address line 1 input.
    pub addressline1: String,
    /// Selector of the address line 2 input.
    pub addressline2: String,
    /// Selector of the post town input.
    pub posttown: String,
    /// Selector of the postcode input.
    pub postcode: String,
    /// Country code override.
    pub country_code: Option<String>,
    /// Selector of a search input already on the page.
    pub searchterm: Option<String>,
    /// Selector of a suggestion list already on the page.
    pub suggestions: Option<String>,
}

impl PostcoderTargets {
    /// Read host attributes through `attribute`. Any missing target selector yields `None`.
    #[must_use]
    pub fn from_attributes(attribute: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let required = |name: &str| attribute(name).filter(|value| !value.trim().is_empty());
        Some(Self {
            api_key_selector: required(APIKEY_ATTR)?,
            addressline1: required(ADDRESSLINE1_ATTR)?,
            addressline2: required(ADDRESSLINE2_ATTR)?,
            posttown: required(POSTTOWN_ATTR)?,
            postcode: required(POSTCODE_ATTR)?,
            country_code: required(COUNTRY_ATTR),
            searchterm: required(SEARCHTERM_ATTR),
            suggestions: required(SUGGESTIONS_ATTR),
        })
    }

    /// Existing search input and suggestion list selectors, when both are given.
    ///
    /// Without both, the autocomplete renders its own input and list inside the host.
    #[must_use]
    pub fn existing_elements(&self) -> Option<(&str, &str)> {
        Some((self.searchterm.as_deref()?, self.suggestions.as_deref()?))
    }

    /// Country code to query with.
    #[must_use]
    pub fn country_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.country_code.as_deref().unwrap_or(fallback)
    }

    /// Target selectors paired with the values to write.
    #[must_use]
    pub fn assignments<'a>(
        &'a self,
        fields: &'a AddressFields,
    ) -> [(&'a str, &'a str); 4] {
        [
            (self.addressline1.as_str(), fields.addressline1.as_str()),
            (self.addressline2.as_str(), fields.addressline2.as_str()),
            (self.posttown.as_str(), fields.posttown.as_str()),
            (self.postcode.as_str(), fields.postcode.as_str()),
        ]
    }
}

/// Generation counter used to drop stale lookup responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct QueryTracker {
    latest: u64,
}

impl QueryTracker {
    /// Start a new query and return its generation.
    pub const fn begin(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    /// Make every in-flight query stale.
    pub const fn invalidate(&mut self) {
        self.latest = self.latest.wrapping_add(1);
    }

    /// Whether `generation` is still the latest query.
    #[must_use]
    pub const fn is_current(&self, generation: u64) -> bool {
        self.latest == generation
    }
}

#[cfg(test)]
mod tests {
    use super::{PostcoderTargets, QueryTracker};
    use crate::features::postcode::logic::AddressFields;
    use std::collections::HashMap;

    fn host(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect()
    }

    fn full_host() -> HashMap<String, String> {
        host(&[
            ("data-apikey", "#postcoder_key"),
            ("data-addressline1", "#address_line_1"),
            ("data-addressline2", "#address_line_2"),
            ("data-posttown", "#city"),
            ("data-postcode", "#postcode"),
        ])
    }

    #[test]
    fn targets_require_every_selector() {
        let attrs = full_host();
        let targets = PostcoderTargets::from_attributes(|name| attrs.get(name).cloned())
            .expect("all selectors present");
        assert_eq!(targets.api_key_selector, "#postcoder_key");
        assert_eq!(targets.country_or("UK"), "UK");

        let mut missing = full_host();
        missing.remove("data-posttown");
        assert!(PostcoderTargets::from_attributes(|name| missing.get(name).cloned()).is_none());
    }

    #[test]
    fn country_override_wins() {
        let mut attrs = full_host();
        attrs.insert("data-countrycode".to_string(), "IE".to_string());
        let targets = PostcoderTargets::from_attributes(|name| attrs.get(name).cloned())
            .expect("all selectors present");
        assert_eq!(targets.country_or("UK"), "IE");
    }

    #[test]
    fn assignments_pair_selectors_with_values() {
        let attrs = full_host();
        let targets = PostcoderTargets::from_attributes(|name| attrs.get(name).cloned())
            .expect("all selectors present");
        let fields = AddressFields {
            posttown: "London".to_string(),
            ..AddressFields::default()
        };
        let pairs = targets.assignments(&fields);
        assert_eq!(pairs[2], ("#city", "London"));
        assert_eq!(pairs[0], ("#address_line_1", ""));
    }

    #[test]
    fn existing_elements_need_both_selectors() {
        let attrs = full_host();
        let targets = PostcoderTargets::from_attributes(|name| attrs.get(name).cloned())
            .expect("all selectors present");
        assert_eq!(targets.existing_elements(), None);

        let mut attrs = full_host();
        attrs.insert("data-searchterm".to_string(), "#address_search".to_string());
        let targets = PostcoderTargets::from_attributes(|name| attrs.get(name).cloned())
            .expect("all selectors present");
        assert_eq!(targets.existing_elements(), None);

        attrs.insert("data-suggestions".to_string(), "#address_suggestions".to_string());
        let targets = PostcoderTargets::from_attributes(|name| attrs.get(name).cloned())
            .expect("all selectors present");
        assert_eq!(
            targets.existing_elements(),
            Some(("#address_search", "#address_suggestions"))
        );
    }

    #[test]
    fn only_latest_generation_is_current() {
        let mut tracker = QueryTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        tracker.invalidate();
        assert!(!tracker.is_current(second));
    }
}
