//! Browser-side service helpers.
pub(crate) mod http;
