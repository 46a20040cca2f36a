//! # Design
//!
//! - Provide structured, constant-message errors for the DOM-free layer.
//! - Capture field and operation context so failures are reproducible in tests.
//! - Preserve source errors without interpolating context into messages.

use thiserror::Error;

/// Errors raised while loading page configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The embedded configuration block was not valid JSON for the schema.
    #[error("page config json failure")]
    Json {
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// A configuration field failed validation.
    #[error("page config invalid field")]
    InvalidField {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Static reason for the failure.
        reason: &'static str,
        /// Offending value when available.
        value: Option<String>,
    },
}

/// Errors raised while decoding server-rendered page data.
#[derive(Debug, Error)]
pub enum PageDataError {
    /// The embedded payload was not valid JSON for the schema.
    #[error("page data json failure")]
    Json {
        /// Operation that triggered the decode.
        operation: &'static str,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Errors raised by outbound HTTP requests.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    /// The server answered with a non-success status.
    #[error("request returned an error status")]
    Status {
        /// Operation that issued the request.
        operation: &'static str,
        /// HTTP status code.
        status: u16,
    },
}

/// Errors raised by the postcode lookup flow.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PostcodeError {
    /// The address endpoint returned an empty list.
    #[error("postcode address lookup returned no results")]
    EmptyAddress {
        /// Postcoder identifier that was looked up.
        id: String,
    },
}

/// Errors raised while building a delete confirmation from page-script arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeleteRequestError {
    /// No endpoint was given.
    #[error("delete route missing")]
    MissingRoute,
    /// The HTTP method is not one the dialog can send.
    #[error("delete method unsupported")]
    UnsupportedMethod {
        /// Method name as received.
        method: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, DeleteRequestError, PageDataError, PostcodeError, RequestError};

    #[test]
    fn messages_stay_constant() {
        let err = ConfigError::InvalidField {
            field: "stickers.items_per_page",
            reason: "must be greater than zero",
            value: Some("0".to_string()),
        };
        assert_eq!(err.to_string(), "page config invalid field");

        let source = serde_json::from_str::<u8>("nope").expect_err("invalid json");
        let err = PageDataError::Json {
            operation: "decode sticker data",
            source,
        };
        assert_eq!(err.to_string(), "page data json failure");

        let err = RequestError::Status {
            operation: "autocomplete find",
            status: 503,
        };
        assert_eq!(err.to_string(), "request returned an error status");

        let err = PostcodeError::EmptyAddress {
            id: "GB|1".to_string(),
        };
        assert_eq!(err.to_string(), "postcode address lookup returned no results");

        let err = DeleteRequestError::UnsupportedMethod {
            method: "TRACE".to_string(),
        };
        assert_eq!(err.to_string(), "delete method unsupported");
    }
}
