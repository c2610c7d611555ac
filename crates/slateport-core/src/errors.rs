//! Application error types for the Slateport client.
//!
//! All fallible client operations return [`PortalError`]. The variants
//! distinguish transport failures from backend rejections and from
//! malformed payloads, so callers can decide whether to retry, fall back
//! to bundled sample data, or surface the problem to the user.

use std::fmt;

use thiserror::Error;
use validator::ValidationErrors;

/// Error type shared by every fallible Slateport operation.
#[derive(Debug, Error)]
pub enum PortalError {
    /// The request never produced an HTTP response (DNS, refused
    /// connection, timeout).
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    /// The backend answered with a non-success status code.
    #[error("{url} returned status {status}: {message}")]
    Api {
        url: String,
        status: u16,
        message: String,
    },

    /// The response arrived but its body did not match the expected shape.
    #[error("failed to decode {what} response: {message}")]
    Decode {
        what: &'static str,
        message: String,
    },

    /// Reading or writing persisted client state failed.
    #[error("storage failure: {0}")]
    Storage(String),

    /// A request body failed local validation before being sent.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The current session role is not allowed to perform the operation.
    #[error("access denied: {0}")]
    Forbidden(String),
}

impl PortalError {
    pub fn network(url: impl Into<String>, err: impl fmt::Display) -> Self {
        Self::Network {
            url: url.into(),
            message: err.to_string(),
        }
    }

    pub fn api(url: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            url: url.into(),
            status,
            message: message.into(),
        }
    }

    pub fn decode(what: &'static str, err: impl fmt::Display) -> Self {
        Self::Decode {
            what,
            message: err.to_string(),
        }
    }

    pub fn storage(err: impl fmt::Display) -> Self {
        Self::Storage(err.to_string())
    }

    pub fn validation(errors: &ValidationErrors) -> Self {
        Self::Validation(format_validation_errors(errors))
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    /// Returns the HTTP status code for [`PortalError::Api`] errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Flattens [`ValidationErrors`] into a single human-readable string.
///
/// Field messages are preferred; fields validated without an explicit
/// message fall back to `"<field> is invalid"`.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().filter_map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .or_else(|| Some(format!("{} is invalid", field)))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
