//! # Slateport Core
//!
//! Core types, errors, and utilities for the Slateport client.
//!
//! This crate provides foundational types used throughout the Slateport
//! client library:
//!
//! - [`errors`]: The shared [`PortalError`] type and validation formatting
//! - [`listing`]: List results tagged with their data source, plus the
//!   tolerant payload wrappers used to decode backend responses
//! - [`serde`]: Custom serde deserialization helpers for loosely typed
//!   backend payloads
//!
//! # Example
//!
//! ```ignore
//! use slateport_core::errors::PortalError;
//! use slateport_core::listing::{FallbackReason, Listing};
//!
//! // A listing served from bundled sample data after a failed request
//! let listing = Listing::fixture(vec![1, 2, 3], FallbackReason::Unreachable);
//! assert!(listing.is_fallback());
//!
//! // An error raised for an unexpected response body
//! let error = PortalError::decode("students", "expected an array");
//! ```

pub mod errors;
pub mod listing;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::PortalError;
pub use listing::{FallbackReason, ItemPayload, ListPayload, ListSource, Listing};
