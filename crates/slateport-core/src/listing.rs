//! List results tagged with their data source.
//!
//! The Slateport backend is inconsistent about list response shapes. The
//! same endpoint may answer with a bare JSON array or with the array
//! wrapped in a `data` envelope:
//!
//! ```json
//! [ { "id": "1" }, { "id": "2" } ]
//! ```
//!
//! ```json
//! { "data": [ { "id": "1" }, { "id": "2" } ] }
//! ```
//!
//! [`ListPayload`] and [`ItemPayload`] absorb that variance at decode
//! time. [`Listing`] carries the decoded rows together with a
//! [`ListSource`] describing where they came from, so screens can render
//! fallback data while still knowing (and logging) that the backend did
//! not provide it.

use serde::Deserialize;

/// Why a listing was served from bundled sample data instead of the
/// backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackReason {
    /// The session holds a mock token; no request was attempted.
    MockToken,
    /// The request never reached the backend (DNS, refused connection,
    /// timeout).
    Unreachable,
    /// The backend answered with a non-success status code.
    ApiStatus,
    /// The backend answered successfully but the list was empty.
    EmptyResponse,
}

/// Where the rows in a [`Listing`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListSource {
    /// Decoded from a live backend response.
    Live,
    /// Served from bundled sample data.
    Fixture(FallbackReason),
}

impl ListSource {
    /// Returns the fallback reason, if the rows did not come from the
    /// backend.
    #[must_use]
    pub fn fallback_reason(&self) -> Option<FallbackReason> {
        match self {
            Self::Live => None,
            Self::Fixture(reason) => Some(*reason),
        }
    }
}

/// A list of rows plus the source they were obtained from.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub source: ListSource,
}

impl<T> Listing<T> {
    /// Wraps rows decoded from a live backend response.
    #[must_use]
    pub fn live(items: Vec<T>) -> Self {
        Self {
            items,
            source: ListSource::Live,
        }
    }

    /// Wraps bundled sample rows served in place of a backend response.
    #[must_use]
    pub fn fixture(items: Vec<T>, reason: FallbackReason) -> Self {
        Self {
            items,
            source: ListSource::Fixture(reason),
        }
    }

    /// Whether the rows came from bundled sample data.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, ListSource::Fixture(_))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maps every row, preserving the source tag.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Listing<U> {
        Listing {
            items: self.items.into_iter().map(f).collect(),
            source: self.source,
        }
    }
}

/// A list response body, either bare or wrapped in a `data` envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> ListPayload<T> {
    /// Unwraps the rows regardless of envelope shape.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Bare(items) => items,
            Self::Wrapped { data } => data,
        }
    }
}

/// A single-object response body, either bare or wrapped in a `data`
/// envelope.
///
/// `Wrapped` is listed first: entity payloads tolerate missing fields,
/// so a `{ "data": ... }` envelope would otherwise decode as a bare
/// object with every field absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ItemPayload<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> ItemPayload<T> {
    /// Unwraps the object regardless of envelope shape.
    #[must_use]
    pub fn into_item(self) -> T {
        match self {
            Self::Wrapped { data } => data,
            Self::Bare(item) => item,
        }
    }
}
