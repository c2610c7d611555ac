//! Bundled sample data.
//!
//! The entity services serve these rows whenever the backend cannot:
//! mock sessions, unreachable hosts, error statuses, and empty replies
//! all land here. Contents are deterministic; every call returns the
//! same rows, so screens and tests can compare against them directly.

pub mod courses;
pub mod feedback;
pub mod fees;
pub mod forum;
pub mod grades;
pub mod notifications;
pub mod requests;
pub mod students;
pub mod teachers;
pub mod timetable;
pub mod users;

use chrono::{DateTime, Utc};

/// Parses a fixed RFC 3339 timestamp. Fixture data only; the inputs
/// are literals that are known to parse.
fn ts(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
