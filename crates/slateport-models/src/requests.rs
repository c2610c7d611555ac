//! Student service request models and DTOs.
//!
//! Requests cover bonafide certificates, hostel changes, document
//! reissues, and similar paperwork. Students file them; admins resolve
//! them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use slateport_core::serde::deserialize_flexible_id;
use validator::Validate;

use crate::users::UserPayload;

/// Resolution state of a service request.
///
/// Unrecognized status strings fall back to [`RequestStatus::Pending`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    /// Parses a status string, falling back to
    /// [`RequestStatus::Pending`] for anything unrecognized.
    #[must_use]
    pub fn parse_lenient(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "approved" => RequestStatus::Approved,
            "rejected" => RequestStatus::Rejected,
            _ => RequestStatus::Pending,
        }
    }
}

/// A filed service request, normalized for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    pub id: String,
    pub title: String,
    pub details: String,
    pub status: RequestStatus,
    pub requester_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub resolved_at: Option<DateTime<Utc>>,
}

/// Raw service request row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestPayload {
    #[serde(alias = "_id", deserialize_with = "deserialize_flexible_id")]
    pub id: Option<String>,
    #[serde(alias = "subject")]
    pub title: Option<String>,
    #[serde(alias = "description", alias = "reason")]
    pub details: Option<String>,
    pub status: Option<String>,
    pub user: Option<UserPayload>,
    pub created_at: Option<DateTime<Utc>>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl ServiceRequest {
    /// Flattens a raw row.
    #[must_use]
    pub fn from_payload(payload: RequestPayload) -> Self {
        Self {
            id: payload.id.unwrap_or_default(),
            title: payload.title.unwrap_or_default(),
            details: payload.details.unwrap_or_default(),
            status: payload
                .status
                .as_deref()
                .map(RequestStatus::parse_lenient)
                .unwrap_or_default(),
            requester_name: payload.user.and_then(|user| user.full_name),
            created_at: payload.created_at,
            resolved_at: payload.resolved_at,
        }
    }
}

/// DTO for filing a service request.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestDto {
    #[validate(length(
        min = 3,
        max = 150,
        message = "Title must be between 3 and 150 characters"
    ))]
    pub title: String,
    #[validate(length(
        min = 10,
        max = 2000,
        message = "Details must be between 10 and 2000 characters"
    ))]
    pub details: String,
}
