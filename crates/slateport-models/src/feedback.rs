//! Feedback models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use slateport_core::serde::{deserialize_flexible_id, deserialize_flexible_u32};
use validator::Validate;

use crate::users::UserPayload;

/// A submitted feedback entry, normalized for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub subject: String,
    pub message: String,
    pub category: Option<String>,
    pub rating: Option<u32>,
    pub author_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Raw feedback row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedbackPayload {
    #[serde(alias = "_id", deserialize_with = "deserialize_flexible_id")]
    pub id: Option<String>,
    #[serde(alias = "title")]
    pub subject: Option<String>,
    #[serde(alias = "body")]
    pub message: Option<String>,
    pub category: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_u32")]
    pub rating: Option<u32>,
    #[serde(alias = "author")]
    pub author_name: Option<String>,
    pub user: Option<UserPayload>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Feedback {
    /// Flattens a raw row, resolving the author from the nested user
    /// when the row does not name one.
    #[must_use]
    pub fn from_payload(payload: FeedbackPayload) -> Self {
        let author_name = payload
            .author_name
            .or_else(|| payload.user.and_then(|user| user.full_name));
        Self {
            id: payload.id.unwrap_or_default(),
            subject: payload.subject.unwrap_or_default(),
            message: payload.message.unwrap_or_default(),
            category: payload.category,
            rating: payload.rating,
            author_name,
            created_at: payload.created_at,
        }
    }
}

/// DTO for submitting feedback.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedbackDto {
    #[validate(length(
        min = 3,
        max = 120,
        message = "Subject must be between 3 and 120 characters"
    ))]
    pub subject: String,
    #[validate(length(
        min = 10,
        max = 2000,
        message = "Message must be between 10 and 2000 characters"
    ))]
    pub message: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
