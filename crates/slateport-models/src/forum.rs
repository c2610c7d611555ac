//! Forum post models and DTOs.
//!
//! The forum doubles as the lost-and-found board: lost item notices are
//! ordinary posts tagged with the [`categories::LOST_FOUND`] category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use slateport_core::serde::{deserialize_flexible_id, deserialize_flexible_u32};
use validator::Validate;

use crate::users::UserPayload;

/// Well-known forum categories.
pub mod categories {
    pub const GENERAL: &str = "general";
    pub const LOST_FOUND: &str = "lost-found";
    pub const ACADEMICS: &str = "academics";
    pub const EVENTS: &str = "events";
}

/// A forum post, normalized for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub author_name: Option<String>,
    pub reply_count: Option<u32>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Raw forum post row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForumPostPayload {
    #[serde(alias = "_id", deserialize_with = "deserialize_flexible_id")]
    pub id: Option<String>,
    #[serde(alias = "subject")]
    pub title: Option<String>,
    #[serde(alias = "body")]
    pub content: Option<String>,
    pub category: Option<String>,
    #[serde(alias = "author")]
    pub author_name: Option<String>,
    pub user: Option<UserPayload>,
    #[serde(alias = "replies", deserialize_with = "deserialize_flexible_u32")]
    pub reply_count: Option<u32>,
    pub created_at: Option<DateTime<Utc>>,
}

impl ForumPost {
    /// Flattens a raw row, resolving the author from the nested user
    /// when the row does not name one.
    #[must_use]
    pub fn from_payload(payload: ForumPostPayload) -> Self {
        let author_name = payload
            .author_name
            .or_else(|| payload.user.and_then(|user| user.full_name));
        Self {
            id: payload.id.unwrap_or_default(),
            title: payload.title.unwrap_or_default(),
            content: payload.content.unwrap_or_default(),
            category: payload.category,
            author_name,
            reply_count: payload.reply_count,
            created_at: payload.created_at,
        }
    }
}

/// DTO for creating a forum post.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateForumPostDto {
    #[validate(length(
        min = 3,
        max = 150,
        message = "Title must be between 3 and 150 characters"
    ))]
    pub title: String,
    #[validate(length(
        min = 1,
        max = 5000,
        message = "Content must be between 1 and 5000 characters"
    ))]
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_payload_with_nested_author() {
        let payload: ForumPostPayload = serde_json::from_str(
            r#"{
                "_id": "p1",
                "title": "Lost: black umbrella near LH-3",
                "body": "Left it after the 2pm lecture on Tuesday.",
                "category": "lost-found",
                "replies": "4",
                "user": { "fullName": "Dev Patel" }
            }"#,
        )
        .unwrap();
        let post = ForumPost::from_payload(payload);
        assert_eq!(post.title, "Lost: black umbrella near LH-3");
        assert_eq!(post.category.as_deref(), Some(categories::LOST_FOUND));
        assert_eq!(post.reply_count, Some(4));
        assert_eq!(post.author_name.as_deref(), Some("Dev Patel"));
    }

    #[test]
    fn test_create_forum_post_dto_validation() {
        let valid = CreateForumPostDto {
            title: "Lost: black umbrella near LH-3".to_string(),
            content: "Left it after the 2pm lecture.".to_string(),
            category: Some(categories::LOST_FOUND.to_string()),
        };
        assert!(valid.validate().is_ok());

        let short_title = CreateForumPostDto {
            title: "Lo".to_string(),
            content: "Left it after the 2pm lecture.".to_string(),
            category: None,
        };
        assert!(short_title.validate().is_err());

        let empty_content = CreateForumPostDto {
            title: "Lost: black umbrella".to_string(),
            content: String::new(),
            category: None,
        };
        assert!(empty_content.validate().is_err());
    }
}
