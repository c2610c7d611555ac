//! Notice board models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use slateport_core::serde::deserialize_flexible_id;

/// A notice board entry, normalized for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// Raw notice row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationPayload {
    #[serde(alias = "_id", deserialize_with = "deserialize_flexible_id")]
    pub id: Option<String>,
    pub title: Option<String>,
    #[serde(alias = "body")]
    pub message: Option<String>,
    #[serde(alias = "isRead", alias = "seen")]
    pub read: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Notification {
    /// Flattens a raw row; a missing read flag means unread.
    #[must_use]
    pub fn from_payload(payload: NotificationPayload) -> Self {
        Self {
            id: payload.id.unwrap_or_default(),
            title: payload.title.unwrap_or_default(),
            message: payload.message.unwrap_or_default(),
            read: payload.read.unwrap_or(false),
            created_at: payload.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_payload_reads_alias_flags() {
        let payload: NotificationPayload = serde_json::from_str(
            r#"{"_id": "n1", "title": "Exam schedule", "body": "Mid-sems start Sep 12.", "isRead": true}"#,
        )
        .unwrap();
        let notification = Notification::from_payload(payload);
        assert_eq!(notification.id, "n1");
        assert_eq!(notification.message, "Mid-sems start Sep 12.");
        assert!(notification.read);
    }

    #[test]
    fn test_missing_read_flag_means_unread() {
        let payload: NotificationPayload =
            serde_json::from_str(r#"{"id": "n2", "title": "Holiday notice"}"#).unwrap();
        let notification = Notification::from_payload(payload);
        assert!(!notification.read);
    }
}
