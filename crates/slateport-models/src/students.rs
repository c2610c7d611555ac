//! Student directory models.

use serde::{Deserialize, Serialize};
use slateport_core::serde::{deserialize_flexible_id, deserialize_flexible_u32};

use crate::users::UserPayload;

/// A student roster row, normalized for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub full_name: String,
    pub email: Option<String>,
    pub roll_number: Option<String>,
    pub current_semester: Option<u32>,
    pub program: Option<String>,
    pub profile_image: Option<String>,
}

/// Raw student row.
///
/// Directory routes either inline the user fields or populate a nested
/// `user` reference.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentPayload {
    #[serde(alias = "_id", deserialize_with = "deserialize_flexible_id")]
    pub id: Option<String>,
    #[serde(alias = "name")]
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub roll_number: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_u32")]
    pub current_semester: Option<u32>,
    pub program: Option<String>,
    pub profile_image: Option<String>,
    pub user: Option<UserPayload>,
}

impl Student {
    /// Flattens a raw row, preferring fields closest to the row itself:
    /// row fields first, then the nested user's profile group, then the
    /// nested user's inline fields.
    #[must_use]
    pub fn from_payload(payload: StudentPayload) -> Self {
        let user = payload.user.unwrap_or_default();
        let group = user.student.unwrap_or_default();
        Self {
            id: payload.id.or(user.id).unwrap_or_default(),
            full_name: payload.full_name.or(user.full_name).unwrap_or_default(),
            email: payload.email.or(user.email),
            roll_number: payload
                .roll_number
                .or(group.roll_number)
                .or(user.roll_number),
            current_semester: payload
                .current_semester
                .or(group.current_semester)
                .or(user.current_semester),
            program: payload.program.or(group.program).or(user.program),
            profile_image: payload.profile_image.or(user.profile_image),
        }
    }
}

/// Query filters for the student roster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentFilter {
    pub program: Option<String>,
    pub semester: Option<u32>,
}

impl StudentFilter {
    /// Renders the filter as query parameters, skipping unset fields.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(program) = &self.program {
            query.push(("program", program.clone()));
        }
        if let Some(semester) = self.semester {
            query.push(("semester", semester.to_string()));
        }
        query
    }
}
