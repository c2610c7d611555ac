//! Teacher directory models.

use serde::{Deserialize, Serialize};
use slateport_core::serde::deserialize_flexible_id;

use crate::users::UserPayload;

/// A teacher directory row, normalized for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: String,
    pub full_name: String,
    pub email: Option<String>,
    pub employee_id: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub profile_image: Option<String>,
}

/// Raw teacher row, inline or with a populated `user` reference.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeacherPayload {
    #[serde(alias = "_id", deserialize_with = "deserialize_flexible_id")]
    pub id: Option<String>,
    #[serde(alias = "name")]
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub employee_id: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub profile_image: Option<String>,
    pub user: Option<UserPayload>,
}

impl Teacher {
    /// Flattens a raw row; row fields win over the nested user's.
    #[must_use]
    pub fn from_payload(payload: TeacherPayload) -> Self {
        let user = payload.user.unwrap_or_default();
        let group = user.teacher.unwrap_or_default();
        Self {
            id: payload.id.or(user.id).unwrap_or_default(),
            full_name: payload.full_name.or(user.full_name).unwrap_or_default(),
            email: payload.email.or(user.email),
            employee_id: payload
                .employee_id
                .or(group.employee_id)
                .or(user.employee_id),
            department: payload.department.or(group.department).or(user.department),
            designation: payload
                .designation
                .or(group.designation)
                .or(user.designation),
            profile_image: payload.profile_image.or(user.profile_image),
        }
    }
}

/// Query filters for the teacher directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeacherFilter {
    pub department: Option<String>,
}

impl TeacherFilter {
    /// Renders the filter as query parameters, skipping unset fields.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(department) = &self.department {
            query.push(("department", department.clone()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_row() {
        let payload: TeacherPayload = serde_json::from_str(
            r#"{"_id": "t1", "fullName": "Meera Iyer", "employeeId": "EMP-204", "department": "Mathematics"}"#,
        )
        .unwrap();
        let teacher = Teacher::from_payload(payload);
        assert_eq!(teacher.id, "t1");
        assert_eq!(teacher.full_name, "Meera Iyer");
        assert_eq!(teacher.employee_id.as_deref(), Some("EMP-204"));
        assert_eq!(teacher.department.as_deref(), Some("Mathematics"));
    }

    #[test]
    fn test_populated_user_reference() {
        let payload: TeacherPayload = serde_json::from_str(
            r#"{
                "_id": "t2",
                "user": {
                    "fullName": "Rahul Nair",
                    "email": "rahul@campus.edu",
                    "teacher": { "employeeId": "EMP-101", "designation": "Assistant Professor" }
                },
                "department": "Physics"
            }"#,
        )
        .unwrap();
        let teacher = Teacher::from_payload(payload);
        assert_eq!(teacher.full_name, "Rahul Nair");
        assert_eq!(teacher.employee_id.as_deref(), Some("EMP-101"));
        assert_eq!(teacher.department.as_deref(), Some("Physics"));
        assert_eq!(teacher.designation.as_deref(), Some("Assistant Professor"));
    }

    #[test]
    fn test_filter_query_rendering() {
        assert!(TeacherFilter::default().to_query().is_empty());

        let filter = TeacherFilter {
            department: Some("Mathematics".to_string()),
        };
        assert_eq!(
            filter.to_query(),
            vec![("department", "Mathematics".to_string())]
        );
    }
}
