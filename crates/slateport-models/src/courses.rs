//! Course catalog models and DTOs.

use serde::{Deserialize, Serialize};
use slateport_core::serde::{
    deserialize_flexible_f64, deserialize_flexible_id, deserialize_flexible_u32,
};
use validator::Validate;

use crate::teachers::{Teacher, TeacherPayload};

/// A course catalog row, normalized for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub code: Option<String>,
    pub name: String,
    pub department: Option<String>,
    pub semester: Option<u32>,
    pub credits: Option<f64>,
    pub teacher_name: Option<String>,
}

/// Raw course row; `teacher` may be a populated reference.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoursePayload {
    #[serde(alias = "_id", deserialize_with = "deserialize_flexible_id")]
    pub id: Option<String>,
    pub code: Option<String>,
    #[serde(alias = "title")]
    pub name: Option<String>,
    pub department: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_u32")]
    pub semester: Option<u32>,
    #[serde(deserialize_with = "deserialize_flexible_f64")]
    pub credits: Option<f64>,
    pub teacher_name: Option<String>,
    pub teacher: Option<TeacherPayload>,
}

impl Course {
    /// Flattens a raw row, resolving the teacher's display name from the
    /// populated reference when the row does not carry one.
    #[must_use]
    pub fn from_payload(payload: CoursePayload) -> Self {
        let teacher_name = payload.teacher_name.or_else(|| {
            payload
                .teacher
                .map(Teacher::from_payload)
                .map(|t| t.full_name)
                .filter(|name| !name.is_empty())
        });
        Self {
            id: payload.id.unwrap_or_default(),
            code: payload.code,
            name: payload.name.unwrap_or_default(),
            department: payload.department,
            semester: payload.semester,
            credits: payload.credits,
            teacher_name,
        }
    }
}

/// Query filters for the course catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFilter {
    pub department: Option<String>,
    pub semester: Option<u32>,
    /// Scopes the catalog to one teacher's courses.
    pub teacher_id: Option<String>,
}

impl CourseFilter {
    /// Renders the filter as query parameters, skipping unset fields.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(department) = &self.department {
            query.push(("department", department.clone()));
        }
        if let Some(semester) = self.semester {
            query.push(("semester", semester.to_string()));
        }
        if let Some(teacher_id) = &self.teacher_id {
            query.push(("teacherId", teacher_id.clone()));
        }
        query
    }
}

/// DTO for creating a course.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseDto {
    #[validate(length(
        min = 2,
        max = 20,
        message = "Course code must be between 2 and 20 characters"
    ))]
    pub code: String,
    #[validate(length(
        min = 3,
        max = 150,
        message = "Course name must be between 3 and 150 characters"
    ))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[validate(range(min = 1, max = 12, message = "Semester must be between 1 and 12"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<u32>,
    #[validate(range(min = 0.5, max = 10.0, message = "Credits must be between 0.5 and 10"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<f64>,
}
