//! The signed-in user record and role profiles.
//!
//! The backend returns user objects in two shapes, depending on the
//! route and backend version:
//!
//! ```json
//! { "id": 1, "fullName": "Asha Rao", "role": "student",
//!   "student": { "rollNumber": "CS21B014", "currentSemester": 5 } }
//! ```
//!
//! ```json
//! { "id": 1, "fullName": "Asha Rao", "role": "student",
//!   "rollNumber": "CS21B014", "currentSemester": 5 }
//! ```
//!
//! [`UserPayload`] decodes both. [`UserRecord::from_payload`] collapses
//! them into one record whose [`RoleProfile`] always matches the role:
//! a student record carries exactly a student profile, never a stray
//! `employeeId`. Serializing a [`UserRecord`] emits the nested shape,
//! so persisted records hydrate back through the same payload path.

use serde::{Deserialize, Serialize};
use slateport_core::serde::{deserialize_flexible_id, deserialize_flexible_u32};

use crate::roles::Role;

/// Profile fields specific to students.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll_number: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_flexible_u32"
    )]
    pub current_semester: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
}

/// Profile fields specific to teachers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeacherProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
}

/// Role-specific profile data, constructed to always match the record's
/// role.
///
/// Serializes as a nested `student`/`teacher` object (or nothing for
/// admins), mirroring the backend's nested user shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RoleProfile {
    Student { student: StudentProfile },
    Teacher { teacher: TeacherProfile },
    Admin {},
}

impl RoleProfile {
    #[must_use]
    pub fn student(profile: StudentProfile) -> Self {
        Self::Student { student: profile }
    }

    #[must_use]
    pub fn teacher(profile: TeacherProfile) -> Self {
        Self::Teacher { teacher: profile }
    }

    #[must_use]
    pub fn admin() -> Self {
        Self::Admin {}
    }
}

/// A signed-in portal user, normalized from the backend's user shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub role: Role,
    #[serde(flatten)]
    pub profile: RoleProfile,
}

impl UserRecord {
    /// Normalizes a raw backend user object.
    ///
    /// Profile fields may be nested under `student`/`teacher` or inline
    /// on the user; when a field appears in both places the nested value
    /// wins. An absent or unrecognized role slug falls back to
    /// [`Role::Student`], and only the profile group matching the final
    /// role is kept.
    #[must_use]
    pub fn from_payload(payload: UserPayload) -> Self {
        let role = payload
            .role
            .as_deref()
            .map(Role::parse_lenient)
            .unwrap_or_default();

        let profile = match role {
            Role::Student => {
                let nested = payload.student.unwrap_or_default();
                RoleProfile::student(StudentProfile {
                    roll_number: nested.roll_number.or(payload.roll_number),
                    current_semester: nested.current_semester.or(payload.current_semester),
                    program: nested.program.or(payload.program),
                })
            }
            Role::Teacher => {
                let nested = payload.teacher.unwrap_or_default();
                RoleProfile::teacher(TeacherProfile {
                    employee_id: nested.employee_id.or(payload.employee_id),
                    department: nested.department.or(payload.department),
                    designation: nested.designation.or(payload.designation),
                })
            }
            Role::Admin => RoleProfile::admin(),
        };

        Self {
            id: payload.id.unwrap_or_default(),
            email: payload.email.unwrap_or_default(),
            full_name: payload.full_name.unwrap_or_default(),
            profile_image: payload.profile_image,
            role,
            profile,
        }
    }

    /// The student profile, if this record carries one.
    #[must_use]
    pub fn student(&self) -> Option<&StudentProfile> {
        match &self.profile {
            RoleProfile::Student { student } => Some(student),
            _ => None,
        }
    }

    /// The teacher profile, if this record carries one.
    #[must_use]
    pub fn teacher(&self) -> Option<&TeacherProfile> {
        match &self.profile {
            RoleProfile::Teacher { teacher } => Some(teacher),
            _ => None,
        }
    }
}

/// Raw user object as the backend returns it.
///
/// Every field is optional; routes differ in which ones they populate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPayload {
    #[serde(alias = "_id", deserialize_with = "deserialize_flexible_id")]
    pub id: Option<String>,
    pub email: Option<String>,
    #[serde(alias = "name")]
    pub full_name: Option<String>,
    #[serde(alias = "avatar")]
    pub profile_image: Option<String>,
    pub role: Option<String>,

    // Nested profile groups
    pub student: Option<StudentProfile>,
    pub teacher: Option<TeacherProfile>,

    // Inline profile fields used by older routes
    pub roll_number: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_u32")]
    pub current_semester: Option<u32>,
    pub program: Option<String>,
    pub employee_id: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> UserRecord {
        UserRecord::from_payload(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn test_nested_student_shape() {
        let user = decode(
            r#"{
                "id": 1,
                "email": "asha@campus.edu",
                "fullName": "Asha Rao",
                "role": "student",
                "student": { "rollNumber": "CS21B014", "currentSemester": 5, "program": "B.Tech CSE" }
            }"#,
        );
        assert_eq!(user.id, "1");
        assert_eq!(user.full_name, "Asha Rao");
        assert_eq!(user.role, Role::Student);
        let profile = user.student().unwrap();
        assert_eq!(profile.roll_number.as_deref(), Some("CS21B014"));
        assert_eq!(profile.current_semester, Some(5));
        assert_eq!(profile.program.as_deref(), Some("B.Tech CSE"));
    }

    #[test]
    fn test_inline_student_shape() {
        let user = decode(
            r#"{
                "_id": "665f1c",
                "fullName": "Asha Rao",
                "role": "student",
                "rollNumber": "CS21B014",
                "currentSemester": "5"
            }"#,
        );
        assert_eq!(user.id, "665f1c");
        let profile = user.student().unwrap();
        assert_eq!(profile.roll_number.as_deref(), Some("CS21B014"));
        assert_eq!(profile.current_semester, Some(5));
        assert_eq!(profile.program, None);
    }

    #[test]
    fn test_nested_fields_win_over_inline() {
        let user = decode(
            r#"{
                "id": 1,
                "role": "student",
                "rollNumber": "OLD-01",
                "program": "Old Program",
                "student": { "rollNumber": "NEW-01" }
            }"#,
        );
        let profile = user.student().unwrap();
        assert_eq!(profile.roll_number.as_deref(), Some("NEW-01"));
        // Fields the nested group omits still fall back to inline ones.
        assert_eq!(profile.program.as_deref(), Some("Old Program"));
    }

    #[test]
    fn test_missing_role_defaults_to_student() {
        let user = decode(r#"{"id": 2, "fullName": "No Role"}"#);
        assert_eq!(user.role, Role::Student);
        assert!(user.student().is_some());
    }

    #[test]
    fn test_unknown_role_defaults_to_student() {
        let user = decode(r#"{"id": 2, "role": "registrar"}"#);
        assert_eq!(user.role, Role::Student);
    }

    #[test]
    fn test_teacher_shape() {
        let user = decode(
            r#"{
                "id": 7,
                "fullName": "Meera Iyer",
                "role": "teacher",
                "teacher": { "employeeId": "EMP-204", "department": "Mathematics", "designation": "Professor" }
            }"#,
        );
        assert_eq!(user.role, Role::Teacher);
        let profile = user.teacher().unwrap();
        assert_eq!(profile.employee_id.as_deref(), Some("EMP-204"));
        assert_eq!(profile.designation.as_deref(), Some("Professor"));
        assert!(user.student().is_none());
    }

    #[test]
    fn test_admin_carries_no_profile_fields() {
        let user = decode(
            r#"{
                "id": 9,
                "role": "admin",
                "rollNumber": "should-be-dropped",
                "employeeId": "also-dropped"
            }"#,
        );
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.profile, RoleProfile::admin());
        assert!(user.student().is_none());
        assert!(user.teacher().is_none());
    }

    #[test]
    fn test_profile_group_matches_role() {
        // A student role ignores teacher fields entirely.
        let user = decode(
            r#"{"id": 3, "role": "student", "employeeId": "EMP-1", "department": "Physics"}"#,
        );
        assert_eq!(user.student().cloned(), Some(StudentProfile::default()));
        assert!(user.teacher().is_none());
    }

    #[test]
    fn test_serialized_record_rehydrates_identically() {
        let samples = [
            r#"{"id": 1, "email": "a@campus.edu", "fullName": "A", "role": "student",
                "student": {"rollNumber": "R-1", "currentSemester": 3, "program": "BSc"}}"#,
            r#"{"id": 2, "email": "b@campus.edu", "fullName": "B", "role": "teacher",
                "teacher": {"employeeId": "E-9", "department": "History", "designation": "Lecturer"}}"#,
            r#"{"id": 3, "email": "c@campus.edu", "fullName": "C", "role": "admin",
                "profileImage": "https://cdn.campus.edu/c.png"}"#,
        ];
        for sample in samples {
            let record = decode(sample);
            let stored = serde_json::to_string(&record).unwrap();
            let rehydrated = decode(&stored);
            assert_eq!(rehydrated, record);
        }
    }

    #[test]
    fn test_serialized_student_uses_nested_shape() {
        let record = decode(r#"{"id": 1, "role": "student", "rollNumber": "R-1"}"#);
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&record).unwrap()).unwrap();
        assert_eq!(json["student"]["rollNumber"], "R-1");
        assert_eq!(json.get("rollNumber"), None);
    }
}
