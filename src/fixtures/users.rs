//! Demo user records, one per role.

use slateport_models::roles::Role;
use slateport_models::users::{RoleProfile, StudentProfile, TeacherProfile, UserRecord};

/// The user record a mock login signs in as.
#[must_use]
pub fn mock_user(role: Role) -> UserRecord {
    match role {
        Role::Student => UserRecord {
            id: "usr-mock-student".to_string(),
            email: "asha.rao@campus.edu".to_string(),
            full_name: "Asha Rao".to_string(),
            profile_image: None,
            role: Role::Student,
            profile: RoleProfile::student(StudentProfile {
                roll_number: Some("CS21B014".to_string()),
                current_semester: Some(5),
                program: Some("B.Tech CSE".to_string()),
            }),
        },
        Role::Teacher => UserRecord {
            id: "usr-mock-teacher".to_string(),
            email: "meera.iyer@campus.edu".to_string(),
            full_name: "Meera Iyer".to_string(),
            profile_image: None,
            role: Role::Teacher,
            profile: RoleProfile::teacher(TeacherProfile {
                employee_id: Some("EMP-204".to_string()),
                department: Some("Mathematics".to_string()),
                designation: Some("Professor".to_string()),
            }),
        },
        Role::Admin => UserRecord {
            id: "usr-mock-admin".to_string(),
            email: "nikhil.bose@campus.edu".to_string(),
            full_name: "Nikhil Bose".to_string(),
            profile_image: None,
            role: Role::Admin,
            profile: RoleProfile::admin(),
        },
    }
}
