//! Sample teacher directory.

use slateport_models::teachers::Teacher;

fn teacher(
    id: &str,
    full_name: &str,
    email: &str,
    employee_id: &str,
    department: &str,
    designation: &str,
) -> Teacher {
    Teacher {
        id: id.to_string(),
        full_name: full_name.to_string(),
        email: Some(email.to_string()),
        employee_id: Some(employee_id.to_string()),
        department: Some(department.to_string()),
        designation: Some(designation.to_string()),
        profile_image: None,
    }
}

#[must_use]
pub fn sample() -> Vec<Teacher> {
    vec![
        teacher(
            "tch-01",
            "Meera Iyer",
            "meera.iyer@campus.edu",
            "EMP-204",
            "Mathematics",
            "Professor",
        ),
        teacher(
            "tch-02",
            "Vikram Desai",
            "vikram.desai@campus.edu",
            "EMP-117",
            "Computer Science",
            "Associate Professor",
        ),
        teacher(
            "tch-03",
            "Lata Krishnan",
            "lata.krishnan@campus.edu",
            "EMP-230",
            "Physics",
            "Assistant Professor",
        ),
        teacher(
            "tch-04",
            "Farhan Ali",
            "farhan.ali@campus.edu",
            "EMP-305",
            "Computer Science",
            "Professor",
        ),
    ]
}
