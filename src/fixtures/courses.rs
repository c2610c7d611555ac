//! Sample course catalog.

use slateport_models::courses::Course;

fn course(
    id: &str,
    code: &str,
    name: &str,
    department: &str,
    semester: u32,
    credits: f64,
    teacher_name: &str,
) -> Course {
    Course {
        id: id.to_string(),
        code: Some(code.to_string()),
        name: name.to_string(),
        department: Some(department.to_string()),
        semester: Some(semester),
        credits: Some(credits),
        teacher_name: Some(teacher_name.to_string()),
    }
}

#[must_use]
pub fn sample() -> Vec<Course> {
    vec![
        course(
            "crs-01",
            "CS301",
            "Operating Systems",
            "Computer Science",
            5,
            4.0,
            "Vikram Desai",
        ),
        course(
            "crs-02",
            "CS302",
            "Database Systems",
            "Computer Science",
            5,
            4.0,
            "Farhan Ali",
        ),
        course(
            "crs-03",
            "MA201",
            "Linear Algebra",
            "Mathematics",
            3,
            3.0,
            "Meera Iyer",
        ),
        course(
            "crs-04",
            "PH101",
            "Engineering Physics",
            "Physics",
            1,
            3.0,
            "Lata Krishnan",
        ),
        course(
            "crs-05",
            "CS303",
            "Computer Networks",
            "Computer Science",
            5,
            4.0,
            "Vikram Desai",
        ),
    ]
}
