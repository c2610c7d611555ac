//! Sample student roster.

use slateport_models::students::Student;

fn student(
    id: &str,
    full_name: &str,
    email: &str,
    roll_number: &str,
    semester: u32,
    program: &str,
) -> Student {
    Student {
        id: id.to_string(),
        full_name: full_name.to_string(),
        email: Some(email.to_string()),
        roll_number: Some(roll_number.to_string()),
        current_semester: Some(semester),
        program: Some(program.to_string()),
        profile_image: None,
    }
}

#[must_use]
pub fn sample() -> Vec<Student> {
    vec![
        student(
            "stu-01",
            "Asha Rao",
            "asha.rao@campus.edu",
            "CS21B014",
            5,
            "B.Tech CSE",
        ),
        student(
            "stu-02",
            "Dev Patel",
            "dev.patel@campus.edu",
            "EE21B002",
            5,
            "B.Tech EE",
        ),
        student(
            "stu-03",
            "Sana Khan",
            "sana.khan@campus.edu",
            "CS21B031",
            5,
            "B.Tech CSE",
        ),
        student(
            "stu-04",
            "Rohan Mehta",
            "rohan.mehta@campus.edu",
            "ME20B007",
            7,
            "B.Tech ME",
        ),
        student(
            "stu-05",
            "Priya Nair",
            "priya.nair@campus.edu",
            "CS22B019",
            3,
            "B.Tech CSE",
        ),
        student(
            "stu-06",
            "Arjun Singh",
            "arjun.singh@campus.edu",
            "CE21B044",
            5,
            "B.Tech CE",
        ),
    ]
}
