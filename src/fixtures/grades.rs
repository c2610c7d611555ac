//! Sample transcript.

use slateport_models::grades::{GradeRecord, grade_points};

fn record(id: &str, course_name: &str, grade: &str, credits: f64, semester: u32) -> GradeRecord {
    GradeRecord {
        id: id.to_string(),
        course_name: course_name.to_string(),
        grade: grade.to_string(),
        credits: Some(credits),
        semester: Some(semester),
        points: grade_points(grade),
    }
}

#[must_use]
pub fn sample() -> Vec<GradeRecord> {
    vec![
        record("grd-01", "Data Structures", "A+", 4.0, 4),
        record("grd-02", "Discrete Mathematics", "A", 3.0, 4),
        record("grd-03", "Computer Architecture", "B+", 4.0, 4),
        record("grd-04", "Probability and Statistics", "O", 3.0, 4),
        record("grd-05", "Technical Communication", "A", 2.0, 4),
    ]
}
