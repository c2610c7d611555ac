//! Grade records and GPA computation.
//!
//! Grades use the 10-point letter scale. GPA is the credit-weighted
//! mean of grade points over records that carry both a recognizable
//! grade and a positive credit count.

use serde::{Deserialize, Serialize};
use slateport_core::serde::{
    deserialize_flexible_f64, deserialize_flexible_id, deserialize_flexible_u32,
};
use validator::Validate;

use crate::courses::{Course, CoursePayload};

/// A graded course result, normalized for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeRecord {
    pub id: String,
    pub course_name: String,
    pub grade: String,
    pub credits: Option<f64>,
    pub semester: Option<u32>,
    /// Grade points on the 10-point scale, from the backend when
    /// provided, otherwise derived from the letter grade.
    pub points: Option<f64>,
}

/// Raw grade row; `course` may be a populated reference.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GradePayload {
    #[serde(alias = "_id", deserialize_with = "deserialize_flexible_id")]
    pub id: Option<String>,
    #[serde(alias = "subject")]
    pub course_name: Option<String>,
    pub course: Option<CoursePayload>,
    pub grade: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_f64")]
    pub credits: Option<f64>,
    #[serde(deserialize_with = "deserialize_flexible_u32")]
    pub semester: Option<u32>,
    #[serde(alias = "gradePoints", deserialize_with = "deserialize_flexible_f64")]
    pub points: Option<f64>,
}

impl GradeRecord {
    /// Flattens a raw row, deriving points from the letter grade when
    /// the backend does not provide them.
    #[must_use]
    pub fn from_payload(payload: GradePayload) -> Self {
        let course_name = payload
            .course_name
            .or_else(|| {
                payload
                    .course
                    .map(Course::from_payload)
                    .map(|c| c.name)
                    .filter(|name| !name.is_empty())
            })
            .unwrap_or_default();
        let grade = payload.grade.unwrap_or_default();
        let points = payload.points.or_else(|| grade_points(&grade));
        Self {
            id: payload.id.unwrap_or_default(),
            course_name,
            grade,
            credits: payload.credits,
            semester: payload.semester,
            points,
        }
    }
}

/// DTO for a teacher submitting a grade.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitGradeDto {
    #[validate(length(min = 1, message = "Student id is required"))]
    pub student_id: String,
    #[validate(length(min = 1, message = "Course id is required"))]
    pub course_id: String,
    #[validate(length(min = 1, max = 2, message = "Grade must be a letter grade"))]
    pub grade: String,
    #[validate(range(min = 1, max = 12, message = "Semester must be between 1 and 12"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<u32>,
}

/// Grade points for a letter grade on the 10-point scale.
///
/// `AB` marks an absent candidate. Returns `None` for anything
/// unrecognized.
#[must_use]
pub fn grade_points(letter: &str) -> Option<f64> {
    match letter.trim().to_ascii_uppercase().as_str() {
        "O" => Some(10.0),
        "A+" => Some(9.0),
        "A" => Some(8.0),
        "B+" => Some(7.0),
        "B" => Some(6.0),
        "C" => Some(5.0),
        "P" => Some(4.0),
        "F" | "AB" => Some(0.0),
        _ => None,
    }
}

/// Credit-weighted GPA on the 10-point scale.
///
/// Records missing points or credits are skipped. Returns `None` when
/// no record is gradeable.
#[must_use]
pub fn gpa(records: &[GradeRecord]) -> Option<f32> {
    let mut weighted = 0.0;
    let mut credits = 0.0;
    for record in records {
        if let (Some(points), Some(c)) = (record.points, record.credits) {
            if c > 0.0 {
                weighted += points * c;
                credits += c;
            }
        }
    }
    (credits > 0.0).then(|| (weighted / credits) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(grade: &str, credits: Option<f64>) -> GradeRecord {
        GradeRecord {
            id: "g1".to_string(),
            course_name: "Course".to_string(),
            grade: grade.to_string(),
            credits,
            semester: Some(5),
            points: grade_points(grade),
        }
    }

    #[test]
    fn test_grade_points_scale() {
        assert_eq!(grade_points("O"), Some(10.0));
        assert_eq!(grade_points("a+"), Some(9.0));
        assert_eq!(grade_points(" B "), Some(6.0));
        assert_eq!(grade_points("F"), Some(0.0));
        assert_eq!(grade_points("AB"), Some(0.0));
        assert_eq!(grade_points("Z"), None);
        assert_eq!(grade_points(""), None);
    }

    #[test]
    fn test_gpa_is_credit_weighted() {
        let records = [record("A", Some(4.0)), record("B", Some(2.0))];
        // (8*4 + 6*2) / 6 = 44 / 6
        let gpa = gpa(&records).unwrap();
        assert!((gpa - 44.0_f32 / 6.0_f32).abs() < 1e-5);
    }

    #[test]
    fn test_gpa_skips_ungradeable_records() {
        let records = [
            record("A", Some(4.0)),
            record("Z", Some(4.0)),
            record("B", None),
            record("C", Some(0.0)),
        ];
        assert_eq!(gpa(&records), Some(8.0));
    }

    #[test]
    fn test_gpa_of_nothing_gradeable_is_none() {
        assert_eq!(gpa(&[]), None);
        assert_eq!(gpa(&[record("Z", Some(3.0)), record("A", None)]), None);
    }

    #[test]
    fn test_from_payload_derives_points_from_letter() {
        let payload: GradePayload = serde_json::from_str(
            r#"{"_id": "g1", "course": {"name": "Circuits"}, "grade": "A+", "credits": "3"}"#,
        )
        .unwrap();
        let record = GradeRecord::from_payload(payload);
        assert_eq!(record.course_name, "Circuits");
        assert_eq!(record.points, Some(9.0));
        assert_eq!(record.credits, Some(3.0));
    }

    #[test]
    fn test_from_payload_prefers_backend_points() {
        let payload: GradePayload = serde_json::from_str(
            r#"{"id": "g2", "subject": "Workshop", "grade": "A", "gradePoints": 8.5}"#,
        )
        .unwrap();
        let record = GradeRecord::from_payload(payload);
        assert_eq!(record.points, Some(8.5));
    }

    #[test]
    fn test_submit_grade_dto_validation() {
        let valid = SubmitGradeDto {
            student_id: "s1".to_string(),
            course_id: "c1".to_string(),
            grade: "A+".to_string(),
            semester: Some(5),
        };
        assert!(valid.validate().is_ok());

        let empty_student = SubmitGradeDto {
            student_id: String::new(),
            course_id: "c1".to_string(),
            grade: "A".to_string(),
            semester: None,
        };
        assert!(empty_student.validate().is_err());

        let long_grade = SubmitGradeDto {
            student_id: "s1".to_string(),
            course_id: "c1".to_string(),
            grade: "AAA".to_string(),
            semester: None,
        };
        assert!(long_grade.validate().is_err());
    }
}
