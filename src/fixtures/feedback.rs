//! Sample feedback entries.

use slateport_models::feedback::Feedback;

#[must_use]
pub fn sample() -> Vec<Feedback> {
    vec![
        Feedback {
            id: "fbk-01".to_string(),
            subject: "Projector in LH-2".to_string(),
            message: "The projector flickers during lectures and is hard to read from the back rows.".to_string(),
            category: Some("facilities".to_string()),
            rating: Some(2),
            author_name: Some("Asha Rao".to_string()),
            created_at: super::ts("2026-07-14T09:30:00Z"),
        },
        Feedback {
            id: "fbk-02".to_string(),
            subject: "Library hours".to_string(),
            message: "Please extend reading-room hours during the exam weeks.".to_string(),
            category: Some("academics".to_string()),
            rating: Some(4),
            author_name: Some("Dev Patel".to_string()),
            created_at: super::ts("2026-07-21T16:05:00Z"),
        },
        Feedback {
            id: "fbk-03".to_string(),
            subject: "Cafeteria menu".to_string(),
            message: "The lunch menu has not changed in a month; more variety would help.".to_string(),
            category: Some("facilities".to_string()),
            rating: Some(3),
            author_name: Some("Sana Khan".to_string()),
            created_at: super::ts("2026-08-02T12:48:00Z"),
        },
    ]
}
