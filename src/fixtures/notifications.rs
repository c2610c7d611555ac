//! Sample notice board entries.

use slateport_models::notifications::Notification;

#[must_use]
pub fn sample() -> Vec<Notification> {
    vec![
        Notification {
            id: "ntf-01".to_string(),
            title: "Endsem timetable published".to_string(),
            message: "The end-semester examination timetable is up on the exams page.".to_string(),
            read: false,
            created_at: super::ts("2026-08-18T09:00:00Z"),
        },
        Notification {
            id: "ntf-02".to_string(),
            title: "Fee payment window open".to_string(),
            message: "Semester 5 fee payment closes on August 1. Late payments carry a fine."
                .to_string(),
            read: false,
            created_at: super::ts("2026-07-15T08:30:00Z"),
        },
        Notification {
            id: "ntf-03".to_string(),
            title: "Campus placement drive".to_string(),
            message: "Pre-placement talks for final-year students start next Monday.".to_string(),
            read: true,
            created_at: super::ts("2026-07-28T13:10:00Z"),
        },
        Notification {
            id: "ntf-04".to_string(),
            title: "Library book due".to_string(),
            message: "One or more borrowed books are due this week.".to_string(),
            read: true,
            created_at: super::ts("2026-08-05T07:45:00Z"),
        },
    ]
}
