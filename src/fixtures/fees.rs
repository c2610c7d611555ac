//! Sample fee lines.

use chrono::NaiveDate;
use slateport_models::fees::{Fee, FeeStatus};

#[must_use]
pub fn sample() -> Vec<Fee> {
    vec![
        Fee {
            id: "fee-01".to_string(),
            title: "Semester 5 tuition".to_string(),
            amount: 45500.0,
            due_date: NaiveDate::from_ymd_opt(2026, 8, 1),
            status: FeeStatus::Pending,
            semester: Some(5),
            receipt_no: None,
            paid_at: None,
        },
        Fee {
            id: "fee-02".to_string(),
            title: "Hostel and mess".to_string(),
            amount: 28750.0,
            due_date: NaiveDate::from_ymd_opt(2026, 8, 10),
            status: FeeStatus::Pending,
            semester: Some(5),
            receipt_no: None,
            paid_at: None,
        },
        Fee {
            id: "fee-03".to_string(),
            title: "Semester 4 tuition".to_string(),
            amount: 45500.0,
            due_date: NaiveDate::from_ymd_opt(2026, 1, 5),
            status: FeeStatus::Paid,
            semester: Some(4),
            receipt_no: Some("RCPT-2026-0114".to_string()),
            paid_at: super::ts("2026-01-03T11:42:00Z"),
        },
    ]
}
