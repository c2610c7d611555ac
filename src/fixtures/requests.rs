//! Sample service requests.

use slateport_models::requests::{RequestStatus, ServiceRequest};

#[must_use]
pub fn sample() -> Vec<ServiceRequest> {
    vec![
        ServiceRequest {
            id: "req-01".to_string(),
            title: "Bonafide certificate".to_string(),
            details: "Needed for an education loan application at the bank.".to_string(),
            status: RequestStatus::Pending,
            requester_name: Some("Asha Rao".to_string()),
            created_at: super::ts("2026-08-14T10:25:00Z"),
            resolved_at: None,
        },
        ServiceRequest {
            id: "req-02".to_string(),
            title: "Hostel room change".to_string(),
            details: "Requesting a move to block C; current room is next to the generator."
                .to_string(),
            status: RequestStatus::Approved,
            requester_name: Some("Dev Patel".to_string()),
            created_at: super::ts("2026-07-30T15:00:00Z"),
            resolved_at: super::ts("2026-08-04T11:30:00Z"),
        },
        ServiceRequest {
            id: "req-03".to_string(),
            title: "Duplicate ID card".to_string(),
            details: "Original reported lost twice this semester.".to_string(),
            status: RequestStatus::Rejected,
            requester_name: Some("Rohan Mehta".to_string()),
            created_at: super::ts("2026-07-22T09:05:00Z"),
            resolved_at: super::ts("2026-07-25T16:40:00Z"),
        },
    ]
}
