//! Fee lines, payment DTO, and receipts.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use slateport_core::serde::{
    deserialize_flexible_date, deserialize_flexible_f64, deserialize_flexible_id,
    deserialize_flexible_u32,
};
use validator::Validate;

/// Payment status of a fee line.
///
/// Unrecognized status strings fall back to [`FeeStatus::Pending`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
}

impl FeeStatus {
    /// Parses a status string, falling back to [`FeeStatus::Pending`]
    /// for anything unrecognized.
    #[must_use]
    pub fn parse_lenient(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "paid" => FeeStatus::Paid,
            "overdue" => FeeStatus::Overdue,
            _ => FeeStatus::Pending,
        }
    }
}

/// A fee line, normalized for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fee {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub due_date: Option<NaiveDate>,
    pub status: FeeStatus,
    pub semester: Option<u32>,
    pub receipt_no: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
}

/// Raw fee row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeePayload {
    #[serde(alias = "_id", deserialize_with = "deserialize_flexible_id")]
    pub id: Option<String>,
    #[serde(alias = "description")]
    pub title: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_f64")]
    pub amount: Option<f64>,
    #[serde(deserialize_with = "deserialize_flexible_date")]
    pub due_date: Option<NaiveDate>,
    pub status: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_u32")]
    pub semester: Option<u32>,
    #[serde(alias = "receiptNumber")]
    pub receipt_no: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
}

impl Fee {
    /// Flattens a raw row. A missing amount becomes zero.
    #[must_use]
    pub fn from_payload(payload: FeePayload) -> Self {
        Self {
            id: payload.id.unwrap_or_default(),
            title: payload.title.unwrap_or_default(),
            amount: payload.amount.unwrap_or_default(),
            due_date: payload.due_date,
            status: payload
                .status
                .as_deref()
                .map(FeeStatus::parse_lenient)
                .unwrap_or_default(),
            semester: payload.semester,
            receipt_no: payload.receipt_no,
            paid_at: payload.paid_at,
        }
    }
}

/// DTO for paying a fee.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PayFeeDto {
    #[validate(length(min = 1, message = "Fee id is required"))]
    pub fee_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

/// Confirmation returned after a successful payment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeReceipt {
    pub fee_id: String,
    pub receipt_no: String,
    pub amount: f64,
    pub status: FeeStatus,
    pub paid_at: Option<DateTime<Utc>>,
}

/// Raw payment confirmation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeeReceiptPayload {
    #[serde(deserialize_with = "deserialize_flexible_id")]
    pub fee_id: Option<String>,
    #[serde(alias = "receiptNumber")]
    pub receipt_no: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_f64")]
    pub amount: Option<f64>,
    pub status: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
}

impl FeeReceipt {
    /// Flattens a raw confirmation. A missing status is read as paid,
    /// since the backend only confirms successful payments.
    #[must_use]
    pub fn from_payload(payload: FeeReceiptPayload) -> Self {
        Self {
            fee_id: payload.fee_id.unwrap_or_default(),
            receipt_no: payload.receipt_no.unwrap_or_default(),
            amount: payload.amount.unwrap_or_default(),
            status: payload
                .status
                .as_deref()
                .map(FeeStatus::parse_lenient)
                .unwrap_or(FeeStatus::Paid),
            paid_at: payload.paid_at,
        }
    }
}
