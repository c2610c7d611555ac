use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use slateport_core::{Listing, PortalError};
use slateport_models::fees::{Fee, FeeReceipt, FeeReceiptPayload, FeeStatus, PayFeeDto};

use crate::client::ApiClient;
use crate::fixtures;

pub struct FeeService;

impl FeeService {
    /// `GET /fees?studentId=...`
    #[instrument(skip(client))]
    pub async fn list(client: &ApiClient, student_id: &str) -> Result<Listing<Fee>, PortalError> {
        let query = [("studentId", student_id.to_string())];
        client
            .fetch_list(
                "fees",
                "/fees",
                &query,
                Fee::from_payload,
                fixtures::fees::sample,
            )
            .await
    }

    /// `POST /fees/{id}/pay`
    ///
    /// Mock sessions synthesize a paid receipt locally, taking the
    /// amount from the sample fee when the id matches one.
    #[instrument(skip(client, dto))]
    pub async fn pay(client: &ApiClient, dto: PayFeeDto) -> Result<FeeReceipt, PortalError> {
        dto.validate()
            .map_err(|errors| PortalError::validation(&errors))?;

        if client.mock_mode() {
            let amount = fixtures::fees::sample()
                .into_iter()
                .find(|fee| fee.id == dto.fee_id)
                .map(|fee| fee.amount)
                .unwrap_or_default();
            let receipt = FeeReceipt {
                fee_id: dto.fee_id,
                receipt_no: format!("RCPT-{}", Uuid::new_v4()),
                amount,
                status: FeeStatus::Paid,
                paid_at: Some(Utc::now()),
            };
            info!(fee = %receipt.fee_id, "mock session, synthesized payment receipt");
            return Ok(receipt);
        }

        let path = format!("/fees/{}/pay", dto.fee_id);
        let payload: FeeReceiptPayload = client.post("payment receipt", &path, &dto).await?;
        Ok(FeeReceipt::from_payload(payload))
    }
}
