use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use slateport_core::{Listing, PortalError};
use slateport_models::feedback::{CreateFeedbackDto, Feedback, FeedbackPayload};

use crate::client::ApiClient;
use crate::fixtures;

pub struct FeedbackService;

impl FeedbackService {
    /// `GET /feedback`
    #[instrument(skip(client))]
    pub async fn list(client: &ApiClient) -> Result<Listing<Feedback>, PortalError> {
        client
            .fetch_list(
                "feedback",
                "/feedback",
                &[],
                Feedback::from_payload,
                fixtures::feedback::sample,
            )
            .await
    }

    /// `POST /feedback`
    ///
    /// Mock sessions synthesize the stored entry locally, signed by the
    /// session user.
    #[instrument(skip(client, dto))]
    pub async fn submit(client: &ApiClient, dto: CreateFeedbackDto) -> Result<Feedback, PortalError> {
        dto.validate()
            .map_err(|errors| PortalError::validation(&errors))?;

        if client.mock_mode() {
            let entry = Feedback {
                id: format!("fbk-{}", Uuid::new_v4()),
                subject: dto.subject,
                message: dto.message,
                category: dto.category,
                rating: dto.rating,
                author_name: client.sessions().user().map(|user| user.full_name),
                created_at: Some(Utc::now()),
            };
            info!(subject = %entry.subject, "mock session, synthesized feedback entry");
            return Ok(entry);
        }

        let payload: FeedbackPayload = client.post("feedback", "/feedback", &dto).await?;
        Ok(Feedback::from_payload(payload))
    }
}
