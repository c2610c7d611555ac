use tracing::{info, instrument};

use slateport_core::{Listing, PortalError};
use slateport_models::notifications::Notification;

use crate::client::ApiClient;
use crate::fixtures;

pub struct NotificationService;

impl NotificationService {
    /// `GET /notifications`
    #[instrument(skip(client))]
    pub async fn list(client: &ApiClient) -> Result<Listing<Notification>, PortalError> {
        client
            .fetch_list(
                "notifications",
                "/notifications",
                &[],
                Notification::from_payload,
                fixtures::notifications::sample,
            )
            .await
    }

    /// `POST /notifications/{id}/read`
    ///
    /// Mock sessions acknowledge locally; re-fetching still shows the
    /// bundled rows unchanged.
    #[instrument(skip(client))]
    pub async fn mark_read(client: &ApiClient, id: &str) -> Result<(), PortalError> {
        if client.mock_mode() {
            info!(id, "mock session, notification marked read locally");
            return Ok(());
        }
        let path = format!("/notifications/{id}/read");
        client.post_unit(&path, &serde_json::json!({})).await
    }
}
