use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use slateport_core::{Listing, PortalError};
use slateport_models::requests::{
    CreateRequestDto, RequestPayload, RequestStatus, ServiceRequest,
};

use crate::client::ApiClient;
use crate::fixtures;

pub struct RequestService;

impl RequestService {
    /// `GET /requests`
    #[instrument(skip(client))]
    pub async fn list(client: &ApiClient) -> Result<Listing<ServiceRequest>, PortalError> {
        client
            .fetch_list(
                "requests",
                "/requests",
                &[],
                ServiceRequest::from_payload,
                fixtures::requests::sample,
            )
            .await
    }

    /// `POST /requests`
    ///
    /// Mock sessions synthesize the filed request locally, signed by
    /// the session user.
    #[instrument(skip(client, dto))]
    pub async fn create(
        client: &ApiClient,
        dto: CreateRequestDto,
    ) -> Result<ServiceRequest, PortalError> {
        dto.validate()
            .map_err(|errors| PortalError::validation(&errors))?;

        if client.mock_mode() {
            let request = ServiceRequest {
                id: format!("req-{}", Uuid::new_v4()),
                title: dto.title,
                details: dto.details,
                status: RequestStatus::Pending,
                requester_name: client.sessions().user().map(|user| user.full_name),
                created_at: Some(Utc::now()),
                resolved_at: None,
            };
            info!(title = %request.title, "mock session, synthesized request");
            return Ok(request);
        }

        let payload: RequestPayload = client.post("request", "/requests", &dto).await?;
        Ok(ServiceRequest::from_payload(payload))
    }

    /// `POST /requests/{id}/approve`
    pub async fn approve(client: &ApiClient, id: &str) -> Result<ServiceRequest, PortalError> {
        Self::resolve(client, id, RequestStatus::Approved, "approve").await
    }

    /// `POST /requests/{id}/reject`
    pub async fn reject(client: &ApiClient, id: &str) -> Result<ServiceRequest, PortalError> {
        Self::resolve(client, id, RequestStatus::Rejected, "reject").await
    }

    /// Admin only. Mock sessions retag the matching sample request, or
    /// a bare one when the id is unknown.
    #[instrument(skip(client))]
    async fn resolve(
        client: &ApiClient,
        id: &str,
        status: RequestStatus,
        action: &str,
    ) -> Result<ServiceRequest, PortalError> {
        if !client.sessions().is_admin() {
            return Err(PortalError::forbidden(
                "resolving requests requires an admin session",
            ));
        }

        if client.mock_mode() {
            let mut request = fixtures::requests::sample()
                .into_iter()
                .find(|request| request.id == id)
                .unwrap_or(ServiceRequest {
                    id: id.to_string(),
                    title: String::new(),
                    details: String::new(),
                    status: RequestStatus::Pending,
                    requester_name: None,
                    created_at: None,
                    resolved_at: None,
                });
            request.status = status;
            request.resolved_at = Some(Utc::now());
            info!(id, ?status, "mock session, request resolved locally");
            return Ok(request);
        }

        let path = format!("/requests/{id}/{action}");
        let payload: RequestPayload = client.post("request", &path, &serde_json::json!({})).await?;
        Ok(ServiceRequest::from_payload(payload))
    }
}
