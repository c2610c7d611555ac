use tracing::instrument;

use slateport_core::{Listing, PortalError};
use slateport_models::teachers::{Teacher, TeacherFilter};

use crate::client::ApiClient;
use crate::fixtures;

pub struct TeacherService;

impl TeacherService {
    /// `GET /teachers`
    #[instrument(skip(client))]
    pub async fn list(
        client: &ApiClient,
        filter: &TeacherFilter,
    ) -> Result<Listing<Teacher>, PortalError> {
        client
            .fetch_list(
                "teachers",
                "/teachers",
                &filter.to_query(),
                Teacher::from_payload,
                fixtures::teachers::sample,
            )
            .await
    }
}
