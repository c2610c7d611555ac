use tracing::instrument;

use slateport_core::{Listing, PortalError};
use slateport_models::students::{Student, StudentFilter};

use crate::client::ApiClient;
use crate::fixtures;

pub struct StudentService;

impl StudentService {
    /// `GET /students`
    #[instrument(skip(client))]
    pub async fn list(
        client: &ApiClient,
        filter: &StudentFilter,
    ) -> Result<Listing<Student>, PortalError> {
        client
            .fetch_list(
                "students",
                "/students",
                &filter.to_query(),
                Student::from_payload,
                fixtures::students::sample,
            )
            .await
    }
}
