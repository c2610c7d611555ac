use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use slateport_core::{Listing, PortalError};
use slateport_models::grades::{GradePayload, GradeRecord, SubmitGradeDto, gpa, grade_points};

use crate::client::ApiClient;
use crate::fixtures;

pub struct GradeService;

impl GradeService {
    /// `GET /grades?studentId=...`
    #[instrument(skip(client))]
    pub async fn list(
        client: &ApiClient,
        student_id: &str,
    ) -> Result<Listing<GradeRecord>, PortalError> {
        let query = [("studentId", student_id.to_string())];
        client
            .fetch_list(
                "grades",
                "/grades",
                &query,
                GradeRecord::from_payload,
                fixtures::grades::sample,
            )
            .await
    }

    /// Fetches the transcript and computes the credit-weighted GPA.
    /// `None` means nothing gradeable came back.
    #[instrument(skip(client))]
    pub async fn gpa(client: &ApiClient, student_id: &str) -> Result<Option<f32>, PortalError> {
        let listing = Self::list(client, student_id).await?;
        Ok(gpa(&listing.items))
    }

    /// `POST /grades`
    ///
    /// Teachers and admins only. Mock sessions synthesize the recorded
    /// grade locally, resolving the course name from the sample catalog.
    #[instrument(skip(client, dto))]
    pub async fn submit(client: &ApiClient, dto: SubmitGradeDto) -> Result<GradeRecord, PortalError> {
        dto.validate()
            .map_err(|errors| PortalError::validation(&errors))?;
        let sessions = client.sessions();
        if !(sessions.is_teacher() || sessions.is_admin()) {
            return Err(PortalError::forbidden(
                "grade submission requires a teacher session",
            ));
        }

        if client.mock_mode() {
            let course_name = fixtures::courses::sample()
                .into_iter()
                .find(|course| course.id == dto.course_id)
                .map(|course| course.name)
                .unwrap_or_else(|| dto.course_id.clone());
            let record = GradeRecord {
                id: format!("grd-{}", Uuid::new_v4()),
                course_name,
                points: grade_points(&dto.grade),
                grade: dto.grade,
                credits: None,
                semester: dto.semester,
            };
            info!(student = %dto.student_id, "mock session, synthesized grade");
            return Ok(record);
        }

        let payload: GradePayload = client.post("grade", "/grades", &dto).await?;
        Ok(GradeRecord::from_payload(payload))
    }
}
