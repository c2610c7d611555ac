use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use slateport_core::{Listing, PortalError};
use slateport_models::courses::{Course, CourseFilter, CoursePayload, CreateCourseDto};

use crate::client::ApiClient;
use crate::fixtures;

pub struct CourseService;

impl CourseService {
    /// `GET /courses`
    #[instrument(skip(client))]
    pub async fn list(
        client: &ApiClient,
        filter: &CourseFilter,
    ) -> Result<Listing<Course>, PortalError> {
        client
            .fetch_list(
                "courses",
                "/courses",
                &filter.to_query(),
                Course::from_payload,
                fixtures::courses::sample,
            )
            .await
    }

    /// `POST /courses`
    ///
    /// Admin only. Mock sessions synthesize the created course locally.
    #[instrument(skip(client, dto))]
    pub async fn create(client: &ApiClient, dto: CreateCourseDto) -> Result<Course, PortalError> {
        dto.validate()
            .map_err(|errors| PortalError::validation(&errors))?;
        if !client.sessions().is_admin() {
            return Err(PortalError::forbidden(
                "creating courses requires an admin session",
            ));
        }

        if client.mock_mode() {
            let course = Course {
                id: format!("crs-{}", Uuid::new_v4()),
                code: Some(dto.code),
                name: dto.name,
                department: dto.department,
                semester: dto.semester,
                credits: dto.credits,
                teacher_name: None,
            };
            info!(course = %course.name, "mock session, synthesized course");
            return Ok(course);
        }

        let payload: CoursePayload = client.post("course", "/courses", &dto).await?;
        Ok(Course::from_payload(payload))
    }
}
