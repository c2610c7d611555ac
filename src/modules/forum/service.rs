use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use slateport_core::{Listing, PortalError};
use slateport_models::forum::{CreateForumPostDto, ForumPost, ForumPostPayload, categories};

use crate::client::ApiClient;
use crate::fixtures;

pub struct ForumService;

impl ForumService {
    /// `GET /forum[?category=...]`
    #[instrument(skip(client))]
    pub async fn list(
        client: &ApiClient,
        category: Option<&str>,
    ) -> Result<Listing<ForumPost>, PortalError> {
        let query: Vec<(&'static str, String)> = match category {
            Some(category) => vec![("category", category.to_string())],
            None => Vec::new(),
        };
        client
            .fetch_list(
                "forum posts",
                "/forum",
                &query,
                ForumPost::from_payload,
                || match category {
                    Some(category) => fixtures::forum::sample_in_category(category),
                    None => fixtures::forum::sample(),
                },
            )
            .await
    }

    /// The lost-and-found board: forum posts in the `lost-found`
    /// category.
    #[instrument(skip(client))]
    pub async fn lost_found(client: &ApiClient) -> Result<Listing<ForumPost>, PortalError> {
        Self::list(client, Some(categories::LOST_FOUND)).await
    }

    /// `POST /forum`
    ///
    /// Mock sessions synthesize the stored post locally, signed by the
    /// session user.
    #[instrument(skip(client, dto))]
    pub async fn create(
        client: &ApiClient,
        dto: CreateForumPostDto,
    ) -> Result<ForumPost, PortalError> {
        dto.validate()
            .map_err(|errors| PortalError::validation(&errors))?;

        if client.mock_mode() {
            let post = ForumPost {
                id: format!("pst-{}", Uuid::new_v4()),
                title: dto.title,
                content: dto.content,
                category: dto.category,
                author_name: client.sessions().user().map(|user| user.full_name),
                reply_count: Some(0),
                created_at: Some(Utc::now()),
            };
            info!(title = %post.title, "mock session, synthesized forum post");
            return Ok(post);
        }

        let payload: ForumPostPayload = client.post("forum post", "/forum", &dto).await?;
        Ok(ForumPost::from_payload(payload))
    }
}
