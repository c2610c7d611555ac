use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use slateport_core::PortalError;
use slateport_models::auth::{LoginRequest, LoginResponsePayload};
use slateport_models::roles::Role;
use slateport_models::users::UserRecord;
use slateport_session::{MOCK_TOKEN_PREFIX, Session};

use crate::client::ApiClient;
use crate::fixtures;

pub struct AuthService;

impl AuthService {
    /// `POST /auth/login`
    ///
    /// Validates the credentials locally, exchanges them for a bearer
    /// token, and signs the returned user into the session. The role
    /// defaults to student when the backend omits it.
    #[instrument(skip(client, dto))]
    pub async fn login(client: &ApiClient, dto: LoginRequest) -> Result<Session, PortalError> {
        dto.validate()
            .map_err(|errors| PortalError::validation(&errors))?;

        let payload: LoginResponsePayload = client.post("login", "/auth/login", &dto).await?;
        client.sessions().set_token(&payload.token);

        let user = UserRecord::from_payload(payload.user);
        info!(email = %user.email, role = %user.role, "signed in");
        Ok(client.sessions().login(user))
    }

    /// Demo bypass: signs in the bundled sample user for `role` without
    /// touching the network. The minted token carries the mock prefix,
    /// so every subsequent fetch serves sample data.
    #[instrument(skip(client))]
    pub fn login_mock(client: &ApiClient, role: Role) -> Session {
        let token = format!("{MOCK_TOKEN_PREFIX}{}", Uuid::new_v4());
        client.sessions().set_token(&token);
        info!(%role, "mock sign-in");
        client.sessions().login(fixtures::users::mock_user(role))
    }

    /// Clears the session and every persisted key. Idempotent.
    #[instrument(skip(client))]
    pub fn logout(client: &ApiClient) {
        client.sessions().logout();
    }

    /// `GET /auth/me`
    ///
    /// Re-reads the signed-in user's profile and refreshes the session
    /// record. Mock sessions keep their bundled user.
    #[instrument(skip(client))]
    pub async fn refresh_profile(client: &ApiClient) -> Result<Session, PortalError> {
        if client.mock_mode() {
            return Ok(client.sessions().snapshot());
        }
        let user = client
            .fetch_item("profile", "/auth/me", UserRecord::from_payload)
            .await?;
        Ok(client.sessions().login(user))
    }
}
