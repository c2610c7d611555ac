//! Async HTTP client wrapping the portal JSON API.
//!
//! [`ApiClient`] owns the request plumbing every entity service shares:
//! URL building, bearer auth from the session token, the list-fetch
//! fallback pipeline, and strict mutation calls. Services stay thin;
//! the degraded-network policy lives here in one place.

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use slateport_config::ApiConfig;
use slateport_core::{FallbackReason, ItemPayload, ListPayload, Listing, PortalError};
use slateport_models::auth::MessageResponse;
use slateport_session::SessionStore;

/// Async HTTP client for the portal JSON REST API.
///
/// Cheap to clone: the inner [`reqwest::Client`] is `Arc`-based and the
/// session store shares its state across clones.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
    sessions: SessionStore,
}

impl ApiClient {
    pub fn new(config: ApiConfig, sessions: SessionStore) -> Result<Self, PortalError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|err| PortalError::network(&config.base_url, err))?;
        Ok(Self {
            http,
            config,
            sessions,
        })
    }

    /// The session store this client reads tokens and roles from.
    #[must_use]
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Whether the session holds a mock token. In mock mode every list
    /// fetch answers from bundled sample data without touching the
    /// network, and mutations synthesize their results locally.
    #[must_use]
    pub fn mock_mode(&self) -> bool {
        self.sessions.has_mock_token()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.sessions.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Fetches a list endpoint and normalizes each row with `to_view`.
    ///
    /// Every degraded path of the portal's fetch contract funnels
    /// through here:
    ///
    /// 1. mock session: sample data, zero network calls;
    /// 2. transport failure: logged at `warn`, sample data;
    /// 3. non-success status: logged at `warn`, sample data;
    /// 4. body that is neither a bare array nor a `data` envelope:
    ///    [`PortalError::Decode`]. A reachable backend speaking an
    ///    unknown shape is a bug to surface, not an outage;
    /// 5. empty list: sample data, tagged so callers can tell;
    /// 6. rows: the live normalized list, never the fixture.
    pub async fn fetch_list<P, V>(
        &self,
        what: &'static str,
        path: &str,
        query: &[(&'static str, String)],
        to_view: fn(P) -> V,
        fixture: impl FnOnce() -> Vec<V>,
    ) -> Result<Listing<V>, PortalError>
    where
        P: DeserializeOwned,
    {
        if self.mock_mode() {
            info!(what, "mock session, serving sample data");
            return Ok(Listing::fixture(fixture(), FallbackReason::MockToken));
        }

        let url = self.url(path);
        let mut request = self.auth(self.http.get(&url));
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(what, %url, error = %err, "request failed, serving sample data");
                return Ok(Listing::fixture(fixture(), FallbackReason::Unreachable));
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(
                what,
                %url,
                status = status.as_u16(),
                "backend rejected request, serving sample data"
            );
            return Ok(Listing::fixture(fixture(), FallbackReason::ApiStatus));
        }

        let payload: ListPayload<P> = response
            .json()
            .await
            .map_err(|err| PortalError::decode(what, err))?;
        let rows = payload.into_vec();
        if rows.is_empty() {
            info!(what, "backend returned no rows, serving sample data");
            return Ok(Listing::fixture(fixture(), FallbackReason::EmptyResponse));
        }

        Ok(Listing::live(rows.into_iter().map(to_view).collect()))
    }

    /// Fetches a single object, tolerating the `data` envelope.
    ///
    /// No fixture fallback: single-object reads surface their failures
    /// and the caller decides what to render.
    pub async fn fetch_item<P, V>(
        &self,
        what: &'static str,
        path: &str,
        to_view: fn(P) -> V,
    ) -> Result<V, PortalError>
    where
        P: DeserializeOwned,
    {
        let url = self.url(path);
        let response = self
            .auth(self.http.get(&url))
            .send()
            .await
            .map_err(|err| PortalError::network(&url, err))?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::error_message(response).await;
            return Err(PortalError::api(url, status.as_u16(), message));
        }

        let payload: ItemPayload<P> = response
            .json()
            .await
            .map_err(|err| PortalError::decode(what, err))?;
        Ok(to_view(payload.into_item()))
    }

    /// POSTs a JSON body and decodes the reply, tolerating the `data`
    /// envelope.
    ///
    /// Mutations never fall back to sample data. Services skip this
    /// call entirely in mock mode and synthesize their own result.
    pub async fn post<B, P>(
        &self,
        what: &'static str,
        path: &str,
        body: &B,
    ) -> Result<P, PortalError>
    where
        B: Serialize + ?Sized,
        P: DeserializeOwned,
    {
        let url = self.url(path);
        let response = self
            .auth(self.http.post(&url).json(body))
            .send()
            .await
            .map_err(|err| PortalError::network(&url, err))?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::error_message(response).await;
            return Err(PortalError::api(url, status.as_u16(), message));
        }

        let payload: ItemPayload<P> = response
            .json()
            .await
            .map_err(|err| PortalError::decode(what, err))?;
        Ok(payload.into_item())
    }

    /// POSTs a JSON body where the reply carries nothing the client
    /// needs. Success is judged on status alone, so empty bodies are
    /// fine.
    pub async fn post_unit<B>(&self, path: &str, body: &B) -> Result<(), PortalError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        let response = self
            .auth(self.http.post(&url).json(body))
            .send()
            .await
            .map_err(|err| PortalError::network(&url, err))?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::error_message(response).await;
            return Err(PortalError::api(url, status.as_u16(), message));
        }
        Ok(())
    }

    /// Pulls a human-readable message out of an error reply. The portal
    /// backend answers errors as `{"message": "..."}`; anything else is
    /// passed through as plain text.
    async fn error_message(response: reqwest::Response) -> String {
        let text = response.text().await.unwrap_or_default();
        match serde_json::from_str::<MessageResponse>(&text) {
            Ok(body) if !body.message.is_empty() => body.message,
            _ => text,
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_base(base_url: &str) -> ApiClient {
        let config = ApiConfig::with_base_url(base_url);
        ApiClient::new(config, SessionStore::in_memory()).unwrap()
    }

    #[test]
    fn test_url_joins_path_to_base() {
        let client = client_with_base("http://localhost:5000/api");
        assert_eq!(
            client.url("/students"),
            "http://localhost:5000/api/students"
        );
    }

    #[test]
    fn test_url_tolerates_trailing_slash_in_base() {
        let client = client_with_base("http://localhost:5000/api/");
        assert_eq!(client.url("/fees"), "http://localhost:5000/api/fees");
    }

    #[test]
    fn test_mock_mode_follows_session_token() {
        let client = client_with_base("http://localhost:5000/api");
        assert!(!client.mock_mode());
        client.sessions().set_token("mock-token-demo");
        assert!(client.mock_mode());
        client.sessions().set_token("real-jwt");
        assert!(!client.mock_mode());
    }
}
