use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::extract::Request;
use axum::middleware::{self, Next};
use slateport::client::ApiClient;
use slateport::fixtures;
use slateport_config::ApiConfig;
use slateport_models::roles::Role;
use slateport_session::SessionStore;
use tokio::net::TcpListener;

/// A portal backend stand-in on an ephemeral local port.
pub struct MockBackend {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl MockBackend {
    /// Serves `router` under `/api`, counting every request that
    /// reaches it.
    pub async fn start(router: Router) -> Self {
        dotenvy::dotenv().ok();
        slateport::logging::init_logging();

        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let counting = move |req: Request, next: Next| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                next.run(req).await
            }
        };
        let app = Router::new()
            .nest("/api", router)
            .layer(middleware::from_fn(counting));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/api"),
            hits,
        }
    }

    /// How many requests reached the backend.
    #[allow(dead_code)]
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// A client with a fresh in-memory session over the given backend.
pub fn client_for(backend: &MockBackend) -> ApiClient {
    client_with_sessions(backend, SessionStore::in_memory())
}

/// A client over the given backend reusing an existing session store.
#[allow(dead_code)]
pub fn client_with_sessions(backend: &MockBackend, sessions: SessionStore) -> ApiClient {
    sessions.hydrate();
    let config = ApiConfig {
        base_url: backend.base_url.clone(),
        timeout_secs: 5,
    };
    ApiClient::new(config, sessions).unwrap()
}

/// A client pointed at a port nothing listens on.
#[allow(dead_code)]
pub fn unreachable_client() -> ApiClient {
    let sessions = SessionStore::in_memory();
    sessions.hydrate();
    let config = ApiConfig {
        base_url: "http://127.0.0.1:9/api".to_string(),
        timeout_secs: 2,
    };
    ApiClient::new(config, sessions).unwrap()
}

/// Signs the session in as `role` with a real-looking (non-mock)
/// bearer token, skipping the login round trip.
#[allow(dead_code)]
pub fn sign_in_live(client: &ApiClient, role: Role) {
    client.sessions().set_token("jwt-test-token");
    client.sessions().login(fixtures::users::mock_user(role));
}
