//! # Slateport
//!
//! The typed client core of the Slateport academic portal: session and
//! role state, plus a data layer that normalizes the portal backend's
//! inconsistent REST responses into flat view models.
//!
//! ## Overview
//!
//! Slateport backs portal shells (native, TUI, or WASM) with:
//!
//! - **Sessions**: login, logout, role switching, and persistence of
//!   the signed-in user across restarts
//! - **Role gating**: client-side route access decisions per role
//! - **Tolerant decoding**: list endpoints may answer with a bare array
//!   or a `{"data": [...]}` envelope, and profile fields may arrive
//!   nested or inline; both decode to the same view models
//! - **Fixture fallback**: when the backend is unreachable, rejects a
//!   request, or returns nothing, screens still render bundled sample
//!   data, tagged as such
//! - **Mock sessions**: a `mock-token-` bearer token serves the whole
//!   portal from sample data with zero network calls
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── slateport-core      # error taxonomy, listing envelope, wire helpers
//! ├── slateport-config    # env-based configuration
//! ├── slateport-store     # persisted key-value state (memory, file)
//! ├── slateport-session   # session state and role guard
//! └── slateport-models    # view models, payloads, DTOs
//! src/
//! ├── client.rs           # HTTP client and the fetch/fallback pipeline
//! ├── modules/            # one service per screen
//! └── fixtures/           # bundled sample data
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: module exports
//! - `service.rs`: fetch and mutation operations
//!
//! ## Roles
//!
//! | Role | Dashboard | Writes |
//! |------|-----------|--------|
//! | Student | `/student/dashboard` | feedback, forum posts, requests, fee payments |
//! | Teacher | `/teacher/dashboard` | grades |
//! | Admin | `/admin/dashboard` | courses, request resolution |
//!
//! The active role gates screens client-side only; the backend enforces
//! the real rules.
//!
//! ## Quick Start
//!
//! ```no_run
//! use slateport::client::ApiClient;
//! use slateport::modules::{AuthService, StudentService};
//! use slateport_config::ApiConfig;
//! use slateport_models::roles::Role;
//! use slateport_models::students::StudentFilter;
//! use slateport_session::SessionStore;
//!
//! # async fn demo() -> Result<(), slateport_core::PortalError> {
//! let sessions = SessionStore::in_memory();
//! sessions.hydrate();
//!
//! let client = ApiClient::new(ApiConfig::from_env(), sessions)?;
//! AuthService::login_mock(&client, Role::Student);
//!
//! let students = StudentService::list(&client, &StudentFilter::default()).await?;
//! println!("{} students from {:?}", students.len(), students.source);
//! # Ok(())
//! # }
//! ```
//!
//! ### Environment Variables
//!
//! ```bash
//! SLATEPORT_API_BASE_URL=http://localhost:5000/api
//! SLATEPORT_HTTP_TIMEOUT_SECS=30
//! SLATEPORT_STATE_FILE=/home/user/.local/share/slateport/state.json
//! ```
//!
//! ## Modules
//!
//! - [`client`]: HTTP client wrapping the portal REST API
//! - [`fixtures`]: bundled sample data
//! - [`logging`]: console logging setup
//! - [`modules`]: per-screen services (auth, students, fees, ...)

pub mod client;
pub mod fixtures;
pub mod logging;
pub mod modules;

// Re-export workspace crates for convenience
pub use slateport_config;
pub use slateport_core;
pub use slateport_models;
pub use slateport_session;
pub use slateport_store;
