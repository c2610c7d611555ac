//! # Slateport Session
//!
//! Session state, persistence, and route guarding for the Slateport
//! client.
//!
//! This crate provides:
//!
//! - [`Session`]: the current authentication state (user, active role,
//!   hydration flag)
//! - [`SessionStore`]: the shared handle that mutates session state and
//!   keeps it persisted through a [`KeyValueStore`]
//! - [`guard`]: role-based route access decisions
//!
//! # Persistence model
//!
//! The store persists three keys: the bearer token, the user record as
//! JSON, and the active role slug. Reads tolerate anything: missing
//! keys, malformed user JSON, and unrecognized role slugs all hydrate
//! to a sane state (anonymous user, student role) with a warning rather
//! than an error. Persistence failures on write are logged and the
//! in-memory session keeps going, so a broken state file degrades the
//! experience instead of breaking it.
//!
//! # Example
//!
//! ```ignore
//! use slateport_session::SessionStore;
//!
//! let sessions = SessionStore::in_memory();
//! let session = sessions.hydrate();
//! assert!(!session.loading);
//! assert!(!sessions.is_authenticated());
//! ```

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::warn;

use slateport_models::roles::Role;
use slateport_models::users::{UserPayload, UserRecord};
use slateport_store::{KeyValueStore, MemoryStore, keys};

pub mod guard;

pub use guard::{RouteAccess, check_route, dashboard_path};

/// Prefix marking a locally issued token.
///
/// A session holding a token with this prefix belongs to a mock login;
/// data services recognize it and serve bundled sample data without
/// touching the network.
pub const MOCK_TOKEN_PREFIX: &str = "mock-token-";

/// The current authentication state.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// The signed-in user, if any.
    pub user: Option<UserRecord>,
    /// The active role. Authoritative for access decisions; it may be
    /// switched at runtime without touching `user`.
    pub role: Role,
    /// True until the first hydration from persistent storage finishes.
    pub loading: bool,
}

impl Session {
    /// A settled, signed-out session.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            user: None,
            role: Role::default(),
            loading: false,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Shared handle over the current session.
///
/// Clones share the same state and storage. All methods take `&self`;
/// reads and writes are internally synchronized.
#[derive(Clone)]
pub struct SessionStore {
    state: Arc<RwLock<Session>>,
    storage: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    /// Creates a store over the given persistent storage.
    ///
    /// The session starts in the loading state; call [`hydrate`] to
    /// settle it from whatever the storage holds.
    ///
    /// [`hydrate`]: SessionStore::hydrate
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            state: Arc::new(RwLock::new(Session {
                user: None,
                role: Role::default(),
                loading: true,
            })),
            storage,
        }
    }

    /// Creates a store over a fresh [`MemoryStore`], for tests and
    /// ephemeral sessions.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    fn state(&self) -> RwLockReadGuard<'_, Session> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn state_mut(&self) -> RwLockWriteGuard<'_, Session> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(err) = self.storage.set(key, value) {
            warn!(key, error = %err, "failed to persist session state");
        }
    }

    /// Settles the session from persistent storage.
    ///
    /// Missing keys hydrate to an anonymous student session. A
    /// malformed user record or unrecognized role slug is logged and
    /// ignored, never surfaced. The stored user JSON is decoded through
    /// [`UserPayload`], so records written by older client builds (raw
    /// backend user objects) hydrate as well.
    pub fn hydrate(&self) -> Session {
        let role = match self.storage.get(keys::USER_ROLE) {
            Ok(Some(slug)) => match slug.parse::<Role>() {
                Ok(role) => role,
                Err(err) => {
                    warn!(error = %err, "persisted role is unrecognized; defaulting to student");
                    Role::default()
                }
            },
            Ok(None) => Role::default(),
            Err(err) => {
                warn!(error = %err, "failed to read persisted role");
                Role::default()
            }
        };

        let user = match self.storage.get(keys::USER) {
            Ok(Some(json)) => match serde_json::from_str::<UserPayload>(&json) {
                Ok(payload) => Some(UserRecord::from_payload(payload)),
                Err(err) => {
                    warn!(error = %err, "persisted user record is malformed; ignoring it");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!(error = %err, "failed to read persisted user record");
                None
            }
        };

        let session = Session {
            user,
            role,
            loading: false,
        };
        *self.state_mut() = session.clone();
        session
    }

    /// Signs a user in: persists the record and its role, then settles
    /// the in-memory session on them.
    pub fn login(&self, user: UserRecord) -> Session {
        match serde_json::to_string(&user) {
            Ok(json) => self.persist(keys::USER, &json),
            Err(err) => warn!(error = %err, "failed to serialize user record"),
        }
        self.persist(keys::USER_ROLE, user.role.as_str());

        let session = Session {
            role: user.role,
            user: Some(user),
            loading: false,
        };
        *self.state_mut() = session.clone();
        session
    }

    /// Signs out: clears every persisted key and resets the session to
    /// anonymous. Safe to call repeatedly.
    pub fn logout(&self) {
        for key in keys::ALL {
            if let Err(err) = self.storage.remove(key) {
                warn!(key, error = %err, "failed to clear persisted session state");
            }
        }
        *self.state_mut() = Session::anonymous();
    }

    /// Switches the active role and retags the signed-in user record,
    /// in memory and in storage.
    ///
    /// Demo facility, not an authorization change. The role-specific
    /// profile payload is left as-is; rehydration keeps only the
    /// profile group the new role allows.
    pub fn update_role(&self, role: Role) {
        self.persist(keys::USER_ROLE, role.as_str());
        let mut state = self.state_mut();
        state.role = role;
        if let Some(user) = state.user.as_mut() {
            user.role = role;
            match serde_json::to_string(user) {
                Ok(json) => self.persist(keys::USER, &json),
                Err(err) => warn!(error = %err, "failed to serialize user record"),
            }
        }
    }

    /// Stores the bearer token.
    pub fn set_token(&self, token: &str) {
        self.persist(keys::TOKEN, token);
    }

    /// The persisted bearer token, if any. Storage is the source of
    /// truth; read failures are logged and read as signed out.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        match self.storage.get(keys::TOKEN) {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "failed to read persisted token");
                None
            }
        }
    }

    /// Whether the session holds a locally issued mock token.
    #[must_use]
    pub fn has_mock_token(&self) -> bool {
        self.token()
            .is_some_and(|token| token.starts_with(MOCK_TOKEN_PREFIX))
    }

    /// A copy of the current session state.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.state().clone()
    }

    #[must_use]
    pub fn user(&self) -> Option<UserRecord> {
        self.state().user.clone()
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.state().role
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    #[must_use]
    pub fn is_student(&self) -> bool {
        self.role() == Role::Student
    }

    #[must_use]
    pub fn is_teacher(&self) -> bool {
        self.role() == Role::Teacher
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role() == Role::Admin
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &*self.state())
            .finish_non_exhaustive()
    }
}
