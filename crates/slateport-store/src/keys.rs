//! Well-known keys for persisted session state.
//!
//! The key names match what the portal has always written, so state
//! persisted by older client builds keeps hydrating after an upgrade.

/// Bearer token for authenticated requests.
pub const TOKEN: &str = "token";

/// The signed-in user record, serialized as JSON.
pub const USER: &str = "user";

/// The active role slug (`student`, `teacher`, or `admin`).
pub const USER_ROLE: &str = "userRole";

/// Every key the client persists, in the order they are cleared on
/// logout.
pub const ALL: &[&str] = &[TOKEN, USER, USER_ROLE];
