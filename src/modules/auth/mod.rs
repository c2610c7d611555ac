//! Authentication flow: real backend login, demo mock login, logout.

pub mod service;

pub use service::AuthService;
