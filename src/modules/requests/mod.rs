//! Student service requests: filing and admin resolution.

pub mod service;

pub use service::RequestService;
