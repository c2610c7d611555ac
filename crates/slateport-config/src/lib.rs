//! # Slateport Config
//!
//! Configuration types for the Slateport client.
//!
//! This crate provides configuration structures loaded from environment
//! variables:
//!
//! - [`api`]: Backend base URL and HTTP timeout
//! - [`storage`]: Location of the persisted session state file
//!
//! # Example
//!
//! ```ignore
//! use slateport_config::{ApiConfig, StorageConfig};
//!
//! // Load all configs from environment
//! let api_config = ApiConfig::from_env();
//! let storage_config = StorageConfig::from_env();
//! ```

pub mod api;
pub mod storage;

// Re-export commonly used types at crate root
pub use api::ApiConfig;
pub use storage::StorageConfig;
