//! Forum board, which doubles as the lost-and-found screen.

pub mod service;

pub use service::ForumService;
