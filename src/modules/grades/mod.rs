//! Transcript reads, GPA, and grade submission.

pub mod service;

pub use service::GradeService;
