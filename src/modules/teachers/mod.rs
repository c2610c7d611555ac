pub mod service;

pub use service::TeacherService;
