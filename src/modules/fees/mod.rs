pub mod service;

pub use service::FeeService;
