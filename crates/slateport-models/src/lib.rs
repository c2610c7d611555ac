//! # Slateport Models
//!
//! Domain models, wire payloads, and DTOs for the Slateport client.
//!
//! Each entity module pairs a normalized view type with the raw
//! `*Payload` type the backend actually returns. Payload types tolerate
//! the shape variance of the portal backend (string or numeric ids,
//! inline or nested user fields, missing optionals); `from_payload`
//! constructors collapse that variance into one typed representation.
//!
//! # Modules
//!
//! - [`auth`]: Login request/response models
//! - [`roles`]: The portal role slugs
//! - [`users`]: The signed-in user record and role profiles
//! - [`students`], [`teachers`]: Directory rows
//! - [`courses`]: Course catalog rows and the course creation DTO
//! - [`timetable`]: Class schedule entries and weekday grouping
//! - [`grades`]: Grade records and GPA computation
//! - [`fees`]: Fee lines, payment DTO, and receipts
//! - [`feedback`], [`forum`], [`notifications`], [`requests`]:
//!   Remaining portal collections and their submission DTOs
//!
//! # Example
//!
//! ```ignore
//! use slateport_models::students::{Student, StudentPayload};
//! use slateport_models::roles::Role;
//!
//! let payload: StudentPayload = serde_json::from_str(body)?;
//! let student = Student::from_payload(payload);
//! assert_eq!(Role::parse_lenient("STUDENT"), Role::Student);
//! ```

pub mod auth;
pub mod courses;
pub mod feedback;
pub mod fees;
pub mod forum;
pub mod grades;
pub mod notifications;
pub mod requests;
pub mod roles;
pub mod students;
pub mod teachers;
pub mod timetable;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{LoginRequest, LoginResponsePayload, MessageResponse};

pub use roles::Role;

pub use users::{RoleProfile, StudentProfile, TeacherProfile, UserPayload, UserRecord};

pub use students::{Student, StudentFilter, StudentPayload};

pub use teachers::{Teacher, TeacherFilter, TeacherPayload};

pub use courses::{Course, CourseFilter, CoursePayload, CreateCourseDto};

pub use timetable::{
    DayGroup, DayOfWeek, TimetableEntry, TimetableFilter, TimetablePayload, WeekTimetable,
    group_by_day,
};

pub use grades::{GradeRecord, GradePayload, SubmitGradeDto, gpa, grade_points};

pub use fees::{Fee, FeePayload, FeeReceipt, FeeReceiptPayload, FeeStatus, PayFeeDto};

pub use feedback::{CreateFeedbackDto, Feedback, FeedbackPayload};

pub use forum::{CreateForumPostDto, ForumPost, ForumPostPayload};

pub use notifications::{Notification, NotificationPayload};

pub use requests::{CreateRequestDto, RequestPayload, RequestStatus, ServiceRequest};
