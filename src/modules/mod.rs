pub mod auth;
pub mod courses;
pub mod feedback;
pub mod fees;
pub mod forum;
pub mod grades;
pub mod notifications;
pub mod requests;
pub mod students;
pub mod teachers;
pub mod timetable;

pub use self::auth::service::AuthService;
pub use self::courses::service::CourseService;
pub use self::feedback::service::FeedbackService;
pub use self::fees::service::FeeService;
pub use self::forum::service::ForumService;
pub use self::grades::service::GradeService;
pub use self::notifications::service::NotificationService;
pub use self::requests::service::RequestService;
pub use self::students::service::StudentService;
pub use self::teachers::service::TeacherService;
pub use self::timetable::service::TimetableService;
