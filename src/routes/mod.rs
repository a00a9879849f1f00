pub mod assignments;

pub mod auth;

pub mod courses;

pub mod dashboard;

pub mod enrollments;

pub mod grades;

pub mod submissions;

pub mod system;

pub use assignments::configure_assignment_routes;
pub use auth::configure_auth_routes;
pub use courses::configure_course_routes;
pub use dashboard::configure_dashboard_routes;
pub use enrollments::configure_enrollment_routes;
pub use grades::configure_grade_routes;
pub use submissions::configure_submission_routes;
pub use system::configure_system_routes;
