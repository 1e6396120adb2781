pub mod assignments;
pub mod common;
pub mod courses;
pub mod enrollments;
pub mod submissions;
pub mod users;

pub use assignments::entities::Assignment;
pub use common::{AccessCode, Grade};
pub use courses::content::{Announcement, ContentVisibility, CourseContent, Material};
pub use courses::entities::{Course, CourseStatus};
pub use enrollments::entities::{CourseRole, Enrollment};
pub use submissions::entities::{Submission, SubmissionStatus};
pub use users::entities::User;
