use tracing::info;
use uuid::Uuid;

use super::{SubmissionService, load_submission};
use crate::errors::Result;
use crate::models::Submission;
use crate::runtime::DomainContext;
use crate::services::assignments::load_assignment;
use crate::services::courses::load_course;
use crate::services::users::load_user;

pub fn grade(
    service: &SubmissionService,
    submission_id: Uuid,
    teacher_id: Uuid,
    points: f64,
    feedback: &str,
    ctx: &DomainContext<'_>,
) -> Result<Submission> {
    let storage = service.get_storage();
    let mut submission = load_submission(storage, submission_id)?;
    let assignment = load_assignment(storage, submission.assignment_id())?;
    let course = load_course(storage, assignment.course_id())?;
    let teacher = load_user(storage, teacher_id)?;

    submission.add_grade(&assignment, &course, &teacher, points, feedback, ctx)?;
    storage.save_submission(&submission)?;

    if let Some(grade) = submission.grade() {
        info!(
            "Submission {} graded {} by {}",
            submission.id(),
            grade,
            teacher.id()
        );
    }
    Ok(submission)
}
