use tracing::{info, warn};
use uuid::Uuid;

use super::SubmissionService;
use crate::errors::Result;
use crate::models::{Submission, SubmissionStatus};
use crate::runtime::DomainContext;
use crate::services::assignments::load_assignment;
use crate::services::courses::load_course;
use crate::services::users::load_user;

pub fn submit(
    service: &SubmissionService,
    assignment_id: Uuid,
    student_id: Uuid,
    content: &str,
    ctx: &DomainContext<'_>,
) -> Result<Submission> {
    let storage = service.get_storage();
    let assignment = load_assignment(storage, assignment_id)?;
    let course = load_course(storage, assignment.course_id())?;
    let student = load_user(storage, student_id)?;

    // 同一学生对同一作业只能提交一次
    let existing = storage.get_submission_by_student(student_id, assignment_id)?;

    let submission = Submission::create_submission(
        &assignment,
        &course,
        &student,
        content,
        existing.as_ref(),
        ctx,
    )?;
    storage.save_submission(&submission)?;

    if submission.status() == SubmissionStatus::Late {
        warn!(
            "Late submission {} for assignment {} by {}",
            submission.id(),
            assignment.id(),
            student.id()
        );
    } else {
        info!(
            "Submission {} for assignment {} by {}",
            submission.id(),
            assignment.id(),
            student.id()
        );
    }
    Ok(submission)
}
