pub mod grade;
pub mod submit;

use std::rc::Rc;

use uuid::Uuid;

use crate::errors::{ClassroomError, Result};
use crate::models::Submission;
use crate::runtime::DomainContext;
use crate::services::assignments::{calculate_average_grade, load_assignment};
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Rc<dyn Storage>,
}

impl SubmissionService {
    pub fn new(storage: Rc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    // 学生提交作业
    pub fn submit(
        &self,
        assignment_id: Uuid,
        student_id: Uuid,
        content: &str,
        ctx: &DomainContext<'_>,
    ) -> Result<Submission> {
        submit::submit(self, assignment_id, student_id, content, ctx)
    }

    // 教师评分
    pub fn grade(
        &self,
        submission_id: Uuid,
        teacher_id: Uuid,
        points: f64,
        feedback: &str,
        ctx: &DomainContext<'_>,
    ) -> Result<Submission> {
        grade::grade(self, submission_id, teacher_id, points, feedback, ctx)
    }

    pub fn get_submission(&self, submission_id: Uuid) -> Result<Submission> {
        load_submission(self.get_storage(), submission_id)
    }

    // 列出作业的全部提交
    pub fn list_by_assignment(&self, assignment_id: Uuid) -> Result<Vec<Submission>> {
        let storage = self.get_storage();
        load_assignment(storage, assignment_id)?;
        storage.list_submissions_by_assignment(assignment_id)
    }

    // 待评分的提交
    pub fn list_ungraded(&self, assignment_id: Uuid) -> Result<Vec<Submission>> {
        let storage = self.get_storage();
        load_assignment(storage, assignment_id)?;
        storage.list_ungraded_submissions(assignment_id)
    }

    // 作业平均分（百分制）
    pub fn average_grade(&self, assignment_id: Uuid) -> Result<Option<f64>> {
        let submissions = self.list_by_assignment(assignment_id)?;
        Ok(calculate_average_grade(&submissions))
    }
}

/// 按 ID 读取提交，不存在时返回 NotFound
pub(crate) fn load_submission(storage: &dyn Storage, submission_id: Uuid) -> Result<Submission> {
    storage
        .get_submission_by_id(submission_id)?
        .ok_or_else(|| ClassroomError::not_found(format!("Submission {submission_id} not found")))
}
