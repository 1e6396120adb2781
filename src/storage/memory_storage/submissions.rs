//! 提交存储操作

use uuid::Uuid;

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::Submission;

impl MemoryStorage {
    fn collect_submissions<F>(&self, predicate: F) -> Vec<Submission>
    where
        F: Fn(&Submission) -> bool,
    {
        let mut list: Vec<Submission> = self
            .submissions
            .borrow()
            .values()
            .filter(|s| predicate(s))
            .cloned()
            .collect();
        list.sort_by_key(|s| (s.submitted_at(), s.id()));
        list
    }

    /// 通过ID获取提交
    pub fn get_submission_by_id_impl(&self, id: Uuid) -> Result<Option<Submission>> {
        Ok(self.submissions.borrow().get(&id).cloned())
    }

    /// 列出作业的全部提交
    pub fn list_submissions_by_assignment_impl(
        &self,
        assignment_id: Uuid,
    ) -> Result<Vec<Submission>> {
        Ok(self.collect_submissions(|s| s.assignment_id() == assignment_id))
    }

    /// 获取学生对作业的提交
    pub fn get_submission_by_student_impl(
        &self,
        student_id: Uuid,
        assignment_id: Uuid,
    ) -> Result<Option<Submission>> {
        Ok(self
            .submissions
            .borrow()
            .values()
            .find(|s| s.assignment_id() == assignment_id && s.student().id() == student_id)
            .cloned())
    }

    /// 列出未评分的提交
    pub fn list_ungraded_submissions_impl(&self, assignment_id: Uuid) -> Result<Vec<Submission>> {
        Ok(self.collect_submissions(|s| s.assignment_id() == assignment_id && !s.is_graded()))
    }

    /// 保存提交
    pub fn save_submission_impl(&self, submission: &Submission) -> Result<()> {
        self.submissions
            .borrow_mut()
            .insert(submission.id(), submission.clone());
        Ok(())
    }
}
