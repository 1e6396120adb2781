//! 作业存储操作

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::Assignment;

impl MemoryStorage {
    /// 通过ID获取作业
    pub fn get_assignment_by_id_impl(&self, id: Uuid) -> Result<Option<Assignment>> {
        Ok(self.assignments.borrow().get(&id).cloned())
    }

    /// 列出课程下的作业
    pub fn list_assignments_by_course_impl(&self, course_id: Uuid) -> Result<Vec<Assignment>> {
        let mut list: Vec<Assignment> = self
            .assignments
            .borrow()
            .values()
            .filter(|a| a.course_id() == course_id)
            .cloned()
            .collect();
        list.sort_by_key(|a| (a.created_at(), a.id()));
        Ok(list)
    }

    /// 列出未到截止时间的作业，按截止时间升序
    pub fn list_upcoming_assignments_impl(
        &self,
        course_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<Assignment>> {
        let mut list: Vec<Assignment> = self
            .list_assignments_by_course_impl(course_id)?
            .into_iter()
            .filter(|a| a.due_date() > now)
            .collect();
        list.sort_by_key(|a| a.due_date());
        Ok(list)
    }

    /// 保存作业
    pub fn save_assignment_impl(&self, assignment: &Assignment) -> Result<()> {
        self.assignments
            .borrow_mut()
            .insert(assignment.id(), assignment.clone());
        Ok(())
    }
}
