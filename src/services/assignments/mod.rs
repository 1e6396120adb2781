pub mod create;
pub mod list;
pub mod stats;

use std::rc::Rc;

use uuid::Uuid;

use crate::config::AssignmentConfig;
use crate::errors::{ClassroomError, Result};
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::assignments::stats_responses::AssignmentStatistics;
use crate::models::{Assignment, User};
use crate::runtime::{Clock, DomainContext};
use crate::storage::Storage;

pub use stats::{calculate_average_grade, get_assignment_statistics, get_pending_students};

pub struct AssignmentService {
    storage: Rc<dyn Storage>,
    config: AssignmentConfig,
}

impl AssignmentService {
    pub fn new(storage: Rc<dyn Storage>, config: AssignmentConfig) -> Self {
        Self { storage, config }
    }

    pub(crate) fn get_storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    pub(crate) fn config(&self) -> &AssignmentConfig {
        &self.config
    }

    // 布置作业
    pub fn create_assignment(
        &self,
        course_id: Uuid,
        teacher_id: Uuid,
        request: CreateAssignmentRequest,
        ctx: &DomainContext<'_>,
    ) -> Result<Assignment> {
        create::create_assignment(self, course_id, teacher_id, request, ctx)
    }

    pub fn get_assignment(&self, assignment_id: Uuid) -> Result<Assignment> {
        load_assignment(self.get_storage(), assignment_id)
    }

    // 课程下全部作业
    pub fn list_by_course(&self, course_id: Uuid) -> Result<Vec<Assignment>> {
        list::list_by_course(self, course_id)
    }

    // 尚未截止的作业
    pub fn list_upcoming(&self, course_id: Uuid, clock: &dyn Clock) -> Result<Vec<Assignment>> {
        list::list_upcoming(self, course_id, clock)
    }

    // 尚未提交的学生
    pub fn pending_students(&self, assignment_id: Uuid) -> Result<Vec<User>> {
        stats::pending_students(self, assignment_id)
    }

    pub fn assignment_statistics(&self, assignment_id: Uuid) -> Result<AssignmentStatistics> {
        stats::assignment_statistics(self, assignment_id)
    }
}

/// 按 ID 读取作业，不存在时返回 NotFound
pub(crate) fn load_assignment(storage: &dyn Storage, assignment_id: Uuid) -> Result<Assignment> {
    storage
        .get_assignment_by_id(assignment_id)?
        .ok_or_else(|| ClassroomError::not_found(format!("Assignment {assignment_id} not found")))
}
