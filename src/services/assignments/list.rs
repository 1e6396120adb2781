use uuid::Uuid;

use super::AssignmentService;
use crate::errors::Result;
use crate::models::Assignment;
use crate::runtime::Clock;
use crate::services::courses::load_course;

pub fn list_by_course(service: &AssignmentService, course_id: Uuid) -> Result<Vec<Assignment>> {
    let storage = service.get_storage();
    // 课程不存在时返回 NotFound 而不是空列表
    load_course(storage, course_id)?;
    storage.list_assignments_by_course(course_id)
}

pub fn list_upcoming(
    service: &AssignmentService,
    course_id: Uuid,
    clock: &dyn Clock,
) -> Result<Vec<Assignment>> {
    let storage = service.get_storage();
    load_course(storage, course_id)?;
    storage.list_upcoming_assignments(course_id, clock.now())
}
