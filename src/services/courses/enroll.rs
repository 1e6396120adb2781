use tracing::info;
use uuid::Uuid;

use super::{CourseService, bulk_enroll_students, load_course};
use crate::errors::{ClassroomError, Result};
use crate::models::Enrollment;
use crate::models::courses::responses::BulkEnrollReport;
use crate::runtime::DomainContext;
use crate::services::users::load_user;

pub fn enroll_student(
    service: &CourseService,
    student_id: Uuid,
    access_code: &str,
    ctx: &DomainContext<'_>,
) -> Result<Enrollment> {
    let storage = service.get_storage();
    let student = load_user(storage, student_id)?;

    // 通过访问码定位课程
    let mut course = storage
        .get_course_by_access_code(access_code)?
        .ok_or_else(|| {
            ClassroomError::not_found(format!("Course with code {access_code} not found"))
        })?;

    let enrollment = course.enroll_student(&student, access_code, ctx)?;
    storage.save_course(&course)?;

    info!("Student {} joined course {}", student.id(), course.id());
    Ok(enrollment)
}

pub fn add_teacher(
    service: &CourseService,
    course_id: Uuid,
    teacher_id: Uuid,
    ctx: &DomainContext<'_>,
) -> Result<Enrollment> {
    let storage = service.get_storage();
    let mut course = load_course(storage, course_id)?;
    let teacher = load_user(storage, teacher_id)?;

    let enrollment = course.add_teacher(&teacher, ctx)?;
    storage.save_course(&course)?;

    info!("Teacher {} added to course {}", teacher.id(), course.id());
    Ok(enrollment)
}

pub fn bulk_enroll(
    service: &CourseService,
    course_id: Uuid,
    student_ids: &[Uuid],
    access_code: &str,
    ctx: &DomainContext<'_>,
) -> Result<BulkEnrollReport> {
    let storage = service.get_storage();
    let mut course = load_course(storage, course_id)?;

    // 先解析全部学生，未知 ID 直接返回 NotFound
    let students = student_ids
        .iter()
        .map(|id| load_user(storage, *id))
        .collect::<Result<Vec<_>>>()?;

    let report = bulk_enroll_students(&mut course, &students, access_code, ctx);
    if !report.enrolled.is_empty() {
        storage.save_course(&course)?;
    }

    info!(
        "Bulk enrollment for course {}: {} enrolled, {} failed",
        course.id(),
        report.enrolled.len(),
        report.failure_count()
    );
    Ok(report)
}
