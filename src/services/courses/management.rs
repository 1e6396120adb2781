//! 课程生命周期与课程级领域服务

use tracing::{info, warn};
use uuid::Uuid;

use super::{CourseService, load_course};
use crate::errors::Result;
use crate::models::courses::responses::{BulkEnrollReport, CourseStatistics, EnrollmentFailure};
use crate::models::{Course, User};
use crate::runtime::DomainContext;

pub fn activate_course(service: &CourseService, course_id: Uuid) -> Result<Course> {
    let storage = service.get_storage();
    let mut course = load_course(storage, course_id)?;
    course.activate()?;
    storage.save_course(&course)?;
    info!("Course {} activated", course.id());
    Ok(course)
}

pub fn archive_course(service: &CourseService, course_id: Uuid) -> Result<Course> {
    let storage = service.get_storage();
    let mut course = load_course(storage, course_id)?;
    course.archive();
    storage.save_course(&course)?;
    info!("Course {} archived", course.id());
    Ok(course)
}

/// 逐个为学生选课，失败项连同原因收集到报告中
pub fn bulk_enroll_students(
    course: &mut Course,
    students: &[User],
    access_code: &str,
    ctx: &DomainContext<'_>,
) -> BulkEnrollReport {
    let mut report = BulkEnrollReport::default();

    for student in students {
        match course.enroll_student(student, access_code, ctx) {
            Ok(enrollment) => report.enrolled.push(enrollment),
            Err(error) => report.failed.push(EnrollmentFailure {
                user_id: student.id(),
                user_name: student.name().to_string(),
                error,
            }),
        }
    }

    if !report.is_complete() {
        warn!(
            "{} enrollments failed for course {}",
            report.failure_count(),
            course.id()
        );
    }
    report
}

pub fn get_course_statistics(course: &Course) -> CourseStatistics {
    let total_students = course.student_count();
    // 容量为 0 视同未设置
    let enrollment_percentage = course
        .max_students()
        .filter(|max| *max > 0)
        .map(|max| total_students as f64 / max as f64 * 100.0);

    CourseStatistics {
        total_students,
        total_teachers: course.teacher_count(),
        total_announcements: course.announcements().len(),
        total_materials: course.materials().len(),
        status: course.status(),
        enrollment_percentage,
    }
}
