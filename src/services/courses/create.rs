use tracing::{info, warn};
use uuid::Uuid;

use super::CourseService;
use crate::errors::{ClassroomError, Result};
use crate::models::courses::requests::{CreateCourseRequest, NewCourse};
use crate::models::{AccessCode, Course};
use crate::runtime::DomainContext;
use crate::services::users::load_user;
use crate::storage::Storage;
use crate::utils::validate_required;

// 自动生成访问码时的最大重试次数
const MAX_CODE_ATTEMPTS: usize = 16;

pub fn create_course(
    service: &CourseService,
    teacher_id: Uuid,
    request: CreateCourseRequest,
    ctx: &DomainContext<'_>,
) -> Result<Course> {
    let storage = service.get_storage();
    let teacher = load_user(storage, teacher_id)?;

    validate_required("Course name", &request.name).map_err(ClassroomError::validation)?;

    let access_code = match request.access_code {
        Some(code) => {
            let code = AccessCode::new(code)?;
            if storage.get_course_by_access_code(code.as_str())?.is_some() {
                return Err(ClassroomError::validation(format!(
                    "Access code {code} is already in use"
                )));
            }
            code
        }
        None => {
            let length = service.config().access_code_length;
            generate_unique_code(storage, || AccessCode::generate(length))?
        }
    };

    let max_students = request
        .max_students
        .or(service.config().default_max_students);

    let course = Course::new(
        ctx.next_id(),
        NewCourse {
            name: request.name.trim().to_string(),
            description: request.description,
            access_code,
            max_students,
        },
        &teacher,
        ctx,
    );
    storage.save_course(&course)?;

    info!(
        "Course '{}' ({}) created by {}",
        course.name(),
        course.id(),
        teacher.id()
    );
    Ok(course)
}

/// 生成未被占用的访问码
fn generate_unique_code<F>(storage: &dyn Storage, mut generate: F) -> Result<AccessCode>
where
    F: FnMut() -> AccessCode,
{
    for _ in 0..MAX_CODE_ATTEMPTS {
        let code = generate();
        if storage.get_course_by_access_code(code.as_str())?.is_none() {
            return Ok(code);
        }
        warn!("Generated access code collided, retrying");
    }
    Err(ClassroomError::invalid_state(
        "Failed to generate a unique access code",
    ))
}
