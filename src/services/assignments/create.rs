use tracing::info;
use uuid::Uuid;

use super::AssignmentService;
use crate::errors::{ClassroomError, Result};
use crate::models::Assignment;
use crate::models::assignments::requests::{CreateAssignmentRequest, NewAssignment};
use crate::runtime::DomainContext;
use crate::services::courses::load_course;
use crate::services::users::load_user;
use crate::utils::validate_required;

pub fn create_assignment(
    service: &AssignmentService,
    course_id: Uuid,
    teacher_id: Uuid,
    request: CreateAssignmentRequest,
    ctx: &DomainContext<'_>,
) -> Result<Assignment> {
    let storage = service.get_storage();
    let course = load_course(storage, course_id)?;
    let teacher = load_user(storage, teacher_id)?;

    validate_required("Title", &request.title).map_err(ClassroomError::validation)?;

    let config = service.config();
    let data = NewAssignment {
        title: request.title.trim().to_string(),
        description: request.description,
        max_points: request.max_points.unwrap_or(config.default_max_points),
        due_date: request.due_date,
        allow_late_submissions: request.allow_late.unwrap_or(config.allow_late_by_default),
    };

    // 权限与满分校验由领域模型完成
    let assignment = Assignment::new(ctx.next_id(), &course, data, &teacher, ctx)?;
    storage.save_assignment(&assignment)?;

    info!(
        "Assignment '{}' ({}) created in course {}, due {}",
        assignment.title(),
        assignment.id(),
        course.id(),
        assignment.due_date()
    );
    Ok(assignment)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use crate::config::AssignmentConfig;
    use crate::errors::ClassroomError;
    use crate::models::assignments::requests::CreateAssignmentRequest;
    use crate::services::AssignmentService;
    use crate::services::testing::Harness;

    #[test]
    fn test_create_assignment_with_defaults() {
        let h = Harness::new();
        let teacher = h.user("Prof. Miller", "miller@school.edu");
        let course = h.active_course(&teacher, "PYTHON101", None);

        let assignment = h
            .assignment_service()
            .create_assignment(
                course.id(),
                teacher.id(),
                CreateAssignmentRequest {
                    title: "Python Basics".into(),
                    description: "Variables and loops".into(),
                    max_points: None,
                    due_date: h.now() + Duration::days(7),
                    allow_late: None,
                },
                &h.ctx(),
            )
            .unwrap();

        assert_eq!(assignment.max_points(), 100.0);
        assert!(!assignment.allow_late_submissions());
        assert_eq!(assignment.course_id(), course.id());
        assert!(h.storage.get_assignment_by_id(assignment.id()).unwrap().is_some());
    }

    #[test]
    fn test_create_assignment_uses_config() {
        let h = Harness::new();
        let teacher = h.user("Prof. Miller", "miller@school.edu");
        let course = h.active_course(&teacher, "PYTHON101", None);
        let service = AssignmentService::new(
            h.storage.clone(),
            AssignmentConfig {
                default_max_points: 20.0,
                allow_late_by_default: true,
            },
        );

        let assignment = service
            .create_assignment(
                course.id(),
                teacher.id(),
                CreateAssignmentRequest {
                    title: "Quiz".into(),
                    description: String::new(),
                    max_points: None,
                    due_date: h.now() + Duration::days(1),
                    allow_late: None,
                },
                &h.ctx(),
            )
            .unwrap();
        assert_eq!(assignment.max_points(), 20.0);
        assert!(assignment.allow_late_submissions());
    }

    #[test]
    fn test_student_cannot_create_assignment() {
        let h = Harness::new();
        let teacher = h.user("Prof. Miller", "miller@school.edu");
        let alice = h.user("Alice Johnson", "alice@student.edu");
        let course = h.active_course(&teacher, "PYTHON101", None);
        h.course_service()
            .enroll_student(alice.id(), "PYTHON101", &h.ctx())
            .unwrap();

        let err = h
            .assignment_service()
            .create_assignment(
                course.id(),
                alice.id(),
                CreateAssignmentRequest {
                    title: "Homework".into(),
                    description: String::new(),
                    max_points: Some(10.0),
                    due_date: h.now() + Duration::days(1),
                    allow_late: None,
                },
                &h.ctx(),
            )
            .unwrap_err();
        assert!(matches!(err, ClassroomError::Unauthorized(_)));
        assert!(h.storage.list_assignments_by_course(course.id()).unwrap().is_empty());
    }

    #[test]
    fn test_create_assignment_rejects_zero_points() {
        let h = Harness::new();
        let teacher = h.user("Prof. Miller", "miller@school.edu");
        let course = h.active_course(&teacher, "PYTHON101", None);

        let err = h
            .assignment_service()
            .create_assignment(
                course.id(),
                teacher.id(),
                CreateAssignmentRequest {
                    title: "Homework".into(),
                    description: String::new(),
                    max_points: Some(0.0),
                    due_date: h.now() + Duration::days(1),
                    allow_late: None,
                },
                &h.ctx(),
            )
            .unwrap_err();
        assert!(matches!(err, ClassroomError::Validation(_)));
    }
}
