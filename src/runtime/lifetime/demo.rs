//! 演示流程：建课、选课、布置作业、提交、评分

use chrono::Duration;
use serde::Serialize;
use tracing::info;

use super::startup::StartupContext;
use crate::errors::Result;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::assignments::stats_responses::AssignmentStatistics;
use crate::models::courses::requests::{CreateCourseRequest, PostAnnouncementRequest};
use crate::models::courses::responses::CourseStatistics;
use crate::models::ContentVisibility;

/// 演示结束时的汇总
#[derive(Debug, Clone, Serialize)]
pub struct DemoSummary {
    pub course_name: String,
    pub access_code: String,
    pub course: CourseStatistics,
    pub assignment: AssignmentStatistics,
    pub average_grade: Option<f64>,
}

pub fn run_demo(startup: &StartupContext) -> Result<DemoSummary> {
    let ctx = startup.ctx();

    let teacher = startup
        .users
        .register_user("Dr. Smith", "smith@school.edu", &ctx)?;
    let alice = startup
        .users
        .register_user("Alice Johnson", "alice@student.edu", &ctx)?;
    let bob = startup
        .users
        .register_user("Bob Williams", "bob@student.edu", &ctx)?;

    // 1. 创建并启用课程
    let course = startup.courses.create_course(
        teacher.id(),
        CreateCourseRequest {
            name: "Web Development 101".into(),
            description: "Learn HTML, CSS, and JavaScript".into(),
            access_code: Some("WEB101".into()),
            max_students: Some(20),
        },
        &ctx,
    )?;
    startup.courses.activate_course(course.id())?;
    info!("Course '{}' is open, access code {}", course.name(), course.access_code());

    // 2. 学生选课
    for student in [&alice, &bob] {
        startup
            .courses
            .enroll_student(student.id(), course.access_code().as_str(), &ctx)?;
    }

    startup.courses.post_announcement(
        course.id(),
        teacher.id(),
        PostAnnouncementRequest {
            title: "Welcome".into(),
            content: "The first assignment is out.".into(),
            visibility: ContentVisibility::All,
        },
        &ctx,
    )?;

    // 3. 布置作业，三天后截止
    let assignment = startup.assignments.create_assignment(
        course.id(),
        teacher.id(),
        CreateAssignmentRequest {
            title: "HTML Basics".into(),
            description: "Create a simple HTML page".into(),
            max_points: Some(100.0),
            due_date: ctx.now() + Duration::days(3),
            allow_late: None,
        },
        &ctx,
    )?;

    // 4. 提交与评分
    let submission = startup.submissions.submit(
        assignment.id(),
        alice.id(),
        "<html><body><h1>Hello World</h1></body></html>",
        &ctx,
    )?;
    let graded = startup.submissions.grade(
        submission.id(),
        teacher.id(),
        95.0,
        "Great work! Add some CSS next time.",
        &ctx,
    )?;
    if let Some(grade) = graded.grade() {
        info!("{} received {}", alice.name(), grade);
    }

    Ok(DemoSummary {
        course_name: course.name().to_string(),
        access_code: course.access_code().to_string(),
        course: startup.courses.course_statistics(course.id())?,
        assignment: startup.assignments.assignment_statistics(assignment.id())?,
        average_grade: startup.submissions.average_grade(assignment.id())?,
    })
}
