use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::{ClassroomError, Result};
use crate::models::common::AccessCode;
use crate::models::courses::content::{Announcement, ContentVisibility, CourseContent, Material};
use crate::models::courses::requests::NewCourse;
use crate::models::enrollments::entities::{CourseRole, Enrollment};
use crate::models::users::entities::User;
use crate::runtime::DomainContext;

// 课程状态
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    #[default]
    Draft, // 草稿
    Active,   // 进行中
    Archived, // 已归档（终态）
}

impl std::fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseStatus::Draft => write!(f, "draft"),
            CourseStatus::Active => write!(f, "active"),
            CourseStatus::Archived => write!(f, "archived"),
        }
    }
}

/// 课程聚合根
///
/// 拥有选课记录、公告与资料。不变量：
/// - 创建者始终以教师身份在册
/// - 设置容量时学生人数不超过 `max_students`
/// - 每个用户最多出现一次
#[derive(Debug, Clone, Serialize)]
pub struct Course {
    id: Uuid,
    name: String,
    description: String,
    created_by: User,
    access_code: AccessCode,
    status: CourseStatus,
    max_students: Option<u32>,
    enrollments: Vec<Enrollment>,
    announcements: Vec<Announcement>,
    materials: Vec<Material>,
    created_at: DateTime<Utc>,
}

impl Course {
    /// 创建草稿课程，并将创建者登记为教师
    pub fn new(id: Uuid, course: NewCourse, creator: &User, ctx: &DomainContext<'_>) -> Self {
        let now = ctx.now();
        let teacher_enrollment =
            Enrollment::new(ctx.next_id(), creator.clone(), CourseRole::Teacher, now);

        debug!("Course {} created by {}", id, creator.id());

        Self {
            id,
            name: course.name,
            description: course.description,
            created_by: creator.clone(),
            access_code: course.access_code,
            status: CourseStatus::Draft,
            max_students: course.max_students,
            enrollments: vec![teacher_enrollment],
            announcements: Vec::new(),
            materials: Vec::new(),
            created_at: now,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_by(&self) -> &User {
        &self.created_by
    }

    pub fn access_code(&self) -> &AccessCode {
        &self.access_code
    }

    pub fn status(&self) -> CourseStatus {
        self.status
    }

    pub fn max_students(&self) -> Option<u32> {
        self.max_students
    }

    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    pub fn announcements(&self) -> &[Announcement] {
        &self.announcements
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_active(&self) -> bool {
        self.status == CourseStatus::Active
    }

    pub fn students(&self) -> impl Iterator<Item = &User> {
        self.enrollments
            .iter()
            .filter(|e| e.is_student())
            .map(Enrollment::user)
    }

    pub fn student_count(&self) -> usize {
        self.enrollments.iter().filter(|e| e.is_student()).count()
    }

    pub fn teacher_count(&self) -> usize {
        self.enrollments.iter().filter(|e| e.is_teacher()).count()
    }

    fn has_capacity(&self) -> bool {
        match self.max_students {
            None => true,
            Some(max) => self.student_count() < max as usize,
        }
    }

    pub fn can_accept_students(&self) -> bool {
        self.is_active() && self.has_capacity()
    }

    /// 学生通过访问码加入课程
    pub fn enroll_student(
        &mut self,
        user: &User,
        provided_code: &str,
        ctx: &DomainContext<'_>,
    ) -> Result<Enrollment> {
        if !self.is_active() {
            return Err(ClassroomError::invalid_state(format!(
                "Course '{}' is not active",
                self.name
            )));
        }
        if !self.access_code.matches(provided_code) {
            return Err(ClassroomError::invalid_credential("Invalid access code"));
        }
        if self.is_enrolled(user) {
            return Err(ClassroomError::already_enrolled(format!(
                "User {} is already enrolled",
                user.name()
            )));
        }
        if !self.has_capacity() {
            return Err(ClassroomError::capacity_exceeded(format!(
                "Course has reached maximum enrollment of {}",
                self.max_students.unwrap_or_default()
            )));
        }

        let enrollment = Enrollment::new(ctx.next_id(), user.clone(), CourseRole::Student, ctx.now());
        self.enrollments.push(enrollment.clone());
        debug!("User {} enrolled in course {} as student", user.id(), self.id);
        Ok(enrollment)
    }

    /// 添加教师，不受课程状态与容量限制
    pub fn add_teacher(&mut self, user: &User, ctx: &DomainContext<'_>) -> Result<Enrollment> {
        if self.is_enrolled(user) {
            return Err(ClassroomError::already_enrolled(format!(
                "User {} is already enrolled",
                user.name()
            )));
        }

        let enrollment = Enrollment::new(ctx.next_id(), user.clone(), CourseRole::Teacher, ctx.now());
        self.enrollments.push(enrollment.clone());
        debug!("User {} added to course {} as teacher", user.id(), self.id);
        Ok(enrollment)
    }

    pub fn get_user_role(&self, user: &User) -> Option<CourseRole> {
        self.enrollments
            .iter()
            .find(|e| e.user() == user)
            .map(Enrollment::role)
    }

    pub fn is_enrolled(&self, user: &User) -> bool {
        self.enrollments.iter().any(|e| e.user() == user)
    }

    pub fn is_teacher(&self, user: &User) -> bool {
        self.get_user_role(user) == Some(CourseRole::Teacher)
    }

    fn require_teacher(&self, user: &User, action: &str) -> Result<()> {
        if self.is_teacher(user) {
            Ok(())
        } else {
            Err(ClassroomError::unauthorized(format!(
                "Only teachers can {action}"
            )))
        }
    }

    /// 发布公告（仅教师）
    pub fn post_announcement(
        &mut self,
        user: &User,
        title: impl Into<String>,
        content: impl Into<String>,
        visibility: ContentVisibility,
        ctx: &DomainContext<'_>,
    ) -> Result<Announcement> {
        self.require_teacher(user, "post announcements")?;

        let announcement = Announcement::new(
            ctx.next_id(),
            title.into(),
            content.into(),
            user.clone(),
            ctx.now(),
            visibility,
        );
        self.announcements.push(announcement.clone());
        Ok(announcement)
    }

    /// 添加学习资料（仅教师）
    pub fn add_material(
        &mut self,
        user: &User,
        title: impl Into<String>,
        description: impl Into<String>,
        content_url: Option<String>,
        visibility: ContentVisibility,
        ctx: &DomainContext<'_>,
    ) -> Result<Material> {
        self.require_teacher(user, "add materials")?;

        let material = Material::new(
            ctx.next_id(),
            title.into(),
            description.into(),
            content_url,
            user.clone(),
            ctx.now(),
            visibility,
        );
        self.materials.push(material.clone());
        Ok(material)
    }

    fn visible_to<'a, T: CourseContent>(&self, items: &'a [T], user: &User) -> Vec<&'a T> {
        match self.get_user_role(user) {
            Some(role) => items.iter().filter(|item| item.is_visible_to(role)).collect(),
            None => Vec::new(),
        }
    }

    pub fn get_visible_announcements(&self, user: &User) -> Vec<&Announcement> {
        self.visible_to(&self.announcements, user)
    }

    pub fn get_visible_materials(&self, user: &User) -> Vec<&Material> {
        self.visible_to(&self.materials, user)
    }

    /// 启用课程；已归档课程不可再启用
    pub fn activate(&mut self) -> Result<()> {
        if self.status == CourseStatus::Archived {
            return Err(ClassroomError::invalid_state(
                "Cannot activate an archived course",
            ));
        }
        self.status = CourseStatus::Active;
        Ok(())
    }

    /// 归档课程，无前置条件
    pub fn archive(&mut self) {
        self.status = CourseStatus::Archived;
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Course {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{Clock, FixedClock, SequentialIdGenerator};
    use chrono::{Duration, TimeZone};

    struct Fixture {
        clock: FixedClock,
        ids: SequentialIdGenerator,
        teacher: User,
        alice: User,
        bob: User,
        carol: User,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                clock: FixedClock::new(Utc.with_ymd_and_hms(2025, 9, 1, 8, 0, 0).unwrap()),
                ids: SequentialIdGenerator::starting_at(1000),
                teacher: User::new(Uuid::from_u128(1), "Prof. Miller", "miller@school.edu"),
                alice: User::new(Uuid::from_u128(2), "Alice Johnson", "alice@student.edu"),
                bob: User::new(Uuid::from_u128(3), "Bob Williams", "bob@student.edu"),
                carol: User::new(Uuid::from_u128(4), "Carol Davis", "carol@student.edu"),
            }
        }

        fn ctx(&self) -> DomainContext<'_> {
            DomainContext::new(&self.clock, &self.ids)
        }

        fn course(&self, max_students: Option<u32>) -> Course {
            Course::new(
                Uuid::from_u128(100),
                NewCourse {
                    name: "Introduction to Python".into(),
                    description: "Learn Python programming from scratch".into(),
                    access_code: AccessCode::new("PYTHON101").unwrap(),
                    max_students,
                },
                &self.teacher,
                &self.ctx(),
            )
        }
    }

    #[test]
    fn test_creator_enrolled_as_teacher_once() {
        let fx = Fixture::new();
        let course = fx.course(None);

        assert_eq!(course.status(), CourseStatus::Draft);
        assert_eq!(course.get_user_role(&fx.teacher), Some(CourseRole::Teacher));
        assert_eq!(
            course
                .enrollments()
                .iter()
                .filter(|e| e.user() == &fx.teacher)
                .count(),
            1
        );
        assert_eq!(course.created_at(), fx.clock.now());
    }

    #[test]
    fn test_enroll_requires_active_course() {
        let fx = Fixture::new();
        let mut course = fx.course(None);

        let err = course.enroll_student(&fx.alice, "PYTHON101", &fx.ctx()).unwrap_err();
        assert!(matches!(err, ClassroomError::InvalidState(_)));
        assert_eq!(course.enrollments().len(), 1);
    }

    #[test]
    fn test_enroll_with_wrong_code_does_not_mutate() {
        let fx = Fixture::new();
        let mut course = fx.course(None);
        course.activate().unwrap();

        let before = course.enrollments().len();
        let err = course.enroll_student(&fx.alice, "WRONG", &fx.ctx()).unwrap_err();
        assert!(matches!(err, ClassroomError::InvalidCredential(_)));
        assert_eq!(course.enrollments().len(), before);
        assert!(!course.is_enrolled(&fx.alice));
    }

    #[test]
    fn test_enroll_stamps_current_time() {
        let fx = Fixture::new();
        let mut course = fx.course(None);
        course.activate().unwrap();
        fx.clock.advance(Duration::hours(3));

        let enrollment = course.enroll_student(&fx.alice, "PYTHON101", &fx.ctx()).unwrap();
        assert_eq!(enrollment.role(), CourseRole::Student);
        assert_eq!(enrollment.enrolled_at(), fx.clock.now());
        assert_eq!(course.enrollments().last(), Some(&enrollment));
    }

    #[test]
    fn test_duplicate_enrollment_rejected() {
        let fx = Fixture::new();
        let mut course = fx.course(None);
        course.activate().unwrap();
        course.enroll_student(&fx.alice, "PYTHON101", &fx.ctx()).unwrap();

        let err = course.enroll_student(&fx.alice, "PYTHON101", &fx.ctx()).unwrap_err();
        assert!(matches!(err, ClassroomError::AlreadyEnrolled(_)));

        // 创建者也不能再以学生身份加入
        let err = course.enroll_student(&fx.teacher, "PYTHON101", &fx.ctx()).unwrap_err();
        assert!(matches!(err, ClassroomError::AlreadyEnrolled(_)));
        assert_eq!(course.student_count(), 1);
    }

    #[test]
    fn test_capacity_excludes_teachers() {
        let fx = Fixture::new();
        let mut course = fx.course(Some(2));
        course.activate().unwrap();
        course.add_teacher(&fx.carol, &fx.ctx()).unwrap();

        course.enroll_student(&fx.alice, "PYTHON101", &fx.ctx()).unwrap();
        assert!(course.can_accept_students());
        course.enroll_student(&fx.bob, "PYTHON101", &fx.ctx()).unwrap();
        assert!(!course.can_accept_students());

        let dave = User::new(Uuid::from_u128(5), "Dave", "dave@student.edu");
        let err = course.enroll_student(&dave, "PYTHON101", &fx.ctx()).unwrap_err();
        assert!(matches!(err, ClassroomError::CapacityExceeded(_)));
        assert_eq!(course.student_count(), 2);
        assert_eq!(course.teacher_count(), 2);
    }

    #[test]
    fn test_add_teacher_ignores_status_and_capacity() {
        let fx = Fixture::new();
        let mut course = fx.course(Some(0));
        course.archive();

        let enrollment = course.add_teacher(&fx.bob, &fx.ctx()).unwrap();
        assert!(enrollment.is_teacher());
        assert!(matches!(
            course.add_teacher(&fx.bob, &fx.ctx()),
            Err(ClassroomError::AlreadyEnrolled(_))
        ));
    }

    #[test]
    fn test_can_accept_students() {
        let fx = Fixture::new();
        let mut course = fx.course(None);
        assert!(!course.can_accept_students());
        course.activate().unwrap();
        assert!(course.can_accept_students());
    }

    #[test]
    fn test_only_teachers_post_content() {
        let fx = Fixture::new();
        let mut course = fx.course(None);
        course.activate().unwrap();
        course.enroll_student(&fx.alice, "PYTHON101", &fx.ctx()).unwrap();

        let err = course
            .post_announcement(&fx.alice, "Hi", "From a student", ContentVisibility::All, &fx.ctx())
            .unwrap_err();
        assert!(matches!(err, ClassroomError::Unauthorized(_)));

        let err = course
            .add_material(&fx.bob, "Notes", "", None, ContentVisibility::All, &fx.ctx())
            .unwrap_err();
        assert!(matches!(err, ClassroomError::Unauthorized(_)));

        assert!(course.announcements().is_empty());
        assert!(course.materials().is_empty());
    }

    #[test]
    fn test_visibility_filtering() {
        let fx = Fixture::new();
        let mut course = fx.course(None);
        course.activate().unwrap();
        course.enroll_student(&fx.alice, "PYTHON101", &fx.ctx()).unwrap();

        course
            .post_announcement(
                &fx.teacher,
                "Welcome to the course!",
                "Looking forward to teaching you Python this semester.",
                ContentVisibility::All,
                &fx.ctx(),
            )
            .unwrap();
        course
            .post_announcement(
                &fx.teacher,
                "Grading rubric",
                "Internal notes",
                ContentVisibility::TeachersOnly,
                &fx.ctx(),
            )
            .unwrap();
        course
            .add_material(
                &fx.teacher,
                "Python Basics - Chapter 1",
                "Introduction to variables and data types",
                Some("https://example.com/chapter1.pdf".into()),
                ContentVisibility::default(),
                &fx.ctx(),
            )
            .unwrap();

        let teacher_view = course.get_visible_announcements(&fx.teacher);
        assert_eq!(teacher_view.len(), 2);
        assert_eq!(teacher_view[0].title(), "Welcome to the course!");
        assert_eq!(teacher_view[1].title(), "Grading rubric");

        let student_view = course.get_visible_announcements(&fx.alice);
        assert_eq!(student_view.len(), 1);
        assert_eq!(student_view[0].title(), "Welcome to the course!");

        assert!(course.get_visible_announcements(&fx.bob).is_empty());
        assert!(course.get_visible_materials(&fx.bob).is_empty());
        assert_eq!(course.get_visible_materials(&fx.alice).len(), 1);
    }

    #[test]
    fn test_lifecycle() {
        let fx = Fixture::new();
        let mut course = fx.course(None);

        course.activate().unwrap();
        course.activate().unwrap();
        assert_eq!(course.status(), CourseStatus::Active);

        course.archive();
        assert_eq!(course.status(), CourseStatus::Archived);
        assert!(matches!(
            course.activate(),
            Err(ClassroomError::InvalidState(_))
        ));
        assert_eq!(course.status(), CourseStatus::Archived);
    }

    #[test]
    fn test_archive_draft_then_activate_fails() {
        let fx = Fixture::new();
        let mut course = fx.course(None);
        course.archive();
        assert!(matches!(
            course.activate(),
            Err(ClassroomError::InvalidState(_))
        ));
    }

    #[test]
    fn test_archive_active_then_enroll_fails() {
        let fx = Fixture::new();
        let mut course = fx.course(None);
        course.activate().unwrap();
        course.archive();

        let err = course.enroll_student(&fx.alice, "PYTHON101", &fx.ctx()).unwrap_err();
        assert!(matches!(err, ClassroomError::InvalidState(_)));
    }
}
