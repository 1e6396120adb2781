//! 内存存储实现
//!
//! 以 ID 为键的 HashMap，条件查询为线性扫描；列表按创建时间排序。

mod assignments;
mod courses;
mod submissions;
mod users;

use chrono::{DateTime, Utc};
use std::cell::RefCell;
use std::collections::HashMap;
use uuid::Uuid;

use crate::errors::Result;
use crate::models::{Assignment, Course, Submission, User};
use crate::storage::Storage;

/// 内存存储
#[derive(Debug, Default)]
pub struct MemoryStorage {
    pub(crate) users: RefCell<HashMap<Uuid, User>>,
    pub(crate) courses: RefCell<HashMap<Uuid, Course>>,
    pub(crate) assignments: RefCell<HashMap<Uuid, Assignment>>,
    pub(crate) submissions: RefCell<HashMap<Uuid, Submission>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    // 用户模块
    fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>> {
        self.get_user_by_id_impl(id)
    }

    fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email)
    }

    fn save_user(&self, user: &User) -> Result<()> {
        self.save_user_impl(user)
    }

    // 课程模块
    fn get_course_by_id(&self, id: Uuid) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id)
    }

    fn get_course_by_access_code(&self, code: &str) -> Result<Option<Course>> {
        self.get_course_by_access_code_impl(code)
    }

    fn list_active_courses(&self) -> Result<Vec<Course>> {
        self.list_active_courses_impl()
    }

    fn list_courses_by_teacher(&self, teacher_id: Uuid) -> Result<Vec<Course>> {
        self.list_courses_by_teacher_impl(teacher_id)
    }

    fn save_course(&self, course: &Course) -> Result<()> {
        self.save_course_impl(course)
    }

    // 作业模块
    fn get_assignment_by_id(&self, id: Uuid) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id)
    }

    fn list_assignments_by_course(&self, course_id: Uuid) -> Result<Vec<Assignment>> {
        self.list_assignments_by_course_impl(course_id)
    }

    fn list_upcoming_assignments(
        &self,
        course_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<Assignment>> {
        self.list_upcoming_assignments_impl(course_id, now)
    }

    fn save_assignment(&self, assignment: &Assignment) -> Result<()> {
        self.save_assignment_impl(assignment)
    }

    // 提交模块
    fn get_submission_by_id(&self, id: Uuid) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(id)
    }

    fn list_submissions_by_assignment(&self, assignment_id: Uuid) -> Result<Vec<Submission>> {
        self.list_submissions_by_assignment_impl(assignment_id)
    }

    fn get_submission_by_student(
        &self,
        student_id: Uuid,
        assignment_id: Uuid,
    ) -> Result<Option<Submission>> {
        self.get_submission_by_student_impl(student_id, assignment_id)
    }

    fn list_ungraded_submissions(&self, assignment_id: Uuid) -> Result<Vec<Submission>> {
        self.list_ungraded_submissions_impl(assignment_id)
    }

    fn save_submission(&self, submission: &Submission) -> Result<()> {
        self.save_submission_impl(submission)
    }
}
