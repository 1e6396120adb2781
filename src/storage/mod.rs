//! 存储层
//!
//! 领域模型不直接访问存储；由应用服务按 读取 → 调用领域方法 → 保存 的顺序使用。
//! 读取返回聚合的独立副本，`save_*` 为 upsert。

use chrono::{DateTime, Utc};
use std::rc::Rc;
use uuid::Uuid;

use crate::errors::Result;
use crate::models::{Assignment, Course, Submission, User};

pub mod memory_storage;

pub trait Storage {
    /// 用户管理方法
    // 通过ID获取用户
    fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>>;
    // 通过邮箱获取用户
    fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 保存用户
    fn save_user(&self, user: &User) -> Result<()>;

    /// 课程管理方法
    // 通过ID获取课程
    fn get_course_by_id(&self, id: Uuid) -> Result<Option<Course>>;
    // 通过访问码获取课程
    fn get_course_by_access_code(&self, code: &str) -> Result<Option<Course>>;
    // 列出进行中的课程
    fn list_active_courses(&self) -> Result<Vec<Course>>;
    // 列出某教师任教的课程
    fn list_courses_by_teacher(&self, teacher_id: Uuid) -> Result<Vec<Course>>;
    // 保存课程
    fn save_course(&self, course: &Course) -> Result<()>;

    /// 作业管理方法
    fn get_assignment_by_id(&self, id: Uuid) -> Result<Option<Assignment>>;
    fn list_assignments_by_course(&self, course_id: Uuid) -> Result<Vec<Assignment>>;
    // 截止时间晚于 now 的作业
    fn list_upcoming_assignments(
        &self,
        course_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<Assignment>>;
    fn save_assignment(&self, assignment: &Assignment) -> Result<()>;

    /// 提交管理方法
    fn get_submission_by_id(&self, id: Uuid) -> Result<Option<Submission>>;
    fn list_submissions_by_assignment(&self, assignment_id: Uuid) -> Result<Vec<Submission>>;
    // 学生对某作业的提交
    fn get_submission_by_student(
        &self,
        student_id: Uuid,
        assignment_id: Uuid,
    ) -> Result<Option<Submission>>;
    // 未评分的提交
    fn list_ungraded_submissions(&self, assignment_id: Uuid) -> Result<Vec<Submission>>;
    fn save_submission(&self, submission: &Submission) -> Result<()>;
}

pub fn create_storage() -> Rc<dyn Storage> {
    Rc::new(memory_storage::MemoryStorage::new())
}
