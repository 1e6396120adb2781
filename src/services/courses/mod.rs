pub mod content;
pub mod create;
pub mod enroll;
pub mod management;

use std::rc::Rc;

use uuid::Uuid;

use crate::config::CourseConfig;
use crate::errors::{ClassroomError, Result};
use crate::models::courses::requests::{
    AddMaterialRequest, CreateCourseRequest, PostAnnouncementRequest,
};
use crate::models::courses::responses::{BulkEnrollReport, CourseStatistics};
use crate::models::{Announcement, Course, Enrollment, Material};
use crate::runtime::DomainContext;
use crate::storage::Storage;

pub use management::{bulk_enroll_students, get_course_statistics};

pub struct CourseService {
    storage: Rc<dyn Storage>,
    config: CourseConfig,
}

impl CourseService {
    pub fn new(storage: Rc<dyn Storage>, config: CourseConfig) -> Self {
        Self { storage, config }
    }

    pub(crate) fn get_storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    pub(crate) fn config(&self) -> &CourseConfig {
        &self.config
    }

    // 创建课程（草稿状态）
    pub fn create_course(
        &self,
        teacher_id: Uuid,
        request: CreateCourseRequest,
        ctx: &DomainContext<'_>,
    ) -> Result<Course> {
        create::create_course(self, teacher_id, request, ctx)
    }

    // 根据课程 ID 获取课程
    pub fn get_course(&self, course_id: Uuid) -> Result<Course> {
        load_course(self.get_storage(), course_id)
    }

    // 进行中的课程
    pub fn list_active_courses(&self) -> Result<Vec<Course>> {
        self.get_storage().list_active_courses()
    }

    // 教师任教的课程
    pub fn list_courses_by_teacher(&self, teacher_id: Uuid) -> Result<Vec<Course>> {
        self.get_storage().list_courses_by_teacher(teacher_id)
    }

    pub fn activate_course(&self, course_id: Uuid) -> Result<Course> {
        management::activate_course(self, course_id)
    }

    pub fn archive_course(&self, course_id: Uuid) -> Result<Course> {
        management::archive_course(self, course_id)
    }

    // 学生通过访问码选课
    pub fn enroll_student(
        &self,
        student_id: Uuid,
        access_code: &str,
        ctx: &DomainContext<'_>,
    ) -> Result<Enrollment> {
        enroll::enroll_student(self, student_id, access_code, ctx)
    }

    pub fn add_teacher(
        &self,
        course_id: Uuid,
        teacher_id: Uuid,
        ctx: &DomainContext<'_>,
    ) -> Result<Enrollment> {
        enroll::add_teacher(self, course_id, teacher_id, ctx)
    }

    // 批量选课，部分失败不影响其余学生
    pub fn bulk_enroll(
        &self,
        course_id: Uuid,
        student_ids: &[Uuid],
        access_code: &str,
        ctx: &DomainContext<'_>,
    ) -> Result<BulkEnrollReport> {
        enroll::bulk_enroll(self, course_id, student_ids, access_code, ctx)
    }

    pub fn post_announcement(
        &self,
        course_id: Uuid,
        user_id: Uuid,
        request: PostAnnouncementRequest,
        ctx: &DomainContext<'_>,
    ) -> Result<Announcement> {
        content::post_announcement(self, course_id, user_id, request, ctx)
    }

    pub fn add_material(
        &self,
        course_id: Uuid,
        user_id: Uuid,
        request: AddMaterialRequest,
        ctx: &DomainContext<'_>,
    ) -> Result<Material> {
        content::add_material(self, course_id, user_id, request, ctx)
    }

    // 用户可见的公告
    pub fn visible_announcements(&self, course_id: Uuid, user_id: Uuid) -> Result<Vec<Announcement>> {
        content::visible_announcements(self, course_id, user_id)
    }

    // 用户可见的资料
    pub fn visible_materials(&self, course_id: Uuid, user_id: Uuid) -> Result<Vec<Material>> {
        content::visible_materials(self, course_id, user_id)
    }

    pub fn course_statistics(&self, course_id: Uuid) -> Result<CourseStatistics> {
        let course = load_course(self.get_storage(), course_id)?;
        Ok(get_course_statistics(&course))
    }
}

/// 按 ID 读取课程，不存在时返回 NotFound
pub(crate) fn load_course(storage: &dyn Storage, course_id: Uuid) -> Result<Course> {
    storage
        .get_course_by_id(course_id)?
        .ok_or_else(|| ClassroomError::not_found(format!("Course {course_id} not found")))
}
