//! 课程存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::Course;
use uuid::Uuid;

impl MemoryStorage {
    fn collect_courses<F>(&self, predicate: F) -> Vec<Course>
    where
        F: Fn(&Course) -> bool,
    {
        let mut courses: Vec<Course> = self
            .courses
            .borrow()
            .values()
            .filter(|c| predicate(c))
            .cloned()
            .collect();
        courses.sort_by_key(|c| (c.created_at(), c.id()));
        courses
    }

    /// 通过ID获取课程
    pub fn get_course_by_id_impl(&self, id: Uuid) -> Result<Option<Course>> {
        Ok(self.courses.borrow().get(&id).cloned())
    }

    /// 通过访问码获取课程
    pub fn get_course_by_access_code_impl(&self, code: &str) -> Result<Option<Course>> {
        Ok(self
            .courses
            .borrow()
            .values()
            .find(|c| c.access_code().matches(code))
            .cloned())
    }

    /// 列出进行中的课程
    pub fn list_active_courses_impl(&self) -> Result<Vec<Course>> {
        Ok(self.collect_courses(Course::is_active))
    }

    /// 列出教师任教的课程
    pub fn list_courses_by_teacher_impl(&self, teacher_id: Uuid) -> Result<Vec<Course>> {
        Ok(self.collect_courses(|c| {
            c.enrollments()
                .iter()
                .any(|e| e.is_teacher() && e.user().id() == teacher_id)
        }))
    }

    /// 保存课程
    pub fn save_course_impl(&self, course: &Course) -> Result<()> {
        self.courses.borrow_mut().insert(course.id(), course.clone());
        Ok(())
    }
}
