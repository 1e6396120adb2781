use serde::Serialize;
use uuid::Uuid;

use crate::errors::ClassroomError;
use crate::models::courses::entities::CourseStatus;
use crate::models::enrollments::entities::Enrollment;

/// 课程统计
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CourseStatistics {
    pub total_students: usize,
    pub total_teachers: usize,
    pub total_announcements: usize,
    pub total_materials: usize,
    pub status: CourseStatus,
    // 未设置容量时为 None
    pub enrollment_percentage: Option<f64>,
}

/// 单个学生的选课失败原因
#[derive(Debug, Clone)]
pub struct EnrollmentFailure {
    pub user_id: Uuid,
    pub user_name: String,
    pub error: ClassroomError,
}

/// 批量选课结果：部分成功，不整体回滚
#[derive(Debug, Clone, Default)]
pub struct BulkEnrollReport {
    pub enrolled: Vec<Enrollment>,
    pub failed: Vec<EnrollmentFailure>,
}

impl BulkEnrollReport {
    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}
