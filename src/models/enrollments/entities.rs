use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::users::entities::User;

// 课程内角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CourseRole {
    Teacher, // 教师
    Student, // 学生
}

impl CourseRole {
    pub const TEACHER: &'static str = "teacher";
    pub const STUDENT: &'static str = "student";

    pub fn all_roles() -> &'static [CourseRole] {
        &[Self::Teacher, Self::Student]
    }
}

impl<'de> Deserialize<'de> for CourseRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for CourseRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseRole::Teacher => write!(f, "{}", CourseRole::TEACHER),
            CourseRole::Student => write!(f, "{}", CourseRole::STUDENT),
        }
    }
}

impl std::str::FromStr for CourseRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CourseRole::TEACHER => Ok(CourseRole::Teacher),
            CourseRole::STUDENT => Ok(CourseRole::Student),
            _ => Err(format!(
                "Invalid course role: '{s}'. Supported roles: teacher, student"
            )),
        }
    }
}

/// 选课记录
///
/// 只能由 `Course` 创建，相等性只看 `id`。
#[derive(Debug, Clone, Serialize)]
pub struct Enrollment {
    id: Uuid,
    user: User,
    role: CourseRole,
    enrolled_at: DateTime<Utc>,
}

impl Enrollment {
    pub(crate) fn new(id: Uuid, user: User, role: CourseRole, enrolled_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user,
            role,
            enrolled_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn role(&self) -> CourseRole {
        self.role
    }

    pub fn enrolled_at(&self) -> DateTime<Utc> {
        self.enrolled_at
    }

    pub fn is_teacher(&self) -> bool {
        self.role == CourseRole::Teacher
    }

    pub fn is_student(&self) -> bool {
        self.role == CourseRole::Student
    }
}

impl PartialEq for Enrollment {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Enrollment {}
