use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::enrollments::entities::CourseRole;
use crate::models::users::entities::User;

// 内容可见范围
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentVisibility {
    #[default]
    All, // 全体课程成员
    TeachersOnly, // 仅教师
}

impl ContentVisibility {
    pub fn allows(self, role: CourseRole) -> bool {
        match self {
            ContentVisibility::All => true,
            ContentVisibility::TeachersOnly => role == CourseRole::Teacher,
        }
    }
}

/// 课程内容条目的公共行为
pub trait CourseContent {
    fn visibility(&self) -> ContentVisibility;

    fn is_visible_to(&self, role: CourseRole) -> bool {
        self.visibility().allows(role)
    }
}

/// 课程公告
#[derive(Debug, Clone, Serialize)]
pub struct Announcement {
    id: Uuid,
    title: String,
    content: String,
    created_by: User,
    created_at: DateTime<Utc>,
    visibility: ContentVisibility,
}

impl Announcement {
    pub(crate) fn new(
        id: Uuid,
        title: String,
        content: String,
        created_by: User,
        created_at: DateTime<Utc>,
        visibility: ContentVisibility,
    ) -> Self {
        Self {
            id,
            title,
            content,
            created_by,
            created_at,
            visibility,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_by(&self) -> &User {
        &self.created_by
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl CourseContent for Announcement {
    fn visibility(&self) -> ContentVisibility {
        self.visibility
    }
}

impl PartialEq for Announcement {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Announcement {}

/// 学习资料
#[derive(Debug, Clone, Serialize)]
pub struct Material {
    id: Uuid,
    title: String,
    description: String,
    content_url: Option<String>,
    created_by: User,
    created_at: DateTime<Utc>,
    visibility: ContentVisibility,
}

impl Material {
    pub(crate) fn new(
        id: Uuid,
        title: String,
        description: String,
        content_url: Option<String>,
        created_by: User,
        created_at: DateTime<Utc>,
        visibility: ContentVisibility,
    ) -> Self {
        Self {
            id,
            title,
            description,
            content_url,
            created_by,
            created_at,
            visibility,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn content_url(&self) -> Option<&str> {
        self.content_url.as_deref()
    }

    pub fn created_by(&self) -> &User {
        &self.created_by
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl CourseContent for Material {
    fn visibility(&self) -> ContentVisibility {
        self.visibility
    }
}

impl PartialEq for Material {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Material {}
