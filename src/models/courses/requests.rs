use serde::Deserialize;

use crate::models::common::AccessCode;
use crate::models::courses::content::ContentVisibility;

/// 构造课程所需的已校验数据
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub name: String,
    pub description: String,
    pub access_code: AccessCode,
    pub max_students: Option<u32>,
}

/// 创建课程请求（应用层）
///
/// 未提供访问码时按配置长度自动生成。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub access_code: Option<String>,
    pub max_students: Option<u32>,
}

/// 发布公告请求
#[derive(Debug, Clone, Deserialize)]
pub struct PostAnnouncementRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub visibility: ContentVisibility,
}

/// 添加资料请求
#[derive(Debug, Clone, Deserialize)]
pub struct AddMaterialRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub content_url: Option<String>,
    #[serde(default)]
    pub visibility: ContentVisibility,
}
