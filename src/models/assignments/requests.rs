use chrono::{DateTime, Utc};
use serde::Deserialize;

/// 构造作业所需的数据
#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub title: String,
    pub description: String,
    pub max_points: f64,
    pub due_date: DateTime<Utc>,
    pub allow_late_submissions: bool,
}

/// 创建作业请求（应用层）
///
/// `max_points` / `allow_late` 缺省时使用配置中的默认值。
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignmentRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub max_points: Option<f64>,
    pub due_date: DateTime<Utc>, // ISO 8601 格式，如 "2026-01-24T12:00:00Z"
    pub allow_late: Option<bool>,
}
