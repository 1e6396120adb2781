use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub course: CourseConfig,
    pub assignment: AssignmentConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            system_name: "Virtual Classroom".to_string(),
            environment: "development".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// 课程配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseConfig {
    pub access_code_length: usize, // 自动生成访问码的长度
    pub default_max_students: Option<u32>, // 未指定容量时使用，None 表示不限
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            access_code_length: 8,
            default_max_students: None,
        }
    }
}

/// 作业配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentConfig {
    pub default_max_points: f64,
    pub allow_late_by_default: bool,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            default_max_points: 100.0,
            allow_late_by_default: false,
        }
    }
}
