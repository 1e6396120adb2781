use serde::Serialize;

/// 作业统计
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentStatistics {
    pub total_students: usize,
    pub submitted_count: usize,
    pub late_count: usize,
    pub graded_count: usize,
    pub submission_rate: f64, // 百分比，保留两位小数
    pub score_stats: Option<ScoreStats>,
    pub score_distribution: Vec<ScoreRange>,
}

/// 百分制成绩统计
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoreStats {
    pub average: f64,
    pub max: f64,
    pub min: f64,
}

/// 成绩分段
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoreRange {
    pub range: String,
    pub count: usize,
}
