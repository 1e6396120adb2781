//! 作业统计与作业级领域服务

use std::collections::HashSet;

use uuid::Uuid;

use super::{AssignmentService, load_assignment};
use crate::errors::Result;
use crate::models::assignments::stats_responses::{AssignmentStatistics, ScoreRange, ScoreStats};
use crate::models::{Assignment, Course, Submission, User};
use crate::services::courses::load_course;

// 成绩分段（百分制，下限包含）
const SCORE_BUCKETS: [(&str, f64); 5] = [
    ("90-100", 90.0),
    ("80-89", 80.0),
    ("70-79", 70.0),
    ("60-69", 60.0),
    ("0-59", 0.0),
];

/// 已评分提交的平均百分比；没有已评分提交时为 None
pub fn calculate_average_grade(submissions: &[Submission]) -> Option<f64> {
    let percentages: Vec<f64> = submissions.iter().filter_map(Submission::percentage).collect();
    if percentages.is_empty() {
        return None;
    }
    Some(percentages.iter().sum::<f64>() / percentages.len() as f64)
}

/// 课程中尚未提交该作业的学生，按选课顺序
pub fn get_pending_students(
    course: &Course,
    assignment: &Assignment,
    submissions: &[Submission],
) -> Result<Vec<User>> {
    assignment.ensure_course(course)?;

    let submitted: HashSet<Uuid> = submissions
        .iter()
        .filter(|s| s.assignment_id() == assignment.id())
        .map(|s| s.student().id())
        .collect();

    Ok(course
        .students()
        .filter(|student| !submitted.contains(&student.id()))
        .cloned()
        .collect())
}

pub fn get_assignment_statistics(
    course: &Course,
    assignment: &Assignment,
    submissions: &[Submission],
) -> Result<AssignmentStatistics> {
    assignment.ensure_course(course)?;

    // 只统计当前仍在课程中的学生
    let student_ids: HashSet<Uuid> = course.students().map(User::id).collect();
    let total_students = student_ids.len();

    let student_submissions: Vec<&Submission> = submissions
        .iter()
        .filter(|s| s.assignment_id() == assignment.id() && student_ids.contains(&s.student().id()))
        .collect();

    let submitted_count = student_submissions.len();
    let late_count = student_submissions
        .iter()
        .filter(|s| s.is_late(assignment))
        .count();

    let scores: Vec<f64> = student_submissions
        .iter()
        .filter_map(|s| s.percentage())
        .collect();
    let graded_count = scores.len();

    let score_stats = if scores.is_empty() {
        None
    } else {
        let average = scores.iter().sum::<f64>() / scores.len() as f64;
        let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let min = scores.iter().cloned().fold(f64::INFINITY, f64::min);
        Some(ScoreStats {
            average: round2(average),
            max: round2(max),
            min: round2(min),
        })
    };

    let submission_rate = if total_students > 0 {
        round2(submitted_count as f64 / total_students as f64 * 100.0)
    } else {
        0.0
    };

    Ok(AssignmentStatistics {
        total_students,
        submitted_count,
        late_count,
        graded_count,
        submission_rate,
        score_stats,
        score_distribution: calculate_score_distribution(&scores),
    })
}

/// 按百分比统计分数分布
fn calculate_score_distribution(percentages: &[f64]) -> Vec<ScoreRange> {
    let mut counts = [0usize; SCORE_BUCKETS.len()];
    for &percentage in percentages {
        let index = SCORE_BUCKETS
            .iter()
            .position(|(_, lower)| percentage >= *lower)
            .unwrap_or(SCORE_BUCKETS.len() - 1);
        counts[index] += 1;
    }

    SCORE_BUCKETS
        .iter()
        .zip(counts)
        .map(|((range, _), count)| ScoreRange {
            range: range.to_string(),
            count,
        })
        .collect()
}

// 保留两位小数
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn pending_students(service: &AssignmentService, assignment_id: Uuid) -> Result<Vec<User>> {
    let storage = service.get_storage();
    let assignment = load_assignment(storage, assignment_id)?;
    let course = load_course(storage, assignment.course_id())?;
    let submissions = storage.list_submissions_by_assignment(assignment_id)?;
    get_pending_students(&course, &assignment, &submissions)
}

pub fn assignment_statistics(
    service: &AssignmentService,
    assignment_id: Uuid,
) -> Result<AssignmentStatistics> {
    let storage = service.get_storage();
    let assignment = load_assignment(storage, assignment_id)?;
    let course = load_course(storage, assignment.course_id())?;
    let submissions = storage.list_submissions_by_assignment(assignment_id)?;
    get_assignment_statistics(&course, &assignment, &submissions)
}
