use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::{ClassroomError, Result};
use crate::models::assignments::entities::Assignment;
use crate::models::common::Grade;
use crate::models::courses::entities::Course;
use crate::models::users::entities::User;
use crate::runtime::DomainContext;

// 提交状态；"未提交" 不落地为状态，即不存在 Submission
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Submitted, // 按时提交
    Late,      // 迟交
    Graded,    // 已评分（终态）
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Submitted => write!(f, "submitted"),
            SubmissionStatus::Late => write!(f, "late"),
            SubmissionStatus::Graded => write!(f, "graded"),
        }
    }
}

/// 学生对某次作业的提交（聚合根）
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    id: Uuid,
    assignment_id: Uuid,
    student: User,
    content: String,
    submitted_at: DateTime<Utc>,
    status: SubmissionStatus,
    grade: Option<Grade>,
    feedback: Option<String>,
    graded_by: Option<Uuid>,
    graded_at: Option<DateTime<Utc>>,
}

impl Submission {
    /// 唯一的创建入口
    ///
    /// `existing` 为存储中该学生对该作业已有的提交（若有）；
    /// 每个 (学生, 作业) 最多一份提交。
    pub fn create_submission(
        assignment: &Assignment,
        course: &Course,
        student: &User,
        content: impl Into<String>,
        existing: Option<&Submission>,
        ctx: &DomainContext<'_>,
    ) -> Result<Self> {
        assignment.ensure_course(course)?;

        // 资格判断与迟交判断使用同一时刻
        let submitted_at = ctx.now();
        if !assignment.can_submit_at(course, student, submitted_at) {
            return Err(ClassroomError::not_eligible(format!(
                "Student {} cannot submit for this assignment",
                student.name()
            )));
        }
        if existing.is_some_and(|s| s.assignment_id == assignment.id() && &s.student == student) {
            return Err(ClassroomError::already_submitted(
                "Assignment already submitted",
            ));
        }

        let status = if assignment.is_past_due_at(submitted_at) {
            SubmissionStatus::Late
        } else {
            SubmissionStatus::Submitted
        };

        debug!(
            "Student {} submitted assignment {} ({})",
            student.id(),
            assignment.id(),
            status
        );

        Ok(Self {
            id: ctx.next_id(),
            assignment_id: assignment.id(),
            student: student.clone(),
            content: content.into(),
            submitted_at,
            status,
            grade: None,
            feedback: None,
            graded_by: None,
            graded_at: None,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn assignment_id(&self) -> Uuid {
        self.assignment_id
    }

    pub fn student(&self) -> &User {
        &self.student
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn grade(&self) -> Option<&Grade> {
        self.grade.as_ref()
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    pub fn graded_by(&self) -> Option<Uuid> {
        self.graded_by
    }

    pub fn graded_at(&self) -> Option<DateTime<Utc>> {
        self.graded_at
    }

    /// 教师评分；评分后状态不可回退
    pub fn add_grade(
        &mut self,
        assignment: &Assignment,
        course: &Course,
        graded_by: &User,
        points: f64,
        feedback: impl Into<String>,
        ctx: &DomainContext<'_>,
    ) -> Result<()> {
        if assignment.id() != self.assignment_id {
            return Err(ClassroomError::validation(format!(
                "Submission {} does not belong to assignment {}",
                self.id,
                assignment.id()
            )));
        }
        assignment.ensure_course(course)?;

        if !course.is_teacher(graded_by) {
            return Err(ClassroomError::unauthorized(
                "Only teachers can grade submissions",
            ));
        }
        // 同一课程内角色唯一，正常情况下不会命中
        if graded_by == &self.student {
            return Err(ClassroomError::invalid_operation(
                "Cannot grade own submission",
            ));
        }
        if self.is_graded() {
            return Err(ClassroomError::invalid_state(
                "Submission has already been graded",
            ));
        }

        let grade = Grade::new(points, assignment.max_points())?;

        self.grade = Some(grade);
        self.feedback = Some(feedback.into());
        self.graded_by = Some(graded_by.id());
        self.graded_at = Some(ctx.now());
        self.status = SubmissionStatus::Graded;
        debug!("Submission {} graded by {}: {}", self.id, graded_by.id(), grade);
        Ok(())
    }

    pub fn is_graded(&self) -> bool {
        self.status == SubmissionStatus::Graded
    }

    /// 迟交判断：状态为 late，或提交时间晚于截止时间（评分后依然成立）
    pub fn is_late(&self, assignment: &Assignment) -> bool {
        self.status == SubmissionStatus::Late || self.submitted_at > assignment.due_date()
    }

    /// 百分制成绩，未评分时为 None
    pub fn percentage(&self) -> Option<f64> {
        self.grade.as_ref().map(Grade::percentage)
    }
}

impl PartialEq for Submission {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Submission {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assignments::requests::NewAssignment;
    use crate::models::common::AccessCode;
    use crate::models::courses::requests::NewCourse;
    use crate::runtime::{Clock, FixedClock, IdGenerator, SequentialIdGenerator};
    use chrono::{Duration, TimeZone};

    struct Fixture {
        clock: FixedClock,
        ids: SequentialIdGenerator,
        teacher: User,
        student: User,
        other_student: User,
        course: Course,
    }

    impl Fixture {
        fn new() -> Self {
            let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap());
            let ids = SequentialIdGenerator::starting_at(500);
            let teacher = User::new(Uuid::from_u128(1), "Dr. Taylor", "taylor@school.edu");
            let student = User::new(Uuid::from_u128(2), "Sam Parker", "sam@student.edu");
            let other_student = User::new(Uuid::from_u128(3), "Jamie Stone", "jamie@student.edu");

            let ctx = DomainContext::new(&clock, &ids);
            let mut course = Course::new(
                Uuid::from_u128(100),
                NewCourse {
                    name: "Software Engineering".into(),
                    description: "Domain-Driven Design in practice".into(),
                    access_code: AccessCode::new("ENG123").unwrap(),
                    max_students: None,
                },
                &teacher,
                &ctx,
            );
            course.activate().unwrap();
            course.enroll_student(&student, "ENG123", &ctx).unwrap();
            course.enroll_student(&other_student, "ENG123", &ctx).unwrap();

            Self {
                clock,
                ids,
                teacher,
                student,
                other_student,
                course,
            }
        }

        fn ctx(&self) -> DomainContext<'_> {
            DomainContext::new(&self.clock, &self.ids)
        }

        fn assignment(&self, due_in: Duration, allow_late: bool, max_points: f64) -> Assignment {
            Assignment::new(
                self.ids.next_id(),
                &self.course,
                NewAssignment {
                    title: "Repositories".into(),
                    description: "Describe persistence boundaries".into(),
                    max_points,
                    due_date: self.clock.now() + due_in,
                    allow_late_submissions: allow_late,
                },
                &self.teacher,
                &self.ctx(),
            )
            .unwrap()
        }

        fn submit(&self, assignment: &Assignment) -> Submission {
            Submission::create_submission(
                assignment,
                &self.course,
                &self.student,
                "Repository pattern write-up",
                None,
                &self.ctx(),
            )
            .unwrap()
        }
    }

    #[test]
    fn test_on_time_submission() {
        let fx = Fixture::new();
        let assignment = fx.assignment(Duration::days(7), false, 100.0);
        let submission = fx.submit(&assignment);

        assert_eq!(submission.status(), SubmissionStatus::Submitted);
        assert_eq!(submission.submitted_at(), fx.clock.now());
        assert_eq!(submission.assignment_id(), assignment.id());
        assert!(!submission.is_late(&assignment));
        assert!(!submission.is_graded());
    }

    #[test]
    fn test_late_submission_allowed() {
        let fx = Fixture::new();
        let assignment = fx.assignment(-Duration::days(1), true, 20.0);
        let submission = Submission::create_submission(
            &assignment,
            &fx.course,
            &fx.student,
            "Late but allowed",
            None,
            &fx.ctx(),
        )
        .unwrap();

        assert_eq!(submission.status(), SubmissionStatus::Late);
        assert!(submission.is_late(&assignment));
    }

    // 每次读取后前进一秒
    struct TickingClock {
        now: std::cell::Cell<DateTime<Utc>>,
    }

    impl Clock for TickingClock {
        fn now(&self) -> DateTime<Utc> {
            let now = self.now.get();
            self.now.set(now + Duration::seconds(1));
            now
        }
    }

    #[test]
    fn test_submission_reads_clock_once() {
        let fx = Fixture::new();
        let assignment = fx.assignment(Duration::zero(), false, 10.0);
        let clock = TickingClock {
            now: std::cell::Cell::new(assignment.due_date()),
        };
        let ctx = DomainContext::new(&clock, &fx.ids);

        let submission = Submission::create_submission(
            &assignment,
            &fx.course,
            &fx.student,
            "Right at the deadline",
            None,
            &ctx,
        )
        .unwrap();
        assert_eq!(submission.status(), SubmissionStatus::Submitted);
        assert_eq!(submission.submitted_at(), assignment.due_date());
        assert!(!submission.is_late(&assignment));
    }

    #[test]
    fn test_late_submission_rejected() {
        let fx = Fixture::new();
        let assignment = fx.assignment(-Duration::days(1), false, 10.0);
        let err = Submission::create_submission(
            &assignment,
            &fx.course,
            &fx.student,
            "Should fail because late",
            None,
            &fx.ctx(),
        )
        .unwrap_err();
        assert!(matches!(err, ClassroomError::NotEligible(_)));
    }

    #[test]
    fn test_teacher_cannot_submit() {
        let fx = Fixture::new();
        let assignment = fx.assignment(Duration::days(1), true, 10.0);
        let err = Submission::create_submission(
            &assignment,
            &fx.course,
            &fx.teacher,
            "Teachers do not submit",
            None,
            &fx.ctx(),
        )
        .unwrap_err();
        assert!(matches!(err, ClassroomError::NotEligible(_)));
    }

    #[test]
    fn test_second_submission_rejected() {
        let fx = Fixture::new();
        let assignment = fx.assignment(Duration::days(1), false, 10.0);
        let first = fx.submit(&assignment);

        let err = Submission::create_submission(
            &assignment,
            &fx.course,
            &fx.student,
            "Again",
            Some(&first),
            &fx.ctx(),
        )
        .unwrap_err();
        assert!(matches!(err, ClassroomError::AlreadySubmitted(_)));

        // 其他学生的提交不影响
        let other = Submission::create_submission(
            &assignment,
            &fx.course,
            &fx.other_student,
            "Mine",
            Some(&first),
            &fx.ctx(),
        );
        assert!(other.is_ok());
    }

    #[test]
    fn test_teacher_grades_submission() {
        let fx = Fixture::new();
        let assignment = fx.assignment(Duration::days(1), false, 50.0);
        let mut submission = fx.submit(&assignment);
        fx.clock.advance(Duration::hours(2));

        submission
            .add_grade(&assignment, &fx.course, &fx.teacher, 40.0, "Solid explanation", &fx.ctx())
            .unwrap();

        assert!(submission.is_graded());
        assert_eq!(submission.grade().map(Grade::points), Some(40.0));
        assert_eq!(submission.percentage(), Some(80.0));
        assert_eq!(submission.feedback(), Some("Solid explanation"));
        assert_eq!(submission.graded_by(), Some(fx.teacher.id()));
        assert_eq!(submission.graded_at(), Some(fx.clock.now()));
    }

    #[test]
    fn test_non_teacher_grading_leaves_state_unchanged() {
        let fx = Fixture::new();
        let assignment = fx.assignment(Duration::days(1), false, 50.0);
        let mut submission = fx.submit(&assignment);

        for grader in [&fx.student, &fx.other_student] {
            let err = submission
                .add_grade(&assignment, &fx.course, grader, 50.0, "", &fx.ctx())
                .unwrap_err();
            assert!(matches!(err, ClassroomError::Unauthorized(_)));
        }
        assert_eq!(submission.status(), SubmissionStatus::Submitted);
        assert!(submission.grade().is_none());
        assert!(submission.feedback().is_none());
    }

    #[test]
    fn test_invalid_points_propagate() {
        let fx = Fixture::new();
        let assignment = fx.assignment(Duration::days(1), false, 50.0);
        let mut submission = fx.submit(&assignment);

        for points in [-1.0, 51.0] {
            let err = submission
                .add_grade(&assignment, &fx.course, &fx.teacher, points, "", &fx.ctx())
                .unwrap_err();
            assert!(matches!(err, ClassroomError::Validation(_)));
        }
        assert!(!submission.is_graded());
    }

    #[test]
    fn test_grading_is_monotonic() {
        let fx = Fixture::new();
        let assignment = fx.assignment(Duration::days(1), false, 100.0);
        let mut submission = fx.submit(&assignment);
        submission
            .add_grade(&assignment, &fx.course, &fx.teacher, 95.0, "Excellent", &fx.ctx())
            .unwrap();

        let err = submission
            .add_grade(&assignment, &fx.course, &fx.teacher, 10.0, "Regrade", &fx.ctx())
            .unwrap_err();
        assert!(matches!(err, ClassroomError::InvalidState(_)));
        assert!(submission.is_graded());
        assert_eq!(submission.percentage(), Some(95.0));
        assert_eq!(submission.feedback(), Some("Excellent"));
    }

    #[test]
    fn test_late_flag_survives_grading() {
        let fx = Fixture::new();
        let assignment = fx.assignment(-Duration::hours(1), true, 10.0);
        let mut submission = fx.submit(&assignment);
        submission
            .add_grade(&assignment, &fx.course, &fx.teacher, 7.0, "", &fx.ctx())
            .unwrap();

        assert_eq!(submission.status(), SubmissionStatus::Graded);
        assert!(submission.is_late(&assignment));
    }

    #[test]
    fn test_mismatched_assignment_rejected() {
        let fx = Fixture::new();
        let assignment = fx.assignment(Duration::days(1), false, 10.0);
        let other = fx.assignment(Duration::days(1), false, 10.0);
        let mut submission = fx.submit(&assignment);

        let err = submission
            .add_grade(&other, &fx.course, &fx.teacher, 5.0, "", &fx.ctx())
            .unwrap_err();
        assert!(matches!(err, ClassroomError::Validation(_)));
        assert!(!submission.is_graded());
    }
}
