use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::errors::{ClassroomError, Result};
use crate::models::assignments::requests::NewAssignment;
use crate::models::courses::entities::Course;
use crate::models::enrollments::entities::CourseRole;
use crate::models::users::entities::User;
use crate::runtime::{Clock, DomainContext};

/// 作业聚合根
///
/// 只保存所属课程的 ID；涉及成员身份的判断都需要调用方传入该课程。
#[derive(Debug, Clone, Serialize)]
pub struct Assignment {
    id: Uuid,
    course_id: Uuid,
    title: String,
    description: String,
    created_by: User,
    max_points: f64,
    due_date: DateTime<Utc>,
    allow_late_submissions: bool,
    created_at: DateTime<Utc>,
}

impl Assignment {
    /// 创建作业，创建者必须是该课程的教师
    pub fn new(
        id: Uuid,
        course: &Course,
        assignment: NewAssignment,
        creator: &User,
        ctx: &DomainContext<'_>,
    ) -> Result<Self> {
        if !course.is_teacher(creator) {
            return Err(ClassroomError::unauthorized(
                "Only teachers can create assignments",
            ));
        }
        if !assignment.max_points.is_finite() || assignment.max_points <= 0.0 {
            return Err(ClassroomError::validation(
                "Max points must be a positive number",
            ));
        }

        debug!("Assignment {} created in course {}", id, course.id());

        Ok(Self {
            id,
            course_id: course.id(),
            title: assignment.title,
            description: assignment.description,
            created_by: creator.clone(),
            max_points: assignment.max_points,
            due_date: assignment.due_date,
            allow_late_submissions: assignment.allow_late_submissions,
            created_at: ctx.now(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn course_id(&self) -> Uuid {
        self.course_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_by(&self) -> &User {
        &self.created_by
    }

    pub fn max_points(&self) -> f64 {
        self.max_points
    }

    pub fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    pub fn allow_late_submissions(&self) -> bool {
        self.allow_late_submissions
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn belongs_to(&self, course: &Course) -> bool {
        self.course_id == course.id()
    }

    pub(crate) fn ensure_course(&self, course: &Course) -> Result<()> {
        if self.belongs_to(course) {
            Ok(())
        } else {
            Err(ClassroomError::validation(format!(
                "Assignment {} does not belong to course {}",
                self.id,
                course.id()
            )))
        }
    }

    pub fn is_past_due(&self, clock: &dyn Clock) -> bool {
        self.is_past_due_at(clock.now())
    }

    pub fn is_past_due_at(&self, now: DateTime<Utc>) -> bool {
        now > self.due_date
    }

    pub fn is_upcoming(&self, clock: &dyn Clock) -> bool {
        self.due_date > clock.now()
    }

    /// 判断用户当前能否提交
    pub fn can_submit(&self, course: &Course, user: &User, clock: &dyn Clock) -> bool {
        self.can_submit_at(course, user, clock.now())
    }

    /// 以给定时刻判断能否提交
    pub fn can_submit_at(&self, course: &Course, user: &User, now: DateTime<Utc>) -> bool {
        if !self.belongs_to(course) {
            return false;
        }
        if course.get_user_role(user) != Some(CourseRole::Student) {
            return false;
        }
        if self.is_past_due_at(now) && !self.allow_late_submissions {
            return false;
        }
        true
    }
}

impl PartialEq for Assignment {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Assignment {}
