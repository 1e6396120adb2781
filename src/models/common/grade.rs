use serde::{Deserialize, Serialize};

use crate::errors::{ClassroomError, Result};

/// 成绩（值对象）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GradeRecord")]
pub struct Grade {
    points: f64,
    max_points: f64,
}

#[derive(Deserialize)]
struct GradeRecord {
    points: f64,
    max_points: f64,
}

impl TryFrom<GradeRecord> for Grade {
    type Error = ClassroomError;

    fn try_from(record: GradeRecord) -> Result<Self> {
        Grade::new(record.points, record.max_points)
    }
}

impl Grade {
    pub fn new(points: f64, max_points: f64) -> Result<Self> {
        if !points.is_finite() || !max_points.is_finite() {
            return Err(ClassroomError::validation("Grade values must be finite"));
        }
        if points < 0.0 || max_points <= 0.0 {
            return Err(ClassroomError::validation("Invalid grade values"));
        }
        if points > max_points {
            return Err(ClassroomError::validation(
                "Points cannot exceed max points",
            ));
        }
        Ok(Self { points, max_points })
    }

    pub fn points(&self) -> f64 {
        self.points
    }

    pub fn max_points(&self) -> f64 {
        self.max_points
    }

    pub fn percentage(&self) -> f64 {
        self.points / self.max_points * 100.0
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} ({:.1}%)",
            self.points,
            self.max_points,
            self.percentage()
        )
    }
}
