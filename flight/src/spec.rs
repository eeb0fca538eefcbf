use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CourseError;
use crate::math::Vec3f;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointSpec {
    pub id: String,
    pub position: Vec3f, // capture sphere center in world coordinates
    pub radius: f32,     // capture sphere radius (m)
    /// Marks the terminal checkpoint. Only the last entry may set it.
    #[serde(default)]
    pub is_finish: bool,
}

/// An ordered course. Entry order is race order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSpec {
    pub checkpoints: Vec<CheckpointSpec>,
}

impl CourseSpec {
    pub fn validate(&self) -> Result<(), CourseError> {
        let Some(last) = self.checkpoints.last() else {
            return Err(CourseError::Empty);
        };

        let mut seen = HashSet::new();
        for (i, cp) in self.checkpoints.iter().enumerate() {
            if !seen.insert(cp.id.as_str()) {
                return Err(CourseError::DuplicateId(cp.id.clone()));
            }
            if !cp.position.is_finite() {
                return Err(CourseError::NonFinitePosition { id: cp.id.clone() });
            }
            if !cp.radius.is_finite() || cp.radius <= 0.0 {
                return Err(CourseError::InvalidRadius { id: cp.id.clone(), radius: cp.radius });
            }
            if cp.is_finish && i + 1 != self.checkpoints.len() {
                return Err(CourseError::FinishNotLast { id: cp.id.clone() });
            }
        }

        if !last.is_finish {
            return Err(CourseError::MissingFinish);
        }
        Ok(())
    }
}
