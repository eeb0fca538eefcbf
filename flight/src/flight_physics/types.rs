use serde::{Deserialize, Serialize};

use super::util::sanitize;
use crate::{Attitude, Vec3f};

/// Per-frame pilot inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInputs {
    pub throttle: f32, // 0..1
    /// Pitch rate command in [-1, 1]. Positive tips the up axis toward +Z.
    pub pitch: f32,
    /// Roll rate command in [-1, 1]. Positive tips the up axis toward -X.
    pub roll: f32,
    pub yaw: f32, // -1..1
}

impl ControlInputs {
    pub const IDLE: Self = Self { throttle: 0.0, pitch: 0.0, roll: 0.0, yaw: 0.0 };

    /// Inputs clamped to their contract ranges. Non-finite values become 0 so
    /// they never reach the persistent kinematic state.
    pub fn sanitized(self) -> Self {
        Self {
            throttle: sanitize(self.throttle, 0.0, 1.0),
            pitch: sanitize(self.pitch, -1.0, 1.0),
            roll: sanitize(self.roll, -1.0, 1.0),
            yaw: sanitize(self.yaw, -1.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DroneKinematics {
    pub position: Vec3f,
    pub velocity: Vec3f,
    /// Acceleration from the last step. Transient; recomputed every step.
    pub acceleration: Vec3f,
    pub rotation: Attitude,
    /// (pitch, yaw, roll) rates in rad/s, set directly from the stick each step.
    pub angular_velocity: Vec3f,
}

impl DroneKinematics {
    pub fn at_rest(position: Vec3f) -> Self {
        Self {
            position,
            velocity: Vec3f::ZERO,
            acceleration: Vec3f::ZERO,
            rotation: Attitude::ZERO,
            angular_velocity: Vec3f::ZERO,
        }
    }

    pub fn snapshot(&self) -> KinematicSnapshot {
        KinematicSnapshot {
            position: self.position,
            rotation: self.rotation,
            velocity: self.velocity,
            speed: self.velocity.length(),
        }
    }
}

/// Copy of the drone state handed to renderers and the race track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicSnapshot {
    pub position: Vec3f,
    pub rotation: Attitude,
    pub velocity: Vec3f,
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FlightStepDebug {
    pub dt: f32,
    pub inputs: ControlInputs,
    // Body up axis in world at the start of the step
    pub up_axis: Vec3f,
    // Forces (world, N)
    pub thrust_n: f32,
    pub gravity_force: Vec3f,
    pub thrust_force: Vec3f,
    pub drag_force: Vec3f,
    pub net_force: Vec3f,
    // Post-integration clamps
    pub speed_clamped: bool,
    pub ground_contact: bool,
}
