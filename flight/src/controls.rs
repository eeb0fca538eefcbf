//! Pilot-side shaping applied to stick input before it reaches the integrator.

use serde::{Deserialize, Serialize};

use crate::ControlInputs;

/// Per-pilot handling preferences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PilotSettings {
    /// Multiplier on pitch, roll and yaw. Throttle is never scaled.
    pub sensitivity: f32,
    pub invert_pitch: bool,
}

impl Default for PilotSettings {
    fn default() -> Self {
        Self { sensitivity: 1.0, invert_pitch: false }
    }
}

impl PilotSettings {
    /// Values pushed past ±1 by a sensitivity above 1 saturate in the integrator.
    pub fn apply(&self, controls: ControlInputs) -> ControlInputs {
        let pitch = if self.invert_pitch { -controls.pitch } else { controls.pitch };
        ControlInputs {
            throttle: controls.throttle,
            pitch: pitch * self.sensitivity,
            roll: controls.roll * self.sensitivity,
            yaw: controls.yaw * self.sensitivity,
        }
    }
}

/// One analog stick, axes in [-1, 1]. `y` is positive when pulled toward the pilot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Stick {
    pub x: f32,
    pub y: f32,
}

/// Mode-2 gamepad layout: throttle and yaw on the left stick, pitch and roll on
/// the right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StickInput {
    pub left: Stick,
    pub right: Stick,
}

impl StickInput {
    pub fn to_controls(self) -> ControlInputs {
        ControlInputs {
            // Stick fully forward (y = -1) is full throttle, centered is half
            throttle: ((1.0 - self.left.y) * 0.5).max(0.0),
            yaw: self.left.x,
            pitch: -self.right.y,
            roll: self.right.x,
        }
    }
}
