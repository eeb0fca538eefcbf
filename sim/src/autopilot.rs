//! Waypoint autopilot that flies the drone through its stick interface.
//!
//! Cascade: position error → desired horizontal velocity → desired tilt →
//! rate command. Altitude is a PD loop on top of a hover feed-forward. Yaw is
//! held at zero so pitch always tilts toward +Z and roll toward -X.

use anyhow::{ensure, Result};
use flight::{ControlInputs, DroneKinematics, DronePhysicsSpec, Vec3f};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutopilotGains {
    /// Horizontal speed cap (m/s).
    pub cruise_speed: f32,
    pub position_gain: f32,
    pub velocity_gain: f32,
    /// Cap on commanded horizontal and vertical acceleration (m/s²).
    pub max_accel: f32,
    /// Attitude error to rate gain (1/s).
    pub attitude_gain: f32,
    pub altitude_kp: f32,
    pub altitude_kd: f32,
}

impl Default for AutopilotGains {
    fn default() -> Self {
        Self {
            cruise_speed: 6.0,
            position_gain: 0.8,
            velocity_gain: 1.5,
            max_accel: 3.0,
            attitude_gain: 4.0,
            altitude_kp: 2.0,
            altitude_kd: 2.0,
        }
    }
}

impl AutopilotGains {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("cruise_speed", self.cruise_speed),
            ("position_gain", self.position_gain),
            ("velocity_gain", self.velocity_gain),
            ("max_accel", self.max_accel),
            ("attitude_gain", self.attitude_gain),
            ("altitude_kp", self.altitude_kp),
            ("altitude_kd", self.altitude_kd),
        ];
        for (field, value) in fields {
            ensure!(value.is_finite(), "{field} must be finite, got {value}");
            ensure!(value >= 0.0, "{field} must not be negative, got {value}");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot {
    gains: AutopilotGains,
}

impl Autopilot {
    pub fn new(gains: AutopilotGains) -> Self {
        Self { gains }
    }

    pub fn gains(&self) -> &AutopilotGains {
        &self.gains
    }

    /// Controls that steer `state` toward `target`. Always within the input
    /// contract ranges.
    pub fn command(
        &self,
        spec: &DronePhysicsSpec,
        state: &DroneKinematics,
        target: Vec3f,
    ) -> ControlInputs {
        let g = &self.gains;
        // Unvalidated gains must not flip a clamp range
        let cruise_speed = g.cruise_speed.max(0.0);
        let max_accel = g.max_accel.max(0.0);
        let gravity = spec.gravity.abs().max(1e-3);
        let rate_gain = spec.rotation_gain.max(1e-3);

        // Horizontal: desired velocity toward the target, then the tilt that
        // produces the acceleration to reach it.
        let to_target = target - state.position;
        let horizontal = Vec3f::new(to_target.x, 0.0, to_target.z);
        let v_desired = (horizontal * g.position_gain).clamp_length_max(cruise_speed);
        let v_horizontal = Vec3f::new(state.velocity.x, 0.0, state.velocity.z);
        let accel = ((v_desired - v_horizontal) * g.velocity_gain).clamp_length_max(max_accel);

        // Stay well inside the airframe's attitude limit
        let tilt_limit = (spec.attitude_limit * 0.5).max(0.0);
        let pitch_target = (accel.z / gravity).atan().clamp(-tilt_limit, tilt_limit);
        let roll_target = (-accel.x / gravity).atan().clamp(-tilt_limit, tilt_limit);

        let rate = |target: f32, current: f32| {
            ((target - current) * g.attitude_gain / rate_gain).clamp(-1.0, 1.0)
        };
        let pitch = rate(pitch_target, state.rotation.pitch);
        let roll = rate(roll_target, state.rotation.roll);
        let yaw = rate(0.0, state.rotation.yaw);

        // Vertical: PD on altitude plus hover, scaled for the current tilt
        let a_up = (g.altitude_kp * to_target.y - g.altitude_kd * state.velocity.y)
            .clamp(-max_accel, max_accel);
        let up_axis = state.rotation.to_quat() * Vec3f::Y;
        let lift_share = up_axis.y.max(0.5);
        let throttle = if spec.max_thrust > 0.0 {
            spec.mass * (a_up + gravity) / (spec.max_thrust * lift_share)
        } else {
            0.0
        };

        ControlInputs { throttle, pitch, roll, yaw }.sanitized()
    }
}
