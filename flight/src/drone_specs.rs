use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::math::Vec3f;

/// Physics parameters for a drone airframe.
///
/// Every field has a default so a config file may override only the values it
/// cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DronePhysicsSpec {
    /// Airframe mass (kg).
    pub mass: f32,
    /// Dimensionless quadratic drag coefficient.
    pub drag_coefficient: f32,
    /// Signed vertical acceleration (m/s²). Negative pulls toward world -Y.
    pub gravity: f32,
    /// Thrust at full throttle (N), applied along the body up axis.
    pub max_thrust: f32,
    /// Hard cap on speed (m/s).
    pub max_speed: f32,
    /// Air density (kg/m³).
    pub air_density: f32,
    /// Lowest permitted altitude; the ground plane floor.
    pub ground_clearance: f32,
    /// Attitude rate per unit stick deflection (rad/s).
    pub rotation_gain: f32,
    /// Symmetric bound on pitch and roll (rad). Yaw is unbounded.
    pub attitude_limit: f32,
    /// Position used by `reset` when none is given.
    pub spawn: Vec3f,
}

impl Default for DronePhysicsSpec {
    fn default() -> Self {
        dronespecs::racer_spec()
    }
}

impl DronePhysicsSpec {
    /// Throttle at which thrust exactly cancels weight with a level attitude.
    pub fn hover_throttle(&self) -> f32 {
        if self.max_thrust <= 0.0 {
            return 0.0;
        }
        self.mass * self.gravity.abs() / self.max_thrust
    }

    pub fn validate(&self) -> Result<(), SpecError> {
        let scalars = [
            ("mass", self.mass),
            ("drag_coefficient", self.drag_coefficient),
            ("gravity", self.gravity),
            ("max_thrust", self.max_thrust),
            ("max_speed", self.max_speed),
            ("air_density", self.air_density),
            ("ground_clearance", self.ground_clearance),
            ("rotation_gain", self.rotation_gain),
            ("attitude_limit", self.attitude_limit),
            ("spawn.x", self.spawn.x),
            ("spawn.y", self.spawn.y),
            ("spawn.z", self.spawn.z),
        ];
        if let Some(&(field, value)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SpecError::NonFinite { field, value });
        }

        for (field, value) in [
            ("mass", self.mass),
            ("max_speed", self.max_speed),
            ("attitude_limit", self.attitude_limit),
        ] {
            if value <= 0.0 {
                return Err(SpecError::NotPositive { field, value });
            }
        }
        for (field, value) in [
            ("drag_coefficient", self.drag_coefficient),
            ("max_thrust", self.max_thrust),
            ("air_density", self.air_density),
            ("rotation_gain", self.rotation_gain),
        ] {
            if value < 0.0 {
                return Err(SpecError::Negative { field, value });
            }
        }
        if self.gravity >= 0.0 {
            return Err(SpecError::GravityNotDownward(self.gravity));
        }
        Ok(())
    }
}

pub mod dronespecs {
    use super::*;

    // Small racing quad, arcade tuning (SI units)
    pub fn racer_spec() -> DronePhysicsSpec {
        DronePhysicsSpec {
            mass: 1.5,
            drag_coefficient: 0.1,
            gravity: -9.81,
            max_thrust: 20.0,
            max_speed: 50.0,
            air_density: 1.225, // sea level
            ground_clearance: 0.5,
            rotation_gain: 2.0,
            attitude_limit: std::f32::consts::FRAC_PI_3,
            spawn: Vec3f::new(0.0, 10.0, 0.0),
        }
    }
}
