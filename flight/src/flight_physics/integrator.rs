use super::dynamics::step_drone_dbg;
use super::types::{ControlInputs, DroneKinematics, FlightStepDebug, KinematicSnapshot};
use crate::{DronePhysicsSpec, SpecError, Vec3f};

/// Owns one drone's kinematic state and advances it once per frame.
#[derive(Debug, Clone)]
pub struct FlightIntegrator {
    spec: DronePhysicsSpec,
    state: DroneKinematics,
}

impl Default for FlightIntegrator {
    fn default() -> Self {
        let spec = DronePhysicsSpec::default();
        let state = DroneKinematics::at_rest(spec.spawn);
        Self { spec, state }
    }
}

impl FlightIntegrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spec(spec: DronePhysicsSpec) -> Result<Self, SpecError> {
        spec.validate()?;
        let state = DroneKinematics::at_rest(spec.spawn);
        Ok(Self { spec, state })
    }

    /// Advance by `dt` seconds and return a copy of the new state.
    /// Out-of-range inputs are clamped; `dt <= 0` only returns the snapshot.
    pub fn update(&mut self, controls: ControlInputs, dt: f32) -> KinematicSnapshot {
        self.update_dbg(controls, dt, None)
    }

    pub fn update_dbg(
        &mut self,
        controls: ControlInputs,
        dt: f32,
        dbg: Option<&mut FlightStepDebug>,
    ) -> KinematicSnapshot {
        step_drone_dbg(&self.spec, controls, &mut self.state, dt, dbg);
        self.state.snapshot()
    }

    /// Back to rest at `position`, or at the spec's spawn point when `None`
    /// (or when the given position is not finite).
    pub fn reset(&mut self, position: Option<Vec3f>) {
        let position = position
            .filter(|p| p.is_finite())
            .unwrap_or(self.spec.spawn);
        self.state = DroneKinematics::at_rest(position);
    }

    pub fn snapshot(&self) -> KinematicSnapshot {
        self.state.snapshot()
    }

    pub fn state(&self) -> &DroneKinematics {
        &self.state
    }

    pub fn spec(&self) -> &DronePhysicsSpec {
        &self.spec
    }
}
