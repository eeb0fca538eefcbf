//! Drone flight model and checkpoint racing shared by the headless host and
//! any front end.
//!
//! This crate intentionally avoids engine types beyond `bevy_math` vectors. It
//! exposes plain value snapshots a renderer can copy out each frame and a
//! serializable course schema the host can load from configuration.

mod math;
pub use math::{Attitude, Quatf, Vec3f};
mod spec;
pub use spec::{CheckpointSpec, CourseSpec};
mod error;
pub use error::{CourseError, SpecError};

pub mod builtins;

pub mod flight_physics;
pub use flight_physics::{
    step_drone, step_drone_dbg, ControlInputs, DroneKinematics, FlightIntegrator,
    FlightStepDebug, KinematicSnapshot,
};

mod drone_specs;
pub use drone_specs::dronespecs;
pub use drone_specs::DronePhysicsSpec;

pub mod controls;
pub use controls::{PilotSettings, Stick, StickInput};

pub mod clock;
pub use clock::{Clock, MonotonicClock, SimClock};

pub mod race;
pub use race::{Checkpoint, CollisionResult, RaceState, RaceTrack};

pub mod session;
pub use session::{FrameReport, GameMode, Session};
