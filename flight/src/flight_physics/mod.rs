mod util;
mod types;
mod forces;
mod dynamics;
mod integrator;

pub use types::{ControlInputs, DroneKinematics, FlightStepDebug, KinematicSnapshot};
pub use dynamics::{step_drone, step_drone_dbg};
pub use integrator::FlightIntegrator;
