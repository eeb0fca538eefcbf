//! Headless host for the flight and race core: loads config, flies the course
//! with an autopilot at a fixed step and reports results.

mod args;
pub use args::{Args, ModeArg};
mod config;
pub use config::{load_config, Config, RunSettings};
pub mod autopilot;
pub use autopilot::{Autopilot, AutopilotGains};
mod runner;
pub use runner::{build_session, run, FreeFlyOutcome, RaceOutcome, RunSummary};
