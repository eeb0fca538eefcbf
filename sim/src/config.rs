use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use flight::{CourseSpec, DronePhysicsSpec, GameMode, PilotSettings};
use serde::{Deserialize, Serialize};

use crate::args::Args;
use crate::autopilot::AutopilotGains;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub physics: DronePhysicsSpec,
    pub pilot: PilotSettings,
    /// Custom course; the builtin city route when absent.
    pub course: Option<CourseSpec>,
    pub autopilot: AutopilotGains,
    pub run: RunSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunSettings {
    pub tick_hz: u32,
    /// Sim-time budget per race (or for the whole free flight).
    pub max_seconds: f32,
    pub races: u32,
    pub mode: GameMode,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self { tick_hz: 60, max_seconds: 180.0, races: 1, mode: GameMode::Race }
    }
}

impl RunSettings {
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_hz.max(1) as f32
    }

    pub fn max_ticks(&self) -> u64 {
        (self.max_seconds.max(0.0) * self.tick_hz.max(1) as f32).ceil() as u64
    }
}

impl Config {
    /// Command-line flags win over the file.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(races) = args.races {
            self.run.races = races;
        }
        if let Some(mode) = args.mode {
            self.run.mode = mode.into();
        }
        if let Some(hz) = args.tick_hz {
            self.run.tick_hz = hz;
        }
    }
}

pub fn load_config(path: &Option<PathBuf>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: Config =
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;

    cfg.physics.validate().context("invalid [physics] section")?;
    if let Some(course) = &cfg.course {
        course.validate().context("invalid [course] section")?;
    }
    cfg.autopilot.validate().context("invalid [autopilot] section")?;
    anyhow::ensure!(cfg.run.tick_hz > 0, "run.tick_hz must be positive");
    Ok(cfg)
}
