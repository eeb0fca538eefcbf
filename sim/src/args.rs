use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use flight::GameMode;

#[derive(Parser, Debug, Clone)]
#[command(name = "drone-sim")]
#[command(about = "Headless drone racing simulator", long_about = None)]
pub struct Args {
    /// Path to a TOML config file (defaults are used when omitted)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Number of timed races to fly back to back
    #[arg(long)]
    pub races: Option<u32>,
    /// Race the course or fly it untimed
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,
    /// Fixed simulation rate (ticks per second)
    #[arg(long)]
    pub tick_hz: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Race,
    FreeFly,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Race => GameMode::Race,
            ModeArg::FreeFly => GameMode::FreeFly,
        }
    }
}
