use std::time::Duration;

use anyhow::Result;
use flight::{FlightIntegrator, GameMode, RaceTrack, Session, SimClock, Vec3f};
use tracing::{debug, info, warn};

use crate::autopilot::Autopilot;
use crate::config::Config;

#[derive(Debug, Clone, PartialEq)]
pub struct RaceOutcome {
    /// 1-based race number within the run.
    pub race: u32,
    pub completed: bool,
    pub elapsed: Option<Duration>,
    pub checkpoints_passed: usize,
    pub sim_seconds: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FreeFlyOutcome {
    pub sim_seconds: f32,
    pub distance_m: f32,
    pub max_speed: f32,
    pub max_altitude: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub races: Vec<RaceOutcome>,
    pub free_fly: Option<FreeFlyOutcome>,
    pub best_time: Option<Duration>,
}

pub fn build_session(cfg: &Config) -> Result<Session> {
    let flight = FlightIntegrator::with_spec(cfg.physics.clone())?;
    let race = match &cfg.course {
        Some(course) => RaceTrack::from_spec(course, SimClock::default())?,
        None => RaceTrack::with_clock(SimClock::default()),
    };
    Ok(Session::new(flight, race, cfg.pilot))
}

/// Fly the configured run to completion (or until the time budget runs out).
pub fn run(cfg: &Config) -> Result<RunSummary> {
    let mut session = build_session(cfg)?;
    let autopilot = Autopilot::new(cfg.autopilot);
    let mut summary = RunSummary::default();

    match cfg.run.mode {
        GameMode::Race => {
            for race in 1..=cfg.run.races {
                let outcome = fly_race(&mut session, &autopilot, cfg, race);
                summary.races.push(outcome);
            }
        }
        GameMode::FreeFly => {
            summary.free_fly = Some(fly_free(&mut session, &autopilot, cfg));
        }
    }
    summary.best_time = session.race().best_time();
    Ok(summary)
}

fn fly_race(session: &mut Session, autopilot: &Autopilot, cfg: &Config, race: u32) -> RaceOutcome {
    let dt = cfg.run.dt();
    session.start(GameMode::Race);
    let started_at = session.game_time();
    let mut outcome = RaceOutcome {
        race,
        completed: false,
        elapsed: None,
        checkpoints_passed: 0,
        sim_seconds: 0.0,
    };

    for tick in 0..cfg.run.max_ticks() {
        let Some(target) = session.race().current_checkpoint().map(|cp| cp.position()) else {
            break;
        };
        let controls = autopilot.command(session.flight().spec(), session.flight().state(), target);
        let Some(report) = session.tick(controls, dt) else {
            break;
        };
        if tick % u64::from(cfg.run.tick_hz.max(1)) == 0 {
            debug!(tick, pos = ?report.snapshot.position, speed = report.snapshot.speed, "flight");
        }

        let Some(result) = report.race else { continue };
        if let (true, Some(cp)) = (result.passed, &result.checkpoint) {
            outcome.checkpoints_passed += 1;
            info!(race, id = cp.id(), progress = session.race().progress(), "Checkpoint passed");
        }
        if result.completed {
            outcome.completed = true;
            outcome.elapsed = result.elapsed;
            break;
        }
    }

    outcome.sim_seconds = session.game_time() - started_at;
    if !outcome.completed {
        warn!(race, seconds = outcome.sim_seconds, "Race timed out");
        session.pause();
    }
    outcome
}

// Untimed lap of the course gates, looping until the time budget is spent
fn fly_free(session: &mut Session, autopilot: &Autopilot, cfg: &Config) -> FreeFlyOutcome {
    let dt = cfg.run.dt();
    session.start(GameMode::FreeFly);
    let started_at = session.game_time();
    let waypoints: Vec<Vec3f> =
        session.race().all_checkpoints().iter().map(|cp| cp.position()).collect();
    let mut next = 0usize;
    let mut last = session.flight().snapshot();
    let mut outcome = FreeFlyOutcome {
        sim_seconds: 0.0,
        distance_m: 0.0,
        max_speed: 0.0,
        max_altitude: last.position.y,
    };

    for _ in 0..cfg.run.max_ticks() {
        let Some(&target) = waypoints.get(next) else { break };
        let controls = autopilot.command(session.flight().spec(), session.flight().state(), target);
        let Some(report) = session.tick(controls, dt) else { break };
        let snap = report.snapshot;

        outcome.distance_m += snap.position.distance(last.position);
        outcome.max_speed = outcome.max_speed.max(snap.speed);
        outcome.max_altitude = outcome.max_altitude.max(snap.position.y);
        last = snap;

        if snap.position.distance(target) <= 1.0 {
            next = (next + 1) % waypoints.len();
        }
    }

    session.pause();
    outcome.sim_seconds = session.game_time() - started_at;
    outcome
}
