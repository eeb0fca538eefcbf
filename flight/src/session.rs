//! One pilot's game session: the single owner of drone and race state.
//!
//! A host frame loop calls [`Session::tick`] once per frame. Race timing runs
//! on simulation time so a paused session does not accumulate race time.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::clock::SimClock;
use crate::{
    CollisionResult, ControlInputs, FlightIntegrator, KinematicSnapshot, PilotSettings, RaceTrack,
    StickInput,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    #[default]
    FreeFly,
    Race,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub snapshot: KinematicSnapshot,
    /// Present in race mode only.
    pub race: Option<CollisionResult>,
}

#[derive(Debug, Clone)]
pub struct Session {
    flight: FlightIntegrator,
    race: RaceTrack<SimClock>,
    pilot: PilotSettings,
    mode: GameMode,
    playing: bool,
    game_time: f32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(
            FlightIntegrator::default(),
            RaceTrack::with_clock(SimClock::default()),
            PilotSettings::default(),
        )
    }
}

impl Session {
    pub fn new(flight: FlightIntegrator, race: RaceTrack<SimClock>, pilot: PilotSettings) -> Self {
        Self { flight, race, pilot, mode: GameMode::FreeFly, playing: false, game_time: 0.0 }
    }

    /// Put the drone back on its spawn point and begin playing in `mode`.
    /// In race mode this also starts a fresh timed run.
    pub fn start(&mut self, mode: GameMode) {
        self.mode = mode;
        self.flight.reset(None);
        match mode {
            GameMode::Race => self.race.start_race(),
            GameMode::FreeFly => self.race.reset(),
        }
        self.playing = true;
        info!(?mode, "session started");
    }

    /// Advance one frame from raw gamepad sticks, shaped by the pilot settings.
    pub fn tick_sticks(&mut self, sticks: StickInput, dt: f32) -> Option<FrameReport> {
        let controls = self.pilot.apply(sticks.to_controls());
        self.tick(controls, dt)
    }

    /// Advance one frame with controls that are already shaped (autopilots,
    /// replays). Returns `None` while paused.
    ///
    /// Completing the race pauses the session, as the finish screen expects.
    pub fn tick(&mut self, controls: ControlInputs, dt: f32) -> Option<FrameReport> {
        if !self.playing {
            return None;
        }

        let snapshot = self.flight.update(controls, dt);
        if dt.is_finite() && dt > 0.0 {
            self.game_time += dt;
            self.race.clock_mut().advance(dt);
        }

        let race = match self.mode {
            GameMode::Race => {
                let result = self.race.check_collision(snapshot.position);
                if result.completed {
                    self.playing = false;
                }
                Some(result)
            }
            GameMode::FreeFly => None,
        };
        Some(FrameReport { snapshot, race })
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn resume(&mut self) {
        self.playing = true;
    }

    /// Stop playing and return to a fresh drone and idle race. Pilot settings
    /// and the best race time survive.
    pub fn reset(&mut self) {
        self.flight.reset(None);
        self.race.reset();
        self.playing = false;
        self.game_time = 0.0;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Seconds of simulated play since the last `reset`.
    pub fn game_time(&self) -> f32 {
        self.game_time
    }

    pub fn flight(&self) -> &FlightIntegrator {
        &self.flight
    }

    pub fn flight_mut(&mut self) -> &mut FlightIntegrator {
        &mut self.flight
    }

    pub fn race(&self) -> &RaceTrack<SimClock> {
        &self.race
    }

    pub fn pilot(&self) -> &PilotSettings {
        &self.pilot
    }

    pub fn set_pilot(&mut self, pilot: PilotSettings) {
        self.pilot = pilot;
    }
}
