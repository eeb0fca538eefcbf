//! Ordered checkpoint racing.
//!
//! Only the checkpoint at the current index can be captured. Flying through a
//! later gate first registers nothing; the course must be flown in order.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info};

use crate::builtins::default_course;
use crate::clock::{Clock, MonotonicClock};
use crate::{CourseError, CourseSpec, Vec3f};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Checkpoint {
    id: String,
    position: Vec3f,
    radius: f32,
    is_finish: bool,
    passed: bool,
}

impl Checkpoint {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> Vec3f {
        self.position
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn is_finish(&self) -> bool {
        self.is_finish
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn contains(&self, point: Vec3f) -> bool {
        self.position.distance(point) <= self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RaceState {
    /// Constructed or `reset`, not started.
    Idle,
    Racing,
    /// The finish checkpoint has been captured.
    Finished,
}

/// Outcome of one `check_collision` call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionResult {
    /// A checkpoint was captured by this call.
    pub passed: bool,
    /// The captured checkpoint, as it is after capture.
    pub checkpoint: Option<Checkpoint>,
    /// The race is over (either just now or on an earlier call).
    pub completed: bool,
    /// Time from the race start to the finish capture. Only set on that call.
    pub elapsed: Option<Duration>,
}

impl CollisionResult {
    const MISS: Self = Self { passed: false, checkpoint: None, completed: false, elapsed: None };
    const ALREADY_FINISHED: Self =
        Self { passed: false, checkpoint: None, completed: true, elapsed: None };
}

#[derive(Debug, Clone)]
pub struct RaceTrack<C: Clock = MonotonicClock> {
    checkpoints: Vec<Checkpoint>,
    current: usize,
    started: bool,
    start: Duration,
    best: Option<Duration>,
    clock: C,
}

impl Default for RaceTrack<MonotonicClock> {
    fn default() -> Self {
        Self::with_clock(MonotonicClock::default())
    }
}

impl RaceTrack<MonotonicClock> {
    /// The builtin course timed by the wall clock.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> RaceTrack<C> {
    /// The builtin course timed by `clock`.
    pub fn with_clock(clock: C) -> Self {
        let course = default_course();
        Self::build(&course, clock)
    }

    pub fn from_spec(course: &CourseSpec, clock: C) -> Result<Self, CourseError> {
        course.validate()?;
        Ok(Self::build(course, clock))
    }

    fn build(course: &CourseSpec, clock: C) -> Self {
        let checkpoints = course
            .checkpoints
            .iter()
            .map(|cp| Checkpoint {
                id: cp.id.clone(),
                position: cp.position,
                radius: cp.radius,
                is_finish: cp.is_finish,
                passed: false,
            })
            .collect();
        let start = clock.now();
        Self { checkpoints, current: 0, started: false, start, best: None, clock }
    }

    /// Test `position` against the current target only.
    pub fn check_collision(&mut self, position: Vec3f) -> CollisionResult {
        let index = self.current;
        let Some(target) = self.checkpoints.get_mut(index) else {
            return CollisionResult::ALREADY_FINISHED;
        };
        if !target.contains(position) {
            return CollisionResult::MISS;
        }

        target.passed = true;
        self.current += 1;
        let checkpoint = target.clone();
        debug!(id = %checkpoint.id, index, "checkpoint captured");

        if !checkpoint.is_finish {
            return CollisionResult {
                passed: true,
                checkpoint: Some(checkpoint),
                completed: false,
                elapsed: None,
            };
        }

        let elapsed = self.clock.now().saturating_sub(self.start);
        info!(elapsed_s = elapsed.as_secs_f32(), "race finished");
        if self.best.map_or(true, |best| elapsed < best) {
            info!(best_s = elapsed.as_secs_f32(), "new best time");
            self.best = Some(elapsed);
        }
        CollisionResult {
            passed: true,
            checkpoint: Some(checkpoint),
            completed: true,
            elapsed: Some(elapsed),
        }
    }

    /// Begin a timed run from the first checkpoint. Keeps the best time.
    pub fn start_race(&mut self) {
        self.rewind();
        self.started = true;
        self.start = self.clock.now();
    }

    /// Back to `Idle` without touching the start timestamp or best time.
    pub fn reset(&mut self) {
        self.rewind();
        self.started = false;
    }

    fn rewind(&mut self) {
        self.current = 0;
        for cp in &mut self.checkpoints {
            cp.passed = false;
        }
    }

    pub fn state(&self) -> RaceState {
        if self.current >= self.checkpoints.len() {
            RaceState::Finished
        } else if self.started {
            RaceState::Racing
        } else {
            RaceState::Idle
        }
    }

    pub fn current_checkpoint(&self) -> Option<&Checkpoint> {
        self.checkpoints.get(self.current)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn all_checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    /// Fraction of checkpoints captured, in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.checkpoints.is_empty() {
            return 0.0;
        }
        self.current as f32 / self.checkpoints.len() as f32
    }

    pub fn best_time(&self) -> Option<Duration> {
        self.best
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
