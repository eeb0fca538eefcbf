use std::time::Duration;

use flight::{CollisionResult, RaceState, RaceTrack, SimClock, Vec3f};

fn sim_race() -> RaceTrack<SimClock> {
    RaceTrack::with_clock(SimClock::default())
}

fn gate_positions(race: &RaceTrack<SimClock>) -> Vec<Vec3f> {
    race.all_checkpoints().iter().map(|cp| cp.position()).collect()
}

/// Fly the course by visiting each gate center, `secs_per_gate` apart.
fn run_course(race: &mut RaceTrack<SimClock>, secs_per_gate: f32) -> CollisionResult {
    race.start_race();
    let gates = gate_positions(race);
    let mut last = CollisionResult::default();
    for (i, pos) in gates.iter().enumerate() {
        race.clock_mut().advance(secs_per_gate);
        last = race.check_collision(*pos);
        assert!(last.passed, "gate {i} should capture");
        assert_eq!(race.current_index(), i + 1);
    }
    last
}

#[test]
fn later_gate_is_ignored_while_earlier_one_is_target() {
    let mut race = sim_race();
    race.start_race();
    let fourth = race.all_checkpoints()[3].position();

    let result = race.check_collision(fourth);
    assert_eq!(
        result,
        CollisionResult { passed: false, checkpoint: None, completed: false, elapsed: None }
    );
    assert_eq!(race.current_index(), 0);
    assert!(race.all_checkpoints().iter().all(|cp| !cp.passed()));
    assert_eq!(race.current_checkpoint().map(|cp| cp.id()), Some("checkpoint-0"));
}

#[test]
fn near_miss_outside_radius_does_not_capture() {
    let mut race = sim_race();
    race.start_race();
    let target = race.current_checkpoint().expect("target").position();
    let result = race.check_collision(target + Vec3f::new(0.0, 5.01, 0.0));
    assert!(!result.passed && !result.completed);
    let result = race.check_collision(target + Vec3f::new(3.0, 0.0, -3.0));
    assert!(result.passed);
}

#[test]
fn completing_course_reports_elapsed_time() {
    let mut race = sim_race();
    let finish = run_course(&mut race, 1.0);
    assert!(finish.completed);
    assert_eq!(finish.elapsed, Some(Duration::from_secs(8)));
    let cp = finish.checkpoint.expect("finish checkpoint");
    assert!(cp.is_finish() && cp.passed());
    assert_eq!(cp.id(), "checkpoint-7");
    assert_eq!(race.state(), RaceState::Finished);
    assert_eq!(race.progress(), 1.0);
    assert!(race.all_checkpoints().iter().all(|cp| cp.passed()));
}

#[test]
fn progress_tracks_captured_fraction() {
    let mut race = sim_race();
    race.start_race();
    assert_eq!(race.progress(), 0.0);
    let gates = gate_positions(&race);
    race.check_collision(gates[0]);
    race.check_collision(gates[1]);
    assert_eq!(race.progress(), 0.25);
}

#[test]
fn best_time_is_the_minimum_across_runs() {
    let mut race = sim_race();
    assert_eq!(race.best_time(), None);

    let slow = run_course(&mut race, 1.0).elapsed.expect("time");
    assert_eq!(race.best_time(), Some(slow));

    let fast = run_course(&mut race, 0.5).elapsed.expect("time");
    assert!(fast < slow);
    assert_eq!(race.best_time(), Some(fast.min(slow)));

    // A slower third run never overwrites the record
    run_course(&mut race, 2.0);
    assert_eq!(race.best_time(), Some(fast));
}

#[test]
fn finished_race_is_idempotent() {
    let mut race = sim_race();
    run_course(&mut race, 1.0);
    let gates = gate_positions(&race);
    let snapshot = race.all_checkpoints().to_vec();

    for pos in gates.iter().chain([Vec3f::new(500.0, 0.0, 0.0)].iter()) {
        race.clock_mut().advance(1.0);
        let result = race.check_collision(*pos);
        assert_eq!(
            result,
            CollisionResult { passed: false, checkpoint: None, completed: true, elapsed: None }
        );
    }
    assert_eq!(race.all_checkpoints(), snapshot.as_slice());
    assert_eq!(race.current_index(), gates.len());
    assert_eq!(race.best_time(), Some(Duration::from_secs(8)));
}

#[test]
fn restart_clears_flags_but_keeps_best() {
    let mut race = sim_race();
    run_course(&mut race, 1.0);
    race.start_race();
    assert_eq!(race.state(), RaceState::Racing);
    assert_eq!(race.current_index(), 0);
    assert!(race.all_checkpoints().iter().all(|cp| !cp.passed()));
    assert_eq!(race.best_time(), Some(Duration::from_secs(8)));

    race.reset();
    assert_eq!(race.state(), RaceState::Idle);
    assert_eq!(race.best_time(), Some(Duration::from_secs(8)));
}

#[test]
fn idle_track_still_follows_route_order() {
    let mut race = sim_race();
    assert_eq!(race.state(), RaceState::Idle);
    let gates = gate_positions(&race);
    assert!(!race.check_collision(gates[1]).passed);
    assert!(race.check_collision(gates[0]).passed);
    assert_eq!(race.state(), RaceState::Idle);
}
