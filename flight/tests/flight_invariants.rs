use flight::{dronespecs, ControlInputs, DronePhysicsSpec, FlightIntegrator, FlightStepDebug, Vec3f};

const DT: f32 = 1.0 / 60.0;

// Small deterministic generator so input sweeps are reproducible
struct XorShift(u32);

impl XorShift {
    fn next_unit(&mut self) -> f32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        (x as f32 / u32::MAX as f32) * 2.0 - 1.0
    }

    fn controls(&mut self) -> ControlInputs {
        ControlInputs {
            throttle: self.next_unit() * 0.5 + 0.5,
            pitch: self.next_unit(),
            roll: self.next_unit(),
            yaw: self.next_unit(),
        }
    }
}

fn slow_spec() -> DronePhysicsSpec {
    DronePhysicsSpec { max_speed: 5.0, ..dronespecs::racer_spec() }
}

#[test]
fn speed_never_exceeds_cap() {
    let mut flight = FlightIntegrator::with_spec(slow_spec()).expect("valid spec");
    let mut rng = XorShift(0x9e37_79b9);
    for tick in 0..3_000 {
        let snap = flight.update(rng.controls(), DT);
        assert!(
            snap.velocity.length() <= 5.0 + 1e-4,
            "tick {tick}: |v| = {}",
            snap.velocity.length()
        );
    }
}

#[test]
fn huge_step_is_clamped_not_exploded() {
    let mut flight = FlightIntegrator::new();
    let snap = flight.update(ControlInputs::IDLE, 10.0);
    assert!(snap.position.is_finite());
    assert!(snap.speed <= 50.0 + 1e-3, "speed={}", snap.speed);
    // Fell through the floor in one step: clamped with the downward part removed
    assert_eq!(snap.position.y, 0.5);
    assert_eq!(snap.velocity.y, 0.0);

    // Large enough that |v|² overflows f32 before the clamp
    let mut flight = FlightIntegrator::new();
    let mut dbg = FlightStepDebug::default();
    let snap = flight.update_dbg(ControlInputs::IDLE, 1e20, Some(&mut dbg));
    assert!(dbg.speed_clamped && dbg.ground_contact, "{dbg:?}");
    assert!(snap.position.is_finite() && snap.velocity.is_finite());
    assert_eq!(snap.position.y, 0.5, "drone must land, not freeze mid-air");
    assert_eq!(snap.velocity, Vec3f::ZERO);
}

#[test]
fn huge_step_clamp_keeps_direction() {
    let mut flight = FlightIntegrator::new();
    // Tip fully forward, holding altitude roughly
    let tip = ControlInputs { throttle: 0.75, pitch: 1.0, ..ControlInputs::IDLE };
    for _ in 0..60 {
        flight.update(tip, DT);
    }

    let mut dbg = FlightStepDebug::default();
    let full = ControlInputs { throttle: 1.0, ..ControlInputs::IDLE };
    let snap = flight.update_dbg(full, 1e20, Some(&mut dbg));
    assert!(dbg.speed_clamped, "{dbg:?}");

    let expected = dbg.net_force.normalize() * 50.0;
    assert!(expected.z.abs() > 10.0, "net force should have a forward part: {expected:?}");
    assert!(
        (snap.velocity.x - expected.x).abs() < 1e-3 && (snap.velocity.z - expected.z).abs() < 1e-3,
        "clamped velocity {:?} lost the net-force direction {expected:?}",
        snap.velocity
    );
    assert!(snap.position.is_finite());
}

#[test]
fn ground_floor_holds_for_any_inputs() {
    let mut flight = FlightIntegrator::new();
    let mut rng = XorShift(12345);
    for tick in 0..5_000 {
        let mut controls = rng.controls();
        // Mostly idle throttle so the drone spends time on the ground
        controls.throttle *= 0.3;
        let snap = flight.update(controls, DT);
        assert!(snap.position.y >= 0.5, "tick {tick}: y = {}", snap.position.y);
    }
}

#[test]
fn landing_zeroes_downward_velocity() {
    let mut flight = FlightIntegrator::new();
    let mut last = flight.snapshot();
    for _ in 0..600 {
        last = flight.update(ControlInputs::IDLE, DT);
    }
    assert_eq!(last.position.y, 0.5);
    assert_eq!(last.velocity.y, 0.0);
    assert_eq!(last.position.x, 0.0);
    assert_eq!(last.position.z, 0.0);
}

#[test]
fn ground_contact_keeps_upward_velocity() {
    let mut flight = FlightIntegrator::new();
    flight.reset(Some(Vec3f::new(0.0, 0.5, 0.0)));
    // Full throttle from the floor: climbs immediately, nothing clamps it
    let snap = flight.update(ControlInputs { throttle: 1.0, ..ControlInputs::IDLE }, DT);
    assert!(snap.velocity.y > 0.0);
    assert!(snap.position.y > 0.5);
}

#[test]
fn pitch_and_roll_saturate_yaw_does_not() {
    let limit = std::f32::consts::FRAC_PI_3;
    let mut flight = FlightIntegrator::new();
    let full = ControlInputs { throttle: 0.9, pitch: 1.0, roll: -1.0, yaw: 1.0 };
    let mut snap = flight.snapshot();
    for _ in 0..120 {
        snap = flight.update(full, DT);
        assert!(snap.rotation.pitch.abs() <= limit && snap.rotation.roll.abs() <= limit);
    }
    assert_eq!(snap.rotation.pitch, limit);
    assert_eq!(snap.rotation.roll, -limit);
    // 2 rad/s for 2 s
    assert!((snap.rotation.yaw - 4.0).abs() < 1e-3, "yaw={}", snap.rotation.yaw);
    assert_eq!(flight.state().angular_velocity, Vec3f::new(2.0, 2.0, -2.0));
}

#[test]
fn hover_throttle_holds_altitude() {
    let mut flight = FlightIntegrator::new();
    let hover = ControlInputs { throttle: flight.spec().hover_throttle(), ..ControlInputs::IDLE };
    let mut snap = flight.snapshot();
    for _ in 0..600 {
        snap = flight.update(hover, DT);
    }
    assert!(snap.velocity.y.abs() < 1e-3, "vy={}", snap.velocity.y);
    assert!((snap.position.y - 10.0).abs() < 1e-2, "y={}", snap.position.y);
    assert!(flight.state().acceleration.length() < 1e-3);
}

#[test]
fn out_of_range_controls_are_clamped() {
    let mut a = FlightIntegrator::new();
    let mut b = FlightIntegrator::new();
    let wild = ControlInputs { throttle: 7.0, pitch: -3.0, roll: 2.5, yaw: -9.0 };
    let tame = ControlInputs { throttle: 1.0, pitch: -1.0, roll: 1.0, yaw: -1.0 };
    for _ in 0..60 {
        assert_eq!(a.update(wild, DT), b.update(tame, DT));
    }
}

#[test]
fn reset_then_zero_step_reproduces_default_snapshot() {
    let mut flight = FlightIntegrator::new();
    let pristine = FlightIntegrator::new().snapshot();
    let mut rng = XorShift(7);
    for _ in 0..90 {
        flight.update(rng.controls(), DT);
    }
    flight.reset(None);
    let snap = flight.update(ControlInputs::IDLE, 0.0);
    assert_eq!(snap, pristine);
    assert_eq!(snap.position, Vec3f::new(0.0, 10.0, 0.0));
    assert_eq!(snap.velocity, Vec3f::ZERO);
    assert_eq!(snap.speed, 0.0);
}
