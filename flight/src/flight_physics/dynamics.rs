use super::forces::{drag_force, gravity_force, thrust_axis};
use super::types::{ControlInputs, DroneKinematics, FlightStepDebug};
use super::util::{direction, valid_dt};
use crate::{DronePhysicsSpec, Vec3f};

/// One explicit Euler step of the arcade flight model.
/// See `step_drone_dbg` for the force breakdown.
pub fn step_drone(
    spec: &DronePhysicsSpec,
    inputs: ControlInputs,
    state: &mut DroneKinematics,
    dt: f32,
) {
    step_drone_dbg(spec, inputs, state, dt, None);
}

/// Variant of `step_drone` that fills out an optional debug telemetry struct.
///
/// - Thrust acts along the body up axis derived from the attitude at the start
///   of the step; gravity along world -Y; drag opposes velocity.
/// - Speed is capped at `spec.max_speed`, then the ground floor is enforced.
/// - Attitude rates come straight from the stick (no torque or inertia).
///   Pitch and roll are bounded by `spec.attitude_limit`.
///
/// A non-positive or non-finite `dt` leaves the state untouched.
pub fn step_drone_dbg(
    spec: &DronePhysicsSpec,
    inputs: ControlInputs,
    state: &mut DroneKinematics,
    dt: f32,
    mut dbg: Option<&mut FlightStepDebug>,
) {
    if !valid_dt(dt) {
        return;
    }
    let inputs = inputs.sanitized();

    // Forces at the start of the step
    let up_axis = thrust_axis(state.rotation);
    let thrust_n = inputs.throttle * spec.max_thrust;
    let f_gravity = gravity_force(spec);
    let f_thrust = up_axis * thrust_n;
    let f_drag = drag_force(spec, state.velocity);
    let f_net = f_gravity + f_thrust + f_drag;

    // Integrate translation
    state.acceleration = f_net / spec.mass;
    state.velocity += state.acceleration * dt;
    let speed_clamped = state.velocity.length() > spec.max_speed;
    if speed_clamped {
        state.velocity = direction(state.velocity) * spec.max_speed;
    }
    state.position += state.velocity * dt;

    // Ground plane: no penetration, keep any upward component, add no bounce
    let ground_contact = state.position.y < spec.ground_clearance;
    if ground_contact {
        state.position.y = spec.ground_clearance;
        state.velocity.y = state.velocity.y.max(0.0);
    }

    // Attitude follows the stick directly
    state.angular_velocity =
        Vec3f::new(inputs.pitch, inputs.yaw, inputs.roll) * spec.rotation_gain;
    let limit = spec.attitude_limit;
    let r = &mut state.rotation;
    r.pitch = (r.pitch + state.angular_velocity.x * dt).clamp(-limit, limit);
    r.yaw += state.angular_velocity.y * dt;
    r.roll = (r.roll + state.angular_velocity.z * dt).clamp(-limit, limit);

    if let Some(d) = dbg.as_mut() {
        d.dt = dt;
        d.inputs = inputs;
        d.up_axis = up_axis;
        d.thrust_n = thrust_n;
        d.gravity_force = f_gravity;
        d.thrust_force = f_thrust;
        d.drag_force = f_drag;
        d.net_force = f_net;
        d.speed_clamped = speed_clamped;
        d.ground_contact = ground_contact;
    }
}
