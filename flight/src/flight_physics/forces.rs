use super::util::BODY_UP;
use crate::{Attitude, DronePhysicsSpec, Vec3f};

pub(super) fn gravity_force(spec: &DronePhysicsSpec) -> Vec3f {
    Vec3f::new(0.0, spec.mass * spec.gravity, 0.0)
}

pub(super) fn thrust_axis(rotation: Attitude) -> Vec3f {
    rotation.to_quat() * BODY_UP
}

// Quadratic drag opposing the velocity; zero at rest
pub(super) fn drag_force(spec: &DronePhysicsSpec, velocity: Vec3f) -> Vec3f {
    let speed = velocity.length();
    if speed <= 0.0 {
        return Vec3f::ZERO;
    }
    let magnitude = 0.5 * spec.air_density * spec.drag_coefficient * speed * speed;
    -velocity.normalize_or_zero() * magnitude
}
