use crate::{CheckpointSpec, CourseSpec, Vec3f};

pub const DEFAULT_CHECKPOINT_RADIUS: f32 = 5.0;

// Gate centers of the city route, in race order. The last one is the finish line.
const CITY_ROUTE: [[f32; 3]; 8] = [
    [0.0, 8.0, -15.0],
    [20.0, 12.0, -25.0],
    [-15.0, 6.0, -35.0],
    [10.0, 15.0, -50.0],
    [-25.0, 8.0, -60.0],
    [5.0, 20.0, -75.0],
    [-10.0, 5.0, -85.0],
    [0.0, 10.0, -100.0],
];

/// The fixed eight-gate course flown in race mode.
///
/// Layout, ordering, ids (`checkpoint-N`) and radii are part of the course
/// contract; front ends place gate meshes from this table.
pub fn default_course() -> CourseSpec {
    let last = CITY_ROUTE.len() - 1;
    let checkpoints = CITY_ROUTE
        .iter()
        .enumerate()
        .map(|(i, &[x, y, z])| CheckpointSpec {
            id: format!("checkpoint-{i}"),
            position: Vec3f::new(x, y, z),
            radius: DEFAULT_CHECKPOINT_RADIUS,
            is_finish: i == last,
        })
        .collect();
    CourseSpec { checkpoints }
}
