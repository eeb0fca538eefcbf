pub use bevy_math::{Quat as Quatf, Vec3 as Vec3f};
use serde::{Deserialize, Serialize};

/// Euler attitude in radians.
///
/// Rotations compose in X, Y, Z order: `pitch` about world +X, `yaw` about
/// +Y, `roll` about +Z. With all three at zero the drone's up axis is world +Y.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Attitude {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Attitude {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    pub fn to_quat(self) -> Quatf {
        Quatf::from_rotation_x(self.pitch)
            * Quatf::from_rotation_y(self.yaw)
            * Quatf::from_rotation_z(self.roll)
    }

    /// `[pitch, yaw, roll]`, the layout renderers expect for an XYZ Euler.
    pub fn to_array(self) -> [f32; 3] {
        [self.pitch, self.yaw, self.roll]
    }

    pub fn is_finite(self) -> bool {
        self.pitch.is_finite() && self.yaw.is_finite() && self.roll.is_finite()
    }
}
