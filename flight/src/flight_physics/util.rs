use crate::Vec3f;

// World and body share the basis: +Y up, +Z toward the viewer, +X right
pub(super) const BODY_UP: Vec3f = Vec3f::new(0.0, 1.0, 0.0);

/// Clamp into `[lo, hi]`, mapping NaN and infinities to zero.
#[inline]
pub(super) fn sanitize(v: f32, lo: f32, hi: f32) -> f32 {
    if v.is_finite() {
        v.clamp(lo, hi)
    } else {
        0.0
    }
}

#[inline]
pub(super) fn valid_dt(dt: f32) -> bool {
    dt.is_finite() && dt > 0.0
}

/// Unit vector along `v`, or zero. Safe when `v.length()` would overflow:
/// the vector is rescaled by its largest component first and infinite
/// components count as the largest finite value.
pub(super) fn direction(v: Vec3f) -> Vec3f {
    let bounded = |c: f32| if c.is_nan() { 0.0 } else { c.clamp(-f32::MAX, f32::MAX) };
    let v = Vec3f::new(bounded(v.x), bounded(v.y), bounded(v.z));
    let largest = v.abs().max_element();
    if largest == 0.0 {
        return Vec3f::ZERO;
    }
    (v / largest).normalize_or_zero()
}
