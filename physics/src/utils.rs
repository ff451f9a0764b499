use crate::collision::Vec3;
use crate::constants::NORMALIZE_EPS_SQ;

/// Unit vector in the direction of `v`, or the zero vector when `v` is (nearly) zero.
///
/// Callers treat a zero result as "no well-defined direction" and skip dependent updates.
#[inline]
pub fn safe_normalize(v: Vec3) -> Vec3 {
    let len_sq = v.norm_squared();
    if len_sq > NORMALIZE_EPS_SQ {
        v / len_sq.sqrt()
    } else {
        Vec3::zeros()
    }
}

/// Drops the vertical component and renormalizes, e.g. to walk along the ground.
#[inline]
pub fn flatten_xz(v: Vec3) -> Vec3 {
    safe_normalize(Vec3::new(v.x, 0.0, v.z))
}

/// View direction for a yaw/pitch pair in degrees.
///
/// Yaw is measured from +X toward +Z, so a yaw of -90° looks down -Z.
pub fn direction_from_yaw_pitch(yaw_deg: f32, pitch_deg: f32) -> Vec3 {
    let (yaw, pitch) = (yaw_deg.to_radians(), pitch_deg.to_radians());
    Vec3::new(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        yaw.sin() * pitch.cos(),
    )
}

/// Right-hand vector for a forward direction, using world +Y as up.
///
/// Zero when `forward` is zero or points straight up/down.
#[inline]
pub fn right_of(forward: Vec3) -> Vec3 {
    safe_normalize(forward.cross(&Vec3::y()))
}
