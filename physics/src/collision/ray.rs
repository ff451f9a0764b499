//! Ray picking against live body boxes (slab method).

use super::types::{Aabb, Vec3};
use crate::body::{BodyId, RigidBody};
use crate::constants::RAY_DIRECTION_BIAS;

/// Nearest pickable body along a ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub body: BodyId,
    /// Ray parameter of the entry point. Equals the distance when the direction is unit length.
    pub distance: f32,
}

impl Aabb {
    /// Parametric interval `(t_enter, t_exit)` where the ray is inside the box.
    ///
    /// Each direction component is biased away from zero (keeping its sign) before the slab
    /// division, so axis-aligned rays need no special casing. `None` when the slabs do not
    /// overlap or the entry lies behind the origin, which includes an origin inside the box.
    pub fn ray_interval(&self, origin: &Vec3, direction: &Vec3) -> Option<(f32, f32)> {
        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;

        for i in 0..3 {
            let d = direction[i];
            let inv = 1.0 / (d + RAY_DIRECTION_BIAS.copysign(d));
            let t1 = (self.min[i] - origin[i]) * inv;
            let t2 = (self.max[i] - origin[i]) * inv;
            t_enter = t_enter.max(t1.min(t2));
            t_exit = t_exit.min(t1.max(t2));
        }

        if t_enter < 0.0 || t_enter > t_exit {
            return None;
        }
        Some((t_enter, t_exit))
    }
}

/// Closest selectable body hit by the ray.
///
/// Bodies that are not selectable (previews, the camera proxy) are skipped entirely, so they
/// neither get returned nor occlude what lies behind them. Ties keep the lower index.
pub fn pick(origin: Vec3, direction: Vec3, bodies: &[RigidBody]) -> Option<RayHit> {
    let mut best: Option<RayHit> = None;
    for (i, body) in bodies.iter().enumerate() {
        if !body.is_selectable() {
            continue;
        }
        let Some((t, _)) = body.aabb().ray_interval(&origin, &direction) else {
            continue;
        };
        if best.is_none_or(|hit| t < hit.distance) {
            best = Some(RayHit {
                body: BodyId(i),
                distance: t,
            });
        }
    }
    best
}
