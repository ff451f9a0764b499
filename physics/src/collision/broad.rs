use crate::body::RigidBody;

use super::narrow_phase::check_sphere_collision;

/// Every unordered index pair `(i, j)` with `i < j < count`, in row-major order.
///
/// Brute force: the world visits all of them on every relaxation pass, so cost grows with the
/// square of the body count.
pub fn unique_pairs(count: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..count).flat_map(move |i| (i + 1..count).map(move |j| (i, j)))
}

/// Pairs whose scaled bounding spheres overlap.
///
/// Conservative: every pair whose boxes overlap is returned, plus some that only come close.
/// Usable as a pre-filter ahead of the exact box pass; the world step does not call it.
pub fn sphere_candidates(bodies: &[RigidBody]) -> Vec<(usize, usize)> {
    unique_pairs(bodies.len())
        .filter(|&(i, j)| check_sphere_collision(&bodies[i], &bodies[j]).0)
        .collect()
}
