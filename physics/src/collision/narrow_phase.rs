use super::ground::{clamp_to_ground, grounded_after_push};
use super::types::{Aabb, Axis, Vec3};
use crate::body::RigidBody;

/// Minimum-translation result for one overlapping box pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Separation {
    /// Axis of least penetration.
    pub axis: Axis,
    /// Half of the penetration along `axis`, signed so that `a += correction` and
    /// `b -= correction` pull the boxes apart.
    pub correction: Vec3,
}

/// Separation for two boxes, or `None` when they do not overlap.
///
/// The axis with the smallest overlap wins; exact ties resolve X, then Y, then Z. The box whose
/// center is smaller on that axis is pushed toward negative, the other toward positive, each by
/// half of the overlap.
pub fn separation(a: &Aabb, b: &Aabb) -> Option<Separation> {
    if !a.intersects(b) {
        return None;
    }

    let pen = a.penetration(b);
    let mut axis = Axis::X;
    for candidate in [Axis::Y, Axis::Z] {
        if pen[candidate.index()] < pen[axis.index()] {
            axis = candidate;
        }
    }

    let i = axis.index();
    let half = pen[i] * 0.5;
    let sign = if a.center()[i] < b.center()[i] { -1.0 } else { 1.0 };

    Some(Separation {
        axis,
        correction: axis.unit() * (sign * half),
    })
}

/// Push two overlapping bodies apart along the axis of least penetration.
///
/// Both bodies lose their velocity along the resolved axis (no bounce). Grounding is
/// re-derived for both from the push direction. Returns `true` when an overlap was found.
pub fn resolve_pair(a: &mut RigidBody, b: &mut RigidBody) -> bool {
    let Some(sep) = separation(&a.aabb(), &b.aabb()) else {
        return false;
    };

    let i = sep.axis.index();
    a.velocity[i] = 0.0;
    b.velocity[i] = 0.0;

    a.position += sep.correction;
    b.position -= sep.correction;

    // A downward push may not sink a body through the ground plane.
    clamp_to_ground(&mut a.position, &mut a.velocity);
    clamp_to_ground(&mut b.position, &mut b.velocity);

    a.set_grounded(grounded_after_push(sep.correction.y, a.position.y));
    b.set_grounded(grounded_after_push(-sep.correction.y, b.position.y));
    true
}

/// Bounding-sphere test on centers and radii.
///
/// Returns `(overlapping, signed_distance)` where the distance is
/// `|ca - cb| - (ra + rb)`; negative means the spheres interpenetrate.
#[inline]
pub fn sphere_overlap(
    center_a: Vec3,
    radius_a: f32,
    center_b: Vec3,
    radius_b: f32,
) -> (bool, f32) {
    let dist = (center_a - center_b).norm();
    let reach = radius_a + radius_b;
    (dist < reach, dist - reach)
}

/// Sphere test between two bodies using their scaled bounding spheres.
///
/// Not used by the world step; see [`crate::collision::broad::sphere_candidates`].
#[inline]
pub fn check_sphere_collision(a: &RigidBody, b: &RigidBody) -> (bool, f32) {
    sphere_overlap(a.position, a.sphere_radius(), b.position, b.sphere_radius())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::primitives::cube_collider;

    fn cube_at(x: f32, y: f32, z: f32) -> RigidBody {
        let collider = Arc::new(cube_collider().unwrap());
        RigidBody::new(collider).with_position(Vec3::new(x, y, z))
    }

    fn boxed(min: [f32; 3], max: [f32; 3]) -> Aabb {
        Aabb::new(Vec3::from(min), Vec3::from(max))
    }

    #[test]
    fn separated_boxes_have_no_separation() {
        let a = boxed([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        let b = boxed([3.0, 0.0, 0.0], [4.0, 1.0, 1.0]);
        assert_eq!(separation(&a, &b), None);
    }

    #[test]
    fn smallest_overlap_axis_is_chosen() {
        let a = boxed([0.0, 0.0, 0.0], [2.0, 2.0, 2.0]);
        let b = boxed([0.5, 1.6, 0.2], [2.5, 3.6, 2.2]);
        let sep = separation(&a, &b).unwrap();
        assert_eq!(sep.axis, Axis::Y);
        // a is below b, so a is pushed down by half of the 0.4 overlap.
        assert!((sep.correction.y + 0.2).abs() < 1.0e-6);
        assert_eq!(sep.correction.x, 0.0);
        assert_eq!(sep.correction.z, 0.0);
    }

    #[test]
    fn ties_prefer_x_then_y() {
        let a = boxed([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        let b = boxed([0.5, 0.5, 0.5], [1.5, 1.5, 1.5]);
        assert_eq!(separation(&a, &b).unwrap().axis, Axis::X);

        let b = boxed([0.0, 0.5, 0.5], [1.0, 1.5, 1.5]);
        assert_eq!(separation(&a, &b).unwrap().axis, Axis::Y);
    }

    #[test]
    fn resolving_a_single_axis_overlap_removes_it_and_leaves_others() {
        let mut a = cube_at(0.0, 5.0, 0.0);
        let mut b = cube_at(1.5, 5.0, 0.0);
        a.velocity = Vec3::new(2.0, 1.0, 3.0);
        b.velocity = Vec3::new(-2.0, 1.0, 3.0);

        assert!(resolve_pair(&mut a, &mut b));

        assert!((a.position.x + 0.25).abs() < 1.0e-6);
        assert!((b.position.x - 1.75).abs() < 1.0e-6);
        assert_eq!(a.position.y, 5.0);
        assert_eq!(b.position.z, 0.0);
        // Only the resolved axis is zeroed.
        assert_eq!(a.velocity, Vec3::new(0.0, 1.0, 3.0));
        assert_eq!(b.velocity, Vec3::new(0.0, 1.0, 3.0));

        let pen = a.aabb().penetration(&b.aabb());
        assert!(pen.x.abs() < 1.0e-5);
    }

    #[test]
    fn argument_order_does_not_change_final_positions() {
        let mut a1 = cube_at(0.0, 5.0, 0.0);
        let mut b1 = cube_at(1.2, 5.5, 0.3);
        let mut a2 = a1.clone();
        let mut b2 = b1.clone();

        resolve_pair(&mut a1, &mut b1);
        resolve_pair(&mut b2, &mut a2);

        assert!((a1.position - a2.position).norm() < 1.0e-6);
        assert!((b1.position - b2.position).norm() < 1.0e-6);
    }

    #[test]
    fn body_pushed_up_is_grounded_and_the_one_below_is_not() {
        let mut top = cube_at(0.0, 3.5, 0.0);
        let mut bottom = cube_at(0.0, 2.0, 0.0);

        assert!(resolve_pair(&mut top, &mut bottom));

        assert!(top.is_grounded());
        assert!((top.position.y - 3.75).abs() < 1.0e-6);
        assert!((bottom.position.y - 1.75).abs() < 1.0e-6);
        assert!(!bottom.is_grounded());
    }

    #[test]
    fn second_body_on_top_is_grounded_when_pushed_up() {
        let mut a = cube_at(0.0, 2.0, 0.0);
        let mut b = cube_at(0.0, 3.5, 0.0);

        let sep = separation(&a.aabb(), &b.aabb()).unwrap();
        assert!(sep.correction.y < 0.0);
        assert!(resolve_pair(&mut a, &mut b));

        assert!((a.position.y - 1.75).abs() < 1.0e-6);
        assert!(!a.is_grounded());
        assert!((b.position.y - 3.75).abs() < 1.0e-6);
        assert!(b.is_grounded());
    }

    #[test]
    fn downward_push_never_sinks_below_the_ground_plane() {
        let mut top = cube_at(0.0, 1.0, 0.0);
        let mut bottom = cube_at(0.0, 0.0, 0.0);

        assert!(resolve_pair(&mut top, &mut bottom));

        assert_eq!(bottom.position.y, 0.0);
        assert!(bottom.is_grounded());
        assert!(top.is_grounded());
    }

    #[test]
    fn non_overlapping_bodies_are_untouched() {
        let mut a = cube_at(0.0, 5.0, 0.0);
        let mut b = cube_at(5.0, 5.0, 0.0);
        a.velocity = Vec3::new(1.0, 0.0, 0.0);
        assert!(!resolve_pair(&mut a, &mut b));
        assert_eq!(a.velocity.x, 1.0);
        assert_eq!(a.position, Vec3::new(0.0, 5.0, 0.0));
    }

    #[test]
    fn sphere_distance_is_signed() {
        let (hit, d) = sphere_overlap(Vec3::zeros(), 1.0, Vec3::new(3.0, 0.0, 0.0), 1.0);
        assert!(!hit);
        assert!((d - 1.0).abs() < 1.0e-6);

        let (hit, d) = sphere_overlap(Vec3::zeros(), 1.0, Vec3::new(1.5, 0.0, 0.0), 1.0);
        assert!(hit);
        assert!((d + 0.5).abs() < 1.0e-6);
    }

    #[test]
    fn body_spheres_grow_with_the_largest_scale_axis() {
        let a = cube_at(0.0, 5.0, 0.0);
        let b = cube_at(4.0, 5.0, 0.0);
        assert!(!check_sphere_collision(&a, &b).0);

        let a = a.with_scale(Vec3::new(1.0, 1.0, 2.0));
        // 2*sqrt(3) + sqrt(3) > 4
        assert!(check_sphere_collision(&a, &b).0);
    }
}
