/*!
Rigid bodies: a box-bounded mesh instance with linear motion and a handful of switches.

Rotation is stored for rendering and persistence only. Collision always uses the collider's
bounding box scaled by `scale` and translated by `position`, recomputed on every query.
*/

use std::sync::Arc;

use crate::bitmask_flags::BitmaskFlags;
use crate::collision::ground::clamp_to_ground;
use crate::collision::{Aabb, Vec3};
use crate::constants::{DEFAULT_MASS, MIN_SCALE};
use crate::mesh::MeshCollider;
use crate::settings::WorldSettings;

crate::define_bitmask_flags!(BodyFlag, u8, {
    Grounded,
    Selected,
    Preview,
    Visible,
    Selectable,
    Camera,
    Gravity,
});

/// Index of a body inside its world. Stable until the world is cleared or replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

#[derive(Clone, Debug)]
pub struct RigidBody {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Euler angles in degrees. Visual only.
    pub rotation: Vec3,
    scale: Vec3,
    mass: f32,
    collider: Arc<MeshCollider>,
    flags: BitmaskFlags<u8>,
}

impl RigidBody {
    /// Visible, selectable, gravity-enabled body at the origin with unit scale and mass.
    pub fn new(collider: Arc<MeshCollider>) -> Self {
        Self {
            position: Vec3::zeros(),
            velocity: Vec3::zeros(),
            rotation: Vec3::zeros(),
            scale: Vec3::repeat(1.0),
            mass: DEFAULT_MASS,
            collider,
            flags: BitmaskFlags::from_flags(&[
                BodyFlag::Visible,
                BodyFlag::Selectable,
                BodyFlag::Gravity,
            ]),
        }
    }

    /// Invisible, unpickable stand-in that gives the camera a collision volume.
    pub fn camera_proxy(collider: Arc<MeshCollider>, position: Vec3, size: Vec3) -> Self {
        let mut body = Self::new(collider).with_position(position).with_scale(size);
        body.flags.set(BodyFlag::Visible, false);
        body.flags.set(BodyFlag::Selectable, false);
        body.flags.add(BodyFlag::Camera);
        body
    }

    /// Placement ghost: drawn but never picked, integrated or collided.
    pub fn preview(collider: Arc<MeshCollider>, position: Vec3) -> Self {
        let mut body = Self::new(collider).with_position(position);
        body.flags.set(BodyFlag::Selectable, false);
        body.flags.add(BodyFlag::Preview);
        body
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Components below the scale floor are raised to it.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.set_scale(scale);
        self
    }

    /// Panics if `mass` is not strictly positive.
    pub fn with_mass(mut self, mass: f32) -> Self {
        assert!(mass > 0.0, "rigid body mass must be positive, got {mass}");
        self.mass = mass;
        self
    }

    pub fn with_gravity(mut self, enabled: bool) -> Self {
        self.flags.set(BodyFlag::Gravity, enabled);
        self
    }

    /// One explicit Euler step under gravity, then the ground clamp, then planar damping.
    ///
    /// Grounding is cleared first; only the clamp here or a later pair resolution raises it.
    pub fn integrate(&mut self, dt: f32, settings: &WorldSettings) {
        self.flags.remove(BodyFlag::Grounded);

        if self.gravity_enabled() {
            self.velocity.y -= settings.gravity_mps2 * dt;
        }
        self.position += self.velocity * dt;

        if clamp_to_ground(&mut self.position, &mut self.velocity) {
            self.flags.add(BodyFlag::Grounded);
        }

        self.velocity.x *= settings.horizontal_damping;
        self.velocity.z *= settings.horizontal_damping;
    }

    /// Instantaneous impulse-style push: `velocity += force / mass`.
    #[inline]
    pub fn apply_force(&mut self, force: Vec3) {
        self.velocity += force / self.mass;
    }

    /// World-space bounds at the current position and scale.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        self.collider
            .aabb()
            .scaled_translated(&self.scale, &self.position)
    }

    /// Collider sphere radius grown by the largest scale component.
    #[inline]
    pub fn sphere_radius(&self) -> f32 {
        self.collider.sphere_radius() * self.scale.max()
    }

    #[inline]
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Set the scale, raising any component below the floor to it.
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale.map(|s| s.max(MIN_SCALE));
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn is_grounded(&self) -> bool {
        self.flags.has(BodyFlag::Grounded)
    }

    pub(crate) fn set_grounded(&mut self, grounded: bool) {
        self.flags.set(BodyFlag::Grounded, grounded);
    }

    pub fn is_selected(&self) -> bool {
        self.flags.has(BodyFlag::Selected)
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.flags.set(BodyFlag::Selected, selected);
    }

    pub fn is_preview(&self) -> bool {
        self.flags.has(BodyFlag::Preview)
    }

    /// Turn a placement ghost into a regular, pickable body.
    pub fn confirm_preview(&mut self) {
        self.flags.remove(BodyFlag::Preview);
        self.flags.add(BodyFlag::Selectable);
    }

    pub fn is_visible(&self) -> bool {
        self.flags.has(BodyFlag::Visible)
    }

    pub fn is_selectable(&self) -> bool {
        self.flags.has(BodyFlag::Selectable)
    }

    pub fn set_selectable(&mut self, selectable: bool) {
        self.flags.set(BodyFlag::Selectable, selectable);
    }

    pub fn is_camera(&self) -> bool {
        self.flags.has(BodyFlag::Camera)
    }

    pub fn gravity_enabled(&self) -> bool {
        self.flags.has(BodyFlag::Gravity)
    }

    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        self.flags.set(BodyFlag::Gravity, enabled);
    }

    /// Flip gravity and return the new state.
    pub fn toggle_gravity(&mut self) -> bool {
        let enabled = !self.gravity_enabled();
        self.set_gravity_enabled(enabled);
        enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::cube_collider;

    const DT: f32 = 1.0 / 60.0;

    fn cube() -> RigidBody {
        RigidBody::new(Arc::new(cube_collider().unwrap()))
    }

    #[test]
    fn new_bodies_are_visible_selectable_and_fall() {
        let body = cube();
        assert!(body.is_visible());
        assert!(body.is_selectable());
        assert!(body.gravity_enabled());
        assert!(!body.is_grounded());
        assert!(!body.is_preview());
        assert!(!body.is_camera());
        assert_eq!(body.mass(), 1.0);
    }

    #[test]
    fn integrate_applies_gravity_then_moves() {
        let mut body = cube().with_position(Vec3::new(0.0, 5.0, 0.0));
        body.integrate(DT, &WorldSettings::default());
        let vy = -9.8 * DT;
        assert!((body.velocity.y - vy).abs() < 1.0e-6);
        // Semi-implicit: the updated velocity moves the body in the same tick.
        assert!((body.position.y - (5.0 + vy * DT)).abs() < 1.0e-6);
        assert!(!body.is_grounded());
    }

    #[test]
    fn integrate_without_gravity_keeps_vertical_velocity() {
        let mut body = cube()
            .with_position(Vec3::new(0.0, 5.0, 0.0))
            .with_velocity(Vec3::new(0.0, 1.0, 0.0))
            .with_gravity(false);
        body.integrate(0.5, &WorldSettings::default());
        assert_eq!(body.velocity.y, 1.0);
        assert!((body.position.y - 5.5).abs() < 1.0e-6);
    }

    #[test]
    fn integrate_damps_only_planar_velocity() {
        let mut body = cube()
            .with_position(Vec3::new(0.0, 5.0, 0.0))
            .with_velocity(Vec3::new(2.0, 3.0, -4.0))
            .with_gravity(false);
        body.integrate(0.1, &WorldSettings::default());
        assert!((body.velocity.x - 1.9).abs() < 1.0e-6);
        assert!((body.velocity.z + 3.8).abs() < 1.0e-6);
        assert_eq!(body.velocity.y, 3.0);
        // Position used the undamped velocity.
        assert!((body.position.x - 0.2).abs() < 1.0e-6);
    }

    #[test]
    fn integrate_clamps_to_ground_and_sets_grounded() {
        let mut body = cube()
            .with_position(Vec3::new(0.0, 0.01, 0.0))
            .with_velocity(Vec3::new(0.0, -3.0, 0.0));
        body.integrate(DT, &WorldSettings::default());
        assert_eq!(body.position.y, 0.0);
        assert_eq!(body.velocity.y, 0.0);
        assert!(body.is_grounded());

        // Grounding is recomputed every tick; lifting off clears it.
        body.velocity.y = 5.0;
        body.integrate(DT, &WorldSettings::default());
        assert!(!body.is_grounded());
    }

    #[test]
    fn zero_dt_only_resets_grounding_and_damps() {
        let mut body = cube()
            .with_position(Vec3::new(1.0, 2.0, 3.0))
            .with_velocity(Vec3::new(1.0, 0.0, 0.0));
        body.set_grounded(true);
        body.integrate(0.0, &WorldSettings::default());
        assert_eq!(body.position, Vec3::new(1.0, 2.0, 3.0));
        assert!(!body.is_grounded());
        assert!((body.velocity.x - 0.95).abs() < 1.0e-6);
    }

    #[test]
    fn apply_force_is_mass_normalized() {
        let force = Vec3::new(4.0, 0.0, -2.0);
        let mut light = cube().with_mass(1.0);
        let mut heavy = cube().with_mass(2.0);
        light.apply_force(force);
        heavy.apply_force(force);
        assert_eq!(light.velocity, Vec3::new(4.0, 0.0, -2.0));
        assert_eq!(heavy.velocity, Vec3::new(2.0, 0.0, -1.0));
    }

    #[test]
    #[should_panic]
    fn non_positive_mass_is_rejected() {
        let _ = cube().with_mass(0.0);
    }

    #[test]
    fn aabb_follows_scale_and_position() {
        let body = cube()
            .with_position(Vec3::new(2.0, 3.0, 4.0))
            .with_scale(Vec3::new(0.5, 2.0, 1.0));
        let aabb = body.aabb();
        assert_eq!(aabb.min, Vec3::new(1.5, 1.0, 3.0));
        assert_eq!(aabb.max, Vec3::new(2.5, 5.0, 5.0));
    }

    #[test]
    fn rotation_does_not_change_the_box() {
        let body = cube().with_rotation(Vec3::new(45.0, 30.0, 0.0));
        assert_eq!(body.aabb(), cube().aabb());
    }

    #[test]
    fn scale_never_drops_below_the_floor() {
        let mut body = cube();
        body.set_scale(Vec3::new(0.05, -1.0, 0.5));
        assert_eq!(body.scale(), Vec3::new(MIN_SCALE, MIN_SCALE, 0.5));
    }

    #[test]
    fn sphere_radius_uses_largest_scale_component() {
        let body = cube().with_scale(Vec3::new(1.0, 3.0, 0.5));
        assert!((body.sphere_radius() - 3.0 * 3.0f32.sqrt()).abs() < 1.0e-5);
    }

    #[test]
    fn special_bodies_are_not_pickable() {
        let collider = Arc::new(cube_collider().unwrap());
        let proxy =
            RigidBody::camera_proxy(collider.clone(), Vec3::zeros(), Vec3::new(1.0, 2.0, 1.0));
        assert!(proxy.is_camera());
        assert!(!proxy.is_visible());
        assert!(!proxy.is_selectable());
        assert_eq!(proxy.scale(), Vec3::new(1.0, 2.0, 1.0));

        let mut ghost = RigidBody::preview(collider, Vec3::zeros());
        assert!(ghost.is_preview());
        assert!(ghost.is_visible());
        assert!(!ghost.is_selectable());
        ghost.confirm_preview();
        assert!(!ghost.is_preview());
        assert!(ghost.is_selectable());
    }

    #[test]
    fn toggle_gravity_flips_and_reports() {
        let mut body = cube();
        assert!(!body.toggle_gravity());
        assert!(!body.gravity_enabled());
        assert!(body.toggle_gravity());
    }
}
