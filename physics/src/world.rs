/*!
The active body set and the per-frame step.

A step is:
1. integrate every body on its own (gravity, motion, ground clamp, damping)
2. `relaxation_passes` full sweeps over every unordered pair, resolving box overlaps

No pair is skipped based on an earlier pass, so the cost is passes × n². Residual penetration
after the last pass is accepted; deep stacks may need more passes.
*/

use crate::body::{BodyId, RigidBody};
use crate::collision::{RayHit, Vec3, broad, narrow_phase, ray};
use crate::settings::WorldSettings;

#[derive(Clone, Debug, Default)]
pub struct World {
    bodies: Vec<RigidBody>,
    settings: WorldSettings,
}

impl World {
    pub fn new(settings: WorldSettings) -> Self {
        Self {
            bodies: Vec::new(),
            settings,
        }
    }

    pub fn push(&mut self, body: RigidBody) -> BodyId {
        self.bodies.push(body);
        BodyId(self.bodies.len() - 1)
    }

    #[inline]
    pub fn get(&self, id: BodyId) -> Option<&RigidBody> {
        self.bodies.get(id.0)
    }

    #[inline]
    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut RigidBody> {
        self.bodies.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &RigidBody)> {
        self.bodies.iter().enumerate().map(|(i, b)| (BodyId(i), b))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyId, &mut RigidBody)> {
        self.bodies
            .iter_mut()
            .enumerate()
            .map(|(i, b)| (BodyId(i), b))
    }

    #[inline]
    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Drop every body. Previously handed out ids become invalid.
    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    /// Swap in a whole new body set, e.g. after loading a scene.
    pub fn replace_all(&mut self, bodies: Vec<RigidBody>) {
        log::debug!(
            "replacing {} bodies with {}",
            self.bodies.len(),
            bodies.len()
        );
        self.bodies = bodies;
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Preview bodies are neither integrated nor collided.
    pub fn step(&mut self, dt: f32) {
        let settings = self.settings;

        for body in self.bodies.iter_mut().filter(|b| !b.is_preview()) {
            body.integrate(dt, &settings);
        }

        for _ in 0..settings.relaxation_passes {
            for (i, j) in broad::unique_pairs(self.bodies.len()) {
                let (a, b) = pair_mut(&mut self.bodies, i, j);
                if a.is_preview() || b.is_preview() {
                    continue;
                }
                narrow_phase::resolve_pair(a, b);
            }
        }
    }

    /// Nearest selectable body along the ray.
    pub fn pick(&self, origin: Vec3, direction: Vec3) -> Option<RayHit> {
        ray::pick(origin, direction, &self.bodies)
    }

    /// Body pairs whose bounding spheres overlap. Not used by [`World::step`].
    pub fn sphere_candidates(&self) -> Vec<(BodyId, BodyId)> {
        broad::sphere_candidates(&self.bodies)
            .into_iter()
            .map(|(i, j)| (BodyId(i), BodyId(j)))
            .collect()
    }
}

/// Two distinct mutable bodies; requires `i < j`.
fn pair_mut(bodies: &mut [RigidBody], i: usize, j: usize) -> (&mut RigidBody, &mut RigidBody) {
    debug_assert!(i < j);
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
