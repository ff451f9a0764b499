/*!
Core collision types and math aliases shared by the collision submodules.

This module contains no resolution logic. It defines the data exchanged between:
- narrow_phase (pairwise AABB overlap and positional correction, sphere distance)
- broad (pair enumeration and the optional sphere pre-filter)
- ray (slab picking)
- ground (plane clamp and grounding classification)
*/

use nalgebra as na;

/// Common math alias for clarity and consistency.
pub type Vec3 = na::Vector3<f32>;

/// One of the three world axes. Ordering doubles as the tie-break order for
/// minimum-penetration selection (X first, then Y, then Z).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Unit vector along this axis.
    #[inline]
    pub fn unit(self) -> Vec3 {
        let mut v = Vec3::zeros();
        v[self.index()] = 1.0;
        v
    }
}

/// World-space axis-aligned bounding box. `min <= max` componentwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    #[inline]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point. `None` for an empty slice.
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut aabb = Self::new(*first, *first);
        for p in rest {
            aabb.min = aabb.min.inf(p);
            aabb.max = aabb.max.sup(p);
        }
        Some(aabb)
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Closed-interval overlap on all three axes (touching faces count as overlapping).
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Per-axis overlap depth: `min(a.max - b.min, b.max - a.min)`.
    ///
    /// Only meaningful when [`Aabb::intersects`] holds; every component is then non-negative.
    #[inline]
    pub fn penetration(&self, other: &Aabb) -> Vec3 {
        (self.max - other.min).inf(&(other.max - self.min))
    }

    /// Scale the box componentwise about the origin, then translate it.
    ///
    /// `scale` must be strictly positive so `min` stays below `max`.
    #[inline]
    pub fn scaled_translated(&self, scale: &Vec3, translation: &Vec3) -> Aabb {
        Aabb {
            min: self.min.component_mul(scale) + translation,
            max: self.max.component_mul(scale) + translation,
        }
    }
}
