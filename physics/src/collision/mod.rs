/*!
Collision root module.

Everything here works on axis-aligned boxes derived from each body's mesh bounds; rotation
never affects collision. The code is split for clarity:

- types:        shared math types (Vec3, Axis, Aabb)
- broad:        brute-force pair enumeration and the optional bounding-sphere pre-filter
- narrow_phase: minimum-translation separation of overlapping boxes, sphere distance
- ground:       ground-plane clamp and grounding classification
- ray:          slab ray/box intersection and nearest-body picking
*/

pub mod broad;
pub mod ground;
pub mod narrow_phase;
pub mod ray;
pub mod types;

// Re-export commonly used types and functions.
pub use broad::{sphere_candidates, unique_pairs};
pub use ground::clamp_to_ground;
pub use narrow_phase::{Separation, check_sphere_collision, resolve_pair, separation};
pub use ray::{RayHit, pick};
pub use types::{Aabb, Axis, Vec3};
