pub mod bitmask_flags;
pub mod body;
pub mod collision;
pub mod constants;
pub mod mesh;
pub mod primitives;
pub mod record;
pub mod settings;
pub mod utils;
pub mod world;

pub use bitmask_flags::{BitmaskFlags, FlagBitmask};
pub use body::{BodyFlag, BodyId, RigidBody};
pub use collision::{Aabb, Axis, RayHit, Vec3};
pub use constants::{
    DEFAULT_MASS, DEFAULT_RELAXATION_PASSES, GRAVITY_MPS2, GROUND_Y, HORIZONTAL_DAMPING,
    MIN_SCALE,
};
pub use mesh::{MeshCollider, MeshError};
pub use primitives::cube_collider;
pub use record::BodyRecord;
pub use settings::WorldSettings;
pub use utils::{direction_from_yaw_pitch, flatten_xz, right_of, safe_normalize};
pub use world::World;
