//! Plain-data form of a body for scene files.
//!
//! Only the authored state is kept: velocity, grounding, selection and the collider are runtime
//! state and are rebuilt on load.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::body::RigidBody;
use crate::collision::Vec3;
use crate::constants::MIN_SCALE;
use crate::mesh::MeshCollider;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyRecord {
    pub position: [f32; 3],
    pub scale: [f32; 3],
    /// Euler angles in degrees.
    pub rotation: [f32; 3],
    pub gravity_enabled: bool,
}

impl RigidBody {
    pub fn to_record(&self) -> BodyRecord {
        BodyRecord {
            position: self.position.into(),
            scale: self.scale().into(),
            rotation: self.rotation.into(),
            gravity_enabled: self.gravity_enabled(),
        }
    }

    /// Rebuild a regular scene body on `collider`. Scale components under the floor are raised
    /// to it.
    pub fn from_record(record: &BodyRecord, collider: Arc<MeshCollider>) -> Self {
        let scale = Vec3::from(record.scale);
        if scale.min() < MIN_SCALE {
            log::warn!(
                "scene body scale {:?} below the {} floor, clamping",
                record.scale,
                MIN_SCALE
            );
        }
        RigidBody::new(collider)
            .with_position(Vec3::from(record.position))
            .with_rotation(Vec3::from(record.rotation))
            .with_scale(scale)
            .with_gravity(record.gravity_enabled)
    }
}
