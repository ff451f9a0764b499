/*!
First-person editor camera backed by an invisible proxy body.

The proxy lives in the world like any other body, so the camera falls, lands and bumps into
boxes. Movement input is written to the proxy's planar velocity; after the world step the
eye snaps to the proxy position.
*/

use boxworld_physics::{BodyId, Vec3, World, direction_from_yaw_pitch, right_of, safe_normalize};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CAMERA_PITCH_DEG, DEFAULT_CAMERA_POSITION, DEFAULT_CAMERA_YAW_DEG};
use crate::input::{EditInput, Vec2};
use crate::settings::CameraSettings;

/// Persisted camera state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraRecord {
    pub position: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
    /// Proxy body position. Older scene files may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rb_position: Option<[f32; 3]>,
}

#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
    direction: Vec3,
    proxy: BodyId,
    settings: CameraSettings,
}

impl Camera {
    /// Camera at the default pose, attached to an already spawned proxy body.
    pub fn new(proxy: BodyId, settings: CameraSettings) -> Self {
        Self::with_pose(
            Vec3::from(DEFAULT_CAMERA_POSITION),
            DEFAULT_CAMERA_YAW_DEG,
            DEFAULT_CAMERA_PITCH_DEG,
            proxy,
            settings,
        )
    }

    pub fn with_pose(
        position: Vec3,
        yaw: f32,
        pitch: f32,
        proxy: BodyId,
        settings: CameraSettings,
    ) -> Self {
        let mut camera = Self {
            position,
            yaw,
            pitch,
            direction: Vec3::zeros(),
            proxy,
            settings,
        };
        // Same clamp and direction rebuild as a zero mouse move.
        camera.look(Vec2::zeros());
        camera
    }

    /// Camera pose from a scene file. The caller spawns the proxy at [`Camera::proxy_position`].
    pub fn from_record(record: &CameraRecord, proxy: BodyId, settings: CameraSettings) -> Self {
        Self::with_pose(
            Vec3::from(record.position),
            record.yaw,
            record.pitch,
            proxy,
            settings,
        )
    }

    pub fn to_record(&self, world: &World) -> CameraRecord {
        CameraRecord {
            position: self.position.into(),
            yaw: self.yaw,
            pitch: self.pitch,
            rb_position: world.get(self.proxy).map(|b| b.position.into()),
        }
    }

    /// Where the proxy of a loaded camera should be placed.
    pub fn proxy_position(record: &CameraRecord) -> Vec3 {
        Vec3::from(record.rb_position.unwrap_or(record.position))
    }

    #[inline]
    pub fn proxy(&self) -> BodyId {
        self.proxy
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    #[inline]
    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    /// Unit view direction.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.direction
    }

    /// Unit vector to the right of the view, always horizontal.
    #[inline]
    pub fn right(&self) -> Vec3 {
        right_of(self.direction)
    }

    /// Apply relative mouse motion: x turns, y tilts (mouse down looks down).
    pub fn look(&mut self, delta: Vec2) {
        let s = self.settings.mouse_sensitivity;
        let limit = self.settings.pitch_limit_deg;
        self.yaw += delta.x * s;
        self.pitch = (self.pitch - delta.y * s).clamp(-limit, limit);
        self.direction = safe_normalize(direction_from_yaw_pitch(self.yaw, self.pitch));
    }

    /// Write walking input into the proxy body.
    ///
    /// Planar velocity is replaced (not accumulated) by the normalized input direction times the
    /// move speed; no input stops the proxy. Jumping only works while the proxy is grounded.
    pub fn drive(&self, world: &mut World, axes: &EditInput, jump: bool) {
        let forward = self.forward();
        let right = self.right();
        let planar = Vec3::new(
            forward.x * axes.forward + right.x * axes.right,
            0.0,
            forward.z * axes.forward + right.z * axes.right,
        );
        let velocity = safe_normalize(planar) * self.settings.move_speed;

        let Some(body) = world.get_mut(self.proxy) else {
            log::warn!("camera proxy {:?} missing from world", self.proxy);
            return;
        };
        if jump && body.is_grounded() {
            body.velocity.y = self.settings.jump_speed;
        }
        body.velocity.x = velocity.x;
        body.velocity.z = velocity.z;
    }

    /// Snap the eye to the proxy after a world step.
    pub fn follow(&mut self, world: &World) {
        if let Some(body) = world.get(self.proxy) {
            self.position = body.position;
        }
    }

    /// Preview spawn point in front of the eye.
    pub fn spawn_point(&self) -> Vec3 {
        self.position + self.forward() * self.settings.spawn_distance
    }
}
