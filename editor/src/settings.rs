use boxworld_physics::{Vec3, WorldSettings};

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSettings {
    pub move_speed: f32,
    pub mouse_sensitivity: f32,
    pub jump_speed: f32,
    /// Proxy scale relative to the unit cube.
    pub size: Vec3,
    pub spawn_distance: f32,
    pub pitch_limit_deg: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            move_speed: CAMERA_MOVE_SPEED,
            mouse_sensitivity: MOUSE_SENSITIVITY,
            jump_speed: JUMP_SPEED,
            size: Vec3::from(CAMERA_PROXY_SIZE),
            spawn_distance: SPAWN_DISTANCE,
            pitch_limit_deg: PITCH_LIMIT_DEG,
        }
    }
}

/// Per-frame step sizes for editing the selected body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EditSettings {
    pub move_step: f32,
    pub rotate_step_deg: f32,
    pub scale_step: f32,
}

impl Default for EditSettings {
    fn default() -> Self {
        Self {
            move_step: EDIT_MOVE_STEP,
            rotate_step_deg: EDIT_ROTATE_STEP_DEG,
            scale_step: EDIT_SCALE_STEP,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EditorSettings {
    pub world: WorldSettings,
    pub camera: CameraSettings,
    pub edit: EditSettings,
}
