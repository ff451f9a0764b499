/// Where a fresh camera starts (meters): above the ground, looking back at the origin.
pub const DEFAULT_CAMERA_POSITION: [f32; 3] = [0.0, 5.0, 10.0];

/// Initial yaw in degrees. -90° looks down -Z.
pub const DEFAULT_CAMERA_YAW_DEG: f32 = -90.0;

pub const DEFAULT_CAMERA_PITCH_DEG: f32 = 0.0;

/// Walking speed of the camera proxy in meters per second.
pub const CAMERA_MOVE_SPEED: f32 = 5.0;

/// Degrees of yaw/pitch per unit of mouse motion.
pub const MOUSE_SENSITIVITY: f32 = 0.1;

/// Upward velocity (m/s) set on the camera proxy when jumping from the ground.
pub const JUMP_SPEED: f32 = 8.0;

/// Scale applied to the cube collider for the camera proxy (width, height, depth).
pub const CAMERA_PROXY_SIZE: [f32; 3] = [1.0, 2.0, 1.0];

/// Pitch stays strictly inside ±90° so the view never flips over the vertical.
pub const PITCH_LIMIT_DEG: f32 = 89.0;

/// Distance in front of the camera at which new boxes are previewed.
pub const SPAWN_DISTANCE: f32 = 5.0;

/// Per-frame translation of the selected body in move mode (meters).
pub const EDIT_MOVE_STEP: f32 = 0.1;

/// Per-frame rotation of the selected body in rotate mode (degrees).
pub const EDIT_ROTATE_STEP_DEG: f32 = 2.0;

/// Per-frame scale change of the selected body in scale mode.
pub const EDIT_SCALE_STEP: f32 = 0.02;

/// Longest frame the session will simulate in one step (seconds).
///
/// A stalled host (window drag, debugger) would otherwise hand in a huge `dt` and tunnel bodies
/// through each other.
pub const MAX_FRAME_DT: f32 = 0.125;
