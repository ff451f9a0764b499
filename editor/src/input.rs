//! Device-independent editor input.
//!
//! The host turns key presses and mouse motion into these values; nothing here knows about a
//! window or a keyboard layout.

use nalgebra as na;

pub type Vec2 = na::Vector2<f32>;

/// Discrete, edge-triggered commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditorAction {
    /// Start placing a new box in front of the camera.
    Spawn,
    /// Commit the pending preview into the scene.
    Confirm,
    /// Drop the pending preview.
    Cancel,
    /// Primary click: confirms a pending preview, otherwise picks along the view ray.
    Click,
    /// Secondary click: cancels a pending preview, otherwise clears the selection.
    Deselect,
    ToggleGravity,
    NextMode,
    PrevMode,
}

/// Held movement axes, each in `-1.0..=1.0`.
///
/// The same axes drive the camera when nothing is selected and the edit commands otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EditInput {
    /// +1 forward (W), -1 backward (S).
    pub forward: f32,
    /// +1 right (D), -1 left (A).
    pub right: f32,
    /// +1 up (E), -1 down (Q).
    pub up: f32,
}

impl EditInput {
    pub fn new(forward: f32, right: f32, up: f32) -> Self {
        Self {
            forward: forward.clamp(-1.0, 1.0),
            right: right.clamp(-1.0, 1.0),
            up: up.clamp(-1.0, 1.0),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.forward == 0.0 && self.right == 0.0 && self.up == 0.0
    }
}

/// Continuous input sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Relative mouse motion since the last frame (x right, y down).
    pub look: Vec2,
    pub axes: EditInput,
    pub jump: bool,
}
