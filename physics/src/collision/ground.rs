use super::types::Vec3;
use crate::constants::GROUND_Y;

/// Keep a body origin on or above the implicit ground plane.
///
/// If `position` is below the plane it is lifted onto it and the vertical velocity is
/// cancelled. Returns `true` when the clamp fired, i.e. the body is resting on the ground.
#[inline]
pub fn clamp_to_ground(position: &mut Vec3, velocity: &mut Vec3) -> bool {
    if position.y < GROUND_Y {
        position.y = GROUND_Y;
        velocity.y = 0.0;
        return true;
    }
    false
}

/// Grounding after a pair correction: pushed upward by the contact, or sitting at/below the
/// plane. The flag only survives while the pair keeps being re-resolved every step; there is
/// no contact persistence between steps.
#[inline]
pub fn grounded_after_push(vertical_push: f32, position_y: f32) -> bool {
    vertical_push > 0.0 || position_y <= GROUND_Y
}
