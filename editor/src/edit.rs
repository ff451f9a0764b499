use boxworld_physics::{RigidBody, Vec3, flatten_xz};

use crate::input::EditInput;
use crate::settings::EditSettings;

/// What the held axes do to the selected body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EditMode {
    #[default]
    Move,
    Rotate,
    Scale,
}

impl EditMode {
    pub const ALL: [EditMode; 3] = [EditMode::Move, EditMode::Rotate, EditMode::Scale];

    pub fn next(self) -> Self {
        match self {
            EditMode::Move => EditMode::Rotate,
            EditMode::Rotate => EditMode::Scale,
            EditMode::Scale => EditMode::Move,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            EditMode::Move => EditMode::Scale,
            EditMode::Rotate => EditMode::Move,
            EditMode::Scale => EditMode::Rotate,
        }
    }
}

/// One frame of editing on `body`.
///
/// `view_forward`/`view_right` are the camera axes; moves follow them flattened onto the ground
/// plane so looking up or down does not lift the body. Scaling is floored by the body itself.
pub fn apply_edit(
    body: &mut RigidBody,
    mode: EditMode,
    input: &EditInput,
    view_forward: Vec3,
    view_right: Vec3,
    steps: &EditSettings,
) {
    if input.is_idle() {
        return;
    }
    match mode {
        EditMode::Move => {
            let forward = flatten_xz(view_forward);
            let right = flatten_xz(view_right);
            body.position += (forward * input.forward + right * input.right) * steps.move_step;
            body.position.y += input.up * steps.move_step;
        }
        EditMode::Rotate => {
            body.rotation.x += input.forward * steps.rotate_step_deg;
            body.rotation.y -= input.right * steps.rotate_step_deg;
        }
        EditMode::Scale => {
            let delta = Vec3::new(input.right, input.forward, input.up) * steps.scale_step;
            body.set_scale(body.scale() + delta);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use boxworld_physics::{MIN_SCALE, cube_collider};

    use super::*;

    fn body() -> RigidBody {
        RigidBody::new(Arc::new(cube_collider().unwrap()))
    }

    fn forward() -> Vec3 {
        Vec3::new(0.0, 0.0, -1.0)
    }

    fn right() -> Vec3 {
        Vec3::new(1.0, 0.0, 0.0)
    }

    #[test]
    fn modes_cycle_both_ways() {
        for mode in EditMode::ALL {
            assert_eq!(mode.next().prev(), mode);
        }
        assert_eq!(EditMode::Scale.next(), EditMode::Move);
        assert_eq!(EditMode::Move.prev(), EditMode::Scale);
        assert_eq!(EditMode::default(), EditMode::Move);
    }

    #[test]
    fn move_follows_flattened_view_axes() {
        let mut b = body();
        let tilted_forward = Vec3::new(0.0, -0.7, -0.7);
        let input = EditInput::new(1.0, -1.0, 1.0);
        apply_edit(&mut b, EditMode::Move, &input, tilted_forward, right(), &EditSettings::default());
        assert!((b.position - Vec3::new(-0.1, 0.1, -0.1)).norm() < 1.0e-5);
    }

    #[test]
    fn rotate_pitches_on_forward_and_yaws_against_right() {
        let mut b = body();
        let input = EditInput::new(1.0, 1.0, 0.0);
        apply_edit(&mut b, EditMode::Rotate, &input, forward(), right(), &EditSettings::default());
        assert_eq!(b.rotation, Vec3::new(2.0, -2.0, 0.0));
    }

    #[test]
    fn scale_maps_axes_to_y_x_z() {
        let mut b = body();
        let input = EditInput::new(1.0, -1.0, 1.0);
        apply_edit(&mut b, EditMode::Scale, &input, forward(), right(), &EditSettings::default());
        assert!((b.scale() - Vec3::new(0.98, 1.02, 1.02)).norm() < 1.0e-5);
    }

    #[test]
    fn repeated_shrinking_stops_at_the_floor() {
        let mut b = body();
        let shrink = EditInput::new(-1.0, -1.0, -1.0);
        for _ in 0..200 {
            apply_edit(&mut b, EditMode::Scale, &shrink, forward(), right(), &EditSettings::default());
            assert!(b.scale().min() >= MIN_SCALE);
        }
        assert_eq!(b.scale(), Vec3::repeat(MIN_SCALE));
    }
}
