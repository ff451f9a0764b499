use std::sync::Arc;

use boxworld_physics::{BodyId, RigidBody, Vec3, World, cube_collider};

const DT: f32 = 1.0 / 60.0;

#[test]
fn falling_body_lands_without_ever_going_below_ground() {
    let mut world = World::default();
    let id = world.push(
        RigidBody::new(Arc::new(cube_collider().unwrap())).with_position(Vec3::new(0.0, 5.0, 0.0)),
    );

    let mut landed_at = None;
    for tick in 0..600 {
        world.step(DT);
        let body = world.get(id).unwrap();
        assert!(body.position.y >= 0.0, "tick {tick}: y = {}", body.position.y);

        if body.position.y == 0.0 {
            // Vertical velocity is cancelled on the same tick the clamp fires.
            assert_eq!(body.velocity.y, 0.0);
            assert!(body.is_grounded());
            landed_at = Some(tick);
            break;
        }
        assert!(body.velocity.y < 0.0);
    }

    // Free fall from 5 m takes about one second.
    let tick = landed_at.expect("body never reached the ground");
    assert!((55..=65).contains(&tick), "landed at tick {tick}");
}

#[test]
fn pick_prefers_the_nearest_of_three_boxes() {
    let collider = Arc::new(cube_collider().unwrap());
    let mut world = World::default();
    for z in [-6.0, -12.0, -18.0] {
        world.push(
            RigidBody::new(collider.clone())
                .with_position(Vec3::new(0.0, 1.0, z))
                .with_gravity(false),
        );
    }

    let origin = Vec3::new(0.0, 1.0, 0.0);
    let dir = Vec3::new(0.0, 0.0, -1.0);
    assert_eq!(world.pick(origin, dir).unwrap().body, BodyId(0));

    for (_, body) in world.iter_mut() {
        body.set_selectable(false);
    }
    assert!(world.pick(origin, dir).is_none());
}

#[test]
fn tower_settles_above_the_ground_without_sinking() {
    let collider = Arc::new(cube_collider().unwrap());
    let mut world = World::default();
    for level in 0..3 {
        world.push(
            RigidBody::new(collider.clone()).with_position(Vec3::new(0.0, 2.2 * level as f32, 0.0)),
        );
    }

    for _ in 0..300 {
        world.step(DT);
        assert!(world.iter().all(|(_, b)| b.position.y >= 0.0));
    }

    let heights: Vec<f32> = world.iter().map(|(_, b)| b.position.y).collect();
    assert!(heights[0] < heights[1] && heights[1] < heights[2]);
    // Boxes end up roughly one box height apart; three passes leave some residual overlap.
    assert!(heights[2] - heights[0] > 3.0);
}
