use swingy::{Body, BodyConfig, Bounds, Vec2};

fn ball_in_box(restitution: f64) -> Body<f64> {
    let bounds = Bounds::from_size(100.0, 100.0).unwrap();
    let config = BodyConfig::new().with_size(10.0).with_restitution(restitution);
    let mut body = Body::new(Vec2::new(94.0, 50.0), config).unwrap().with_bounds(bounds);
    body.set_velocity(Vec2::new(120.0, 0.0)).unwrap();
    body
}

#[test]
fn wall_bounce_keeps_restitution_share_of_speed() {
    let mut body = ball_in_box(0.8);
    let hit = body.update(1.0 / 60.0);
    assert!(hit.x && !hit.y);
    assert_eq!(body.position().x, 95.0);
    assert!(
        (body.velocity().x + 0.8 * 120.0).abs() < 1e-9,
        "expected rebound at -96, got {}",
        body.velocity().x,
    );
    assert_eq!(body.velocity().y, 0.0);
}

#[test]
fn zero_restitution_stops_normal_motion() {
    let mut body = ball_in_box(0.0);
    body.update(1.0 / 60.0);
    assert!(body.velocity().x.abs() < 1e-12);
    // Stays put against the wall on the following frames.
    body.update(1.0 / 60.0);
    assert_eq!(body.position().x, 95.0);
}

#[test]
fn elastic_bounce_returns_to_drop_height() {
    // y up, floor at 0, drop from rest at height 10.
    let bounds = Bounds::new(Vec2::new(-100.0f64, 0.0), Vec2::new(100.0, 1000.0)).unwrap();
    let config = BodyConfig::new().with_mass(1.0).with_size(0.0).with_restitution(1.0);
    let mut body = Body::new(Vec2::new(0.0f64, 10.0), config).unwrap().with_bounds(bounds);
    let g = Vec2::new(0.0, -9.81);
    let dt = 1.0 / 60.0;

    let mut bounced = false;
    let mut apex = f64::MIN;
    for _ in 0..1000 {
        body.apply_acceleration(g);
        let hit = body.update(dt);
        if hit.y {
            bounced = true;
            continue;
        }
        if bounced {
            apex = apex.max(body.position().y);
            if body.velocity().y <= 0.0 {
                break;
            }
        }
    }

    assert!(bounced, "ball never reached the floor");
    assert!((apex - 10.0).abs() < 0.25, "rebound apex {} should match drop height 10", apex);
}

#[test]
fn repeated_drag_to_same_point_is_idempotent() {
    let mut body = Body::new(Vec2::new(5.0f64, 5.0), BodyConfig::new().with_size(2.0)).unwrap();
    body.set_velocity(Vec2::new(3.0, -3.0)).unwrap();
    assert!(body.handle_click(Vec2::new(5.2, 5.0)));

    body.handle_drag(Vec2::new(8.0, 8.0));
    let first = body.position();
    for _ in 0..5 {
        body.apply_acceleration(Vec2::new(0.0, 9.81));
        body.update(1.0 / 60.0);
        body.handle_drag(Vec2::new(8.0, 8.0));
        assert_eq!(body.position(), first);
        assert_eq!(body.velocity(), Vec2::zero());
    }
    assert!((first.x - 7.8).abs() < 1e-12);
    assert!((first.y - 8.0).abs() < 1e-12);
}

#[test]
fn released_body_falls_from_rest() {
    let mut body = Body::new(Vec2::new(0.0f64, 0.0), BodyConfig::new()).unwrap();
    body.handle_click(Vec2::new(0.0, 0.0));
    body.handle_drag(Vec2::new(1.0, 1.0));
    body.stop_dragging();
    assert_eq!(body.velocity(), Vec2::zero());

    body.apply_acceleration(Vec2::new(0.0, 10.0));
    body.update(0.1);
    assert!((body.velocity().y - 1.0).abs() < 1e-12);
    assert!(body.position().y > 1.0);
}

#[test]
fn mass_can_change_mid_simulation() {
    let mut body = Body::new(Vec2::new(0.0f64, 0.0), BodyConfig::new().with_mass(1.0)).unwrap();
    body.apply_force(Vec2::new(2.0, 0.0));
    body.update(1.0);
    let v_light = body.velocity().x;

    body.set_velocity(Vec2::zero()).unwrap();
    body.set_mass(4.0).unwrap();
    body.apply_force(Vec2::new(2.0, 0.0));
    body.update(1.0);
    assert!((body.velocity().x - v_light / 4.0).abs() < 1e-12);
}

#[test]
fn body_wider_than_box_is_pinned_not_bounced() {
    let bounds = Bounds::from_size(1.0f64, 10.0).unwrap();
    let mut body = Body::new(Vec2::new(0.2, 5.0), BodyConfig::new().with_size(2.0))
        .unwrap()
        .with_bounds(bounds);
    body.set_velocity(Vec2::new(3.0, 0.0)).unwrap();

    let first = body.update(1.0 / 60.0);
    assert!(first.x);
    for _ in 0..4 {
        let hit = body.update(1.0 / 60.0);
        assert!(!hit.x, "pinned body should not keep colliding");
        assert_eq!(body.position().x, 0.5);
        assert_eq!(body.velocity().x, 0.0);
    }
}
