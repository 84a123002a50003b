use swingy::{Body, BodyConfig, GravityForce, AppliesForce, SpringLink, Vec2};

fn run_frame(spring: &SpringLink<f64>, body: &mut Body<f64>, gravity: &GravityForce<f64>, min: f64, max: f64) {
    gravity.apply_to(body);
    spring.connect(body);
    body.update(1.0 / 60.0);
    spring.constrain_length(body, min, max).unwrap();
}

#[test]
fn length_limits_hold_after_every_frame() {
    let anchor = Vec2::new(0.0f64, 0.0);
    let mut spring = SpringLink::new(anchor, 1.0, 40.0).unwrap();
    let gravity = GravityForce::downward(9.81).unwrap();
    let mut body = Body::new(Vec2::new(0.0f64, 3.0), BodyConfig::new()).unwrap();
    body.set_velocity(Vec2::new(4.0, 0.0)).unwrap();
    let (min, max) = (0.5, 1.5);

    for frame in 0..600 {
        // Vary the spring mid-run like a user dragging a slider.
        if frame == 200 {
            spring.set_stiffness(400.0).unwrap();
        }
        if frame == 400 {
            spring.set_rest_length(0.1).unwrap();
        }
        run_frame(&spring, &mut body, &gravity, min, max);
        let d = body.position().distance(anchor);
        assert!(
            d >= min - 1e-12 && d <= max + 1e-12,
            "frame {}: length {} escaped [{}, {}]",
            frame, d, min, max,
        );
    }
}

#[test]
fn clamp_zeroes_velocity() {
    let spring = SpringLink::new(Vec2::new(0.0f64, 0.0), 1.0, 10.0).unwrap();
    let mut body = Body::new(Vec2::new(3.0f64, 4.0), BodyConfig::new()).unwrap();
    body.set_velocity(Vec2::new(1.0, 1.0)).unwrap();
    assert!(spring.constrain_length(&mut body, 0.5, 2.0).unwrap());
    assert!((body.position().x - 1.2).abs() < 1e-12);
    assert!((body.position().y - 1.6).abs() < 1e-12);
    assert_eq!(body.velocity(), Vec2::zero());
}

#[test]
fn undamped_spring_energy_stays_bounded() {
    let spring = SpringLink::new(Vec2::new(0.0f64, 0.0), 1.0, 10.0).unwrap();
    let mut body = Body::new(Vec2::new(1.5f64, 0.0), BodyConfig::new()).unwrap();
    let energy = |b: &Body<f64>| b.kinetic_energy() + spring.potential_energy(b.position());
    let e0 = energy(&body);

    for _ in 0..3000 {
        spring.connect(&mut body);
        body.update(1.0 / 60.0);
        spring.constrain_length(&mut body, 0.0, 100.0).unwrap();
        let e = energy(&body);
        assert!((e - e0).abs() < 0.1 * e0, "energy {} drifted from {}", e, e0);
    }
}

#[test]
fn spring_oscillates_around_rest_length() {
    let spring = SpringLink::new(Vec2::new(0.0f64, 0.0), 2.0, 20.0).unwrap();
    let mut body = Body::new(Vec2::new(0.0f64, 3.0), BodyConfig::new()).unwrap();
    let mut crossed = false;
    for _ in 0..120 {
        spring.apply_to(&mut body);
        body.update(1.0 / 60.0);
        if body.position().y < 2.0 {
            crossed = true;
            break;
        }
    }
    assert!(crossed, "stretched spring should pull the body past its rest length");
}
