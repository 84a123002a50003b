//! Benchmarks for swingy physics simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use swingy::*;

fn bench_body_update(c: &mut Criterion) {
    c.bench_function("bouncing_body_1000_steps", |b| {
        b.iter(|| {
            let bounds = Bounds::from_size(8.0f32, 6.0).unwrap();
            let config = BodyConfig::new().with_size(0.5).with_restitution(0.9).with_damping(Damping::Factor(0.995));
            let mut body = Body::new(Vec2::new(4.0, 1.0), config).unwrap().with_bounds(bounds);
            let gravity = GravityForce::downward(9.81).unwrap();
            for _ in 0..1000 {
                gravity.apply_to(&mut body);
                body.update(1.0 / 60.0);
            }
            body.position()
        });
    });
}

fn bench_spring_scene(c: &mut Criterion) {
    c.bench_function("spring_scene_1000_steps", |b| {
        b.iter(|| {
            let spring = SpringLink::new(Vec2::new(4.0f32, 0.5), 1.5, 30.0).unwrap();
            let mut scene =
                SpringScene::new(SceneConfig::new(), spring, BodyConfig::new(), 9.81, 0.5, 2.5).unwrap();
            scene.body_mut().set_velocity(Vec2::new(2.0, 0.0)).unwrap();
            for _ in 0..1000 {
                scene.step(1.0 / 60.0);
            }
            scene.position_px()
        });
    });
}

fn bench_pendulum(c: &mut Criterion) {
    c.bench_function("pendulum_1000_steps", |b| {
        b.iter(|| {
            let mut p = AngularPendulum::new(Vec2::new(0.0f32, 0.0), 1.0, PendulumConfig::new()).unwrap();
            for _ in 0..1000 {
                p.update(1.0 / 60.0);
            }
            p.bob_position()
        });
    });
}

criterion_group!(benches, bench_body_update, bench_spring_scene, bench_pendulum);
criterion_main!(benches);
