//! Per-scene update routines: the glue a canvas host calls once per frame.
//!
//! A scene owns its physics objects exclusively, keeps them in SI meters
//! (y pointing down, like a canvas) and talks to the host in pixels through
//! a [`PixelScale`]. Each frame the host calls [`Scene::step`] with the raw
//! frame delta, then reads pixel positions to draw. Pointer events are
//! forwarded as they arrive.

use crate::body::Body;
use crate::bounds::Bounds;
use crate::config::{BodyConfig, PendulumConfig, SceneConfig};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::force::{AppliesForce, DragOverride, ForceSet, GravityForce};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::pendulum::AngularPendulum;
use crate::spring::{validate_range, SpringLink};
use crate::units::PixelScale;
use crate::vec::Vec2;

/// Host-facing contract shared by every simulation.
pub trait Scene<F: Float> {
    /// Advance by the host's frame delta (seconds). The scene clamps it.
    fn step(&mut self, dt: F) {
        self.step_observed(dt, &mut NoOpStepObserver);
    }

    fn step_observed<O: StepObserver>(&mut self, dt: F, observer: &mut O);

    /// Pointer pressed at canvas coordinates. Returns whether something was grabbed.
    fn pointer_down(&mut self, pixels: Vec2<F>) -> bool;

    /// Pointer moved to canvas coordinates.
    fn pointer_move(&mut self, pixels: Vec2<F>);

    /// Pointer released.
    fn pointer_up(&mut self);

    fn scale(&self) -> PixelScale<F>;
}

/// Remembers the last seen drag state so transitions reach the observer
/// from `step_observed`, where one is available.
#[derive(Copy, Clone, Debug, Default)]
struct DragEdge {
    held: bool,
}

impl DragEdge {
    fn observe<O: StepObserver>(&mut self, held: bool, observer: &mut O) {
        match (self.held, held) {
            (false, true) => observer.on_drag_start(),
            (true, false) => observer.on_drag_end(),
            _ => {}
        }
        self.held = held;
    }
}

fn clamped_dt<F: Float>(config: &SceneConfig<F>, dt: F) -> F {
    let clamped = config.clamp_dt(dt);
    trace_clamp(dt, clamped);
    clamped
}

#[cfg(feature = "tracing")]
fn trace_clamp<F: Float>(requested: F, used: F) {
    if requested != used {
        tracing::trace!(target: "swingy", requested = requested.to_f64(), used = used.to_f64(), "dt clamped");
    }
}

#[cfg(not(feature = "tracing"))]
fn trace_clamp<F: Float>(_requested: F, _used: F) {}

// --------------------------------------------------------------------------
// BallScene
// --------------------------------------------------------------------------

/// A single ball under gravity bouncing inside the canvas.
pub struct BallScene<F: Float> {
    config: SceneConfig<F>,
    scale: PixelScale<F>,
    body: Body<F>,
    gravity: GravityForce<F>,
    forces: ForceSet<F>,
    drag: Option<DragOverride<F>>,
    edge: DragEdge,
}

impl<F: Float + 'static> BallScene<F> {
    /// Ball of `body_config` at the center of a `width_px` x `height_px` canvas.
    pub fn in_canvas(
        config: SceneConfig<F>,
        width_px: F,
        height_px: F,
        body_config: BodyConfig<F>,
        gravity: F,
    ) -> Result<Self, PhysicsError> {
        config.validate()?;
        let scale = PixelScale::new(config.pixels_per_meter)?;
        let size = scale.to_meters(Vec2::new(width_px, height_px));
        let bounds = Bounds::from_size(size.x, size.y)?;
        let body = Body::new(size.scale(F::half()), body_config)?.with_bounds(bounds);
        Ok(BallScene {
            config,
            scale,
            body,
            gravity: GravityForce::downward(gravity)?,
            forces: ForceSet::new(),
            drag: None,
            edge: DragEdge::default(),
        })
    }

    /// Extra force terms (air drag, wind) applied after gravity.
    pub fn with_forces(mut self, forces: ForceSet<F>) -> Self {
        self.forces = forces;
        self
    }
}

impl<F: Float> BallScene<F> {
    pub fn body(&self) -> &Body<F> { &self.body }
    pub fn body_mut(&mut self) -> &mut Body<F> { &mut self.body }

    pub fn set_gravity(&mut self, g: F) -> Result<(), PhysicsError> {
        self.gravity = GravityForce::downward(g)?;
        Ok(())
    }

    pub fn position_px(&self) -> Vec2<F> {
        self.scale.to_pixels(self.body.position())
    }

    pub fn radius_px(&self) -> F {
        self.scale.length_to_pixels(self.body.radius())
    }

    /// Kinetic plus gravitational energy, with the canvas floor as zero.
    pub fn mechanical_energy(&self) -> F {
        let floor = match self.body.bounds() {
            Some(b) => Vec2::new(F::zero(), b.max().y - self.body.radius()),
            None => Vec2::zero(),
        };
        self.body.kinetic_energy() + self.body.potential_energy(self.gravity.acceleration, floor)
    }
}

impl<F: Float> Scene<F> for BallScene<F> {
    fn step_observed<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        let dt = clamped_dt(&self.config, dt);
        self.edge.observe(self.body.is_dragging(), observer);

        self.gravity.apply_to(&mut self.body);
        self.forces.apply_to(&mut self.body);
        if let Some(drag) = &self.drag {
            drag.apply_to(&mut self.body);
        }
        observer.on_forces_applied();

        self.body.update_observed(dt, observer);
        observer.on_step_complete();
    }

    fn pointer_down(&mut self, pixels: Vec2<F>) -> bool {
        let pointer = self.scale.to_meters(pixels);
        let grabbed = self.body.handle_click(pointer);
        if grabbed {
            self.drag = Some(DragOverride::at(pointer));
        }
        grabbed
    }

    fn pointer_move(&mut self, pixels: Vec2<F>) {
        if let Some(drag) = self.drag.as_mut() {
            drag.pointer = self.scale.to_meters(pixels);
            drag.apply_to(&mut self.body);
        }
    }

    fn pointer_up(&mut self) {
        self.body.stop_dragging();
        self.drag = None;
    }

    fn scale(&self) -> PixelScale<F> { self.scale }
}

// --------------------------------------------------------------------------
// SpringScene
// --------------------------------------------------------------------------

/// A mass hanging from an anchored spring with hard length limits.
pub struct SpringScene<F: Float> {
    config: SceneConfig<F>,
    scale: PixelScale<F>,
    spring: SpringLink<F>,
    body: Body<F>,
    gravity: GravityForce<F>,
    min_length: F,
    max_length: F,
    drag: Option<DragOverride<F>>,
    edge: DragEdge,
}

impl<F: Float> SpringScene<F> {
    /// Body starts at rest length straight below the anchor.
    pub fn new(
        config: SceneConfig<F>,
        spring: SpringLink<F>,
        body_config: BodyConfig<F>,
        gravity: F,
        min_length: F,
        max_length: F,
    ) -> Result<Self, PhysicsError> {
        config.validate()?;
        validate_range(min_length, max_length)?;
        let start = spring.rest_length().clamp(min_length, max_length);
        let body = Body::new(spring.anchor() + Vec2::new(F::zero(), start), body_config)?;
        Ok(SpringScene {
            config,
            scale: PixelScale::new(config.pixels_per_meter)?,
            spring,
            body,
            gravity: GravityForce::downward(gravity)?,
            min_length,
            max_length,
            drag: None,
            edge: DragEdge::default(),
        })
    }

    pub fn body(&self) -> &Body<F> { &self.body }
    pub fn body_mut(&mut self) -> &mut Body<F> { &mut self.body }
    pub fn spring(&self) -> &SpringLink<F> { &self.spring }
    pub fn spring_mut(&mut self) -> &mut SpringLink<F> { &mut self.spring }

    pub fn set_length_limits(&mut self, min_length: F, max_length: F) -> Result<(), PhysicsError> {
        validate_range(min_length, max_length)?;
        self.min_length = min_length;
        self.max_length = max_length;
        Ok(())
    }

    pub fn length_limits(&self) -> (F, F) {
        (self.min_length, self.max_length)
    }

    pub fn anchor_px(&self) -> Vec2<F> {
        self.scale.to_pixels(self.spring.anchor())
    }

    pub fn position_px(&self) -> Vec2<F> {
        self.scale.to_pixels(self.body.position())
    }

    /// Put the body back at rest, at the clamped rest length below the anchor.
    ///
    /// Limits are validated on the way in, so the only way a constraint can
    /// fail is a non-finite body state.
    fn reset_body<O: StepObserver>(&mut self, observer: &mut O) {
        let start = self.spring.rest_length().clamp(self.min_length, self.max_length);
        let rest = self.spring.anchor() + Vec2::new(F::zero(), start);
        if self.body.set_position(rest).is_ok() && self.body.set_velocity(Vec2::zero()).is_ok() {
            observer.on_state_reset();
        }
    }

    /// Kinetic, gravitational (relative to the anchor) and elastic energy.
    pub fn mechanical_energy(&self) -> F {
        self.body.kinetic_energy()
            + self.body.potential_energy(self.gravity.acceleration, self.spring.anchor())
            + self.spring.potential_energy(self.body.position())
    }
}

impl<F: Float> Scene<F> for SpringScene<F> {
    fn step_observed<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        let dt = clamped_dt(&self.config, dt);
        self.edge.observe(self.body.is_dragging(), observer);

        self.gravity.apply_to(&mut self.body);
        self.spring.apply_to(&mut self.body);
        if let Some(drag) = &self.drag {
            drag.apply_to(&mut self.body);
        }
        observer.on_forces_applied();

        self.body.update_observed(dt, observer);

        let constrained = self
            .spring
            .constrain_length_observed(&mut self.body, self.min_length, self.max_length, observer);
        if constrained.is_err() {
            self.reset_body(observer);
        }
        observer.on_step_complete();
    }

    fn pointer_down(&mut self, pixels: Vec2<F>) -> bool {
        let pointer = self.scale.to_meters(pixels);
        let grabbed = self.body.handle_click(pointer);
        if grabbed {
            self.drag = Some(DragOverride::at(pointer));
        }
        grabbed
    }

    fn pointer_move(&mut self, pixels: Vec2<F>) {
        if let Some(drag) = self.drag.as_mut() {
            drag.pointer = self.scale.to_meters(pixels);
            drag.apply_to(&mut self.body);
        }
    }

    fn pointer_up(&mut self) {
        self.body.stop_dragging();
        self.drag = None;
    }

    fn scale(&self) -> PixelScale<F> { self.scale }
}

// --------------------------------------------------------------------------
// PendulumScene
// --------------------------------------------------------------------------

pub struct PendulumScene<F: Float> {
    config: SceneConfig<F>,
    scale: PixelScale<F>,
    pendulum: AngularPendulum<F>,
    edge: DragEdge,
}

impl<F: Float> PendulumScene<F> {
    /// `pivot_px` is in canvas pixels; the arm length in `pendulum_config` is in meters.
    pub fn new(
        config: SceneConfig<F>,
        pivot_px: Vec2<F>,
        angle: F,
        pendulum_config: PendulumConfig<F>,
    ) -> Result<Self, PhysicsError> {
        config.validate()?;
        let scale = PixelScale::new(config.pixels_per_meter)?;
        let pendulum = AngularPendulum::new(scale.to_meters(pivot_px), angle, pendulum_config)?;
        Ok(PendulumScene { config, scale, pendulum, edge: DragEdge::default() })
    }

    pub fn pendulum(&self) -> &AngularPendulum<F> { &self.pendulum }
    pub fn pendulum_mut(&mut self) -> &mut AngularPendulum<F> { &mut self.pendulum }

    pub fn pivot_px(&self) -> Vec2<F> {
        self.scale.to_pixels(self.pendulum.pivot())
    }

    pub fn bob_px(&self) -> Vec2<F> {
        self.scale.to_pixels(self.pendulum.bob_position())
    }
}

impl<F: Float> Scene<F> for PendulumScene<F> {
    fn step_observed<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        let dt = clamped_dt(&self.config, dt);
        self.edge.observe(self.pendulum.is_dragging(), observer);
        self.pendulum.update_observed(dt, observer);
        observer.on_step_complete();
    }

    fn pointer_down(&mut self, pixels: Vec2<F>) -> bool {
        self.pendulum.clicked(self.scale.to_meters(pixels))
    }

    fn pointer_move(&mut self, pixels: Vec2<F>) {
        self.pendulum.drag(self.scale.to_meters(pixels));
    }

    fn pointer_up(&mut self) {
        if self.pendulum.is_dragging() {
            self.pendulum.stop_dragging();
        }
    }

    fn scale(&self) -> PixelScale<F> { self.scale }
}
