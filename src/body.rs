//! Point-mass body driven by accumulated forces and pointer drags.

use crate::bounds::{Bounds, Collision};
use crate::color::Color;
use crate::config::BodyConfig;
use crate::error::{ensure_non_negative, ensure_positive, ensure_unit_interval, PhysicsError};
use crate::float::Float;
use crate::integrator::{integrate, Damping};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::vec::Vec2;

/// Pointer interaction state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DragState<F: Float> {
    Free,
    /// Held by the pointer. `offset` is `position - pointer` at grab time.
    Dragging { offset: Vec2<F> },
}

/// A free point mass: the ball, bob or block of a scene.
///
/// Each frame the host (or a [`Scene`](crate::scene::Scene)) fills the
/// acceleration accumulator through [`apply_force`](Body::apply_force) and
/// [`apply_acceleration`](Body::apply_acceleration), then calls
/// [`update`](Body::update). The accumulator is always zero when `update`
/// returns.
#[derive(Clone, Debug)]
pub struct Body<F: Float> {
    position: Vec2<F>,
    velocity: Vec2<F>,
    acceleration: Vec2<F>,
    mass: F,
    size: F,
    damping: Damping<F>,
    restitution: F,
    color: Color,
    bounds: Option<Bounds<F>>,
    drag: DragState<F>,
}

impl<F: Float> Body<F> {
    pub fn new(position: Vec2<F>, config: BodyConfig<F>) -> Result<Self, PhysicsError> {
        if !position.is_finite() {
            return Err(PhysicsError::NonFiniteVector);
        }
        config.validate()?;
        Ok(Body {
            position,
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            mass: config.mass,
            size: config.size,
            damping: config.damping,
            restitution: config.restitution,
            color: config.color,
            bounds: None,
            drag: DragState::Free,
        })
    }

    /// Attach a region the body bounces inside.
    pub fn with_bounds(mut self, bounds: Bounds<F>) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Apply a whole parameter set to a live body.
    ///
    /// Either every field is applied or, on error, none is. Position,
    /// velocity and drag state are kept.
    pub fn configure(&mut self, config: &BodyConfig<F>) -> Result<(), PhysicsError> {
        config.validate()?;
        self.mass = config.mass;
        self.size = config.size;
        self.damping = config.damping;
        self.restitution = config.restitution;
        self.color = config.color;
        Ok(())
    }

    /// `acceleration += force / mass`.
    pub fn apply_force(&mut self, force: Vec2<F>) {
        self.acceleration = self.acceleration + force.scale(F::one() / self.mass);
    }

    /// `acceleration += accel`, independent of mass.
    pub fn apply_acceleration(&mut self, accel: Vec2<F>) {
        self.acceleration = self.acceleration + accel;
    }

    /// Advance by `dt` seconds. See [`update_observed`](Body::update_observed).
    pub fn update(&mut self, dt: F) -> Collision {
        self.update_observed(dt, &mut NoOpStepObserver)
    }

    /// Integrate the accumulated acceleration, resolve bounds, clear the accumulator.
    ///
    /// A dragged body ignores its forces: it only moves through
    /// [`handle_drag`](Body::handle_drag).
    pub fn update_observed<O: StepObserver>(&mut self, dt: F, observer: &mut O) -> Collision {
        if self.is_dragging() {
            self.acceleration = Vec2::zero();
            return Collision::default();
        }

        integrate(&mut self.position, &mut self.velocity, self.acceleration, dt, &self.damping);
        self.acceleration = Vec2::zero();
        observer.on_integrate();

        let radius = self.radius();
        match self.bounds {
            Some(bounds) => bounds.collide(
                &mut self.position,
                &mut self.velocity,
                radius,
                self.restitution,
                observer,
            ),
            None => Collision::default(),
        }
    }

    /// Grab the body if `pointer` is within `size / 2` of its center.
    pub fn handle_click(&mut self, pointer: Vec2<F>) -> bool {
        if self.position.distance(pointer) <= self.radius() {
            self.drag = DragState::Dragging { offset: self.position - pointer };
            true
        } else {
            false
        }
    }

    /// Teleport a held body to follow `pointer`. Velocity is zeroed so the
    /// body does not launch on release. No-op when not dragging.
    pub fn handle_drag(&mut self, pointer: Vec2<F>) {
        if let DragState::Dragging { offset } = self.drag {
            self.position = pointer + offset;
            self.velocity = Vec2::zero();
        }
    }

    pub fn stop_dragging(&mut self) {
        self.drag = DragState::Free;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    pub fn drag_state(&self) -> DragState<F> { self.drag }

    pub fn position(&self) -> Vec2<F> { self.position }
    pub fn velocity(&self) -> Vec2<F> { self.velocity }
    /// Acceleration accumulated since the last `update`.
    pub fn acceleration(&self) -> Vec2<F> { self.acceleration }
    pub fn mass(&self) -> F { self.mass }
    pub fn size(&self) -> F { self.size }
    pub fn radius(&self) -> F { self.size * F::half() }
    pub fn damping(&self) -> Damping<F> { self.damping }
    pub fn restitution(&self) -> F { self.restitution }
    pub fn color(&self) -> Color { self.color }
    pub fn bounds(&self) -> Option<&Bounds<F>> { self.bounds.as_ref() }

    pub fn set_position(&mut self, position: Vec2<F>) -> Result<(), PhysicsError> {
        if !position.is_finite() {
            return Err(PhysicsError::NonFiniteVector);
        }
        self.position = position;
        Ok(())
    }

    pub fn set_velocity(&mut self, velocity: Vec2<F>) -> Result<(), PhysicsError> {
        if !velocity.is_finite() {
            return Err(PhysicsError::NonFiniteVector);
        }
        self.velocity = velocity;
        Ok(())
    }

    pub fn set_mass(&mut self, mass: F) -> Result<(), PhysicsError> {
        self.mass = ensure_positive(mass, PhysicsError::InvalidMass)?;
        Ok(())
    }

    pub fn set_size(&mut self, size: F) -> Result<(), PhysicsError> {
        self.size = ensure_non_negative(size, PhysicsError::InvalidSize)?;
        Ok(())
    }

    pub fn set_damping(&mut self, damping: Damping<F>) -> Result<(), PhysicsError> {
        damping.validate()?;
        self.damping = damping;
        Ok(())
    }

    pub fn set_restitution(&mut self, restitution: F) -> Result<(), PhysicsError> {
        self.restitution = ensure_unit_interval(restitution, PhysicsError::InvalidRestitution)?;
        Ok(())
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_bounds(&mut self, bounds: Option<Bounds<F>>) {
        self.bounds = bounds;
    }

    /// `1/2 m |v|^2`.
    pub fn kinetic_energy(&self) -> F {
        F::half() * self.mass * self.velocity.magnitude_sq()
    }

    /// Potential energy in a uniform field `gravity` (an acceleration),
    /// measured from `reference`.
    pub fn potential_energy(&self, gravity: Vec2<F>, reference: Vec2<F>) -> F {
        -(self.mass * gravity.dot(self.position - reference))
    }
}
