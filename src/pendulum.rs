//! Simple pendulum in angular coordinates.
//!
//! The angle is measured from the downward vertical (+y on a canvas), so the
//! bob sits at `pivot + arm_length * (sin(angle), cos(angle))`.

use crate::color::Color;
use crate::config::PendulumConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::integrator::{integrate_angle, Damping};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::vec::Vec2;

/// How gravity turns into angular acceleration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GravityModel {
    /// Linearized `-(g/L) * angle`, valid for small swings.
    SmallAngle,
    /// Full `-(g/L) * sin(angle)`.
    #[default]
    Exact,
}

#[derive(Clone, Debug)]
pub struct AngularPendulum<F: Float> {
    pivot: Vec2<F>,
    arm_length: F,
    angle: F,
    angular_velocity: F,
    angular_acceleration: F,
    gravity: F,
    damping: Damping<F>,
    gravity_model: GravityModel,
    size: F,
    color: Color,
    dragging: bool,
}

impl<F: Float> AngularPendulum<F> {
    pub fn new(pivot: Vec2<F>, angle: F, config: PendulumConfig<F>) -> Result<Self, PhysicsError> {
        if !pivot.is_finite() || !angle.is_finite() {
            return Err(PhysicsError::NonFiniteVector);
        }
        config.validate()?;
        Ok(AngularPendulum {
            pivot,
            arm_length: config.arm_length,
            angle,
            angular_velocity: F::zero(),
            angular_acceleration: F::zero(),
            gravity: config.gravity,
            damping: config.damping,
            gravity_model: config.gravity_model,
            size: config.size,
            color: config.color,
            dragging: false,
        })
    }

    /// Hot-reload parameters. Angle, angular velocity and drag state are kept.
    pub fn configure(&mut self, config: &PendulumConfig<F>) -> Result<(), PhysicsError> {
        config.validate()?;
        self.arm_length = config.arm_length;
        self.gravity = config.gravity;
        self.damping = config.damping;
        self.gravity_model = config.gravity_model;
        self.size = config.size;
        self.color = config.color;
        Ok(())
    }

    /// Angular acceleration gravity produces at `angle`.
    pub fn gravity_torque(&self, angle: F) -> F {
        let k = self.gravity / self.arm_length;
        match self.gravity_model {
            GravityModel::SmallAngle => -k * angle,
            GravityModel::Exact => -k * angle.sin(),
        }
    }

    pub fn update(&mut self, dt: F) {
        self.update_observed(dt, &mut NoOpStepObserver);
    }

    /// Advance by `dt` seconds with the same semi-implicit scheme as bodies.
    /// Does nothing while the bob is held.
    pub fn update_observed<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        if self.dragging {
            return;
        }
        self.angular_acceleration = self.gravity_torque(self.angle);
        integrate_angle(
            &mut self.angle,
            &mut self.angular_velocity,
            self.angular_acceleration,
            dt,
            &self.damping,
        );
        observer.on_integrate();
    }

    /// Grab the bob if `pointer` is within `size / 2` of it. Returns whether
    /// this click hit; a miss leaves an existing drag alone.
    pub fn clicked(&mut self, pointer: Vec2<F>) -> bool {
        let hit = self.bob_position().distance(pointer) <= self.size * F::half();
        if hit {
            self.dragging = true;
            self.angular_velocity = F::zero();
        }
        hit
    }

    /// Point the arm at `pointer` while held.
    pub fn drag(&mut self, pointer: Vec2<F>) {
        if !self.dragging {
            return;
        }
        let d = pointer - self.pivot;
        self.angle = F::atan2(d.x, d.y);
        self.angular_velocity = F::zero();
    }

    pub fn stop_dragging(&mut self) {
        self.dragging = false;
        self.angular_velocity = F::zero();
    }

    pub fn is_dragging(&self) -> bool { self.dragging }

    /// Cartesian bob position derived from the angle.
    pub fn bob_position(&self) -> Vec2<F> {
        self.pivot + Vec2::new(self.angle.sin(), self.angle.cos()).scale(self.arm_length)
    }

    /// Linear bob velocity, tangent to the arc.
    pub fn bob_velocity(&self) -> Vec2<F> {
        Vec2::new(self.angle.cos(), -self.angle.sin()).scale(self.arm_length * self.angular_velocity)
    }

    /// Kinetic plus potential energy divided by bob mass, with the lowest
    /// point as zero. The potential term matches the gravity model.
    pub fn energy_per_unit_mass(&self) -> F {
        let l = self.arm_length;
        let kinetic = F::half() * l * l * self.angular_velocity * self.angular_velocity;
        let potential = match self.gravity_model {
            GravityModel::SmallAngle => F::half() * self.gravity * l * self.angle * self.angle,
            GravityModel::Exact => self.gravity * l * (F::one() - self.angle.cos()),
        };
        kinetic + potential
    }

    pub fn pivot(&self) -> Vec2<F> { self.pivot }
    pub fn arm_length(&self) -> F { self.arm_length }
    pub fn angle(&self) -> F { self.angle }
    pub fn angular_velocity(&self) -> F { self.angular_velocity }
    /// Acceleration used by the most recent step.
    pub fn angular_acceleration(&self) -> F { self.angular_acceleration }
    pub fn gravity(&self) -> F { self.gravity }
    pub fn damping(&self) -> Damping<F> { self.damping }
    pub fn gravity_model(&self) -> GravityModel { self.gravity_model }
    pub fn size(&self) -> F { self.size }
    pub fn color(&self) -> Color { self.color }

    pub fn set_pivot(&mut self, pivot: Vec2<F>) -> Result<(), PhysicsError> {
        if !pivot.is_finite() {
            return Err(PhysicsError::NonFiniteVector);
        }
        self.pivot = pivot;
        Ok(())
    }

    pub fn set_angle(&mut self, angle: F) -> Result<(), PhysicsError> {
        if !angle.is_finite() {
            return Err(PhysicsError::NonFiniteVector);
        }
        self.angle = angle;
        Ok(())
    }

    pub fn set_angular_velocity(&mut self, angular_velocity: F) -> Result<(), PhysicsError> {
        if !angular_velocity.is_finite() {
            return Err(PhysicsError::NonFiniteVector);
        }
        self.angular_velocity = angular_velocity;
        Ok(())
    }
}
