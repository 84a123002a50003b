//! Configuration types for bodies, pendulums and scenes.
//!
//! These are the plain-data parameters a host UI edits. They are validated
//! when applied, so a bad slider value is rejected at the point of mutation
//! instead of turning into NaN inside the integrator.

use crate::color::Color;
use crate::error::{ensure_non_negative, ensure_positive, ensure_unit_interval, PhysicsError};
use crate::float::Float;
use crate::integrator::Damping;
use crate::pendulum::GravityModel;

/// Parameters of a [`Body`](crate::body::Body).
///
/// # Builder Pattern
/// ```
/// use swingy::config::BodyConfig;
/// use swingy::integrator::Damping;
///
/// let config: BodyConfig<f32> = BodyConfig::new()
///     .with_mass(2.0)
///     .with_size(0.5)
///     .with_damping(Damping::Factor(0.99))
///     .with_restitution(0.8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyConfig<F: Float> {
    /// Mass in kg. Must be positive. Default: 1.
    pub mass: F,
    /// Diameter, used for hit-testing and boundary collision. Default: 1.
    pub size: F,
    /// Velocity damping. Default: none.
    pub damping: Damping<F>,
    /// Fraction of normal speed kept on a boundary bounce, in [0, 1]. Default: 1.
    pub restitution: F,
    pub color: Color,
}

impl<F: Float> BodyConfig<F> {
    pub fn new() -> Self {
        BodyConfig {
            mass: F::one(),
            size: F::one(),
            damping: Damping::none(),
            restitution: F::one(),
            color: Color::WHITE,
        }
    }

    pub fn with_mass(mut self, mass: F) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_size(mut self, size: F) -> Self {
        self.size = size;
        self
    }

    pub fn with_damping(mut self, damping: Damping<F>) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_restitution(mut self, restitution: F) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        ensure_positive(self.mass, PhysicsError::InvalidMass)?;
        ensure_non_negative(self.size, PhysicsError::InvalidSize)?;
        self.damping.validate()?;
        ensure_unit_interval(self.restitution, PhysicsError::InvalidRestitution)?;
        Ok(())
    }
}

impl<F: Float> Default for BodyConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters of an [`AngularPendulum`](crate::pendulum::AngularPendulum).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendulumConfig<F: Float> {
    /// Distance from pivot to bob. Must be positive. Default: 1.
    pub arm_length: F,
    /// Gravitational acceleration, non-negative. Default: 9.81.
    pub gravity: F,
    /// Angular velocity damping. Default: none.
    pub damping: Damping<F>,
    /// Bob diameter. Default: 0.2.
    pub size: F,
    pub gravity_model: GravityModel,
    pub color: Color,
}

impl<F: Float> PendulumConfig<F> {
    pub fn new() -> Self {
        PendulumConfig {
            arm_length: F::one(),
            gravity: F::from_f64(9.81),
            damping: Damping::none(),
            size: F::from_f64(0.2),
            gravity_model: GravityModel::Exact,
            color: Color::WHITE,
        }
    }

    pub fn with_arm_length(mut self, arm_length: F) -> Self {
        self.arm_length = arm_length;
        self
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_damping(mut self, damping: Damping<F>) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_size(mut self, size: F) -> Self {
        self.size = size;
        self
    }

    pub fn with_gravity_model(mut self, model: GravityModel) -> Self {
        self.gravity_model = model;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        ensure_positive(self.arm_length, PhysicsError::InvalidArmLength)?;
        ensure_non_negative(self.gravity, PhysicsError::InvalidGravity)?;
        self.damping.validate()?;
        ensure_non_negative(self.size, PhysicsError::InvalidSize)?;
        Ok(())
    }
}

impl<F: Float> Default for PendulumConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Host-facing settings shared by all scenes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneConfig<F: Float> {
    /// Largest `dt` a scene will integrate in one call. Default: 1/30 s.
    pub max_dt: F,
    /// Conversion between SI meters and canvas pixels. Default: 100.
    pub pixels_per_meter: F,
}

impl<F: Float> SceneConfig<F> {
    pub fn new() -> Self {
        SceneConfig {
            max_dt: F::one() / F::from_f32(30.0),
            pixels_per_meter: F::from_f32(100.0),
        }
    }

    pub fn with_max_dt(mut self, max_dt: F) -> Self {
        self.max_dt = max_dt;
        self
    }

    pub fn with_pixels_per_meter(mut self, pixels_per_meter: F) -> Self {
        self.pixels_per_meter = pixels_per_meter;
        self
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        ensure_positive(self.max_dt, PhysicsError::InvalidTimeStep)?;
        ensure_positive(self.pixels_per_meter, PhysicsError::InvalidScale)?;
        Ok(())
    }

    /// Clamp a host-supplied `dt` into `[0, max_dt]`. NaN becomes 0.
    pub fn clamp_dt(&self, dt: F) -> F {
        if dt.is_finite() {
            dt.clamp(F::zero(), self.max_dt)
        } else if dt > F::zero() {
            self.max_dt
        } else {
            F::zero()
        }
    }
}

impl<F: Float> Default for SceneConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
