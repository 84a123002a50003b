//! Error types for physics configuration.

use core::fmt;

/// Errors raised when a body, spring, pendulum or scene is given
/// parameters the integrator cannot run with.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Mass must be positive and finite.
    InvalidMass,
    /// Size must be non-negative and finite.
    InvalidSize,
    /// Damping factor must be in (0, 1], damping rate must be non-negative.
    InvalidDamping,
    /// Restitution must be in [0, 1].
    InvalidRestitution,
    /// Spring rest length must be non-negative and finite.
    InvalidRestLength,
    /// Spring stiffness must be non-negative and finite.
    InvalidStiffness,
    /// Length constraint needs `0 <= min <= max`.
    InvalidLengthRange { min: f64, max: f64 },
    /// Pendulum arm length must be positive and finite.
    InvalidArmLength,
    /// Gravity must be finite (and non-negative for a pendulum).
    InvalidGravity,
    /// Pixels-per-meter scale must be positive and finite.
    InvalidScale,
    /// Maximum time step must be positive and finite.
    InvalidTimeStep,
    /// Bounds need `min < max` on both axes.
    InvalidBounds,
    /// A position, velocity or anchor had a non-finite component.
    NonFiniteVector,
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass => write!(f, "mass must be positive and finite"),
            PhysicsError::InvalidSize => write!(f, "size must be non-negative and finite"),
            PhysicsError::InvalidDamping => {
                write!(f, "damping factor must be in (0, 1] and damping rate must be >= 0")
            }
            PhysicsError::InvalidRestitution => write!(f, "restitution must be in [0, 1]"),
            PhysicsError::InvalidRestLength => write!(f, "rest length must be non-negative"),
            PhysicsError::InvalidStiffness => write!(f, "stiffness must be non-negative"),
            PhysicsError::InvalidLengthRange { min, max } => {
                write!(f, "length range [{}, {}] is invalid", min, max)
            }
            PhysicsError::InvalidArmLength => write!(f, "arm length must be positive"),
            PhysicsError::InvalidGravity => write!(f, "gravity must be finite"),
            PhysicsError::InvalidScale => write!(f, "pixels per meter must be positive"),
            PhysicsError::InvalidTimeStep => write!(f, "max time step must be positive"),
            PhysicsError::InvalidBounds => write!(f, "bounds must have min < max on both axes"),
            PhysicsError::NonFiniteVector => write!(f, "vector components must be finite"),
        }
    }
}

impl core::error::Error for PhysicsError {}

/// Reject anything that is not a strictly positive, finite value.
pub(crate) fn ensure_positive<F: crate::Float>(value: F, err: PhysicsError) -> Result<F, PhysicsError> {
    if value.is_finite() && value > F::zero() {
        Ok(value)
    } else {
        Err(err)
    }
}

/// Reject anything that is not a non-negative, finite value.
pub(crate) fn ensure_non_negative<F: crate::Float>(value: F, err: PhysicsError) -> Result<F, PhysicsError> {
    if value.is_finite() && value >= F::zero() {
        Ok(value)
    } else {
        Err(err)
    }
}

/// Reject values outside the closed unit interval.
pub(crate) fn ensure_unit_interval<F: crate::Float>(value: F, err: PhysicsError) -> Result<F, PhysicsError> {
    if value.is_finite() && value >= F::zero() && value <= F::one() {
        Ok(value)
    } else {
        Err(err)
    }
}
