//! Semi-implicit (symplectic) Euler stepping with frame-rate independent damping.
//!
//! Velocity is advanced from the accumulated acceleration first, damped, and
//! only then used to move the position. Compared with explicit Euler this
//! keeps oscillating systems (springs, pendulums) from gaining energy over
//! long runs.

use crate::error::{ensure_non_negative, PhysicsError};
use crate::float::Float;
use crate::vec::Vec2;

/// Frame rate the `Factor` damping constants are tuned at.
const REFERENCE_FPS: f32 = 60.0;

/// Velocity attenuation model.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Damping<F: Float> {
    /// Retention ratio per frame at 60 fps, in (0, 1]. Normalized to the
    /// actual `dt` as `(factor^60)^dt`.
    Factor(F),
    /// Continuous decay constant (1/s), applied as `exp(-rate * dt)`.
    Rate(F),
}

impl<F: Float> Damping<F> {
    /// No energy loss.
    pub fn none() -> Self {
        Damping::Rate(F::zero())
    }

    /// Validated `Factor` damping.
    pub fn factor(factor: F) -> Result<Self, PhysicsError> {
        let d = Damping::Factor(factor);
        d.validate()?;
        Ok(d)
    }

    /// Validated `Rate` damping.
    pub fn rate(rate: F) -> Result<Self, PhysicsError> {
        let d = Damping::Rate(rate);
        d.validate()?;
        Ok(d)
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        match *self {
            Damping::Factor(f) => {
                if f.is_finite() && f > F::zero() && f <= F::one() {
                    Ok(())
                } else {
                    Err(PhysicsError::InvalidDamping)
                }
            }
            Damping::Rate(r) => ensure_non_negative(r, PhysicsError::InvalidDamping).map(|_| ()),
        }
    }

    /// Multiplier applied to velocity for a step of `dt` seconds.
    pub fn step_factor(&self, dt: F) -> F {
        match *self {
            Damping::Factor(f) => {
                let per_second = f.powf(F::from_f32(REFERENCE_FPS));
                per_second.powf(dt)
            }
            Damping::Rate(r) => (-r * dt).exp(),
        }
    }
}

impl<F: Float> Default for Damping<F> {
    fn default() -> Self {
        Self::none()
    }
}

/// Advance one linear step.
///
/// `velocity += acceleration * dt`, then damping, then
/// `position += velocity * dt`. The caller owns resetting its accumulator.
pub fn integrate<F: Float>(
    position: &mut Vec2<F>,
    velocity: &mut Vec2<F>,
    acceleration: Vec2<F>,
    dt: F,
    damping: &Damping<F>,
) {
    *velocity = (*velocity + acceleration.scale(dt)).scale(damping.step_factor(dt));
    *position = *position + velocity.scale(dt);
}

/// Angular counterpart of [`integrate`] for a single rotational degree of freedom.
pub fn integrate_angle<F: Float>(
    angle: &mut F,
    angular_velocity: &mut F,
    angular_acceleration: F,
    dt: F,
    damping: &Damping<F>,
) {
    *angular_velocity = (*angular_velocity + angular_acceleration * dt) * damping.step_factor(dt);
    *angle = *angle + *angular_velocity * dt;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_is_updated_before_position() {
        let mut p = Vec2::new(0.0f64, 0.0);
        let mut v = Vec2::new(1.0f64, 0.0);
        integrate(&mut p, &mut v, Vec2::new(0.0, -10.0), 0.1, &Damping::none());
        assert!((v.y + 1.0).abs() < 1e-12);
        // Uses the new velocity, not the old one.
        assert!((p.y + 0.1).abs() < 1e-12);
        assert!((p.x - 0.1).abs() < 1e-12);
    }

    #[test]
    fn factor_one_is_lossless() {
        let d = Damping::Factor(1.0f64);
        assert!((d.step_factor(1.0 / 60.0) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn factor_matches_per_frame_ratio_at_60fps() {
        let d = Damping::Factor(0.99f64);
        assert!((d.step_factor(1.0 / 60.0) - 0.99).abs() < 1e-12);
    }

    #[test]
    fn factor_composes_over_time() {
        let d = Damping::Factor(0.95f64);
        let two_small = d.step_factor(1.0 / 60.0) * d.step_factor(1.0 / 60.0);
        let one_big = d.step_factor(1.0 / 30.0);
        assert!((two_small - one_big).abs() < 1e-12);
    }

    #[test]
    fn rate_is_exponential_decay() {
        let d = Damping::Rate(2.0f64);
        assert!((d.step_factor(0.5) - (-1.0f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn validation() {
        assert!(Damping::factor(0.0f32).is_err());
        assert!(Damping::factor(1.5f32).is_err());
        assert!(Damping::factor(1.0f32).is_ok());
        assert!(Damping::rate(-0.1f32).is_err());
        assert!(Damping::rate(0.0f32).is_ok());
    }

    #[test]
    fn angular_step_mirrors_linear_step() {
        let mut angle = 0.0f64;
        let mut omega = 0.0f64;
        integrate_angle(&mut angle, &mut omega, 2.0, 0.5, &Damping::none());
        assert!((omega - 1.0).abs() < 1e-12);
        assert!((angle - 0.5).abs() < 1e-12);
    }
}
