//! Hookean spring from a fixed anchor to a body, with hard length limits.

use crate::body::Body;
use crate::color::Color;
use crate::error::{ensure_non_negative, PhysicsError};
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::vec::Vec2;

/// Spring anchored at a fixed point.
///
/// # Calling contract
///
/// Each frame, in this order:
///
/// 1. [`connect`](SpringLink::connect) to add the restoring force,
/// 2. [`Body::update`] to integrate,
/// 3. [`constrain_length`](SpringLink::constrain_length) to clamp the result.
///
/// Force, then integrate, then clamp is the only order under which the
/// length limits hold at the end of every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SpringLink<F: Float> {
    anchor: Vec2<F>,
    rest_length: F,
    stiffness: F,
    pub color: Color,
    pub anchor_color: Color,
}

impl<F: Float> SpringLink<F> {
    pub fn new(anchor: Vec2<F>, rest_length: F, stiffness: F) -> Result<Self, PhysicsError> {
        if !anchor.is_finite() {
            return Err(PhysicsError::NonFiniteVector);
        }
        Ok(SpringLink {
            anchor,
            rest_length: ensure_non_negative(rest_length, PhysicsError::InvalidRestLength)?,
            stiffness: ensure_non_negative(stiffness, PhysicsError::InvalidStiffness)?,
            color: Color::WHITE,
            anchor_color: Color::WHITE,
        })
    }

    pub fn with_colors(mut self, color: Color, anchor_color: Color) -> Self {
        self.color = color;
        self.anchor_color = anchor_color;
        self
    }

    /// Restoring force the spring exerts on a body at `position`.
    ///
    /// Positive stretch (spring longer than rest) pulls toward the anchor.
    pub fn force_at(&self, position: Vec2<F>) -> Vec2<F> {
        let displacement = position - self.anchor;
        let stretch = displacement.magnitude() - self.rest_length;
        displacement.normalize().scale(-self.stiffness * stretch)
    }

    /// Add the spring force to `body`'s accumulator.
    pub fn connect(&self, body: &mut Body<F>) {
        body.apply_force(self.force_at(body.position()));
    }

    /// See [`constrain_length_observed`](SpringLink::constrain_length_observed).
    pub fn constrain_length(&self, body: &mut Body<F>, min_length: F, max_length: F) -> Result<bool, PhysicsError> {
        self.constrain_length_observed(body, min_length, max_length, &mut NoOpStepObserver)
    }

    /// Hard-clamp `|body - anchor|` into `[min_length, max_length]`.
    ///
    /// When the body is outside the range it is moved onto the nearest limit
    /// along the same direction and its velocity is zeroed. A body sitting
    /// exactly on the anchor is pushed out along +y. Returns whether a clamp
    /// happened, or `NonFiniteVector` if the body's position has blown up.
    pub fn constrain_length_observed<O: StepObserver>(
        &self,
        body: &mut Body<F>,
        min_length: F,
        max_length: F,
        observer: &mut O,
    ) -> Result<bool, PhysicsError> {
        validate_range(min_length, max_length)?;

        let displacement = body.position() - self.anchor;
        let length = displacement.magnitude();
        if !length.is_finite() {
            return Err(PhysicsError::NonFiniteVector);
        }
        let target = if length < min_length {
            min_length
        } else if length > max_length {
            max_length
        } else {
            return Ok(false);
        };

        let direction = if length.is_near_zero(F::from_f64(1e-12)) {
            Vec2::new(F::zero(), F::one())
        } else {
            displacement.scale(F::one() / length)
        };
        body.set_position(self.anchor + direction.scale(target))?;
        body.set_velocity(Vec2::zero())?;
        observer.on_length_clamped();
        Ok(true)
    }

    /// Elastic potential energy `1/2 k x^2` for a body at `position`.
    pub fn potential_energy(&self, position: Vec2<F>) -> F {
        let stretch = position.distance(self.anchor) - self.rest_length;
        F::half() * self.stiffness * stretch * stretch
    }

    pub fn anchor(&self) -> Vec2<F> { self.anchor }
    pub fn rest_length(&self) -> F { self.rest_length }
    pub fn stiffness(&self) -> F { self.stiffness }

    pub fn set_anchor(&mut self, anchor: Vec2<F>) -> Result<(), PhysicsError> {
        if !anchor.is_finite() {
            return Err(PhysicsError::NonFiniteVector);
        }
        self.anchor = anchor;
        Ok(())
    }

    pub fn set_rest_length(&mut self, rest_length: F) -> Result<(), PhysicsError> {
        self.rest_length = ensure_non_negative(rest_length, PhysicsError::InvalidRestLength)?;
        Ok(())
    }

    pub fn set_stiffness(&mut self, stiffness: F) -> Result<(), PhysicsError> {
        self.stiffness = ensure_non_negative(stiffness, PhysicsError::InvalidStiffness)?;
        Ok(())
    }
}

pub(crate) fn validate_range<F: Float>(min: F, max: F) -> Result<(), PhysicsError> {
    if min.is_finite() && max.is_finite() && min >= F::zero() && min <= max {
        Ok(())
    } else {
        Err(PhysicsError::InvalidLengthRange { min: min.to_f64(), max: max.to_f64() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BodyConfig;

    fn body_at(x: f64, y: f64) -> Body<f64> {
        Body::new(Vec2::new(x, y), BodyConfig::new()).unwrap()
    }

    #[test]
    fn stretched_spring_pulls_toward_anchor() {
        let s = SpringLink::new(Vec2::new(0.0f64, 0.0), 1.0, 10.0).unwrap();
        let f = s.force_at(Vec2::new(3.0, 0.0));
        assert!((f.x + 20.0).abs() < 1e-12);
        assert_eq!(f.y, 0.0);
    }

    #[test]
    fn compressed_spring_pushes_away() {
        let s = SpringLink::new(Vec2::new(0.0f64, 0.0), 2.0, 10.0).unwrap();
        let f = s.force_at(Vec2::new(0.0, 1.0));
        assert!((f.y - 10.0).abs() < 1e-12);
    }

    #[test]
    fn connect_goes_through_mass() {
        let s = SpringLink::new(Vec2::new(0.0f64, 0.0), 0.0, 4.0).unwrap();
        let mut b = Body::new(Vec2::new(1.0, 0.0), BodyConfig::new().with_mass(2.0)).unwrap();
        s.connect(&mut b);
        assert!((b.acceleration().x + 2.0).abs() < 1e-12);
    }

    #[test]
    fn negative_rest_length_is_rejected() {
        assert_eq!(
            SpringLink::new(Vec2::new(0.0f32, 0.0), -1.0, 1.0),
            Err(PhysicsError::InvalidRestLength)
        );
    }

    #[test]
    fn clamps_to_max_and_stops() {
        let s = SpringLink::new(Vec2::new(1.0f64, 1.0), 2.0, 1.0).unwrap();
        let mut b = body_at(1.0, 11.0);
        b.set_velocity(Vec2::new(0.0, 3.0)).unwrap();
        assert_eq!(s.constrain_length(&mut b, 1.0, 4.0), Ok(true));
        assert!((b.position().y - 5.0).abs() < 1e-12);
        assert_eq!(b.velocity(), Vec2::zero());
    }

    #[test]
    fn in_range_is_left_alone() {
        let s = SpringLink::new(Vec2::new(0.0f64, 0.0), 2.0, 1.0).unwrap();
        let mut b = body_at(0.0, 2.0);
        b.set_velocity(Vec2::new(1.0, 0.0)).unwrap();
        assert_eq!(s.constrain_length(&mut b, 1.0, 4.0), Ok(false));
        assert_eq!(b.velocity(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn body_on_anchor_is_pushed_down() {
        let s = SpringLink::new(Vec2::new(0.0f64, 0.0), 2.0, 1.0).unwrap();
        let mut b = body_at(0.0, 0.0);
        s.constrain_length(&mut b, 1.0, 4.0).unwrap();
        assert_eq!(b.position(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn inverted_range_is_an_error() {
        let s = SpringLink::new(Vec2::new(0.0f64, 0.0), 2.0, 1.0).unwrap();
        let mut b = body_at(0.0, 3.0);
        assert!(matches!(
            s.constrain_length(&mut b, 5.0, 1.0),
            Err(PhysicsError::InvalidLengthRange { .. })
        ));
    }

    #[test]
    fn non_finite_position_is_reported() {
        let s = SpringLink::new(Vec2::new(0.0f64, 0.0), 1.0, 1.0).unwrap();
        let mut b = body_at(0.0, 1.0);
        b.apply_force(Vec2::new(f64::NAN, 0.0));
        b.update(1.0 / 60.0);
        assert_eq!(s.constrain_length(&mut b, 0.5, 2.0), Err(PhysicsError::NonFiniteVector));

        let mut far = body_at(0.0, 1.0);
        far.set_velocity(Vec2::new(f64::MAX, f64::MAX)).unwrap();
        far.update(1.0);
        assert_eq!(s.constrain_length(&mut far, 0.5, 2.0), Err(PhysicsError::NonFiniteVector));
    }
}
