//! 2D vector value type underlying every physical quantity.

use crate::float::Float;
use core::ops::{Add, Sub, Neg};

/// 2D vector for positions, velocities, forces and accelerations.
///
/// `Vec2` is `Copy` and every operation returns a new value; a body never
/// shares its position or velocity storage with anything else.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Scale both components by a scalar.
    pub fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }

    /// Squared magnitude (avoids sqrt).
    pub fn magnitude_sq(self) -> F {
        self.dot(self)
    }

    /// Euclidean length.
    pub fn magnitude(self) -> F {
        self.magnitude_sq().sqrt()
    }

    /// Unit vector in the same direction. Returns zero if the length is near zero.
    pub fn normalize(self) -> Self {
        let len = self.magnitude();
        if len.is_near_zero(F::from_f64(1e-12)) {
            Self::zero()
        } else {
            self.scale(F::one() / len)
        }
    }

    /// Rescale to `magnitude`, keeping direction.
    ///
    /// The zero vector has no direction and is returned unchanged.
    pub fn set_magnitude(self, magnitude: F) -> Self {
        self.normalize().scale(magnitude)
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F {
        (self - other).magnitude()
    }

    /// Linear interpolation between self and other.
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self).scale(t)
    }

    /// Both components finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}
