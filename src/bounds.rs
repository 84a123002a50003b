//! Axis-aligned rectangular region a body bounces around in.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::{Axis, StepObserver};
use crate::vec::Vec2;

/// Which walls were hit during one resolution pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Collision {
    pub x: bool,
    pub y: bool,
}

impl Collision {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Rectangle `[min, max]` in world units.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds<F: Float> {
    min: Vec2<F>,
    max: Vec2<F>,
}

impl<F: Float> Bounds<F> {
    pub fn new(min: Vec2<F>, max: Vec2<F>) -> Result<Self, PhysicsError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(PhysicsError::NonFiniteVector);
        }
        if min.x < max.x && min.y < max.y {
            Ok(Bounds { min, max })
        } else {
            Err(PhysicsError::InvalidBounds)
        }
    }

    /// Region from the origin to `(width, height)`, e.g. a canvas.
    pub fn from_size(width: F, height: F) -> Result<Self, PhysicsError> {
        Self::new(Vec2::zero(), Vec2::new(width, height))
    }

    pub fn min(&self) -> Vec2<F> { self.min }
    pub fn max(&self) -> Vec2<F> { self.max }

    /// Keep a disc of `radius` inside the region.
    ///
    /// On each axis a breaching position is clamped to `[min + radius, max - radius]`
    /// and, if the body is still moving into the wall, the velocity component is
    /// reflected and scaled by `restitution`. A disc wider than the region on an
    /// axis is pinned to the center of that axis with zero velocity.
    pub fn collide<O: StepObserver>(
        &self,
        position: &mut Vec2<F>,
        velocity: &mut Vec2<F>,
        radius: F,
        restitution: F,
        observer: &mut O,
    ) -> Collision {
        let x = resolve_axis(&mut position.x, &mut velocity.x, self.min.x + radius, self.max.x - radius, restitution);
        let y = resolve_axis(&mut position.y, &mut velocity.y, self.min.y + radius, self.max.y - radius, restitution);
        if x {
            observer.on_collision(Axis::X);
        }
        if y {
            observer.on_collision(Axis::Y);
        }
        Collision { x, y }
    }
}

fn resolve_axis<F: Float>(pos: &mut F, vel: &mut F, lo: F, hi: F, restitution: F) -> bool {
    if lo > hi {
        let center = (lo + hi) * F::half();
        let moved = *pos != center || *vel != F::zero();
        *pos = center;
        *vel = F::zero();
        moved
    } else if *pos < lo {
        *pos = lo;
        if *vel < F::zero() {
            *vel = -*vel * restitution;
        }
        true
    } else if *pos > hi {
        *pos = hi;
        if *vel > F::zero() {
            *vel = -*vel * restitution;
        }
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoOpStepObserver;

    #[test]
    fn rejects_inverted_region() {
        assert_eq!(
            Bounds::new(Vec2::new(1.0f32, 0.0), Vec2::new(0.0, 1.0)),
            Err(PhysicsError::InvalidBounds)
        );
    }

    #[test]
    fn inside_is_untouched() {
        let b = Bounds::from_size(10.0f64, 10.0).unwrap();
        let mut p = Vec2::new(5.0, 5.0);
        let mut v = Vec2::new(1.0, -1.0);
        let hit = b.collide(&mut p, &mut v, 1.0, 0.5, &mut NoOpStepObserver);
        assert!(!hit.any());
        assert_eq!(v, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn floor_hit_reflects_and_scales() {
        let b = Bounds::from_size(10.0f64, 10.0).unwrap();
        let mut p = Vec2::new(5.0, 9.8);
        let mut v = Vec2::new(0.0, 4.0);
        let hit = b.collide(&mut p, &mut v, 0.5, 0.5, &mut NoOpStepObserver);
        assert!(hit.y && !hit.x);
        assert_eq!(p.y, 9.5);
        assert!((v.y + 2.0).abs() < 1e-12);
    }

    #[test]
    fn receding_body_is_only_clamped() {
        let b = Bounds::from_size(10.0f64, 10.0).unwrap();
        let mut p = Vec2::new(-0.1, 5.0);
        let mut v = Vec2::new(3.0, 0.0);
        b.collide(&mut p, &mut v, 0.0, 0.5, &mut NoOpStepObserver);
        assert_eq!(p.x, 0.0);
        assert_eq!(v.x, 3.0);
    }

    #[test]
    fn oversized_disc_is_pinned_to_center() {
        let b = Bounds::from_size(1.0f64, 10.0).unwrap();
        let mut p = Vec2::new(0.9, 5.0);
        let mut v = Vec2::new(4.0, 0.0);
        let hit = b.collide(&mut p, &mut v, 1.0, 1.0, &mut NoOpStepObserver);
        assert!(hit.x && !hit.y);
        assert_eq!(p, Vec2::new(0.5, 5.0));
        assert_eq!(v, Vec2::zero());

        let again = b.collide(&mut p, &mut v, 1.0, 1.0, &mut NoOpStepObserver);
        assert!(!again.any());
        assert_eq!(p.x, 0.5);
    }
}
