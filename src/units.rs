//! Conversion between SI world units and canvas pixels.
//!
//! All physics runs in meters and seconds. Pointer input and drawing happen
//! in pixels; `PixelScale` is the only place the two meet.

use crate::error::{ensure_positive, PhysicsError};
use crate::float::Float;
use crate::vec::Vec2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PixelScale<F: Float> {
    pixels_per_meter: F,
}

impl<F: Float> PixelScale<F> {
    pub fn new(pixels_per_meter: F) -> Result<Self, PhysicsError> {
        Ok(PixelScale { pixels_per_meter: ensure_positive(pixels_per_meter, PhysicsError::InvalidScale)? })
    }

    pub fn pixels_per_meter(&self) -> F { self.pixels_per_meter }

    pub fn to_pixels(&self, meters: Vec2<F>) -> Vec2<F> {
        meters.scale(self.pixels_per_meter)
    }

    pub fn to_meters(&self, pixels: Vec2<F>) -> Vec2<F> {
        pixels.scale(F::one() / self.pixels_per_meter)
    }

    pub fn length_to_pixels(&self, meters: F) -> F {
        meters * self.pixels_per_meter
    }

    pub fn length_to_meters(&self, pixels: F) -> F {
        pixels / self.pixels_per_meter
    }
}
