//! Force contributors that fill a body's accumulator before each step.
//!
//! Gravity, springs, air drag and pointer drags all act on a [`Body`] through
//! the same [`AppliesForce`] capability, and a scene composes them with a
//! [`ForceSet`].

use crate::body::Body;
use crate::error::{ensure_non_negative, PhysicsError};
use crate::float::Float;
use crate::spring::SpringLink;
use crate::vec::Vec2;
use alloc::boxed::Box;
use alloc::vec::Vec as AllocVec;

/// Something that can push on a body for one frame.
pub trait AppliesForce<F: Float> {
    fn apply_to(&self, body: &mut Body<F>);
}

/// Uniform gravitational field, expressed as an acceleration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GravityForce<F: Float> {
    pub acceleration: Vec2<F>,
}

impl<F: Float> GravityForce<F> {
    pub fn new(acceleration: Vec2<F>) -> Result<Self, PhysicsError> {
        if acceleration.is_finite() {
            Ok(GravityForce { acceleration })
        } else {
            Err(PhysicsError::InvalidGravity)
        }
    }

    /// Gravity of magnitude `g` pointing along +y (down on a canvas).
    pub fn downward(g: F) -> Result<Self, PhysicsError> {
        Self::new(Vec2::new(F::zero(), g))
    }
}

impl<F: Float> AppliesForce<F> for GravityForce<F> {
    fn apply_to(&self, body: &mut Body<F>) {
        body.apply_acceleration(self.acceleration);
    }
}

/// Linear air resistance `F = -c v`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViscousDrag<F: Float> {
    coefficient: F,
}

impl<F: Float> ViscousDrag<F> {
    pub fn new(coefficient: F) -> Result<Self, PhysicsError> {
        Ok(ViscousDrag { coefficient: ensure_non_negative(coefficient, PhysicsError::InvalidDamping)? })
    }

    pub fn coefficient(&self) -> F { self.coefficient }
}

impl<F: Float> AppliesForce<F> for ViscousDrag<F> {
    fn apply_to(&self, body: &mut Body<F>) {
        body.apply_force(body.velocity().scale(-self.coefficient));
    }
}

impl<F: Float> AppliesForce<F> for SpringLink<F> {
    fn apply_to(&self, body: &mut Body<F>) {
        self.connect(body);
    }
}

/// Pointer override: a held body is placed under the pointer instead of
/// being pushed. Has no effect on a body that is not being dragged.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragOverride<F: Float> {
    pub pointer: Vec2<F>,
}

impl<F: Float> DragOverride<F> {
    pub fn at(pointer: Vec2<F>) -> Self {
        DragOverride { pointer }
    }
}

impl<F: Float> AppliesForce<F> for DragOverride<F> {
    fn apply_to(&self, body: &mut Body<F>) {
        body.handle_drag(self.pointer);
    }
}

/// Ordered collection of force terms applied to a body each frame.
pub struct ForceSet<F: Float> {
    terms: AllocVec<Box<dyn AppliesForce<F>>>,
}

impl<F: Float> ForceSet<F> {
    pub fn new() -> Self {
        ForceSet { terms: AllocVec::new() }
    }

    /// Add a term, builder style.
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: AppliesForce<F> + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn push<T>(&mut self, term: T)
    where
        T: AppliesForce<F> + 'static,
    {
        self.terms.push(Box::new(term));
    }

    pub fn clear(&mut self) {
        self.terms.clear();
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<F: Float> Default for ForceSet<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> AppliesForce<F> for ForceSet<F> {
    fn apply_to(&self, body: &mut Body<F>) {
        for term in &self.terms {
            term.apply_to(body);
        }
    }
}
