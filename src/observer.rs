//! Step observer trait for monitoring what happens inside a frame.

/// Axis of an axis-aligned boundary collision.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Trait for observing physics steps.
///
/// Implement this trait to monitor bodies and scenes (e.g., for debugging,
/// visualization, or sound cues on impact). All methods have default no-op
/// implementations. The core itself never logs or performs I/O.
pub trait StepObserver {
    /// Called once all forces for the frame have been accumulated.
    fn on_forces_applied(&mut self) {}

    /// Called after a body or pendulum has been integrated.
    fn on_integrate(&mut self) {}

    /// Called when a body hits a boundary on `axis`.
    fn on_collision(&mut self, _axis: Axis) {}

    /// Called when a spring length constraint clamped its body.
    fn on_length_clamped(&mut self) {}

    /// Called when a pointer grabs a body or pendulum bob.
    fn on_drag_start(&mut self) {}

    /// Called when a drag is released.
    fn on_drag_end(&mut self) {}

    /// Called when a scene put a body back at rest after its state became
    /// non-finite.
    fn on_state_reset(&mut self) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Observer that forwards every hook as a structured `tracing` event.
#[cfg(feature = "tracing")]
#[derive(Debug, Default)]
pub struct TracingObserver {
    steps: u64,
}

#[cfg(feature = "tracing")]
impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed steps seen so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

#[cfg(feature = "tracing")]
impl StepObserver for TracingObserver {
    fn on_forces_applied(&mut self) {
        tracing::trace!(target: "swingy", step = self.steps, "forces applied");
    }

    fn on_integrate(&mut self) {
        tracing::trace!(target: "swingy", step = self.steps, "integrated");
    }

    fn on_collision(&mut self, axis: Axis) {
        tracing::debug!(target: "swingy", step = self.steps, ?axis, "boundary collision");
    }

    fn on_length_clamped(&mut self) {
        tracing::debug!(target: "swingy", step = self.steps, "spring length clamped");
    }

    fn on_drag_start(&mut self) {
        tracing::debug!(target: "swingy", step = self.steps, "drag started");
    }

    fn on_drag_end(&mut self) {
        tracing::debug!(target: "swingy", step = self.steps, "drag ended");
    }

    fn on_state_reset(&mut self) {
        tracing::warn!(target: "swingy", step = self.steps, "non-finite body state reset");
    }

    fn on_step_complete(&mut self) {
        tracing::trace!(target: "swingy", step = self.steps, "step complete");
        self.steps += 1;
    }
}
