//! Frame-driven point-mass physics for interactive 2D simulations.
//!
//! `swingy` is the numerical core behind canvas physics demos: a ball
//! bouncing in a box, a mass on a spring, a swinging pendulum. The host
//! supplies a per-frame `dt` and pointer coordinates; the crate advances
//! state with semi-implicit Euler and hands back positions to draw.
//!
//! # Features
//!
//! - **Symplectic stepping**: velocity before position, so springs and
//!   pendulums do not gain energy over long runs
//! - **Frame-rate independent damping**: per-frame factors normalized to `dt`,
//!   or continuous exponential rates
//! - **Validated parameters**: non-positive mass and friends are rejected at
//!   the setter, never divided by
//! - **Pointer dragging**: bodies and pendulum bobs can be grabbed and moved
//! - **Pixel adapter**: physics in SI meters, drawing in pixels
//! - **Observable**: monitor steps via the `StepObserver` trait
//!   (`tracing` feature for structured events)
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Frame loop
//!
//! ```
//! use swingy::{Body, BodyConfig, Bounds, GravityForce, AppliesForce, Vec2};
//!
//! let bounds = Bounds::from_size(8.0f64, 6.0).unwrap();
//! let mut ball = Body::new(Vec2::new(4.0, 1.0), BodyConfig::new().with_size(0.5))
//!     .unwrap()
//!     .with_bounds(bounds);
//! let gravity = GravityForce::downward(9.81).unwrap();
//!
//! for _ in 0..120 {
//!     gravity.apply_to(&mut ball);
//!     ball.update(1.0 / 60.0);
//! }
//! assert!(ball.position().y <= 6.0 - 0.25);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod color;
pub mod integrator;
pub mod bounds;
pub mod body;
pub mod spring;
pub mod force;
pub mod pendulum;
pub mod units;
pub mod scene;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use color::Color;
pub use integrator::{integrate, integrate_angle, Damping};
pub use bounds::{Bounds, Collision};
pub use body::{Body, DragState};
pub use spring::SpringLink;
pub use force::{AppliesForce, DragOverride, ForceSet, GravityForce, ViscousDrag};
pub use pendulum::{AngularPendulum, GravityModel};
pub use units::PixelScale;
pub use scene::{BallScene, PendulumScene, Scene, SpringScene};
pub use config::{BodyConfig, PendulumConfig, SceneConfig};
pub use observer::{Axis, NoOpStepObserver, StepObserver};
#[cfg(feature = "tracing")]
pub use observer::TracingObserver;
pub use error::PhysicsError;
