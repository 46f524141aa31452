//! Springstep
//!
//! Closed-form critically damped spring integration for animating scalar,
//! angular, and vector values toward moving targets.
//!
//! # Features
//!
//! - **Exact integration**: the analytic solution of the spring ODE, correct
//!   for any time step, not a small-step approximation
//! - **Moving targets**: targets may jump discontinuously; the spring chases
//!   them smoothly from its current position and velocity
//! - **Angle wrapping**: degree-valued springs take the shortest path across
//!   the ±180° seam
//! - **Premultiplied steps**: hoist the transcendental `exp` out of fixed-tick
//!   update loops
//! - **Generic values**: one algorithm for scalars, 2D/3D/4D vectors, colors

pub mod angle;
pub mod scheduler;
pub mod spring;
pub mod step;
pub mod value;

pub use scheduler::{FixedTickScheduler, SpringKey, SpringScheduler};
pub use spring::{stiffness, AngleSpring, PremultSpring, Spring, VecSpring};
pub use value::SpringValue;
