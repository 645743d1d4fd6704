//! Planar simulation of a two-segment leg swinging freely under gravity.
//!
//! The leg is modeled as a double pendulum: a femur of length `l_f` pivoting
//! about a fixed hip, and a tibia of length `l_t` hanging from the knee. The
//! state is advanced with a fixed-step explicit update and, optionally,
//! recorded as a trajectory of knee and ankle positions for plotting or
//! animation downstream.
//!
//! - [`Parameters`] and [`InitialConditions`] — the physical constants and
//!   starting angles of a leg
//! - [`Linkage`] — constants plus dynamic state, derived quantities, and the
//!   per-step update rule
//! - [`Trajectory`] — recorded knee and ankle coordinates, one entry per frame
//! - [`PendulumState`] — a linkage together with its trajectory
//! - [`Scenario`] — a serializable bundle of everything needed for a run
//!
//! # Example
//!
//! ```
//! use std::f64::consts::PI;
//!
//! use legswing_pendulum::PendulumState;
//!
//! let mut leg = PendulumState::create(2.0, 1.0, 2.0, 1.5, PI / 8.0, PI / 3.0, 0.0, 0.0);
//! leg.populate_frames(0.01, 100);
//!
//! assert_eq!(leg.trajectory().len(), 100);
//! let knee_x = leg.knee_x(0).unwrap();
//! assert!((knee_x - 2.0 * (PI / 8.0).cos()).abs() < 1e-12);
//! ```
//!
//! # Features
//!
//! - `tracing` — emits `tracing` events when frames are populated or cleared.

mod error;
mod geometry;
mod linkage;
mod params;
mod scenario;
mod state;
mod trajectory;

pub use error::{IndexError, ParameterError, ScenarioError, TrajectoryError};
pub use geometry::{Frame, Point};
pub use linkage::Linkage;
pub use params::{GRAVITY, InitialConditions, Parameters};
pub use scenario::Scenario;
pub use state::PendulumState;
pub use trajectory::Trajectory;

pub use legswing_solvers::transient::euler::{Action, Event, Status};
