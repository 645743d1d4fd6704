//! Fixed-step drivers for legswing simulations.
//!
//! # Modules
//!
//! - [`transient`] — drivers that advance a [`Stepper`] through time
//!
//! # Features
//!
//! - `tracing` — emits `tracing` events for each recorded step.
//!
//! [`Stepper`]: legswing_core::Stepper

pub mod transient;
