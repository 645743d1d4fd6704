//! Core traits for the legswing workspace.
//!
//! This crate defines the shared abstractions that solvers and models build on:
//!
//! - [`Stepper`] — a system advanced in place by a fixed step that can capture
//!   a frame of its current configuration
//! - [`Observer`] — receives solver events and optionally returns control actions

mod observer;
mod step;

pub use observer::Observer;
pub use step::{FrameOf, Stepper};
