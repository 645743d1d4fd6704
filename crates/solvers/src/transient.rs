//! Drivers for transient (time-stepped) simulations.

pub mod euler;
