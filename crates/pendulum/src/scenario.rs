use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::{InitialConditions, Parameters, PendulumState, ScenarioError};

/// Everything needed to reproduce a run: the leg, where it starts, and how
/// finely and for how long to record it.
///
/// Scenarios are plain data and deserialize from any serde format:
///
/// ```toml
/// time_step = 0.01
/// frames = 500
///
/// [parameters]
/// m1 = 2.0
/// m2 = 1.0
/// l_f = 2.0
/// l_t = 1.5
///
/// [initial]
/// theta_h = 0.39269908169872414
/// theta_k = 1.0471975511965976
/// omega_h = 0.0
/// omega_phi = 0.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub parameters: Parameters,
    pub initial: InitialConditions,
    pub time_step: f64,
    pub frames: usize,
}

impl Scenario {
    /// A 2 kg femur of 2 m and a 1 kg tibia of 1.5 m, released from rest with
    /// the hip at π/8 and the knee bent to π/3.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            parameters: Parameters::new(2.0, 1.0, 2.0, 1.5),
            initial: InitialConditions::new(PI / 8.0, PI / 3.0, 0.0, 0.0),
            time_step: 0.01,
            frames: 500,
        }
    }

    /// Checks the leg parameters and the time step.
    ///
    /// Building or running a scenario never validates on its own.
    ///
    /// # Errors
    ///
    /// Returns a [`ScenarioError`] describing the first invalid value.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        self.parameters.validate()?;
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(ScenarioError::TimeStep(self.time_step));
        }
        Ok(())
    }

    /// Creates the leg at its initial conditions, with nothing recorded.
    #[must_use]
    pub fn build(&self) -> PendulumState {
        PendulumState::new(self.parameters, self.initial)
    }

    /// Creates the leg and records `frames` frames at `time_step`.
    #[must_use]
    pub fn run(&self) -> PendulumState {
        let mut leg = self.build();
        leg.populate_frames(self.time_step, self.frames);
        leg
    }
}
