use legswing_core::Observer;
use legswing_solvers::transient::euler::{self, Action, Event, Status};

use crate::{Frame, IndexError, InitialConditions, Linkage, Parameters, Trajectory};

/// A simulated leg together with the trajectory recorded so far.
///
/// The linkage is mutated in place by [`advance`](Self::advance) and
/// [`populate_frames`](Self::populate_frames). The trajectory only grows
/// through `populate_frames` and only shrinks through [`clear`](Self::clear),
/// which leaves the linkage untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct PendulumState {
    linkage: Linkage,
    trajectory: Trajectory,
}

impl PendulumState {
    /// Creates a leg from parameters and initial conditions, with an empty
    /// trajectory.
    #[must_use]
    pub fn new(parameters: Parameters, initial: InitialConditions) -> Self {
        Self {
            linkage: Linkage::new(parameters, initial),
            trajectory: Trajectory::new(),
        }
    }

    /// Creates a leg from raw scalars.
    ///
    /// Masses are in kg, lengths in m, angles in rad and angular velocities in
    /// rad/s. No validation is performed.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn create(
        m1: f64,
        m2: f64,
        l_f: f64,
        l_t: f64,
        theta_h_i: f64,
        theta_k_i: f64,
        omega_h_i: f64,
        omega_phi_i: f64,
    ) -> Self {
        Self::new(
            Parameters::new(m1, m2, l_f, l_t),
            InitialConditions::new(theta_h_i, theta_k_i, omega_h_i, omega_phi_i),
        )
    }

    #[must_use]
    pub fn linkage(&self) -> &Linkage {
        &self.linkage
    }

    #[must_use]
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Advances the leg by `dt` seconds without recording a frame.
    pub fn advance(&mut self, dt: f64) {
        self.linkage.advance(dt);
    }

    /// Records `frame_count` frames, advancing by `dt` after each one.
    ///
    /// Each frame captures the joint positions *before* its step, so the leg
    /// ends one step beyond the last recorded frame.
    pub fn populate_frames(&mut self, dt: f64, frame_count: usize) {
        self.populate_frames_observed(dt, frame_count, ());
    }

    /// Like [`populate_frames`](Self::populate_frames), but reports every
    /// frame to an observer that may stop the run early.
    ///
    /// A frame that triggers [`Action::StopEarly`] is still recorded, but the
    /// leg is not advanced past it.
    pub fn populate_frames_observed<Obs>(
        &mut self,
        dt: f64,
        frame_count: usize,
        observer: Obs,
    ) -> Status
    where
        Obs: Observer<Event<Frame>, Action>,
    {
        #[cfg(feature = "tracing")]
        tracing::debug!(dt, frame_count, recorded = self.trajectory.len(), "populating frames");

        euler::solve(
            &mut self.linkage,
            dt,
            frame_count,
            &mut self.trajectory,
            observer,
        )
        .status
    }

    /// Discards the recorded trajectory without touching the leg's state.
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(discarded = self.trajectory.len(), "clearing trajectory");

        self.trajectory.clear();
    }

    /// Knee x coordinate at a recorded frame.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] if no frame exists at `index`.
    pub fn knee_x(&self, index: usize) -> Result<f64, IndexError> {
        self.trajectory.knee_x(index)
    }

    /// Knee y coordinate at a recorded frame.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] if no frame exists at `index`.
    pub fn knee_y(&self, index: usize) -> Result<f64, IndexError> {
        self.trajectory.knee_y(index)
    }

    /// Ankle x coordinate at a recorded frame.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] if no frame exists at `index`.
    pub fn ankle_x(&self, index: usize) -> Result<f64, IndexError> {
        self.trajectory.ankle_x(index)
    }

    /// Ankle y coordinate at a recorded frame.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] if no frame exists at `index`.
    pub fn ankle_y(&self, index: usize) -> Result<f64, IndexError> {
        self.trajectory.ankle_y(index)
    }
}
