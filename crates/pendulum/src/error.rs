use thiserror::Error;

/// Errors from indexed lookups into a [`Trajectory`](crate::Trajectory).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    #[error("frame index {index} is out of range for a trajectory of {len} frames")]
    OutOfRange { index: usize, len: usize },
}

/// Errors from rebuilding a [`Trajectory`](crate::Trajectory) from raw buffers.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TrajectoryError {
    #[error(
        "trajectory buffers differ in length \
         (knee_x {knee_x}, knee_y {knee_y}, ankle_x {ankle_x}, ankle_y {ankle_y})"
    )]
    UnequalLengths {
        knee_x: usize,
        knee_y: usize,
        ankle_x: usize,
        ankle_y: usize,
    },
}

/// Errors from validating leg [`Parameters`](crate::Parameters).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParameterError {
    #[error("{name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
}

/// Errors from validating a [`Scenario`](crate::Scenario).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ScenarioError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error("time_step must be finite and positive, got {0}")]
    TimeStep(f64),
}
