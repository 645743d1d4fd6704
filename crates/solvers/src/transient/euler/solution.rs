/// Indicates how the driver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The outcome of a fixed-step run.
///
/// Frames themselves are written to the sink passed to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    /// How the driver terminated.
    pub status: Status,

    /// Number of frames appended to the sink.
    pub recorded: usize,

    /// Number of advances performed on the system.
    pub steps: usize,
}
