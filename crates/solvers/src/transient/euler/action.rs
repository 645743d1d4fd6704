/// Control actions supported by the Euler driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the driver early and return the frames recorded so far.
    StopEarly,
}
