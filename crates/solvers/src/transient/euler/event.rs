/// Event emitted by the Euler driver for each recorded frame.
///
/// Step `i` carries the frame captured before the `i`-th advance, so step 0
/// is the initial state.
#[derive(Debug, Clone)]
pub struct Event<F> {
    /// The step number, starting at 0.
    pub step: usize,

    /// The frame captured at this step.
    pub frame: F,
}
