/// A system that is advanced in place by a fixed step.
///
/// Implementing this trait lets a generic fixed-step driver record and advance
/// any system. `Delta` is usually a time increment, as a plain `f64` or a
/// dimensioned `uom::Time`.
///
/// The driver always captures a [`frame`](Stepper::frame) *before* calling
/// [`advance`](Stepper::advance), so frame `i` reflects the system prior to the
/// `i`-th step.
pub trait Stepper<Delta> {
    /// A recorded sample of the system's configuration.
    type Frame;

    /// Captures the current configuration without modifying the system.
    fn frame(&self) -> Self::Frame;

    /// Advances the system by one step of size `delta`.
    fn advance(&mut self, delta: Delta);
}

/// Type alias for the frame type of a `Stepper`.
///
/// This is a convenience for accessing the [`Stepper::Frame`] associated type
/// without writing out the fully qualified syntax.
pub type FrameOf<S, Delta> = <S as Stepper<Delta>>::Frame;
