//! Fixed-step explicit driver for [`Stepper`] systems.
//!
//! This module records and advances a system with a constant step size:
//!
//! ```text
//! frame_n  = system.frame()
//! system   = system.advance(dt)
//! ```
//!
//! The update rule itself belongs to the system. The driver owns the loop and
//! early termination, and hands each frame to a caller-provided sink as soon as
//! it is captured.
//!
//! # Example
//!
//! ```ignore
//! use legswing_solvers::transient::euler;
//!
//! let mut frames = Vec::new();
//! let solution = euler::solve_unobserved(&mut system, 0.01, 500, &mut frames);
//!
//! for frame in &frames {
//!     println!("{frame:?}");
//! }
//! ```

mod action;
mod event;
mod solution;

pub use action::Action;
pub use event::Event;
pub use solution::{Solution, Status};

use std::iter;

use legswing_core::{FrameOf, Observer, Stepper};

/// Records and advances a system for a fixed number of steps.
///
/// # Algorithm
///
/// For each step `0..steps`:
///
/// 1. Capture the system's current frame.
/// 2. Emit an [`Event`] to the observer.
/// 3. Append the frame to `sink`.
/// 4. If the observer returned `StopEarly`, terminate without advancing.
/// 5. Advance the system by `dt`.
///
/// Frame `i` therefore reflects the system before the `i`-th advance, and the
/// system finishes one step beyond the last recorded frame.
///
/// Frames go straight into `sink`; the driver reserves nothing up front, so
/// memory grows only with the frames actually recorded.
///
/// # Observer
///
/// The observer receives an [`Event`] for every recorded frame and may return
/// [`Action::StopEarly`] to terminate the run early.
pub fn solve<S, D, K, Obs>(
    system: &mut S,
    dt: D,
    steps: usize,
    sink: &mut K,
    mut observer: Obs,
) -> Solution
where
    S: Stepper<D>,
    D: Clone,
    K: Extend<FrameOf<S, D>>,
    Obs: Observer<Event<FrameOf<S, D>>, Action>,
{
    for step in 0..steps {
        let event = Event {
            step,
            frame: system.frame(),
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(step, "recorded frame");

        let action = observer.observe(&event);
        sink.extend(iter::once(event.frame));

        if let Some(Action::StopEarly) = action {
            #[cfg(feature = "tracing")]
            tracing::debug!(step, "observer stopped the run early");

            return Solution {
                status: Status::StoppedByObserver,
                recorded: step + 1,
                steps: step,
            };
        }

        system.advance(dt.clone());
    }

    Solution {
        status: Status::Complete,
        recorded: steps,
        steps,
    }
}

/// Records and advances a system without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
pub fn solve_unobserved<S, D, K>(system: &mut S, dt: D, steps: usize, sink: &mut K) -> Solution
where
    S: Stepper<D>,
    D: Clone,
    K: Extend<FrameOf<S, D>>,
{
    solve(system, dt, steps, sink, ())
}
