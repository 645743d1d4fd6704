/// Receives solver events and optionally returns a control action.
///
/// Solvers call [`observe`](Observer::observe) once per event. Returning
/// `None` lets the solver continue; returning `Some(action)` asks the solver to
/// act on it (for example, to stop early).
///
/// Implementations are provided for:
///
/// - `()` — ignores every event
/// - closures `FnMut(&E) -> Option<A>`, which is also how a stateful observer
///   is lent to a solver and inspected after it returns
pub trait Observer<E, A> {
    /// Handles an event, optionally returning an action for the solver.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}
