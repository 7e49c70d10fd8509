use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// Single-slot timer
// ---------------------------------------------------------------------------

/// Holds at most one pending call. Every `call` replaces the pending one and
/// restarts the delay, so only the last call of a burst ever comes due.
///
/// The host drives time: it passes `now` in and polls, e.g. once per frame.
#[derive(Debug, Clone)]
pub struct Debounced<A> {
    delay: Duration,
    pending: Option<(Instant, A)>,
}

impl<A> Debounced<A> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `args` for `now + delay`, dropping whatever was pending.
    pub fn call(&mut self, args: A, now: Instant) {
        self.pending = Some((now + self.delay, args));
    }

    /// Take the pending arguments if their deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<A> {
        if self.deadline()? > now {
            return None;
        }
        self.pending.take().map(|(_, args)| args)
    }

    /// When the pending call comes due, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(due, _)| *due)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending call without running it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

// ---------------------------------------------------------------------------
// Debounced function
// ---------------------------------------------------------------------------

/// A function wrapped with a [`Debounced`] slot.
pub struct Debouncer<A, F> {
    slot: Debounced<A>,
    func: F,
}

/// Wrap `func` so that bursts of calls collapse into the last one after
/// `delay` of quiet.
pub fn debounce<A, R, F>(func: F, delay: Duration) -> Debouncer<A, F>
where
    F: FnMut(A) -> R,
{
    Debouncer {
        slot: Debounced::new(delay),
        func,
    }
}

impl<A, R, F> Debouncer<A, F>
where
    F: FnMut(A) -> R,
{
    pub fn call(&mut self, args: A, now: Instant) {
        self.slot.call(args, now);
    }

    /// Run the wrapped function if the pending call is due.
    pub fn poll(&mut self, now: Instant) -> Option<R> {
        self.slot.poll(now).map(&mut self.func)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.slot.deadline()
    }
}
