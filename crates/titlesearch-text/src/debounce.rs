//! Last-write-wins debouncing with an explicit clock.
//!
//! A `Debouncer` holds at most one pending value and its deadline. Submitting
//! a new value replaces both, so there is never more than one outstanding
//! timer. Callers drive time by passing `Instant`s to `submit` and `poll`.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self { Self { window, pending: None } }

    /// Record `value` at `now`, restarting the window. Returns the value it
    /// displaced, which is never delivered.
    pub fn submit(&mut self, value: T, now: Instant) -> Option<T> {
        let deadline = now + self.window;
        self.pending.replace(Pending { value, deadline }).map(|p| p.value)
    }

    /// Take the pending value once its window has fully elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Take the pending value without waiting.
    pub fn flush(&mut self) -> Option<T> { self.pending.take().map(|p| p.value) }

    pub fn is_pending(&self) -> bool { self.pending.is_some() }

    pub fn pending(&self) -> Option<&T> { self.pending.as_ref().map(|p| &p.value) }

    pub fn deadline(&self) -> Option<Instant> { self.pending.as_ref().map(|p| p.deadline) }
}
