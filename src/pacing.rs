//! The pacing primitive: the single point where a running sort yields.

use futures::future::{self, FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;

/// Suspends the running sort between steps.
pub trait Pacer {
    fn pause(&self, delay_ms: u32) -> LocalBoxFuture<'static, ()>;
}

/// Browser timer backed pacer used by the app.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutPacer;

impl Pacer for TimeoutPacer {
    fn pause(&self, delay_ms: u32) -> LocalBoxFuture<'static, ()> {
        TimeoutFuture::new(delay_ms).boxed_local()
    }
}

/// Resolves at once; turns an animated run into a plain sort.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

impl Pacer for Immediate {
    fn pause(&self, _delay_ms: u32) -> LocalBoxFuture<'static, ()> {
        future::ready(()).boxed_local()
    }
}

/// Shared stop request between the session and a running sort.
///
/// Cancelling never interrupts a pause already in flight; the sort sees the
/// flag at its next comparison and returns with whatever order it reached.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Rc<Cell<bool>>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn reset(&self) {
        self.0.set(false);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn immediate_pacer_is_ready_on_first_poll() {
        assert_eq!(Immediate.pause(99).now_or_never(), Some(()));
    }

    #[test]
    fn cancel_flag_is_shared_between_clones() {
        let flag = CancelFlag::new();
        let seen_by_sort = flag.clone();
        assert!(!seen_by_sort.is_cancelled());

        flag.cancel();
        assert!(seen_by_sort.is_cancelled());

        seen_by_sort.reset();
        assert!(!flag.is_cancelled());
    }

    #[test]
    fn pacer_works_through_trait_object() {
        let pacer: &dyn Pacer = &Immediate;
        block_on(pacer.pause(10));
    }
}
