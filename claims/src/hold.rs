//! Timer driver for [`ClaimGesture`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The hold button calls [`HoldController::press`] on pointer-down and
//! [`HoldController::release`] on pointer-up and pointer-leave. While held, a
//! repeating callback samples the gesture and publishes progress for the fill
//! animation. The commit callback records the claim.
//!
//! ORDERING
//! ========
//! `release` cancels the scheduled callback before it resets the gesture, and
//! a commit cancels it before invoking `on_commit`. A tick that was already
//! queued when cancellation happened finds the gesture idle or committed and
//! does nothing, so a release can never be followed by a claim.

#[cfg(test)]
#[path = "hold_test.rs"]
mod hold_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::clock::Clock;
use crate::gesture::{ClaimGesture, GesturePhase, SAMPLE_PERIOD_MS, Sample};

/// Repeating-callback facility, e.g. `setInterval` in the browser.
pub trait Scheduler {
    /// Dropping or cancelling the handle stops the callback.
    type Handle;

    fn schedule_repeating(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;

    /// Stop a callback. Must take effect before returning.
    fn cancel(&self, handle: Self::Handle);
}

/// Drives one campaign's hold gesture.
pub struct HoldController<S: Scheduler> {
    inner: Rc<Inner<S>>,
}

struct Inner<S: Scheduler> {
    gesture: RefCell<ClaimGesture>,
    timer: RefCell<Option<S::Handle>>,
    scheduler: S,
    clock: Rc<dyn Clock>,
    on_progress: Box<dyn Fn(f64)>,
    on_commit: Box<dyn Fn()>,
}

impl<S: Scheduler + 'static> HoldController<S> {
    pub fn new(
        gesture: ClaimGesture,
        scheduler: S,
        clock: Rc<dyn Clock>,
        on_progress: impl Fn(f64) + 'static,
        on_commit: impl Fn() + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                gesture: RefCell::new(gesture),
                timer: RefCell::new(None),
                scheduler,
                clock,
                on_progress: Box::new(on_progress),
                on_commit: Box::new(on_commit),
            }),
        }
    }

    /// Start holding. Returns `false` when already holding or claimed.
    pub fn press(&self) -> bool {
        let now = self.inner.clock.now_ms();
        if !self.inner.gesture.borrow_mut().start(now) {
            return false;
        }
        (self.inner.on_progress)(0.0);

        let weak: Weak<Inner<S>> = Rc::downgrade(&self.inner);
        let handle = self.inner.scheduler.schedule_repeating(
            SAMPLE_PERIOD_MS,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.tick();
                }
            }),
        );
        let previous = self.inner.timer.borrow_mut().replace(handle);
        if let Some(previous) = previous {
            self.inner.scheduler.cancel(previous);
        }
        true
    }

    /// Stop holding early. Returns `true` when a hold was cancelled.
    pub fn release(&self) -> bool {
        self.inner.cancel_timer();
        let cancelled = self.inner.gesture.borrow_mut().release();
        if cancelled {
            (self.inner.on_progress)(0.0);
        }
        cancelled
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.inner.gesture.borrow().progress()
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.inner.gesture.borrow().phase()
    }

    #[must_use]
    pub fn is_committed(&self) -> bool {
        self.inner.gesture.borrow().is_committed()
    }
}

impl<S: Scheduler> Inner<S> {
    fn tick(&self) {
        let now = self.clock.now_ms();
        let sample = self.gesture.borrow_mut().sample(now);
        match sample {
            Sample::Progress(progress) => (self.on_progress)(progress),
            Sample::Committed => {
                self.cancel_timer();
                (self.on_progress)(100.0);
                log::debug!("hold gesture committed");
                (self.on_commit)();
            }
            Sample::Inactive => {}
        }
    }

    fn cancel_timer(&self) {
        let handle = self.timer.borrow_mut().take();
        if let Some(handle) = handle {
            self.scheduler.cancel(handle);
        }
    }
}

impl<S: Scheduler> Drop for Inner<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.timer.get_mut().take() {
            self.scheduler.cancel(handle);
        }
    }
}
