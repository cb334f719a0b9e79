//! `setInterval`-backed [`Scheduler`] for the hold button.
//!
//! Cancelling clears the interval immediately. The closure behind it is
//! released on a later turn because cancellation usually happens from inside
//! that same closure (a tick that commits the claim).

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use claims::Scheduler;

#[cfg(feature = "csr")]
use gloo_timers::callback::Interval;

/// Live repeating timer. Dropping it also clears the interval.
pub struct TimerHandle {
    #[cfg(feature = "csr")]
    interval: Interval,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = TimerHandle;

    fn schedule_repeating(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> TimerHandle {
        #[cfg(feature = "csr")]
        {
            let mut tick = tick;
            TimerHandle { interval: Interval::new(period_ms, move || tick()) }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (period_ms, tick);
            TimerHandle {}
        }
    }

    fn cancel(&self, handle: TimerHandle) {
        #[cfg(feature = "csr")]
        {
            let closure = handle.interval.cancel();
            wasm_bindgen_futures::spawn_local(async move {
                drop(closure);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = handle;
        }
    }
}
