//! "Ready to display" signal for an embedding host.
//!
//! A mini-app inside a host client keeps a splash screen up until the app
//! reports ready. The signal is one-shot: no return value, no retry.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use std::cell::Cell;

/// The container the app is embedded in.
pub trait HostContainer {
    fn notify_ready(&self);
}

/// Wraps a host so the ready signal is sent at most once.
pub struct ReadyOnce<H> {
    host: H,
    sent: Cell<bool>,
}

impl<H: HostContainer> ReadyOnce<H> {
    pub fn new(host: H) -> Self {
        Self { host, sent: Cell::new(false) }
    }

    /// Notify the host unless that already happened. Returns `true` if sent now.
    pub fn signal(&self) -> bool {
        if self.sent.replace(true) {
            return false;
        }
        log::debug!("notifying host container: ready");
        self.host.notify_ready();
        true
    }

    #[must_use]
    pub fn was_sent(&self) -> bool {
        self.sent.get()
    }
}
