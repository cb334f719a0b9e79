//! Press-and-hold gesture that turns a sustained press into one claim.
//!
//! ```text
//! Idle --start--> Holding --sample(>= duration)--> Committed
//!   ^                |
//!   +----release-----+
//! ```
//!
//! `Committed` is terminal: a claimed campaign never accepts another hold.
//! The machine is pure; [`crate::hold::HoldController`] supplies time and the
//! repeating sampler.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

/// How long the press must be held before a claim commits.
pub const HOLD_DURATION_MS: u64 = 2000;

/// Sampling period for progress updates.
pub const SAMPLE_PERIOD_MS: u32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Holding { started_ms: u64 },
    Committed,
}

/// What a single progress sample observed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sample {
    /// Still holding; progress in percent.
    Progress(f64),
    /// This sample crossed the threshold. Reported exactly once.
    Committed,
    /// No hold in progress.
    Inactive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClaimGesture {
    phase: GesturePhase,
    progress: f64,
    duration_ms: u64,
}

impl ClaimGesture {
    #[must_use]
    pub fn new(already_claimed: bool) -> Self {
        Self::with_duration(already_claimed, HOLD_DURATION_MS)
    }

    #[must_use]
    pub fn with_duration(already_claimed: bool, duration_ms: u64) -> Self {
        let (phase, progress) = if already_claimed {
            (GesturePhase::Committed, 100.0)
        } else {
            (GesturePhase::Idle, 0.0)
        };
        Self { phase, progress, duration_ms: duration_ms.max(1) }
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Fill level in percent, `0.0..=100.0`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[must_use]
    pub fn is_committed(&self) -> bool {
        self.phase == GesturePhase::Committed
    }

    #[must_use]
    pub fn is_holding(&self) -> bool {
        matches!(self.phase, GesturePhase::Holding { .. })
    }

    /// Begin a hold. Returns `false` if not idle (already holding or claimed).
    pub fn start(&mut self, now_ms: u64) -> bool {
        if self.phase != GesturePhase::Idle {
            return false;
        }
        self.phase = GesturePhase::Holding { started_ms: now_ms };
        self.progress = 0.0;
        true
    }

    /// Update progress from the current time.
    #[allow(clippy::cast_precision_loss)]
    pub fn sample(&mut self, now_ms: u64) -> Sample {
        let GesturePhase::Holding { started_ms } = self.phase else {
            return Sample::Inactive;
        };
        let elapsed = now_ms.saturating_sub(started_ms);
        let progress = (elapsed as f64 * 100.0 / self.duration_ms as f64).min(100.0);
        // A clock stepping backwards must not shrink the fill.
        self.progress = self.progress.max(progress);

        if self.progress >= 100.0 {
            self.phase = GesturePhase::Committed;
            self.progress = 100.0;
            Sample::Committed
        } else {
            Sample::Progress(self.progress)
        }
    }

    /// End the press early. Returns `true` if a hold was cancelled.
    pub fn release(&mut self) -> bool {
        if !self.is_holding() {
            return false;
        }
        self.phase = GesturePhase::Idle;
        self.progress = 0.0;
        true
    }
}
