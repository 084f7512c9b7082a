//! Feedback hold and auto-reset timing
//!
//! After a session resolves, visited dots hold their PASS/ERROR status for a
//! fixed delay before everything snaps back to NORMAL. The widget does not
//! own a clock; the host injects a [`ResetScheduler`] capability and calls
//! back into the view when the delay elapses.
//!
//! Tokens are generation-counted. Arming hands out a fresh token; only the
//! currently pending token is accepted back. A cancelled or superseded
//! token that still fires (hosts whose timers cannot truly be cancelled) is
//! rejected as stale, so feedback from an old session can never clobber a
//! new one.

use std::time::Duration;

/// Handle identifying one armed reset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResetToken(u64);

impl ResetToken {
    /// Raw generation value, for hosts that key timers by integer id
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// One-shot delayed-callback capability supplied by the host
///
/// `schedule` must arrange for the host to call
/// `PatternLockView::on_reset_elapsed(token)` after `delay`. `cancel` is
/// best-effort: a fire after cancellation is harmless because the token
/// will be stale.
pub trait ResetScheduler: Send + Sync {
    fn schedule(&self, delay: Duration, token: ResetToken);
    fn cancel(&self, token: ResetToken);
}

/// Tracks the single pending reset, if any
#[derive(Debug, Default)]
pub struct FeedbackTimer {
    next_generation: u64,
    pending: Option<ResetToken>,
}

impl FeedbackTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Arm a reset after `delay`, superseding any pending one
    pub fn arm(&mut self, scheduler: &dyn ResetScheduler, delay: Duration) -> ResetToken {
        if let Some(stale) = self.pending.take() {
            scheduler.cancel(stale);
        }
        let token = ResetToken(self.next_generation);
        self.next_generation += 1;
        self.pending = Some(token);
        scheduler.schedule(delay, token);
        tracing::debug!(token = token.raw(), delay_ms = delay.as_millis() as u64, "feedback reset armed");
        token
    }

    /// Cancel the pending reset, if any; true when one was cancelled
    pub fn cancel_pending(&mut self, scheduler: &dyn ResetScheduler) -> bool {
        match self.pending.take() {
            Some(token) => {
                scheduler.cancel(token);
                tracing::debug!(token = token.raw(), "pending feedback reset cancelled");
                true
            }
            None => false,
        }
    }

    /// Accept a fired token; true iff it is the currently pending one
    ///
    /// Stale tokens are consumed without effect, which also makes a double
    /// fire of the same token idempotent.
    pub fn acknowledge(&mut self, token: ResetToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            tracing::trace!(token = token.raw(), "stale reset token ignored");
            false
        }
    }
}
