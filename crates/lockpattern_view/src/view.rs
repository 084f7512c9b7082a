//! The pattern-lock widget facade
//!
//! [`PatternLockView`] wires the pieces together: it owns the computed
//! [`GridLayout`], the single [`GridState`], the gesture tracker, and the
//! feedback timer, and exposes the narrow surface a host drives:
//!
//! - `resize` whenever the drawable surface changes
//! - `on_pointer_down` / `on_pointer_move` / `on_pointer_up` from the host's
//!   input plumbing
//! - `on_reset_elapsed` when the host's timer fires a scheduled reset
//! - `render_model` + `take_redraw_request` for the external renderer
//!
//! The completion event fires exactly once per resolved session,
//! synchronously at pointer-up, through the registered unlock listener.

use std::sync::Arc;

use lockpattern_core::{
    DotStatus, GridLayout, GridState, Insets, LayoutError, PatternStyle, Point, Secret, StyleError,
};

use crate::feedback::{FeedbackTimer, ResetScheduler, ResetToken};
use crate::render_model::RenderModel;
use crate::tracker::GestureTracker;

/// Completion callback: `(success, entered_code)`
pub type UnlockListener = Arc<dyn Fn(bool, &str) + Send + Sync>;

/// Layout plus the dot state positioned by it; absent until the first valid
/// resize
#[derive(Debug)]
struct Surface {
    layout: GridLayout,
    grid: GridState,
}

/// The 3x3 connect-the-dots pattern-lock widget
pub struct PatternLockView {
    style: PatternStyle,
    secret: Secret,
    scheduler: Arc<dyn ResetScheduler>,
    surface: Option<Surface>,
    tracker: GestureTracker,
    feedback: FeedbackTimer,
    listener: Option<UnlockListener>,
    needs_redraw: bool,
}

impl PatternLockView {
    /// Create a widget with the given style, secret, and timer capability
    ///
    /// The style is validated eagerly; a malformed style is a construction
    /// error, never a runtime verification failure.
    pub fn new(
        style: PatternStyle,
        secret: Secret,
        scheduler: Arc<dyn ResetScheduler>,
    ) -> Result<Self, StyleError> {
        style.validate()?;
        Ok(Self {
            style,
            secret,
            scheduler,
            surface: None,
            tracker: GestureTracker::new(),
            feedback: FeedbackTimer::new(),
            listener: None,
            needs_redraw: false,
        })
    }

    pub fn style(&self) -> &PatternStyle {
        &self.style
    }

    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    /// Replace the configured secret
    ///
    /// Earlier renditions of this widget had a self-assignment bug here that
    /// left the secret stuck at its constructed value. This setter applies
    /// the new value for all subsequent sessions; the divergence is pinned
    /// by a test.
    pub fn set_secret(&mut self, secret: Secret) {
        self.secret = secret;
    }

    /// Register the completion listener
    pub fn set_unlock_listener<F>(&mut self, listener: F)
    where
        F: Fn(bool, &str) + Send + Sync + 'static,
    {
        self.listener = Some(Arc::new(listener));
    }

    /// True between a successful pointer-down hit and the matching
    /// pointer-up
    pub fn is_tracking(&self) -> bool {
        self.tracker.is_tracking()
    }

    /// True while PASS/ERROR feedback is being held for the auto-reset
    pub fn is_feedback_pending(&self) -> bool {
        self.feedback.is_pending()
    }

    // =========================================================================
    // Surface sizing
    // =========================================================================

    /// Recompute the grid for a resized surface
    ///
    /// Dot statuses survive a valid resize; only centers move. A degenerate
    /// size clears the layout, aborts any in-flight session and pending
    /// feedback, and leaves the widget inert until the next valid resize.
    pub fn resize(
        &mut self,
        width: f32,
        height: f32,
        insets: Insets,
    ) -> Result<(), LayoutError> {
        match GridLayout::compute(width, height, insets, self.style.outer_dot_radius) {
            Ok(layout) => {
                match self.surface.as_mut() {
                    Some(surface) => {
                        surface.grid.relayout(&layout);
                        surface.layout = layout;
                    }
                    None => {
                        let grid = GridState::from_layout(&layout);
                        self.surface = Some(Surface { layout, grid });
                    }
                }
                self.needs_redraw = true;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%err, "resize left no drawable surface; widget inert");
                self.feedback.cancel_pending(self.scheduler.as_ref());
                self.tracker.clear();
                self.surface = None;
                self.needs_redraw = true;
                Err(err)
            }
        }
    }

    // =========================================================================
    // Pointer events
    // =========================================================================

    /// Pointer pressed at `(x, y)`
    ///
    /// If a feedback reset is still pending and the press hits a dot, the
    /// new gesture supersedes it: the pending timer is cancelled and all
    /// dots return to NORMAL before the press is processed, so stale
    /// PASS/ERROR coloring never bleeds into a new attempt. A press that
    /// misses every dot starts no session and leaves a pending hold
    /// untouched.
    pub fn on_pointer_down(&mut self, x: f32, y: f32) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let p = Point::new(x, y);
        if surface.layout.hit_test(p).is_none() {
            return;
        }
        if self.feedback.cancel_pending(self.scheduler.as_ref()) {
            surface.grid.reset();
            self.tracker.clear();
            self.needs_redraw = true;
        }
        if self
            .tracker
            .pointer_down(&surface.layout, &mut surface.grid, p)
            .is_some()
        {
            self.needs_redraw = true;
        }
    }

    /// Pointer moved to `(x, y)`
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if !self.tracker.is_tracking() {
            return;
        }
        self.tracker
            .pointer_move(&surface.layout, &mut surface.grid, Point::new(x, y));
        // The trailing segment follows the raw pointer, so any move during
        // an active session repaints.
        self.needs_redraw = true;
    }

    /// Pointer released
    ///
    /// Resolves the session: verifies the entered code, marks every visited
    /// dot PASS or ERROR, fires the completion event, and arms the delayed
    /// reset.
    pub fn on_pointer_up(&mut self) {
        let Some(code) = self.tracker.pointer_up() else {
            return;
        };
        let outcome = self.secret.verify(&code);
        let status = if outcome.is_pass() {
            DotStatus::Pass
        } else {
            DotStatus::Error
        };
        if let Some(surface) = self.surface.as_mut() {
            for &index in self.tracker.visited() {
                surface.grid.set_status(index, status);
            }
        }
        tracing::debug!(code = %code, success = outcome.is_pass(), "session resolved");
        if let Some(listener) = &self.listener {
            listener(outcome.is_pass(), &code);
        }
        self.feedback
            .arm(self.scheduler.as_ref(), self.style.feedback_delay);
        self.needs_redraw = true;
    }

    // =========================================================================
    // Feedback reset
    // =========================================================================

    /// Entry point for the host's timer expiry
    ///
    /// Returns `true` when the token was the pending one and the reset ran.
    /// Stale tokens (cancelled, superseded, or already fired) are ignored.
    pub fn on_reset_elapsed(&mut self, token: ResetToken) -> bool {
        if !self.feedback.acknowledge(token) {
            return false;
        }
        if let Some(surface) = self.surface.as_mut() {
            surface.grid.reset();
        }
        self.tracker.clear();
        self.needs_redraw = true;
        tracing::debug!("feedback reset applied");
        true
    }

    // =========================================================================
    // Render boundary
    // =========================================================================

    /// Snapshot for the external renderer; `None` until a valid layout exists
    pub fn render_model(&self) -> Option<RenderModel> {
        let surface = self.surface.as_ref()?;
        Some(RenderModel::build(
            &surface.grid,
            self.tracker.visited(),
            self.tracker.trailing(),
        ))
    }

    /// Consume the redraw request raised by the last mutation, if any
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}
