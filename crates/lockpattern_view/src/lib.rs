//! Lockpattern View
//!
//! The stateful layer of the 3x3 pattern-lock widget:
//!
//! - **GestureTracker**: the idle/tracking state machine that turns pointer
//!   events into an ordered, de-duplicated visited sequence
//! - **FeedbackTimer**: token-based arming and cancellation of the delayed
//!   PASS/ERROR reset, driven by a host-injected [`ResetScheduler`]
//! - **RenderModel**: the read-only snapshot the external renderer paints
//! - **PatternLockView**: the facade a host drives with resize, pointer,
//!   and timer-expiry events
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use lockpattern_core::{Insets, PatternStyle, Secret};
//! use lockpattern_view::{PatternLockView, ResetScheduler, ResetToken};
//!
//! struct NoopScheduler;
//! impl ResetScheduler for NoopScheduler {
//!     fn schedule(&self, _delay: Duration, _token: ResetToken) {}
//!     fn cancel(&self, _token: ResetToken) {}
//! }
//!
//! let mut view = PatternLockView::new(
//!     PatternStyle { outer_dot_radius: 40.0, ..Default::default() },
//!     Secret::new("15").unwrap(),
//!     Arc::new(NoopScheduler),
//! )
//! .unwrap();
//! view.resize(300.0, 300.0, Insets::ZERO).unwrap();
//! view.set_unlock_listener(|success, code| {
//!     println!("unlock: {success} ({code})");
//! });
//!
//! view.on_pointer_down(50.0, 50.0); // dot 1
//! view.on_pointer_move(150.0, 150.0); // dot 5
//! view.on_pointer_up();
//! ```

pub mod feedback;
pub mod render_model;
pub mod tracker;
pub mod view;

pub use feedback::{FeedbackTimer, ResetScheduler, ResetToken};
pub use render_model::{RenderDot, RenderModel, Segment};
pub use tracker::GestureTracker;
pub use view::{PatternLockView, UnlockListener};
