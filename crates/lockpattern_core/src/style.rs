//! Widget styling configuration
//!
//! All visual parameters the external renderer and the layout step need:
//! dot radii, stroke widths, the four status colors, and the feedback delay.
//! Supplied once at construction and validated eagerly; pattern mismatch at
//! runtime is a normal outcome and never reported through these errors.

use std::time::Duration;

use thiserror::Error;

use crate::color::Color;

/// Styling errors caught at construction time
#[derive(Debug, Error, PartialEq)]
pub enum StyleError {
    /// A radius that must be strictly positive was not
    #[error("{which} dot radius must be positive, got {value}")]
    NonPositiveRadius { which: &'static str, value: f32 },

    /// The inner dot would cover the outer ring
    #[error("inner dot radius {inner} must be smaller than outer dot radius {outer}")]
    InnerExceedsOuter { inner: f32, outer: f32 },

    /// Stroke widths may be zero (hairline) but never negative
    #[error("{which} stroke width must not be negative, got {value}")]
    NegativeStroke { which: &'static str, value: f32 },

    /// A zero delay would reset PASS/ERROR feedback before it is ever visible
    #[error("feedback delay must be non-zero")]
    ZeroFeedbackDelay,
}

/// Visual configuration for the pattern lock
#[derive(Clone, Debug, PartialEq)]
pub struct PatternStyle {
    /// Radius of the outer ring around each dot; also the hit-test radius
    pub outer_dot_radius: f32,
    /// Radius of the filled inner dot
    pub inner_dot_radius: f32,
    /// Stroke width of the outer ring
    pub outer_dot_stroke: f32,
    /// Stroke width of connecting segments
    pub line_stroke: f32,
    /// Color for dots in the NORMAL status
    pub normal_color: Color,
    /// Color for dots and segments while PRESSED
    pub pressed_color: Color,
    /// Color shown after a successful verification
    pub pass_color: Color,
    /// Color shown after a failed verification
    pub error_color: Color,
    /// How long PASS/ERROR feedback is held before the auto-reset
    pub feedback_delay: Duration,
}

impl Default for PatternStyle {
    fn default() -> Self {
        Self {
            outer_dot_radius: 80.0,
            inner_dot_radius: 15.0,
            outer_dot_stroke: 5.0,
            line_stroke: 5.0,
            normal_color: Color::BLACK,
            pressed_color: Color::BLUE,
            pass_color: Color::GREEN,
            error_color: Color::RED,
            feedback_delay: Duration::from_millis(1000),
        }
    }
}

impl PatternStyle {
    /// Validate the style before it is used for layout or rendering
    pub fn validate(&self) -> Result<(), StyleError> {
        if self.outer_dot_radius <= 0.0 {
            return Err(StyleError::NonPositiveRadius {
                which: "outer",
                value: self.outer_dot_radius,
            });
        }
        if self.inner_dot_radius <= 0.0 {
            return Err(StyleError::NonPositiveRadius {
                which: "inner",
                value: self.inner_dot_radius,
            });
        }
        if self.inner_dot_radius >= self.outer_dot_radius {
            return Err(StyleError::InnerExceedsOuter {
                inner: self.inner_dot_radius,
                outer: self.outer_dot_radius,
            });
        }
        if self.outer_dot_stroke < 0.0 {
            return Err(StyleError::NegativeStroke {
                which: "outer dot",
                value: self.outer_dot_stroke,
            });
        }
        if self.line_stroke < 0.0 {
            return Err(StyleError::NegativeStroke {
                which: "line",
                value: self.line_stroke,
            });
        }
        if self.feedback_delay.is_zero() {
            return Err(StyleError::ZeroFeedbackDelay);
        }
        Ok(())
    }
}
