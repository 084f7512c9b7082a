//! Lockpattern Core
//!
//! Foundational primitives for the 3x3 pattern-lock widget:
//!
//! - **Geometry**: points and padding insets in widget-local space
//! - **Grid**: cell-center layout, axis-aligned hit-testing, owned dot state
//! - **Style**: dot radii, stroke widths, status colors, feedback delay
//! - **Secret**: the validated pattern secret and exact-match verification
//!
//! This crate is purely value types and pure logic. Session state (the
//! gesture machine, feedback timing, the render model) lives in
//! `lockpattern_view`.
//!
//! # Example
//!
//! ```rust
//! use lockpattern_core::{GridLayout, Insets, Point, Secret};
//!
//! let layout = GridLayout::compute(300.0, 300.0, Insets::ZERO, 40.0).unwrap();
//! assert_eq!(layout.hit_test(Point::new(50.0, 50.0)), Some(1));
//!
//! let secret = Secret::new("1235").unwrap();
//! assert!(secret.verify("1235").is_pass());
//! ```

pub mod color;
pub mod geometry;
pub mod grid;
pub mod secret;
pub mod style;

pub use color::Color;
pub use geometry::{Insets, Point};
pub use grid::{Dot, DotStatus, GridLayout, GridState, LayoutError, DOT_COUNT, GRID_SIDE};
pub use secret::{Outcome, Secret, SecretError};
pub use style::{PatternStyle, StyleError};
