//! # Rasterkit
//!
//! Classic incremental rasterization algorithms for integer pixel grids.
//!
//! Rasterkit converts continuous geometric primitives — line segments and
//! circles — into discrete pixel sequences using the textbook incremental
//! algorithms: naive slope stepping, DDA, Bresenham's integer line,
//! the midpoint circle, and Wu's anti-aliased line with per-pixel
//! coverage weights.
//!
//! Every algorithm is a pure function of its numeric inputs: no hidden
//! state, no I/O, no clipping. Callers own validation of raw text input,
//! clipping against a visible extent, mapping grid coordinates to screen
//! coordinates, and compositing coverage against a background.
//!
//! ## Quick Start
//!
//! ```
//! use rasterkit::prelude::*;
//!
//! let pixels = rasterize_line(LineAlgorithm::Bresenham, Point::new(0, 0), Point::new(5, 2));
//! assert_eq!(pixels.first(), Some(&Point::new(0, 0)));
//! assert_eq!(pixels.last(), Some(&Point::new(5, 2)));
//!
//! let ring = rasterize_circle(Point::ORIGIN, 5)?;
//! assert!(ring.contains(&Point::new(5, 0)));
//! # Ok::<(), rasterkit::Error>(())
//! ```
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital
//!   plotter." *IBM Systems Journal*, 4(1).
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type and coverage blending for anti-aliased output.
pub mod color;

/// Geometric primitives (points, segments, circles, weighted pixels).
pub mod geometry;

// ============================================================================
// Rasterization Modules
// ============================================================================

/// Rasterization algorithms for lines and circles.
pub mod raster;

/// Wall-clock timing harness for rasterization calls.
pub mod timing;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for rasterkit operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```
/// use rasterkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Circle, Point, Segment, WeightedPixel};
    pub use crate::raster::{rasterize_circle, rasterize_line, rasterize_line_aa, LineAlgorithm};
    pub use crate::timing::timed;
}
