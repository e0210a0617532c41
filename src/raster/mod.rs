//! Rasterization algorithms.
//!
//! Siblings grouped by shared coordinate-space conventions; none depends
//! on another beyond the geometry types.

mod aa;
mod circle;
mod line;

pub use aa::rasterize_line_aa;
pub use circle::rasterize_circle;
pub use line::{rasterize_line, LineAlgorithm};
