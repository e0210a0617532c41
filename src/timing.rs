//! Wall-clock timing for rasterization calls.

use std::time::{Duration, Instant};

/// Run a closure and measure its elapsed wall-clock time.
///
/// Uses [`Instant`], a monotonic clock, so the measurement is immune to
/// system clock adjustments. The wrapped call's result is returned
/// untouched; timing never alters semantics.
///
/// # Example
///
/// ```
/// use rasterkit::prelude::*;
///
/// let (pixels, elapsed) =
///     timed(|| rasterize_line(LineAlgorithm::Bresenham, Point::new(0, 0), Point::new(10, 4)));
/// assert_eq!(pixels.len(), 11);
/// assert!(elapsed >= std::time::Duration::ZERO);
/// ```
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}
