//! Line segment rasterization.
//!
//! Four interchangeable strategies convert two integer endpoints into an
//! ordered pixel sequence. Output always proceeds monotonically from start
//! to end along the dominant axis, both endpoints included, and a
//! degenerate segment yields exactly its single point.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::geometry::{Point, Segment};

/// Line rasterization strategy.
///
/// A closed set so dispatch is exhaustive at compile time; string tags
/// from user-facing selectors go through [`FromStr`] and surface
/// [`Error::UnknownAlgorithm`] at the parsing boundary instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineAlgorithm {
    /// Naive slope stepping: walk the dominant axis, solve `y = kx + b`
    /// per step, round to nearest.
    Naive,
    /// Digital differential analyzer: uniform fractional increments on
    /// both axes, rounded per step.
    Dda,
    /// Bresenham's integer-only error-accumulator algorithm. The
    /// ground-truth strategy: one pixel per step, no gaps, no duplicates.
    Bresenham,
    /// Castle-Pitteway variant. A named alias of [`LineAlgorithm::Bresenham`]
    /// producing bit-identical output.
    Castle,
}

impl LineAlgorithm {
    /// All strategies, in selector order.
    pub const ALL: [Self; 4] = [Self::Naive, Self::Dda, Self::Bresenham, Self::Castle];

    /// Canonical selector tag for this strategy.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Naive => "step",
            Self::Dda => "dda",
            Self::Bresenham => "bresenham",
            Self::Castle => "castle",
        }
    }
}

impl fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for LineAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "step" | "naive" => Ok(Self::Naive),
            "dda" => Ok(Self::Dda),
            "bresenham" => Ok(Self::Bresenham),
            "castle" => Ok(Self::Castle),
            other => Err(Error::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Rasterize the segment from `p1` to `p2` with the chosen strategy.
///
/// Returns the ordered pixel sequence, `p1` first and `p2` last. The
/// output is never clipped; callers intersect it with their visible
/// extent at render time.
///
/// # Example
///
/// ```
/// use rasterkit::prelude::*;
///
/// let pixels = rasterize_line(LineAlgorithm::Dda, Point::new(0, 0), Point::new(4, 4));
/// assert_eq!(pixels.len(), 5);
/// ```
#[must_use]
pub fn rasterize_line(algorithm: LineAlgorithm, p1: Point, p2: Point) -> Vec<Point> {
    let segment = Segment::new(p1, p2);
    match algorithm {
        LineAlgorithm::Naive => naive_line(segment),
        LineAlgorithm::Dda => dda_line(segment),
        LineAlgorithm::Bresenham | LineAlgorithm::Castle => bresenham_line(segment),
    }
}

impl Segment {
    /// Rasterize this segment with the chosen strategy.
    ///
    /// Convenience for [`rasterize_line`].
    #[must_use]
    pub fn rasterize(&self, algorithm: LineAlgorithm) -> Vec<Point> {
        rasterize_line(algorithm, self.p1, self.p2)
    }
}

/// Naive step-by-step walker.
///
/// Walks the dominant axis (larger absolute delta) in unit integer steps
/// and solves the line equation for the dependent coordinate, rounding
/// with `f64::round` (half away from zero). The loop is driven by integer
/// equality on the dominant coordinate, so float accumulation on the
/// dependent axis can never affect termination.
fn naive_line(segment: Segment) -> Vec<Point> {
    if segment.is_degenerate() {
        return vec![segment.p1];
    }

    let dx = segment.dx();
    let dy = segment.dy();

    let mut points = Vec::with_capacity(segment.p1.chebyshev_distance(segment.p2) as usize + 1);

    if dx.abs() >= dy.abs() {
        // x dominant; dx != 0 here since dx == dy == 0 was handled above
        let k = f64::from(dy) / f64::from(dx);
        let b = f64::from(segment.p1.y) - k * f64::from(segment.p1.x);
        let step = if segment.p2.x >= segment.p1.x { 1 } else { -1 };

        let mut x = segment.p1.x;
        loop {
            let y = k * f64::from(x) + b;
            points.push(Point::new(x, y.round() as i32));
            if x == segment.p2.x {
                break;
            }
            x += step;
        }
    } else {
        // y dominant; transposed form x = k*y + b
        let k = f64::from(dx) / f64::from(dy);
        let b = f64::from(segment.p1.x) - k * f64::from(segment.p1.y);
        let step = if segment.p2.y >= segment.p1.y { 1 } else { -1 };

        let mut y = segment.p1.y;
        loop {
            let x = k * f64::from(y) + b;
            points.push(Point::new(x.round() as i32, y));
            if y == segment.p2.y {
                break;
            }
            y += step;
        }
    }

    points
}

/// Digital differential analyzer.
///
/// `steps = max(|dx|, |dy|)`; both coordinates advance by `delta / steps`
/// per iteration and are rounded at every step, `steps + 1` points total.
/// Accumulated floating-point error is tolerated: this is the uniform-step
/// baseline, not the high-precision strategy.
fn dda_line(segment: Segment) -> Vec<Point> {
    let dx = segment.dx();
    let dy = segment.dy();

    let steps = dx.abs().max(dy.abs());
    if steps == 0 {
        return vec![segment.p1];
    }

    let x_inc = f64::from(dx) / f64::from(steps);
    let y_inc = f64::from(dy) / f64::from(steps);

    let mut x = f64::from(segment.p1.x);
    let mut y = f64::from(segment.p1.y);

    let mut points = Vec::with_capacity(steps as usize + 1);
    for _ in 0..=steps {
        points.push(Point::new(x.round() as i32, y.round() as i32));
        x += x_inc;
        y += y_inc;
    }

    points
}

/// Bresenham's integer-only line walker.
///
/// Classic error-accumulator form: `err = dx - dy`, doubled error compared
/// against the deltas each step. Also the full-coverage fallback for the
/// anti-aliased path on axis-aligned segments.
pub(crate) fn bresenham_line(segment: Segment) -> Vec<Point> {
    let dx = segment.dx().abs();
    let dy = segment.dy().abs();
    let sx = if segment.p1.x < segment.p2.x { 1 } else { -1 };
    let sy = if segment.p1.y < segment.p2.y { 1 } else { -1 };
    let mut err = dx - dy;

    let mut x = segment.p1.x;
    let mut y = segment.p1.y;

    let mut points = Vec::with_capacity(segment.p1.chebyshev_distance(segment.p2) as usize + 1);
    loop {
        points.push(Point::new(x, y));
        if x == segment.p2.x && y == segment.p2.y {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    points
}
