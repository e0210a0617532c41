//! Geometric primitives for rasterization.
//!
//! All primitives live on an integer grid centered at the origin, so
//! coordinates may be negative. None of the types carries bounds: validity
//! against a drawable extent is a caller concern, checked at render time
//! rather than rasterization time.

/// A 2D point with integer grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance to another point: `max(|dx|, |dy|)`.
    ///
    /// This is the number of unit steps a line rasterizer takes along
    /// its dominant axis between the two points.
    #[must_use]
    pub const fn chebyshev_distance(self, other: Self) -> i32 {
        let dx = (other.x - self.x).abs();
        let dy = (other.y - self.y).abs();
        if dx > dy {
            dx
        } else {
            dy
        }
    }
}

/// A line segment between two grid points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Segment {
    /// Start point.
    pub p1: Point,
    /// End point.
    pub p2: Point,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Create a segment from raw coordinates.
    #[must_use]
    pub const fn from_coords(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Signed x delta, `p2.x - p1.x`.
    #[must_use]
    pub const fn dx(&self) -> i32 {
        self.p2.x - self.p1.x
    }

    /// Signed y delta, `p2.y - p1.y`.
    #[must_use]
    pub const fn dy(&self) -> i32 {
        self.p2.y - self.p1.y
    }

    /// A segment is degenerate when both endpoints coincide.
    ///
    /// Degenerate segments rasterize to the single shared point, never to
    /// an empty sequence or an error.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.p1.x == self.p2.x && self.p1.y == self.p2.y
    }
}

/// A circle with integer center and radius.
///
/// A radius of zero or less is an input-validation failure surfaced by
/// [`crate::raster::rasterize_circle`], not a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Circle {
    /// Center point.
    pub center: Point,
    /// Radius in grid cells.
    pub radius: i32,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(center: Point, radius: i32) -> Self {
        Self { center, radius }
    }
}

/// A pixel paired with a coverage weight in `[0.0, 1.0]`.
///
/// Emitted only by the anti-aliased line path. The weight is the raw
/// fraction of the pixel covered by the idealized line; blending toward a
/// background color is the caller's job (see [`crate::color::Rgba::blend_coverage`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedPixel {
    /// Pixel position.
    pub point: Point,
    /// Coverage fraction, 0.0 (untouched) to 1.0 (fully covered).
    pub coverage: f64,
}

impl WeightedPixel {
    /// Create a new weighted pixel.
    #[must_use]
    pub const fn new(point: Point, coverage: f64) -> Self {
        Self { point, coverage }
    }

    /// A fully covered pixel (coverage 1.0).
    #[must_use]
    pub const fn opaque(point: Point) -> Self {
        Self::new(point, 1.0)
    }
}
