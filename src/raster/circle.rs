//! Midpoint circle rasterization.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::geometry::{Circle, Point};

/// Rasterize a circle outline with the midpoint (Bresenham) algorithm.
///
/// Generates one octant via the decision variable `d = 3 - 2r` and mirrors
/// each step to all 8 octants around the center. Adjacent octants coincide
/// at the axis and diagonal boundary points, so the raw emission is
/// de-duplicated while preserving first-seen order; the result is a
/// duplicate-free point set whose order callers should not rely on.
///
/// # Errors
///
/// Returns [`Error::InvalidRadius`] when `radius <= 0`.
///
/// # Example
///
/// ```
/// use rasterkit::prelude::*;
///
/// let ring = rasterize_circle(Point::ORIGIN, 5)?;
/// assert!(ring.contains(&Point::new(0, 5)));
/// assert!(ring.contains(&Point::new(-5, 0)));
/// # Ok::<(), rasterkit::Error>(())
/// ```
pub fn rasterize_circle(center: Point, radius: i32) -> Result<Vec<Point>> {
    if radius <= 0 {
        return Err(Error::InvalidRadius { radius });
    }

    let mut points = Vec::new();
    let mut seen = HashSet::new();
    let mut emit = |p: Point| {
        if seen.insert(p) {
            points.push(p);
        }
    };

    let mut x = 0;
    let mut y = radius;
    let mut d = 3 - 2 * radius;

    while x <= y {
        emit_octants(center, x, y, &mut emit);
        if d < 0 {
            d += 4 * x + 6;
        } else {
            d += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
    }

    Ok(points)
}

impl Circle {
    /// Rasterize this circle's outline.
    ///
    /// Convenience for [`rasterize_circle`].
    pub fn rasterize(&self) -> Result<Vec<Point>> {
        rasterize_circle(self.center, self.radius)
    }
}

/// Mirror one octant step to all 8 symmetric points around the center.
fn emit_octants(center: Point, x: i32, y: i32, emit: &mut impl FnMut(Point)) {
    let (cx, cy) = (center.x, center.y);
    emit(Point::new(cx + x, cy + y));
    emit(Point::new(cx - x, cy + y));
    emit(Point::new(cx + x, cy - y));
    emit(Point::new(cx - x, cy - y));
    emit(Point::new(cx + y, cy + x));
    emit(Point::new(cx - y, cy + x));
    emit(Point::new(cx + y, cy - x));
    emit(Point::new(cx - y, cy - x));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_invalid_radius_rejected() {
        assert_eq!(
            rasterize_circle(Point::ORIGIN, 0),
            Err(Error::InvalidRadius { radius: 0 })
        );
        assert_eq!(
            rasterize_circle(Point::ORIGIN, -3),
            Err(Error::InvalidRadius { radius: -3 })
        );
    }

    #[test]
    fn test_no_duplicate_points() {
        let ring = rasterize_circle(Point::ORIGIN, 5).unwrap();
        let unique: HashSet<Point> = ring.iter().copied().collect();
        assert_eq!(unique.len(), ring.len());
    }

    #[test]
    fn test_eight_fold_symmetry() {
        let ring = rasterize_circle(Point::ORIGIN, 5).unwrap();
        let set: HashSet<Point> = ring.iter().copied().collect();
        for p in &ring {
            for mirrored in [
                Point::new(p.x, -p.y),
                Point::new(-p.x, p.y),
                Point::new(-p.x, -p.y),
                Point::new(p.y, p.x),
                Point::new(p.y, -p.x),
                Point::new(-p.y, p.x),
                Point::new(-p.y, -p.x),
            ] {
                assert!(set.contains(&mirrored), "missing mirror {mirrored:?} of {p:?}");
            }
        }
    }

    #[test]
    fn test_axis_extremes_present() {
        let center = Point::new(3, -2);
        let ring = rasterize_circle(center, 4).unwrap();
        for p in [
            Point::new(center.x + 4, center.y),
            Point::new(center.x - 4, center.y),
            Point::new(center.x, center.y + 4),
            Point::new(center.x, center.y - 4),
        ] {
            assert!(ring.contains(&p), "missing axis extreme {p:?}");
        }
    }

    #[test]
    fn test_radius_one_cross() {
        // Smallest circle: the 4 axis neighbors of the center
        let ring = rasterize_circle(Point::ORIGIN, 1).unwrap();
        let expected: HashSet<Point> = [
            Point::new(1, 0),
            Point::new(-1, 0),
            Point::new(0, 1),
            Point::new(0, -1),
        ]
        .into_iter()
        .collect();
        let actual: HashSet<Point> = ring.iter().copied().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_circle_rasterize_matches_free_function() {
        let circle = Circle::new(Point::new(2, -1), 6);
        assert_eq!(circle.rasterize(), rasterize_circle(circle.center, circle.radius));
    }

    #[test]
    fn test_first_seen_order_is_deterministic() {
        let a = rasterize_circle(Point::new(1, 1), 7).unwrap();
        let b = rasterize_circle(Point::new(1, 1), 7).unwrap();
        assert_eq!(a, b);
    }
}
