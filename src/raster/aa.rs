//! Wu's anti-aliased line rasterization.
//!
//! Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

use crate::geometry::{Point, Segment, WeightedPixel};

use super::line::bresenham_line;

/// Rasterize an anti-aliased line, producing pixels with coverage weights.
///
/// Two disjoint regimes:
///
/// - Perfectly horizontal or vertical segments have no sub-pixel
///   ambiguity and delegate to the plain Bresenham walker at coverage 1.0.
/// - Otherwise the walk proceeds along the dominant axis; at each column
///   the real-valued crossing splits into two vertically adjacent pixels
///   weighted `1 - frac` and `frac`. Zero-coverage samples are skipped —
///   they have no visual effect and are never an error.
///
/// Weights are the raw coverage fractions, not pre-blended colors, so
/// callers can composite against any background
/// (see [`crate::color::Rgba::blend_coverage`]).
#[must_use]
pub fn rasterize_line_aa(p1: Point, p2: Point) -> Vec<WeightedPixel> {
    // Axis-aligned (and degenerate) segments: full coverage, no ambiguity
    if p1.x == p2.x || p1.y == p2.y {
        return bresenham_line(Segment::new(p1, p2))
            .into_iter()
            .map(WeightedPixel::opaque)
            .collect();
    }

    let steep = (p2.y - p1.y).abs() > (p2.x - p1.x).abs();

    // Swap axis roles for steep lines so the walk is always x-dominant;
    // un-swapped again when pixels are emitted
    let (mut x0, mut y0, mut x1, mut y1) = if steep {
        (p1.y, p1.x, p2.y, p2.x)
    } else {
        (p1.x, p1.y, p2.x, p2.y)
    };

    // Walk left-to-right; swapping both coordinates keeps the segment
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = y1 - y0;
    // dx != 0: axis-aligned segments were handled above
    let gradient = f64::from(dy) / f64::from(dx);

    let mut pixels = Vec::with_capacity(2 * (dx as usize + 1));
    for x in x0..=x1 {
        let y_real = f64::from(y0) + gradient * f64::from(x - x0);
        let y_int = y_real.floor() as i32;
        let frac = y_real - y_real.floor();

        push_weighted(&mut pixels, steep, x, y_int, 1.0 - frac);
        push_weighted(&mut pixels, steep, x, y_int + 1, frac);
    }

    pixels
}

/// Emit one weighted pixel, restoring original axis order for steep walks.
fn push_weighted(out: &mut Vec<WeightedPixel>, steep: bool, x: i32, y: i32, coverage: f64) {
    if coverage <= 0.0 {
        return;
    }
    let point = if steep { Point::new(y, x) } else { Point::new(x, y) };
    out.push(WeightedPixel::new(point, coverage));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{rasterize_line, LineAlgorithm};

    #[test]
    fn test_horizontal_degenerates_to_bresenham() {
        let aa = rasterize_line_aa(Point::new(0, 0), Point::new(5, 0));
        let plain = rasterize_line(LineAlgorithm::Bresenham, Point::new(0, 0), Point::new(5, 0));

        let positions: Vec<Point> = aa.iter().map(|wp| wp.point).collect();
        assert_eq!(positions, plain);
        assert!(aa.iter().all(|wp| (wp.coverage - 1.0).abs() < f64::EPSILON));
    }

    #[test]
    fn test_vertical_degenerates_to_bresenham() {
        let aa = rasterize_line_aa(Point::new(2, -3), Point::new(2, 4));
        let plain = rasterize_line(LineAlgorithm::Bresenham, Point::new(2, -3), Point::new(2, 4));

        let positions: Vec<Point> = aa.iter().map(|wp| wp.point).collect();
        assert_eq!(positions, plain);
    }

    #[test]
    fn test_degenerate_point_full_coverage() {
        let aa = rasterize_line_aa(Point::new(5, 5), Point::new(5, 5));
        assert_eq!(aa, vec![WeightedPixel::opaque(Point::new(5, 5))]);
    }

    #[test]
    fn test_coverage_in_unit_interval() {
        let aa = rasterize_line_aa(Point::new(-4, -1), Point::new(7, 5));
        for wp in &aa {
            assert!(wp.coverage > 0.0 && wp.coverage <= 1.0, "{wp:?}");
        }
    }

    #[test]
    fn test_interior_columns_carry_two_samples() {
        // gradient 0.4: interior columns split across two pixels
        let aa = rasterize_line_aa(Point::new(0, 0), Point::new(5, 2));
        let split_columns = [1, 2, 3, 4];
        for x in split_columns {
            let column: Vec<&WeightedPixel> = aa.iter().filter(|wp| wp.point.x == x).collect();
            assert_eq!(column.len(), 2, "column {x}");
            let sum: f64 = column.iter().map(|wp| wp.coverage).sum();
            assert!((sum - 1.0).abs() < 1e-12, "column {x} coverage sum {sum}");
        }
    }

    #[test]
    fn test_steep_line_axes_restored() {
        // dominant axis is y; emitted coordinates must still be (x, y)
        let aa = rasterize_line_aa(Point::new(0, 0), Point::new(2, 5));
        assert!(aa.iter().all(|wp| (0..=2).contains(&wp.point.x)));
        assert!(aa.iter().any(|wp| wp.point.y == 5));
        // every walk row 0..=5 produced at least one sample
        for y in 0..=5 {
            assert!(aa.iter().any(|wp| wp.point.y == y), "row {y}");
        }
    }

    #[test]
    fn test_endpoint_swap_preserves_pixel_set() {
        let forward = rasterize_line_aa(Point::new(0, 0), Point::new(5, 2));
        let backward = rasterize_line_aa(Point::new(5, 2), Point::new(0, 0));
        // The walk is normalized left-to-right, so both directions emit
        // the identical sequence
        assert_eq!(forward, backward);
    }
}
