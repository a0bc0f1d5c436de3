//! Utilities for generating examples, benchmarks, and test cases.

use std::f64::consts::TAU;

use crate::{Point, Segment};

/// A regular polygon with `n` vertices on a circle of radius `radius` around the origin.
///
/// The first vertex is on the positive `x` axis, and the vertices go
/// counter-clockwise.
pub fn regular_polygon(n: usize, radius: f64) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let theta = i as f64 * TAU / n as f64;
            Point::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}

/// A star with `points` spikes, alternating between the `outer` and `inner` radius.
///
/// There are `2 * points` vertices, going counter-clockwise.
pub fn star(points: usize, inner: f64, outer: f64) -> Vec<Point> {
    let n = 2 * points;
    (0..n)
        .map(|i| {
            let theta = i as f64 * TAU / n as f64;
            let r = if i % 2 == 0 { outer } else { inner };
            Point::new(r * theta.cos(), r * theta.sin())
        })
        .collect()
}

/// A comb with `teeth` teeth pointing up, going counter-clockwise.
///
/// For `teeth = 3`, it looks like:
///
/// ```text
/// ┌─┐ ┌─┐ ┌─┐
/// │ │ │ │ │ │
/// │ │ │ │ │ │
/// │ └─┘ └─┘ │
/// └─────────┘
/// ```
///
/// Every gap between teeth has two reflex vertices, which makes this a
/// harder case for ear clipping than a convex polygon of the same size.
pub fn comb(teeth: usize) -> Vec<Point> {
    const HEIGHT: f64 = 5.0;
    let right = (2 * teeth) as f64 - 1.0;

    let mut ret = vec![Point::new(0.0, 0.0), Point::new(right, 0.0)];
    for i in (0..teeth).rev() {
        let x = (2 * i) as f64;
        ret.push(Point::new(x + 1.0, HEIGHT));
        ret.push(Point::new(x, HEIGHT));
        if i > 0 {
            ret.push(Point::new(x, 1.0));
            ret.push(Point::new(x - 1.0, 1.0));
        }
    }
    ret
}

/// Generate a bunch of squares, arranged in a grid.
///
/// The bottom-left of the first square is at (x0, y0). Each square has size `size
/// x size`, and the distance between squares (both horizontally and vertically)
/// is `offset`.
fn squares((x0, y0): (f64, f64), size: f64, offset: f64, count: usize) -> Vec<Vec<Point>> {
    let mut ret = Vec::new();
    for i in 0..count {
        let x = x0 + i as f64 * offset;
        for j in 0..count {
            let y = y0 + j as f64 * offset;
            ret.push(vec![
                Point::new(x, y),
                Point::new(x + size, y),
                Point::new(x + size, y + size),
                Point::new(x, y + size),
            ]);
        }
    }
    ret
}

/// The edges of an `n` by `n` checkerboard-like pattern of overlapping squares.
///
/// There's an `n x n` grid of non-overlapping squares, and an `(n - 1) x (n - 1)`
/// grid of squares on top, each of which overlaps four squares of the first
/// grid. The whole thing is rotated slightly, so that no edge is vertical.
pub fn checkerboard_segments(n: usize) -> Vec<Segment> {
    let (sin, cos) = 0.1f64.sin_cos();
    let rotate = |p: &Point| Point::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos);

    let mut contours = squares((0.0, 0.0), 30.0, 40.0, n);
    contours.extend(squares((20.0, 20.0), 30.0, 40.0, n.saturating_sub(1)));

    let mut ret = Vec::new();
    for c in contours {
        let c: Vec<Point> = c.iter().map(rotate).collect();
        for (i, p) in c.iter().enumerate() {
            ret.push(Segment::new(*p, c[(i + 1) % c.len()]));
        }
    }
    ret
}
