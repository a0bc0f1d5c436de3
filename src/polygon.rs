//! Predicates on polygons: simplicity, collinear edges, area and winding order.
//!
//! A polygon here is just a slice of vertices, with an implicit closing edge
//! from the last vertex back to the first.

use crate::{geom::Point, segments::Segments, sweep::sweep};

/// The rotational direction in which a polygon's vertices are listed.
///
/// The convention is for a `y`-up coordinate system: the unit square listed as
/// `(0, 0), (1, 0), (1, 1), (0, 1)` is counter-clockwise.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
pub enum WindingOrder {
    /// The shoelace sum is positive.
    Clockwise,
    /// The shoelace sum is negative.
    CounterClockwise,
    /// The polygon has zero area (or fewer than three vertices).
    Invalid,
}

impl WindingOrder {
    /// The winding order of the same polygon with its vertices listed backwards.
    pub fn reversed(self) -> Self {
        match self {
            WindingOrder::Clockwise => WindingOrder::CounterClockwise,
            WindingOrder::CounterClockwise => WindingOrder::Clockwise,
            WindingOrder::Invalid => WindingOrder::Invalid,
        }
    }
}

/// Is this a simple polygon, one whose boundary doesn't touch itself?
///
/// Polygons with fewer than three vertices, with an infinite or NaN
/// coordinate, or with two consecutive vertices (including the last and the
/// first) at the same position, are never simple.
/// Otherwise, the polygon is simple if the sweep finds no intersections
/// between its edges, ignoring the shared vertices of consecutive edges.
///
/// Because the sweep ignores parallel segments, an edge that doubles back
/// along the previous one isn't detected.
pub fn is_simple_polygon(vertices: &[Point]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    if vertices.iter().any(|p| !p.is_finite()) {
        tracing::debug!("polygon has a non-finite vertex");
        return false;
    }

    let wrapped = vertices.last().zip(vertices.first());
    if vertices
        .windows(2)
        .map(|w| (&w[0], &w[1]))
        .chain(wrapped)
        .any(|(p, q)| p == q)
    {
        tracing::debug!("polygon has a repeated vertex");
        return false;
    }

    let segments = Segments::from_closed_cycle(vertices.iter().copied());
    let crossing = sweep(&segments)
        .into_iter()
        .find(|int| !segments.contour_adjacent(int.segments.0, int.segments.1));
    if let Some(int) = crossing {
        tracing::debug!(
            x = int.point.x,
            y = int.point.y,
            segments = ?int.segments,
            "polygon edges cross"
        );
        return false;
    }
    true
}

/// Does the polygon have two consecutive edges lying on the same line?
///
/// Three consecutive vertices `a`, `b`, `c` are considered collinear when `b`
/// lies on the segment from `a` to `c`, as measured by `|ab| + |bc| == |ac|`.
/// The closing edge is not checked.
pub fn has_collinear_edges(vertices: &[Point]) -> bool {
    has_collinear_edges_within(vertices, 0.0)
}

/// Like [`has_collinear_edges`], but with a tolerance.
///
/// `a`, `b` and `c` are collinear if `|ab| + |bc|` is within `eps` of `|ac|`.
/// With `eps == 0.0` this is an exact comparison.
pub fn has_collinear_edges_within(vertices: &[Point], eps: f64) -> bool {
    vertices.windows(3).any(|w| {
        let (a, b, c) = (w[0], w[1], w[2]);
        (a.distance(b) + c.distance(b) - a.distance(c)).abs() <= eps
    })
}

/// Computes the area and the winding order of a polygon.
///
/// This uses the shoelace formula, accumulating `(x1 - x0) * (y1 + y0)` over
/// every edge. The sign of the sum gives the winding order; an exactly zero
/// sum gives [`WindingOrder::Invalid`]. Polygons with fewer than three
/// vertices have area zero and an invalid winding order.
pub fn compute_polygon_area(vertices: &[Point]) -> (f64, WindingOrder) {
    compute_polygon_area_within(vertices, 0.0)
}

/// Like [`compute_polygon_area`], but with a tolerance.
///
/// The winding order is [`WindingOrder::Invalid`] if the shoelace sum (which
/// is twice the signed area) is within `eps` of zero.
pub fn compute_polygon_area_within(vertices: &[Point], eps: f64) -> (f64, WindingOrder) {
    if vertices.len() < 3 {
        return (0.0, WindingOrder::Invalid);
    }

    let wrapped = vertices.last().zip(vertices.first());
    let sum: f64 = vertices
        .windows(2)
        .map(|w| (&w[0], &w[1]))
        .chain(wrapped)
        .map(|(start, end)| (end.x - start.x) * (end.y + start.y))
        .sum();

    let order = if sum > eps {
        WindingOrder::Clockwise
    } else if sum < -eps {
        WindingOrder::CounterClockwise
    } else {
        WindingOrder::Invalid
    };
    ((sum / 2.0).abs(), order)
}

/// Is `p` inside the clockwise triangle `abc`?
///
/// Points on the boundary count as inside. For a counter-clockwise triangle,
/// only points on the boundary lines are inside.
pub fn point_in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    let cross1 = (b - a).cross(p - a);
    let cross2 = (c - b).cross(p - b);
    let cross3 = (a - c).cross(p - c);
    !(cross1 > 0.0 || cross2 > 0.0 || cross3 > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(ps: &[(f64, f64)]) -> Vec<Point> {
        ps.iter().map(|&p| p.into()).collect()
    }

    fn square() -> Vec<Point> {
        pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    #[test]
    fn simple_polygons() {
        assert!(is_simple_polygon(&square()));
        assert!(is_simple_polygon(&pts(&[(0.0, 0.0), (2.0, 1.0), (0.0, 2.0)])));

        // An L shape, with a reflex vertex.
        assert!(is_simple_polygon(&pts(&[
            (0.0, 0.0),
            (3.0, 0.0),
            (3.0, 1.0),
            (1.0, 1.0),
            (1.0, 3.0),
            (0.0, 3.0),
        ])));
    }

    #[test]
    fn non_simple_polygons() {
        let bowtie = pts(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)]);
        assert!(!is_simple_polygon(&bowtie));

        assert!(!is_simple_polygon(&pts(&[(0.0, 0.0), (1.0, 0.0)])));
        assert!(!is_simple_polygon(&[]));

        // Consecutive repeated vertices, including across the wrap.
        assert!(!is_simple_polygon(&pts(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 0.0),
            (0.0, 1.0)
        ])));
        assert!(!is_simple_polygon(&pts(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (0.0, 1.0),
            (0.0, 0.0)
        ])));
    }

    #[test]
    fn vertex_on_a_vertical_edge() {
        // (4, 2) touches the right-hand edge.
        let touching = pts(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 4.0),
            (0.0, 4.0),
            (0.0, 3.0),
            (4.0, 2.0),
            (0.0, 1.0),
        ]);
        // The same shape, pulled back so it doesn't touch.
        let clear = pts(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 4.0),
            (0.0, 4.0),
            (0.0, 3.0),
            (3.0, 2.0),
            (0.0, 1.0),
        ]);
        for i in 0..touching.len() {
            let mut rotated = touching.clone();
            rotated.rotate_left(i);
            assert!(!is_simple_polygon(&rotated), "rotation {i}");
            rotated.reverse();
            assert!(!is_simple_polygon(&rotated), "reversed rotation {i}");

            let mut rotated = clear.clone();
            rotated.rotate_left(i);
            assert!(is_simple_polygon(&rotated), "rotation {i}");
        }
    }

    #[test]
    fn non_finite_vertices() {
        let mut sq = square();
        sq[2].y = f64::NAN;
        assert!(!is_simple_polygon(&sq));
        sq[2].y = f64::INFINITY;
        assert!(!is_simple_polygon(&sq));
    }

    #[test]
    fn collinear_edges() {
        assert!(has_collinear_edges(&pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)])));
        assert!(!has_collinear_edges(&pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)])));
        assert!(!has_collinear_edges(&square()));
        assert!(!has_collinear_edges(&pts(&[(0.0, 0.0), (1.0, 0.0)])));

        // The closing edge isn't checked.
        assert!(!has_collinear_edges(&pts(&[
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
            (0.0, 0.0),
            (0.5, 0.0),
        ])));

        let almost = pts(&[(0.0, 0.0), (1.0, 1e-3), (2.0, 0.0)]);
        assert!(!has_collinear_edges(&almost));
        assert!(has_collinear_edges_within(&almost, 1e-5));
    }

    #[test]
    fn area_and_winding() {
        let sq = square();
        assert_eq!(
            compute_polygon_area(&sq),
            (1.0, WindingOrder::CounterClockwise)
        );

        let rev: Vec<_> = sq.iter().rev().copied().collect();
        assert_eq!(compute_polygon_area(&rev), (1.0, WindingOrder::Clockwise));

        let line = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        assert_eq!(compute_polygon_area(&line), (0.0, WindingOrder::Invalid));
        assert_eq!(
            compute_polygon_area(&pts(&[(0.0, 0.0), (1.0, 1.0)])),
            (0.0, WindingOrder::Invalid)
        );

        let sliver = pts(&[(0.0, 0.0), (1.0, 1e-12), (2.0, 0.0)]);
        assert_eq!(compute_polygon_area(&sliver).1, WindingOrder::Clockwise);
        assert_eq!(
            compute_polygon_area_within(&sliver, 1e-9).1,
            WindingOrder::Invalid
        );
    }

    #[test]
    fn winding_reverses() {
        assert_eq!(
            WindingOrder::Clockwise.reversed(),
            WindingOrder::CounterClockwise
        );
        assert_eq!(WindingOrder::Invalid.reversed(), WindingOrder::Invalid);
    }

    #[test]
    fn triangle_containment() {
        // Clockwise in y-up coordinates.
        let (a, b, c) = (
            Point::new(0.0, 0.0),
            Point::new(0.0, 2.0),
            Point::new(2.0, 0.0),
        );
        assert!(point_in_triangle(Point::new(0.5, 0.5), a, b, c));
        assert!(point_in_triangle(Point::new(1.0, 0.0), a, b, c));
        assert!(point_in_triangle(a, a, b, c));
        assert!(!point_in_triangle(Point::new(2.0, 2.0), a, b, c));
        assert!(!point_in_triangle(Point::new(-0.1, 0.5), a, b, c));
    }
}
