//! Geometric primitives: points and straight line segments.

pub use kurbo::Point;

/// A straight line segment between two points.
///
/// The endpoints are stored in the order they were given. For the sweep, which
/// moves in increasing `x`, use [`Segment::first`] and [`Segment::second`]:
/// they order the endpoints by `x`, and then by `y` for vertical segments.
#[derive(Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    /// One endpoint.
    pub a: Point,
    /// The other endpoint.
    pub b: Point,
}

impl std::fmt::Debug for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Segment { a, b } = self;
        write!(f, "({:?}, {:?}) -- ({:?}, {:?})", a.x, a.y, b.x, b.y)
    }
}

impl Segment {
    /// Create a new segment.
    pub fn new(a: impl Into<Point>, b: impl Into<Point>) -> Self {
        Segment {
            a: a.into(),
            b: b.into(),
        }
    }

    fn a_comes_first(&self) -> bool {
        self.a.x < self.b.x || (self.a.x == self.b.x && self.a.y <= self.b.y)
    }

    /// The endpoint that the sweep line reaches first.
    pub fn first(&self) -> Point {
        if self.a_comes_first() {
            self.a
        } else {
            self.b
        }
    }

    /// The endpoint that the sweep line reaches last.
    pub fn second(&self) -> Point {
        if self.a_comes_first() {
            self.b
        } else {
            self.a
        }
    }

    /// Returns true if this segment is exactly vertical (including the case
    /// where both endpoints coincide).
    pub fn is_vertical(&self) -> bool {
        self.a.x == self.b.x
    }

    /// The `y` coordinate of this segment's supporting line at the sweep position `x`.
    ///
    /// Vertical segments don't have a well-defined value; they return the `y`
    /// coordinate of their lower endpoint.
    pub fn at_x(&self, x: f64) -> f64 {
        let p = self.first();
        let q = self.second();
        if self.is_vertical() {
            p.y
        } else {
            p.y + ((q.y - p.y) / (q.x - p.x)) * (x - p.x)
        }
    }

    /// The slope `dy / dx`. Infinite for vertical segments.
    pub fn slope(&self) -> f64 {
        let p = self.first();
        let q = self.second();
        if self.is_vertical() {
            f64::INFINITY
        } else {
            (q.y - p.y) / (q.x - p.x)
        }
    }

    /// Are both endpoints finite?
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite()
    }

    /// The smallest and largest `y` coordinates of this segment.
    pub fn y_range(&self) -> (f64, f64) {
        (self.a.y.min(self.b.y), self.a.y.max(self.b.y))
    }

    /// Finds the point where this segment meets `other`, if any.
    ///
    /// This solves the two-by-two linear system for the parameters `t` (along
    /// `self`) and `u` (along `other`), and accepts the solution only if both
    /// lie in `[0, 1]`. Parallel and collinear segments never meet, even if
    /// they overlap.
    pub fn crossing_point(&self, other: &Segment) -> Option<Point> {
        let Point { x: x1, y: y1 } = self.first();
        let Point { x: x2, y: y2 } = self.second();
        let Point { x: x3, y: y3 } = other.first();
        let Point { x: x4, y: y4 } = other.second();

        let r = (x2 - x1) * (y4 - y3) - (y2 - y1) * (x4 - x3);
        if r == 0.0 {
            return None;
        }

        let t = ((x3 - x1) * (y4 - y3) - (y3 - y1) * (x4 - x3)) / r;
        let u = ((x3 - x1) * (y2 - y1) - (y3 - y1) * (x2 - x1)) / r;

        if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
            Some(Point::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1)))
        } else {
            None
        }
    }

    /// Converts to a `kurbo` line, keeping the original endpoint order.
    pub fn to_kurbo(&self) -> kurbo::Line {
        kurbo::Line::new(self.a, self.b)
    }
}

impl From<(Point, Point)> for Segment {
    fn from((a, b): (Point, Point)) -> Self {
        Segment { a, b }
    }
}

impl From<kurbo::Line> for Segment {
    fn from(line: kurbo::Line) -> Self {
        Segment {
            a: line.p0,
            b: line.p1,
        }
    }
}
