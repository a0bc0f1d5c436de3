#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

#[macro_use]
mod typed_vec;

#[cfg(any(test, feature = "arbitrary"))]
pub mod arbitrary;
mod geom;
mod num;
mod polygon;
mod segments;
pub mod sweep;
mod triangulate;

#[cfg(any(test, feature = "generators"))]
pub mod generators;

pub use geom::{Point, Segment};
pub use polygon::{
    compute_polygon_area, compute_polygon_area_within, has_collinear_edges,
    has_collinear_edges_within, is_simple_polygon, point_in_triangle, WindingOrder,
};
pub use segments::{SegIdx, Segments};
pub use triangulate::{triangulate, Triangulation, TriangulationOptions, DEFAULT_MAX_VERTICES};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The input polygon couldn't be triangulated.
pub enum Error {
    /// There were no vertices at all.
    MissingVertices,
    /// There were fewer than three vertices.
    InsufficientVertices,
    /// There were more vertices than allowed.
    ExceededVertices {
        /// The configured maximum.
        max: usize,
        /// The number of vertices we got.
        actual: usize,
    },
    /// At least one of the vertices was infinite or NaN.
    NonFiniteVertex,
    /// The polygon's boundary touches or crosses itself.
    NotSimplePolygon,
    /// Two consecutive edges lie on the same line.
    CollinearEdges,
    /// The polygon has zero area, so it has no winding order.
    InvalidWindingOrder,
    /// No ear could be found, which can happen if some checks were skipped.
    TriangulationStalled {
        /// The number of vertices left when we got stuck.
        remaining: usize,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingVertices => write!(f, "the vertex list is empty"),
            Error::InsufficientVertices => {
                write!(f, "the vertex list must have at least 3 vertices")
            }
            Error::ExceededVertices { max, actual } => write!(
                f,
                "the vertex list has {actual} vertices, but the maximum is {max}"
            ),
            Error::NonFiniteVertex => write!(f, "one of the vertices was infinite or NaN"),
            Error::NotSimplePolygon => write!(f, "the vertex list does not define a simple polygon"),
            Error::CollinearEdges => write!(f, "the vertex list contains collinear edges"),
            Error::InvalidWindingOrder => {
                write!(f, "the vertex list does not contain a valid polygon")
            }
            Error::TriangulationStalled { remaining } => {
                write!(f, "no ear found with {remaining} vertices remaining")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Finds all the points where two of the segments meet.
///
/// The points come in the order the sweep discovers them, which isn't sorted.
/// A point where more than two segments meet may be reported more than once.
/// Segments with an infinite or NaN coordinate are ignored.
/// See [`sweep::Sweeper`] for the details, and for which segment pairs meet where.
pub fn find_intersections(segments: &[Segment]) -> Vec<Point> {
    let segments: Segments = segments.iter().copied().collect();
    sweep::sweep(&segments)
        .into_iter()
        .map(|int| int.point)
        .collect()
}
