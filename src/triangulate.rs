//! Ear-clipping triangulation of simple polygons.

use crate::{
    geom::Point,
    polygon::{
        compute_polygon_area_within, has_collinear_edges_within, is_simple_polygon,
        point_in_triangle, WindingOrder,
    },
    Error,
};

/// The largest polygon that [`triangulate`] accepts by default.
pub const DEFAULT_MAX_VERTICES: usize = 1000;

/// Controls which checks [`triangulate`] runs before clipping ears.
///
/// Skipping a check that would have failed doesn't produce an error, but the
/// resulting triangulation is unspecified (and [`Error::TriangulationStalled`]
/// is possible).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TriangulationOptions {
    /// Don't check that the polygon is simple.
    pub skip_simple_check: bool,
    /// Don't check for consecutive collinear edges.
    pub skip_collinear_check: bool,
    /// Don't compute the winding order.
    ///
    /// This also skips the area computation and the reversal of
    /// counter-clockwise polygons, so the input must already be clockwise.
    pub skip_winding_check: bool,
    /// The maximum number of vertices.
    pub max_vertices: usize,
    /// The tolerance used by the collinearity and winding checks.
    pub epsilon: f64,
}

impl Default for TriangulationOptions {
    fn default() -> Self {
        TriangulationOptions {
            skip_simple_check: false,
            skip_collinear_check: false,
            skip_winding_check: false,
            max_vertices: DEFAULT_MAX_VERTICES,
            epsilon: 0.0,
        }
    }
}

/// The result of triangulating a polygon.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Triangulation {
    /// The polygon's vertices, in clockwise order.
    ///
    /// If the input was counter-clockwise, this is the input reversed.
    /// The triangle indices refer to this.
    pub vertices: Vec<Point>,
    /// The triangles, as triples of indices into `vertices`.
    pub triangles: Vec<[usize; 3]>,
    /// The polygon's area, if the winding check ran.
    pub area: Option<f64>,
    /// Whether `vertices` is the reverse of the input.
    pub reversed: bool,
}

impl Triangulation {
    /// All the triangle indices, three per triangle.
    pub fn indices(&self) -> Vec<usize> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// The corner positions of every triangle.
    pub fn triangle_points(&self) -> impl Iterator<Item = [Point; 3]> + '_ {
        self.triangles
            .iter()
            .map(|t| t.map(|i| self.vertices[i]))
    }

    /// Draws the polygon and its triangles.
    #[cfg(feature = "debug-svg")]
    pub fn to_svg(&self) -> svg::Document {
        use svg::node::element::{path::Data, Path};

        let bbox = self
            .vertices
            .iter()
            .fold(kurbo::Rect::from_points(self.vertices[0], self.vertices[0]), |r, p| {
                r.union_pt(*p)
            });
        let pad = 0.05 * bbox.width().max(bbox.height());
        let bbox = bbox.inflate(pad, pad);
        let stroke_width = pad / 10.0;

        let mut document = svg::Document::new().set(
            "viewBox",
            (bbox.min_x(), bbox.min_y(), bbox.width(), bbox.height()),
        );

        for [a, b, c] in self.triangle_points() {
            let data = Data::new()
                .move_to((a.x, a.y))
                .line_to((b.x, b.y))
                .line_to((c.x, c.y))
                .close();
            document = document.add(
                Path::new()
                    .set("d", data)
                    .set("fill", "#cde")
                    .set("stroke", "#345")
                    .set("stroke-width", stroke_width),
            );
        }

        let mut outline = Data::new().move_to((self.vertices[0].x, self.vertices[0].y));
        for p in &self.vertices[1..] {
            outline = outline.line_to((p.x, p.y));
        }
        document.add(
            Path::new()
                .set("d", outline.close())
                .set("fill", "none")
                .set("stroke", "black")
                .set("stroke-width", 2.0 * stroke_width),
        )
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
struct NodeIdx(usize);

struct NodeVec<T> {
    inner: Vec<T>,
}

impl_typed_vec!(NodeVec, NodeIdx, "n");

// A vertex in the circular list of vertices that haven't been clipped yet.
#[derive(Clone, Copy, Debug)]
struct Node {
    vertex: usize,
    prev: NodeIdx,
    next: NodeIdx,
}

// The polygon boundary that's left to triangulate.
#[derive(Debug)]
struct Ring {
    nodes: NodeVec<Node>,
    front: NodeIdx,
    len: usize,
}

impl Ring {
    fn new(n: usize) -> Self {
        let mut nodes = NodeVec::with_capacity(n);
        for i in 0..n {
            nodes.push(Node {
                vertex: i,
                prev: NodeIdx((i + n - 1) % n),
                next: NodeIdx((i + 1) % n),
            });
        }
        Ring {
            nodes,
            front: NodeIdx(0),
            len: n,
        }
    }

    /// Iterates over the remaining nodes, starting from the front.
    fn iter(&self) -> impl Iterator<Item = NodeIdx> + '_ {
        std::iter::successors(Some(self.front), |idx| Some(self.nodes[*idx].next)).take(self.len)
    }

    fn remove(&mut self, idx: NodeIdx) {
        let Node { prev, next, .. } = self.nodes[idx];
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        if self.front == idx {
            self.front = next;
        }
        self.len -= 1;
    }

    fn triangle(&self, idx: NodeIdx) -> [usize; 3] {
        let node = &self.nodes[idx];
        [
            self.nodes[node.prev].vertex,
            node.vertex,
            self.nodes[node.next].vertex,
        ]
    }
}

// Runs the enabled checks, returning the area and winding order if they were computed.
fn check(
    vertices: &[Point],
    opts: &TriangulationOptions,
) -> Result<Option<(f64, WindingOrder)>, Error> {
    if vertices.is_empty() {
        return Err(Error::MissingVertices);
    }
    if vertices.len() < 3 {
        return Err(Error::InsufficientVertices);
    }
    if vertices.len() > opts.max_vertices {
        return Err(Error::ExceededVertices {
            max: opts.max_vertices,
            actual: vertices.len(),
        });
    }
    if vertices.iter().any(|p| !p.is_finite()) {
        return Err(Error::NonFiniteVertex);
    }
    if !opts.skip_simple_check && !is_simple_polygon(vertices) {
        return Err(Error::NotSimplePolygon);
    }
    if !opts.skip_collinear_check && has_collinear_edges_within(vertices, opts.epsilon) {
        return Err(Error::CollinearEdges);
    }
    if opts.skip_winding_check {
        return Ok(None);
    }
    let (area, order) = compute_polygon_area_within(vertices, opts.epsilon);
    if order == WindingOrder::Invalid {
        return Err(Error::InvalidWindingOrder);
    }
    Ok(Some((area, order)))
}

/// Decomposes a simple polygon into triangles by clipping ears.
///
/// The input is validated according to `opts`; each enabled check that fails
/// returns the corresponding error before any triangulation happens. If the
/// polygon is counter-clockwise, the triangulation is computed for the reversed
/// polygon (the input slice itself is never modified), and the returned
/// indices refer to [`Triangulation::vertices`].
///
/// A polygon with `n` vertices is cut into `n - 2` triangles. Every triangle
/// is listed in the same (clockwise) order as the polygon.
pub fn triangulate(
    vertices: &[Point],
    opts: TriangulationOptions,
) -> Result<Triangulation, Error> {
    let checked = match check(vertices, &opts) {
        Ok(checked) => checked,
        Err(e) => {
            tracing::debug!(error = %e, n = vertices.len(), "rejected polygon");
            return Err(e);
        }
    };

    let mut vertices = vertices.to_vec();
    let reversed = checked.is_some_and(|(_, order)| order == WindingOrder::CounterClockwise);
    if reversed {
        vertices.reverse();
    }

    let triangles = clip_ears(&vertices)?;
    Ok(Triangulation {
        vertices,
        triangles,
        area: checked.map(|(area, _)| area),
        reversed,
    })
}

fn is_ear(ring: &Ring, idx: NodeIdx, vertices: &[Point]) -> bool {
    let [prev, cur, next] = ring.triangle(idx);
    let (a, b, c) = (vertices[prev], vertices[cur], vertices[next]);

    // Reflex and degenerate corners are never ears.
    if (a - b).cross(c - b) <= 0.0 {
        return false;
    }

    ring.iter()
        .map(|other| ring.nodes[other].vertex)
        .filter(|&v| v != prev && v != cur && v != next)
        .all(|v| !point_in_triangle(vertices[v], a, b, c))
}

// Assumes a clockwise polygon with at least three vertices.
fn clip_ears(vertices: &[Point]) -> Result<Vec<[usize; 3]>, Error> {
    let n = vertices.len();
    let mut ring = Ring::new(n);
    let mut triangles = Vec::with_capacity(n - 2);

    while ring.len > 3 {
        let Some(ear) = ring.iter().find(|&idx| is_ear(&ring, idx, vertices)) else {
            tracing::debug!(remaining = ring.len, "no ear found");
            return Err(Error::TriangulationStalled {
                remaining: ring.len,
            });
        };

        let tri = ring.triangle(ear);
        tracing::debug!(?tri, "clipped ear");
        triangles.push(tri);
        ring.remove(ear);
    }

    let mut last = ring.iter().map(|idx| ring.nodes[idx].vertex);
    if let (Some(a), Some(b), Some(c)) = (last.next(), last.next(), last.next()) {
        triangles.push([a, b, c]);
    }
    Ok(triangles)
}
