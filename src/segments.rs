use crate::geom::{Point, Segment};

/// An index into our segment arena.
///
/// Throughout this library, we assign identities to segments, so that we may
/// consider segments as different even if they have the same start- and end-points.
///
/// This index is used to identify a segment, whose data can be retrieved by looking
/// it up in [`Segments`]. (Of course, this index-as-identifier breaks down if there are
/// multiple `Segments` in flight. Just be careful not to mix them up.)
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, serde::Serialize)]
pub struct SegIdx(pub usize);

impl std::fmt::Debug for SegIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s_{}", self.0)
    }
}

/// An arena of line segments.
///
/// Segments are indexed by [`SegIdx`] and can be retrieved by indexing (i.e. with square brackets).
/// Segments that were added as part of a polyline remember their neighbors along it.
#[derive(Debug, Clone, Default)]
pub struct Segments {
    segs: Vec<Segment>,
    contour_prev: Vec<Option<SegIdx>>,
    contour_next: Vec<Option<SegIdx>>,
}

fn cyclic_pairs<T>(xs: &[T]) -> impl Iterator<Item = (&T, &T)> {
    pairs(xs).chain(xs.last().zip(xs.first()))
}

fn pairs<T>(xs: &[T]) -> impl Iterator<Item = (&T, &T)> {
    xs.windows(2).map(|pair| (&pair[0], &pair[1]))
}

impl Segments {
    /// The number of line segments in this arena.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.segs.len()
    }

    /// Iterate over all indices that can be used to index into this arena.
    pub fn indices(&self) -> impl Iterator<Item = SegIdx> {
        (0..self.segs.len()).map(SegIdx)
    }

    /// Iterate over all segments in this arena.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segs.iter()
    }

    /// Returns the index of the segment following `idx` along its polyline.
    ///
    /// Stand-alone segments, and the last segment of a non-closed polyline, return `None`.
    /// If `idx` is part of a closed polyline, this will always return `Some`, and you
    /// might need to be careful to avoid looping infinitely.
    pub fn contour_next(&self, idx: SegIdx) -> Option<SegIdx> {
        self.contour_next[idx.0]
    }

    /// Returns the index of the segment preceding `idx` along its polyline.
    ///
    /// Stand-alone segments, and the first segment of a non-closed polyline, return `None`.
    pub fn contour_prev(&self, idx: SegIdx) -> Option<SegIdx> {
        self.contour_prev[idx.0]
    }

    /// Are these two segments consecutive along a polyline (in either direction)?
    ///
    /// Consecutive segments share an endpoint, so the sweep will typically report
    /// that endpoint as an intersection between them.
    pub fn contour_adjacent(&self, i: SegIdx, j: SegIdx) -> bool {
        self.contour_next(i) == Some(j) || self.contour_prev(i) == Some(j)
    }

    /// Add a single stand-alone segment, returning its index.
    pub fn add_segment(&mut self, seg: impl Into<Segment>) -> SegIdx {
        self.segs.push(seg.into());
        self.contour_prev.push(None);
        self.contour_next.push(None);
        SegIdx(self.segs.len() - 1)
    }

    /// Add a (non-closed) polyline to this arena.
    pub fn add_points<P: Into<Point>>(&mut self, ps: impl IntoIterator<Item = P>) {
        let old_len = self.segs.len();

        let ps: Vec<Point> = ps.into_iter().map(|p| p.into()).collect();
        if ps.len() <= 1 {
            return;
        }

        for (p, q) in pairs(&ps) {
            self.push_linked(Segment::new(*p, *q));
        }

        if let Some(first) = self.contour_prev.get_mut(old_len) {
            *first = None;
        }
        if let Some(last) = self.contour_next.last_mut() {
            *last = None;
        }
    }

    /// Add a closed polyline to this arena.
    ///
    /// The `i`th segment added runs from the `i`th point to the next one, with the
    /// last segment closing the loop back to the first point.
    pub fn add_cycle<P: Into<Point>>(&mut self, ps: impl IntoIterator<Item = P>) {
        let old_len = self.segs.len();

        let ps: Vec<Point> = ps.into_iter().map(|p| p.into()).collect();
        if ps.len() <= 1 {
            return;
        }

        for (p, q) in cyclic_pairs(&ps) {
            self.push_linked(Segment::new(*p, *q));
        }

        if let Some(first) = self.contour_prev.get_mut(old_len) {
            *first = Some(SegIdx(self.segs.len() - 1));
        }
        if let Some(last) = self.contour_next.last_mut() {
            *last = Some(SegIdx(old_len));
        }
    }

    fn push_linked(&mut self, seg: Segment) {
        self.segs.push(seg);
        self.contour_prev
            .push(Some(SegIdx(self.segs.len().saturating_sub(2))));
        self.contour_next.push(Some(SegIdx(self.segs.len())));
    }

    /// Construct a segment arena from a single closed polyline.
    pub fn from_closed_cycle<P: Into<Point>>(ps: impl IntoIterator<Item = P>) -> Self {
        let mut ret = Self::default();
        ret.add_cycle(ps);
        ret
    }
}

impl FromIterator<Segment> for Segments {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        let mut ret = Segments::default();
        for seg in iter {
            ret.add_segment(seg);
        }
        ret
    }
}

impl std::ops::Index<SegIdx> for Segments {
    type Output = Segment;

    fn index(&self, index: SegIdx) -> &Self::Output {
        &self.segs[index.0]
    }
}
