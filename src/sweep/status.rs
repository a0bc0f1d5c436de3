//! The sweep-line status: the segments currently crossing the sweep line.

use crate::segments::{SegIdx, Segments};

/// The segments crossing the sweep line, ordered from top to bottom.
///
/// "Top" means largest sweep value (the `y` coordinate of the segment at the
/// current sweep position). The sweep values are stored per segment and are
/// only updated by [`SweepStatus::recalculate`] and [`SweepStatus::swap`]: the
/// order is not re-sorted automatically when the sweep line moves.
///
/// This is a sorted vector, so predecessor and successor queries are a binary
/// search away but insertion and removal shift the tail of the vector.
#[derive(Clone, Debug, Default)]
pub struct SweepStatus {
    order: Vec<SegIdx>,
    /// The current sweep value of every segment in the arena, indexed by `SegIdx`.
    /// Entries for segments that aren't in `order` are meaningless.
    values: Vec<f64>,
}

impl SweepStatus {
    /// Creates an empty status for segments from `segments`.
    pub fn new(segments: &Segments) -> Self {
        SweepStatus {
            order: Vec::new(),
            values: vec![0.0; segments.len()],
        }
    }

    /// The current sweep value of `seg`.
    pub fn value(&self, seg: SegIdx) -> f64 {
        self.values[seg.0]
    }

    /// The number of segments crossing the sweep line.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Is the sweep line empty?
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates over the segments from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = SegIdx> + '_ {
        self.order.iter().copied()
    }

    /// Is `seg` currently on the sweep line?
    pub fn contains(&self, seg: SegIdx) -> bool {
        self.position(seg).is_some()
    }

    /// Finds the index of `seg` in the top-to-bottom order.
    pub fn position(&self, seg: SegIdx) -> Option<usize> {
        let value = self.values[seg.0];
        let start = self.order.partition_point(|s| self.values[s.0] > value);
        self.order[start..]
            .iter()
            .take_while(|s| self.values[s.0] == value)
            .position(|s| *s == seg)
            .map(|i| i + start)
            // After a recalculation, segments that are about to swap can be out
            // of order, and then the binary search can miss.
            .or_else(|| self.order.iter().position(|s| *s == seg))
    }

    /// Inserts `seg` with its sweep value at position `x`.
    ///
    /// Segments with equal sweep values are ordered by slope, steepest first,
    /// since that's their order just to the right of `x`. Inserting a segment
    /// that's already present does nothing.
    pub fn insert(&mut self, seg: SegIdx, x: f64, segments: &Segments) {
        if self.contains(seg) {
            return;
        }
        let value = segments[seg].at_x(x);
        let slope = segments[seg].slope();
        self.values[seg.0] = value;

        let pos = self.order.partition_point(|s| {
            let v = self.values[s.0];
            v > value || (v == value && segments[*s].slope() > slope)
        });
        self.order.insert(pos, seg);
    }

    /// Removes `seg`, if it's present.
    pub fn remove(&mut self, seg: SegIdx) {
        if let Some(pos) = self.position(seg) {
            self.order.remove(pos);
        }
    }

    /// The segment immediately below `seg`, if `seg` is present and isn't the bottom one.
    pub fn lower(&self, seg: SegIdx) -> Option<SegIdx> {
        let pos = self.position(seg)?;
        self.order.get(pos + 1).copied()
    }

    /// The segment immediately above `seg`, if `seg` is present and isn't the top one.
    pub fn higher(&self, seg: SegIdx) -> Option<SegIdx> {
        let pos = self.position(seg)?;
        pos.checked_sub(1).map(|p| self.order[p])
    }

    /// Recomputes every segment's sweep value at position `x`.
    ///
    /// This doesn't change the order.
    pub fn recalculate(&mut self, x: f64, segments: &Segments) {
        for &seg in &self.order {
            self.values[seg.0] = segments[seg].at_x(x);
        }
    }

    /// Exchanges the positions (and the sweep values) of two segments.
    ///
    /// Returns false, and does nothing, unless both segments are present.
    pub fn swap(&mut self, s1: SegIdx, s2: SegIdx) -> bool {
        let (Some(p1), Some(p2)) = (self.position(s1), self.position(s2)) else {
            return false;
        };
        self.order.swap(p1, p2);
        self.values.swap(s1.0, s2.0);
        true
    }

    /// Panics if the stored sweep values aren't in non-increasing order.
    #[cfg(feature = "slow-asserts")]
    pub(crate) fn check_invariants(&self) {
        for pair in self.order.windows(2) {
            assert!(
                self.values[pair[0].0] >= self.values[pair[1].0],
                "sweep status out of order: {:?} ({}) above {:?} ({})",
                pair[0],
                self.values[pair[0].0],
                pair[1],
                self.values[pair[1].0],
            );
        }
    }

    #[cfg(not(feature = "slow-asserts"))]
    pub(crate) fn check_invariants(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Segment;

    fn mk_segs(ys: &[(f64, f64)]) -> Segments {
        ys.iter()
            .map(|&(y0, y1)| Segment::new((0.0, y0), (1.0, y1)))
            .collect()
    }

    #[test]
    fn sorted_descending() {
        let segs = mk_segs(&[(0.0, 0.0), (2.0, 2.0), (1.0, 1.0)]);
        let mut status = SweepStatus::new(&segs);
        for idx in segs.indices() {
            status.insert(idx, 0.0, &segs);
        }
        assert_eq!(
            status.iter().collect::<Vec<_>>(),
            vec![SegIdx(1), SegIdx(2), SegIdx(0)]
        );

        assert_eq!(status.higher(SegIdx(2)), Some(SegIdx(1)));
        assert_eq!(status.lower(SegIdx(2)), Some(SegIdx(0)));
        assert_eq!(status.higher(SegIdx(1)), None);
        assert_eq!(status.lower(SegIdx(0)), None);

        // Re-inserting is a no-op.
        status.insert(SegIdx(2), 0.0, &segs);
        assert_eq!(status.len(), 3);

        status.remove(SegIdx(2));
        assert_eq!(status.lower(SegIdx(1)), Some(SegIdx(0)));
        assert_eq!(status.lower(SegIdx(2)), None);
    }

    #[test]
    fn ties_broken_by_slope() {
        // All three start at the same point.
        let segs = mk_segs(&[(0.0, -1.0), (0.0, 1.0), (0.0, 0.0)]);
        let mut status = SweepStatus::new(&segs);
        for idx in segs.indices() {
            status.insert(idx, 0.0, &segs);
        }
        assert_eq!(
            status.iter().collect::<Vec<_>>(),
            vec![SegIdx(1), SegIdx(2), SegIdx(0)]
        );
        assert_eq!(status.position(SegIdx(2)), Some(1));
    }

    #[test]
    fn swap_and_recalculate() {
        let segs = mk_segs(&[(0.0, 2.0), (2.0, 0.0), (-1.0, -1.0)]);
        let mut status = SweepStatus::new(&segs);
        for idx in segs.indices() {
            status.insert(idx, 0.0, &segs);
        }
        assert_eq!(
            status.iter().collect::<Vec<_>>(),
            vec![SegIdx(1), SegIdx(0), SegIdx(2)]
        );

        assert!(status.swap(SegIdx(0), SegIdx(1)));
        assert_eq!(
            status.iter().collect::<Vec<_>>(),
            vec![SegIdx(0), SegIdx(1), SegIdx(2)]
        );
        assert_eq!(status.value(SegIdx(0)), 2.0);
        assert_eq!(status.value(SegIdx(1)), 0.0);

        status.recalculate(0.75, &segs);
        assert_eq!(status.value(SegIdx(0)), 1.5);
        assert_eq!(status.value(SegIdx(1)), 0.5);
        assert_eq!(status.higher(SegIdx(1)), Some(SegIdx(0)));
        status.check_invariants();

        status.remove(SegIdx(2));
        assert!(!status.swap(SegIdx(0), SegIdx(2)));
    }

    #[test]
    fn finds_segments_out_of_order() {
        let segs = mk_segs(&[(0.0, 2.0), (2.0, 0.0)]);
        let mut status = SweepStatus::new(&segs);
        status.insert(SegIdx(0), 0.0, &segs);
        status.insert(SegIdx(1), 0.0, &segs);

        // Past the crossing, but before the swap.
        status.recalculate(0.75, &segs);
        assert_eq!(status.position(SegIdx(0)), Some(1));
        assert_eq!(status.position(SegIdx(1)), Some(0));
        assert_eq!(status.lower(SegIdx(1)), Some(SegIdx(0)));
    }
}
