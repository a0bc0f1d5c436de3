//! A Bentley-Ottmann style sweep for finding segment intersections.
//!
//! The sweep line is vertical and moves in increasing `x`. We keep a queue of
//! events (segment starts, segment ends, and crossings that we've discovered
//! but not reached yet) and a status structure holding the segments that
//! currently cross the sweep line, ordered from top to bottom. Only segments
//! that are adjacent in the status get tested against each other.
//!
//! Vertical segments don't have a position in the top-to-bottom order, so they
//! never enter the status structure. Instead, when the sweep reaches a vertical
//! segment we compare it against every segment that meets the sweep line at
//! that position, including the ones that start or end there.
//!
//! Segments with an infinite or NaN coordinate are skipped entirely.
//!
//! All comparisons are exact floating-point comparisons. In particular, a crossing
//! is only scheduled if it lies strictly to the right of the sweep line, so
//! crossings that happen exactly at the sweep position of a newly inserted
//! segment (for example, a segment starting in the interior of another one) are
//! not reported. Parallel segments are never reported as intersecting, even if
//! they overlap.

use crate::{
    geom::Point,
    segments::{SegIdx, Segments},
};

use super::{Event, EventKind, EventQueue, SweepStatus};

/// An intersection point, along with the pair of segments that produced it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Intersection {
    /// Where the segments meet.
    pub point: Point,
    /// The two segments that meet. The order carries no meaning.
    pub segments: (SegIdx, SegIdx),
}

impl Intersection {
    /// Does this intersection involve `seg`?
    pub fn involves(&self, seg: SegIdx) -> bool {
        self.segments.0 == seg || self.segments.1 == seg
    }
}

/// Encapsulates the state of the sweep-line algorithm.
///
/// Most callers will just want [`sweep`]; stepping a `Sweeper` by hand is
/// mostly useful for inspecting the intermediate states.
#[derive(Clone, Debug)]
pub struct Sweeper<'a> {
    x: f64,
    segments: &'a Segments,
    events: EventQueue,
    status: SweepStatus,
    // Non-vertical segments whose end event was processed at the current `x`.
    ended_here: Vec<SegIdx>,
    intersections: Vec<Intersection>,
}

impl<'segs> Sweeper<'segs> {
    /// Creates a new sweeper for a collection of segments.
    ///
    /// The event queue is seeded with a start and an end event for every
    /// segment whose coordinates are all finite.
    pub fn new(segments: &'segs Segments) -> Self {
        let mut events = EventQueue::default();
        for idx in segments.indices() {
            let seg = &segments[idx];
            if !seg.is_finite() {
                tracing::debug!(?idx, ?seg, "skipping non-finite segment");
                continue;
            }
            events.insert(Event::start(seg.first(), idx));
            events.insert(Event::end(seg.second(), idx));
        }

        Sweeper {
            x: events.peek().map_or(f64::NEG_INFINITY, |ev| ev.x()),
            segments,
            events,
            status: SweepStatus::new(segments),
            ended_here: Vec::new(),
            intersections: Vec::new(),
        }
    }

    /// The current position of the sweep line.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// The segments currently crossing the sweep line.
    pub fn status(&self) -> &SweepStatus {
        &self.status
    }

    /// The events that haven't been processed yet.
    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    /// The intersections found so far, in the order they were found.
    pub fn intersections(&self) -> &[Intersection] {
        &self.intersections
    }

    /// Processes the next event, returning it.
    ///
    /// Returns `None` when sweeping is complete.
    pub fn step(&mut self) -> Option<Event> {
        let event = self.events.poll()?;
        if event.x() != self.x {
            self.ended_here.clear();
        }
        self.x = event.x();
        tracing::trace!(x = self.x, kind = ?event.kind, segments = ?event.segments, "sweep event");

        match event.kind {
            EventKind::Start => self.handle_start(event.segments[0]),
            EventKind::End => self.handle_end(event.segments[0]),
            EventKind::Intersection => {
                self.handle_intersection(event.point, event.segments[0], event.segments[1])
            }
        }
        self.status.check_invariants();
        Some(event)
    }

    /// Runs the sweep to completion, returning all the intersections.
    pub fn run(mut self) -> Vec<Intersection> {
        while self.step().is_some() {}
        self.intersections
    }

    fn handle_start(&mut self, seg: SegIdx) {
        if self.segments[seg].is_vertical() {
            self.handle_vertical(seg);
            return;
        }

        self.status.recalculate(self.x, self.segments);
        self.status.insert(seg, self.x, self.segments);

        let lower = self.status.lower(seg);
        let higher = self.status.higher(seg);
        if let Some(lower) = lower {
            self.schedule_crossing(lower, seg);
        }
        if let Some(higher) = higher {
            self.schedule_crossing(higher, seg);
        }
        if let (Some(lower), Some(higher)) = (lower, higher) {
            // The new segment separates them now.
            self.events.remove_intersection_between(lower, higher);
        }
    }

    fn handle_end(&mut self, seg: SegIdx) {
        if self.segments[seg].is_vertical() {
            return;
        }
        self.ended_here.push(seg);
        if let (Some(lower), Some(higher)) = (self.status.lower(seg), self.status.higher(seg)) {
            self.schedule_crossing(lower, higher);
        }
        self.status.remove(seg);
    }

    fn handle_intersection(&mut self, point: Point, s1: SegIdx, s2: SegIdx) {
        tracing::debug!(x = point.x, y = point.y, ?s1, ?s2, "found intersection");
        self.intersections.push(Intersection {
            point,
            segments: (s1, s2),
        });

        if !self.status.swap(s1, s2) {
            return;
        }

        // Both are present, because the swap succeeded.
        let (Some(p1), Some(p2)) = (self.status.position(s1), self.status.position(s2)) else {
            return;
        };
        let (upper, lower) = if p1 < p2 { (s1, s2) } else { (s2, s1) };

        if let Some(above) = self.status.higher(upper) {
            self.schedule_crossing(above, upper);
            self.events.remove_intersection_between(above, lower);
        }
        if let Some(below) = self.status.lower(lower) {
            self.schedule_crossing(below, lower);
            self.events.remove_intersection_between(below, upper);
        }
    }

    // Vertical segments meet every segment whose height at this `x` is within
    // their vertical extent. Besides the status, that means the segments that
    // already ended here and the ones whose start or end events at this `x`
    // are still queued.
    fn handle_vertical(&mut self, vert: SegIdx) {
        let (y0, y1) = self.segments[vert].y_range();
        let queued = self
            .events
            .iter()
            .take_while(|ev| ev.x() == self.x)
            .filter(|ev| ev.kind != EventKind::Intersection)
            .map(|ev| ev.segments[0]);
        let mut candidates: Vec<SegIdx> = self
            .status
            .iter()
            .chain(self.ended_here.iter().copied())
            .chain(queued)
            .filter(|seg| !self.segments[*seg].is_vertical())
            .collect();
        candidates.sort();
        candidates.dedup();

        for seg in candidates {
            let y = self.segments[seg].at_x(self.x);
            if (y0..=y1).contains(&y) {
                tracing::debug!(x = self.x, y, ?seg, ?vert, "found vertical intersection");
                self.intersections.push(Intersection {
                    point: Point::new(self.x, y),
                    segments: (seg, vert),
                });
            }
        }
    }

    // Tests a pair of segments and, if they cross to the right of the sweep
    // line, schedules an intersection event.
    fn schedule_crossing(&mut self, s1: SegIdx, s2: SegIdx) {
        if self.events.contains_intersection_between(s1, s2) {
            return;
        }
        let Some(p) = self.segments[s1].crossing_point(&self.segments[s2]) else {
            return;
        };
        if p.x > self.x {
            self.events.insert(Event::intersection(p, s1, s2));
        }
    }
}

/// Runs a sweep over all the segments, returning every intersection found.
///
/// The intersections come in the order they were discovered, which is not
/// necessarily sorted. If more than two segments meet at a point, that point
/// is reported once for every pair that gets tested there.
pub fn sweep(segments: &Segments) -> Vec<Intersection> {
    Sweeper::new(segments).run()
}
