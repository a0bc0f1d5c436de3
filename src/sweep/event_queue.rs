//! Sweep events, ordered by horizontal position.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

use arrayvec::ArrayVec;

use crate::{geom::Point, num::CheapOrderedFloat, segments::SegIdx};

/// What happens at a sweep event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum EventKind {
    /// A segment enters the sweep line at its first endpoint.
    Start,
    /// A segment leaves the sweep line at its second endpoint.
    End,
    /// Two segments cross.
    Intersection,
}

/// A point at which the sweep line needs to stop and do something.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Event {
    /// Where the event happens.
    pub point: Point,
    /// The segments involved: exactly one for [`EventKind::Start`] and
    /// [`EventKind::End`], exactly two for [`EventKind::Intersection`].
    pub segments: ArrayVec<SegIdx, 2>,
    /// What kind of event this is.
    pub kind: EventKind,
}

impl Event {
    /// A segment starting at `point`.
    pub fn start(point: Point, seg: SegIdx) -> Self {
        Self::single(point, seg, EventKind::Start)
    }

    /// A segment ending at `point`.
    pub fn end(point: Point, seg: SegIdx) -> Self {
        Self::single(point, seg, EventKind::End)
    }

    fn single(point: Point, seg: SegIdx, kind: EventKind) -> Self {
        let mut segments = ArrayVec::new();
        segments.push(seg);
        Event {
            point,
            segments,
            kind,
        }
    }

    /// Two segments crossing at `point`.
    pub fn intersection(point: Point, s1: SegIdx, s2: SegIdx) -> Self {
        Event {
            point,
            segments: [s1, s2].into(),
            kind: EventKind::Intersection,
        }
    }

    /// The sort key of this event.
    pub fn x(&self) -> f64 {
        self.point.x
    }

    /// Is this an intersection event between exactly this (unordered) pair?
    pub fn is_intersection_between(&self, s1: SegIdx, s2: SegIdx) -> bool {
        self.kind == EventKind::Intersection
            && (self.segments[..] == [s1, s2] || self.segments[..] == [s2, s1])
    }
}

// Events sort by `x`. Among events with the same `x`, the most recently
// inserted one comes first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct EventKey {
    x: CheapOrderedFloat,
    seq: Reverse<u64>,
}

fn pair_key(s1: SegIdx, s2: SegIdx) -> (SegIdx, SegIdx) {
    (s1.min(s2), s1.max(s2))
}

/// The queue of pending sweep events, in increasing `x` order.
///
/// Ties are broken in favor of the most recently inserted event: a new event
/// goes right before the first existing event whose `x` is equal or larger.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    events: BTreeMap<EventKey, Event>,
    /// Pending intersection events, keyed by their (sorted) segment pair.
    intersections: HashMap<(SegIdx, SegIdx), EventKey>,
    next_seq: u64,
}

impl EventQueue {
    /// Adds an event to the queue.
    ///
    /// If this is an intersection event for a pair that already has a pending
    /// intersection, the new event replaces the old one in the pair index, but
    /// both stay in the queue. Use [`EventQueue::contains_intersection_between`]
    /// to avoid that.
    pub fn insert(&mut self, event: Event) {
        let key = EventKey {
            x: event.x().into(),
            seq: Reverse(self.next_seq),
        };
        self.next_seq += 1;
        if event.kind == EventKind::Intersection {
            self.intersections
                .insert(pair_key(event.segments[0], event.segments[1]), key);
        }
        self.events.insert(key, event);
    }

    /// Removes and returns the event with the smallest `x`.
    pub fn poll(&mut self) -> Option<Event> {
        let (key, event) = self.events.pop_first()?;
        if event.kind == EventKind::Intersection {
            let pair = pair_key(event.segments[0], event.segments[1]);
            if self.intersections.get(&pair) == Some(&key) {
                self.intersections.remove(&pair);
            }
        }
        Some(event)
    }

    /// The event that [`EventQueue::poll`] would return next.
    pub fn peek(&self) -> Option<&Event> {
        self.events.first_key_value().map(|(_, ev)| ev)
    }

    /// Is there a pending intersection event between `s1` and `s2` (in either order)?
    pub fn contains_intersection_between(&self, s1: SegIdx, s2: SegIdx) -> bool {
        self.intersections.contains_key(&pair_key(s1, s2))
    }

    /// Removes the pending intersection event between `s1` and `s2` (in either
    /// order), if there is one. Returns true if something was removed.
    pub fn remove_intersection_between(&mut self, s1: SegIdx, s2: SegIdx) -> bool {
        let Some(key) = self.intersections.remove(&pair_key(s1, s2)) else {
            return false;
        };
        let removed = self.events.remove(&key);
        debug_assert!(removed.is_some_and(|ev| ev.is_intersection_between(s1, s2)));
        true
    }

    /// The number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Are there no more events?
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates over the pending events, in the order they will be polled.
    pub fn iter(&self) -> impl Iterator<Item = &Event> + '_ {
        self.events.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64) -> Point {
        Point::new(x, 0.0)
    }

    #[test]
    fn polls_in_x_order() {
        let mut queue = EventQueue::default();
        queue.insert(Event::start(pt(3.0), SegIdx(0)));
        queue.insert(Event::start(pt(1.0), SegIdx(1)));
        queue.insert(Event::end(pt(2.0), SegIdx(2)));

        let xs: Vec<_> = std::iter::from_fn(|| queue.poll()).map(|ev| ev.x()).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
        assert!(queue.is_empty());
    }

    #[test]
    fn ties_go_to_the_newest() {
        let mut queue = EventQueue::default();
        queue.insert(Event::start(pt(1.0), SegIdx(0)));
        queue.insert(Event::end(pt(1.0), SegIdx(0)));
        queue.insert(Event::start(pt(1.0), SegIdx(1)));
        queue.insert(Event::start(pt(0.0), SegIdx(2)));

        let order: Vec<_> = queue
            .iter()
            .map(|ev| (ev.segments[0], ev.kind))
            .collect();
        assert_eq!(
            order,
            vec![
                (SegIdx(2), EventKind::Start),
                (SegIdx(1), EventKind::Start),
                (SegIdx(0), EventKind::End),
                (SegIdx(0), EventKind::Start),
            ]
        );
    }

    #[test]
    fn remove_stale_intersection() {
        let mut queue = EventQueue::default();
        queue.insert(Event::end(pt(5.0), SegIdx(0)));
        queue.insert(Event::intersection(pt(2.0), SegIdx(0), SegIdx(1)));
        queue.insert(Event::intersection(pt(3.0), SegIdx(1), SegIdx(2)));
        assert_eq!(queue.len(), 3);

        assert!(queue.contains_intersection_between(SegIdx(1), SegIdx(0)));
        assert!(!queue.remove_intersection_between(SegIdx(0), SegIdx(2)));
        assert!(queue.remove_intersection_between(SegIdx(1), SegIdx(0)));
        assert!(!queue.contains_intersection_between(SegIdx(0), SegIdx(1)));
        assert_eq!(queue.len(), 2);

        let ev = queue.poll().unwrap();
        assert!(ev.is_intersection_between(SegIdx(2), SegIdx(1)));
        assert!(!queue.contains_intersection_between(SegIdx(1), SegIdx(2)));
        assert_eq!(queue.poll().unwrap().kind, EventKind::End);
        assert_eq!(queue.poll(), None);
    }
}
