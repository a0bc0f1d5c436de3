//! Utilities for fuzz and/or property testing using `arbitrary`.

use std::f64::consts::TAU;

use arbitrary::Unstructured;

use crate::{Point, Segment, Segments};

/// Generate an arbitrary float in some range.
pub fn float_in_range(
    start: f64,
    end: f64,
    u: &mut Unstructured<'_>,
) -> Result<f64, arbitrary::Error> {
    let num: u32 = u.arbitrary()?;
    let t = num as f64 / u32::MAX as f64;
    Ok((1.0 - t) * start + t * end)
}

fn point(u: &mut Unstructured<'_>) -> Result<Point, arbitrary::Error> {
    Ok(Point::new(
        float_in_range(-1e3, 1e3, u)?,
        float_in_range(-1e3, 1e3, u)?,
    ))
}

/// Generate a polygon that's star-shaped around the origin, with between 3 and 40 vertices.
///
/// The vertices go counter-clockwise, at angles that are roughly evenly spaced
/// and radii between 1 and 10. The result is always a simple polygon.
pub fn star_shaped_polygon(u: &mut Unstructured<'_>) -> Result<Vec<Point>, arbitrary::Error> {
    let n: usize = u.int_in_range(3..=40)?;
    (0..n)
        .map(|i| {
            let jitter = float_in_range(0.0, 0.5, u)?;
            let r = float_in_range(1.0, 10.0, u)?;
            let theta = (i as f64 + jitter) * TAU / n as f64;
            Ok(Point::new(r * theta.cos(), r * theta.sin()))
        })
        .collect()
}

/// Generate a collection of arbitrary segments.
///
/// Some segments are given a chance to start where the previous one ended.
pub fn segments(u: &mut Unstructured<'_>) -> Result<Segments, arbitrary::Error> {
    let len: usize = u.int_in_range(0..=32)?;
    let mut ret = Segments::default();
    let mut prev: Option<Point> = None;
    for _ in 0..len {
        let connect: bool = u.arbitrary()?;
        let start = match prev {
            Some(p) if connect => p,
            _ => point(u)?,
        };
        let end = point(u)?;
        ret.add_segment(Segment::new(start, end));
        prev = Some(end);
    }
    Ok(ret)
}
