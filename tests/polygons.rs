use assert_matches::assert_matches;

use polysweep::{
    compute_polygon_area, find_intersections, has_collinear_edges, is_simple_polygon,
    sweep::{EventKind, Sweeper},
    triangulate, Error, Point, Segment, Segments, TriangulationOptions, WindingOrder,
};

fn pts(ps: &[(f64, f64)]) -> Vec<Point> {
    ps.iter().map(|&p| p.into()).collect()
}

fn square() -> Vec<Point> {
    pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
}

#[test]
fn intersections() {
    let disjoint = [
        Segment::new((0.0, 0.0), (1.0, 0.0)),
        Segment::new((0.0, 1.0), (1.0, 2.0)),
        Segment::new((2.0, 0.0), (3.0, 5.0)),
    ];
    assert!(find_intersections(&disjoint).is_empty());

    let crossing = [
        Segment::new((0.0, 0.0), (4.0, 2.0)),
        Segment::new((0.0, 2.0), (4.0, 0.0)),
    ];
    assert_eq!(find_intersections(&crossing), vec![Point::new(2.0, 1.0)]);
}

#[test]
fn polygon_predicates() {
    assert!(is_simple_polygon(&square()));
    assert!(!is_simple_polygon(&pts(&[
        (0.0, 0.0),
        (1.0, 1.0),
        (1.0, 0.0),
        (0.0, 1.0)
    ])));

    assert!(has_collinear_edges(&pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)])));
    assert!(!has_collinear_edges(&pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)])));

    let (area, winding) = compute_polygon_area(&square());
    assert_eq!(area, 1.0);
    let reversed: Vec<_> = square().into_iter().rev().collect();
    assert_eq!(compute_polygon_area(&reversed), (1.0, winding.reversed()));
    assert_eq!(
        compute_polygon_area(&pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)])).1,
        WindingOrder::Invalid
    );
}

#[test]
fn triangulation_boundaries() {
    let tri = pts(&[(0.0, 0.0), (1.0, 3.0), (2.0, 0.0)]);
    let t = triangulate(&tri, TriangulationOptions::default()).unwrap();
    assert_eq!(t.indices(), vec![0, 1, 2]);

    let pentagon = pts(&[(0.0, 0.0), (2.0, 0.0), (3.0, 2.0), (1.0, 3.0), (-1.0, 2.0)]);
    let opts = TriangulationOptions {
        max_vertices: 4,
        ..Default::default()
    };
    assert_matches!(
        triangulate(&pentagon, opts),
        Err(Error::ExceededVertices { max: 4, actual: 5 })
    );

    let t = triangulate(&pentagon, TriangulationOptions::default()).unwrap();
    assert_eq!(t.indices().len(), 9);
    assert_eq!(t.area, Some(compute_polygon_area(&pentagon).0));
}

#[test]
fn errors_are_std_errors() {
    let err: Box<dyn std::error::Error> = Box::new(Error::CollinearEdges);
    assert_eq!(err.to_string(), "the vertex list contains collinear edges");
}

#[test]
fn step_by_step() {
    let segs: Segments = [
        Segment::new((0.0, 0.0), (2.0, 2.0)),
        Segment::new((0.0, 2.0), (2.0, 0.0)),
    ]
    .into_iter()
    .collect();

    let mut sweeper = Sweeper::new(&segs);
    let mut kinds = Vec::new();
    while let Some(ev) = sweeper.step() {
        kinds.push(ev.kind);
    }
    assert_eq!(
        kinds,
        vec![
            EventKind::Start,
            EventKind::Start,
            EventKind::Intersection,
            EventKind::End,
            EventKind::End,
        ]
    );
    assert_eq!(sweeper.intersections().len(), 1);
}

#[test]
fn touching_a_vertical_edge_is_rejected_from_any_start() {
    let touching = pts(&[
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 4.0),
        (0.0, 4.0),
        (0.0, 3.0),
        (4.0, 2.0),
        (0.0, 1.0),
    ]);
    for i in 0..touching.len() {
        let mut rotated = touching.clone();
        rotated.rotate_left(i);
        assert_matches!(
            triangulate(&rotated, TriangulationOptions::default()),
            Err(Error::NotSimplePolygon)
        );
    }
}
