#![no_main]

use libfuzzer_sys::fuzz_target;
use polysweep::{triangulate, Error, Point, TriangulationOptions};

// Arbitrary (probably invalid) polygons: triangulation should either fail
// cleanly or produce the right number of triangles.
fuzz_target!(|coords: Vec<(i8, i8)>| {
    let polygon: Vec<Point> = coords
        .iter()
        .map(|&(x, y)| Point::new(x.into(), y.into()))
        .collect();

    match triangulate(&polygon, TriangulationOptions::default()) {
        Ok(t) => {
            assert_eq!(t.triangles.len(), polygon.len() - 2);
            assert!(t.indices().iter().all(|&i| i < polygon.len()));
        }
        Err(Error::TriangulationStalled { remaining }) => {
            assert!(remaining > 3);
        }
        Err(_) => {}
    }
});
