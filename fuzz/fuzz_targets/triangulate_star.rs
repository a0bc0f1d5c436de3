#![no_main]

use arbitrary::Unstructured;
use libfuzzer_sys::fuzz_target;
use polysweep::{triangulate, TriangulationOptions};

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(polygon) = polysweep::arbitrary::star_shaped_polygon(&mut u) else {
        return;
    };

    let t = triangulate(&polygon, TriangulationOptions::default()).unwrap();
    assert_eq!(t.triangles.len(), polygon.len() - 2);

    let area: f64 = t
        .triangle_points()
        .map(|[a, b, c]| (b - a).cross(c - a).abs() / 2.0)
        .sum();
    let expected = t.area.unwrap();
    assert!((area - expected).abs() <= 1e-9 * expected.max(1.0));
});
