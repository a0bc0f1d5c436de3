#![no_main]

use arbitrary::Unstructured;
use libfuzzer_sys::fuzz_target;
use polysweep::sweep::Sweeper;

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(segs) = polysweep::arbitrary::segments(&mut u) else {
        return;
    };

    let mut sweeper = Sweeper::new(&segs);
    while sweeper.step().is_some() {
        // Every segment on the sweep line has started and not yet ended.
        for seg in sweeper.status().iter() {
            let s = &segs[seg];
            assert!(s.first().x <= sweeper.x() && sweeper.x() <= s.second().x);
        }
    }
    assert!(sweeper.status().is_empty());

    // Every reported intersection is (approximately) on both of its segments.
    for int in sweeper.intersections() {
        for seg in [int.segments.0, int.segments.1] {
            let line = segs[seg].to_kurbo();
            let nearest = kurbo::ParamCurveNearest::nearest(&line, int.point, 1e-9);
            assert!(nearest.distance_sq <= 1e-6, "{int:?} not on {seg:?}");
        }
    }
});
