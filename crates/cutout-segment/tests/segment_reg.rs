//! Segmentation regression test
//!
//! Runs the engine with the built-in mixture minimizer over the
//! standard two-tone scene and checks classification accuracy, plus
//! the region preconditions: degenerate boxes never produce a trimap.
//!
//! Run with:
//! ```
//! cargo test -p cutout-segment --test segment_reg
//! ```

use cutout_core::Region;
use cutout_segment::{
    MixtureMinimizer, SegmentError, SegmentationEngine, DEFAULT_ITERATIONS,
};
use cutout_test::{white_square_scene, RegParams};

#[test]
fn segment_reg() {
    let mut rp = RegParams::new("segment");

    let (image, square, selection) = white_square_scene();
    let mut engine = SegmentationEngine::new(MixtureMinimizer::default());

    // Degenerate boxes fail before any trimap exists.
    let empty = engine
        .initialize_from_region(&image, Region::new(20, 20, 0, 60))
        .is_err();
    rp.compare_values(1.0, bool_value(empty), 0.0);

    let outside = matches!(
        engine.initialize_from_region(&image, Region::new(200, 200, 10, 10)),
        Err(SegmentError::RegionOutsideImage { .. })
    );
    rp.compare_values(1.0, bool_value(outside), 0.0);

    // One rectangle-initialized pass separates the square.
    let trimap = engine
        .initialize_from_region(&image, selection)
        .expect("seeding failed");
    let segmented = engine
        .segment(&image, &trimap, DEFAULT_ITERATIONS)
        .expect("segmentation failed");
    let mask = segmented.to_binary_mask();

    let mut inside_total = 0usize;
    let mut inside_fg = 0usize;
    let mut outside_total = 0usize;
    let mut outside_bg = 0usize;
    for y in 0..image.height() {
        for x in 0..image.width() {
            let fg = mask.get(x, y).unwrap() != 0;
            if square.contains(x, y) {
                inside_total += 1;
                if fg {
                    inside_fg += 1;
                }
            } else {
                outside_total += 1;
                if !fg {
                    outside_bg += 1;
                }
            }
        }
    }

    let inside_accuracy = inside_fg as f64 / inside_total as f64;
    let outside_accuracy = outside_bg as f64 / outside_total as f64;
    eprintln!("inside accuracy: {inside_accuracy:.3}, outside: {outside_accuracy:.3}");
    rp.compare_values(1.0, inside_accuracy, 0.05);
    rp.compare_values(1.0, outside_accuracy, 0.05);

    assert!(rp.cleanup(), "segment regression test failed");
}

fn bool_value(ok: bool) -> f64 {
    if ok { 1.0 } else { 0.0 }
}
