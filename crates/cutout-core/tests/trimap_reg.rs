//! Trimap regression test
//!
//! Covers trimap seeding from a bounding box, binary mask collapse,
//! and scribble rasterization as hard constraints.
//!
//! Run with:
//! ```
//! cargo test -p cutout-core --test trimap_reg
//! ```

use cutout_core::{Region, Scribble, ScribbleLabel, Segment, Trimap, TrimapLabel};
use cutout_test::RegParams;

#[test]
fn trimap_reg() {
    let mut rp = RegParams::new("trimap");

    // Seeding: inside the box probable foreground, outside definite bg
    let region = Region::new(20, 20, 60, 60);
    let trimap = Trimap::from_region(100, 100, &region).expect("seeding failed");
    let counts = trimap.label_counts();
    rp.compare_values(3600.0, counts[TrimapLabel::ProbableForeground as usize] as f64, 0.0);
    rp.compare_values(6400.0, counts[TrimapLabel::Background as usize] as f64, 0.0);
    rp.compare_values(0.0, counts[TrimapLabel::Foreground as usize] as f64, 0.0);

    // Collapse: probable foreground counts as foreground
    let mask = trimap.to_binary_mask();
    rp.compare_values(3600.0, mask.count_foreground() as f64, 0.0);

    // A force-background scribble across probable-foreground cells
    // leaves definite background immediately, before any segmentation.
    let mut corrected = trimap.clone();
    let mut scribble = Scribble::new(ScribbleLabel::ForceBackground, 2);
    scribble.push_segment(Segment::new(30, 50, 69, 50));
    corrected.rasterize(&scribble);

    let all_background = (30..=69)
        .all(|x| corrected.get(x, 50) == Some(TrimapLabel::Background));
    rp.compare_values(1.0, if all_background { 1.0 } else { 0.0 }, 0.0);

    // The collapse reflects the constraint as well.
    let corrected_mask = corrected.to_binary_mask();
    let stroke_cleared = (30..=69).all(|x| corrected_mask.get(x, 50) == Some(0));
    rp.compare_values(1.0, if stroke_cleared { 1.0 } else { 0.0 }, 0.0);

    // Untouched cells keep their labels.
    let untouched = corrected.get(50, 30) == Some(TrimapLabel::ProbableForeground);
    rp.compare_values(1.0, if untouched { 1.0 } else { 0.0 }, 0.0);

    // An opposite scribble over the same cells wins because it is newer.
    let mut fg = Scribble::new(ScribbleLabel::ForceForeground, 2);
    fg.push_segment(Segment::new(30, 50, 69, 50));
    corrected.rasterize(&fg);
    let overridden = (30..=69)
        .all(|x| corrected.get(x, 50) == Some(TrimapLabel::Foreground));
    rp.compare_values(1.0, if overridden { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "trimap regression test failed");
}
