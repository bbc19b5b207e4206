// Example: the snap grid math on its own, no viewport involved.
use snaplist::{Picker, PickerOptions, ScrollMetrics, SnapGrid};

fn main() {
    let grid = SnapGrid::new(50.0);
    for offset in [-30.0f32, 0.0, 25.0, 137.0, 333.0] {
        let metrics = ScrollMetrics::new(offset, 10.0, 480.0);
        match grid.snap_target(metrics) {
            Some(target) => println!(
                "offset={offset:>7.1} -> index={} aligned={}",
                target.index, target.offset_y
            ),
            None => println!("offset={offset:>7.1} -> skipped (degenerate geometry)"),
        }
    }

    let mut picker = Picker::new(PickerOptions::new(50.0).with_count(7));
    picker.set_metrics(ScrollMetrics::new(0.0, 10.0, 480.0));
    println!(
        "7 rows: middle={:?} center_target={:?}",
        picker.middle_index(),
        picker.center_target()
    );
}
