// Row to pitch mapping for the 32-row grid.

use tonegrid_core::*;

#[test]
fn names_walk_letters_and_octaves() {
    assert_eq!(row_pitch(0).name, "C2");
    assert_eq!(row_pitch(5).name, "A2");
    assert_eq!(row_pitch(7).name, "C3");
    assert_eq!(row_pitch(31).name, "F6");
}

#[test]
fn frequencies_are_anchored_on_a440() {
    assert!((row_pitch(1).frequency - 110.0).abs() < 1e-9);
    assert!((row_pitch(8).frequency - 220.0).abs() < 1e-9);
    assert!((row_pitch(15).frequency - 440.0).abs() < 1e-9);
}

#[test]
fn frequencies_rise_by_a_constant_ratio() {
    let ratio = 2.0_f64.powf(1.0 / 7.0);
    for row in 1..ROWS {
        let r = row_pitch(row).frequency / row_pitch(row - 1).frequency;
        assert!(
            (r - ratio).abs() < 1e-9,
            "row {row}: ratio {r} != {ratio}"
        );
    }
}

#[test]
fn names_are_unique_and_reversible() {
    for row in 0..ROWS {
        assert_eq!(row_for_name(&row_pitch(row).name), Some(row));
    }
    assert_eq!(row_for_name("H9"), None);
}
