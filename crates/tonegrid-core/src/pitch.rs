use crate::constants::{A4_HZ, DEGREES_PER_OCTAVE, GRID_OCTAVE, ROWS};

const LETTERS: [&str; DEGREES_PER_OCTAVE] = ["C", "D", "E", "F", "G", "A", "B"];

/// Pitch assigned to a grid row.
#[derive(Clone, Debug, PartialEq)]
pub struct RowPitch {
    pub name: String,
    pub frequency: f64,
}

/// Map a grid row to its pitch name and frequency.
///
/// Rows walk the seven letter names upward from octave 2. Frequencies are
/// spaced in seven equal steps per octave anchored on A4, so each row is a
/// fixed ratio of `2^(1/7)` above the previous one.
pub fn row_pitch(row: usize) -> RowPitch {
    let octave = GRID_OCTAVE + (row / DEGREES_PER_OCTAVE) as i32;
    let name = format!("{}{}", LETTERS[row % DEGREES_PER_OCTAVE], octave);
    let exponent = (GRID_OCTAVE - 4) as f64 + (row as f64 - 1.0) / DEGREES_PER_OCTAVE as f64;
    RowPitch {
        name,
        frequency: A4_HZ * 2.0_f64.powf(exponent),
    }
}

/// Row whose pitch carries `name`, if it is on the grid.
pub fn row_for_name(name: &str) -> Option<usize> {
    (0..ROWS).find(|&row| row_pitch(row).name == name)
}
