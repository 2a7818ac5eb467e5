use crate::note::{clamp_gain, Note, WaveShape};

/// One user-edited partial of the generated chord.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OvertoneRow {
    pub id: u32,
    pub wave_shape: WaveShape,
    pub gain_level: f32,
    pub overtone_ratio: f64,
}

/// Overtone rows for generator mode.
///
/// Rows sound together and continuously; there is no timeline, so every
/// composed note sits at step 0 with unit duration.
#[derive(Clone, Debug, Default)]
pub struct Composer {
    rows: Vec<OvertoneRow>,
    next_id: u32,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[OvertoneRow] {
        &self.rows
    }

    /// Append a row seeded from the existing ones: next integer ratio above
    /// the last row, the first row's wave, and its gain divided by the new
    /// row count.
    pub fn add_row(&mut self) -> OvertoneRow {
        let id = self.next_id;
        self.next_id += 1;
        let row = match (self.rows.first(), self.rows.last()) {
            (Some(first), Some(last)) => OvertoneRow {
                id,
                wave_shape: first.wave_shape,
                gain_level: clamp_gain(first.gain_level / (self.rows.len() + 1) as f32),
                overtone_ratio: last.overtone_ratio + 1.0,
            },
            _ => OvertoneRow {
                id,
                wave_shape: WaveShape::Sine,
                gain_level: 1.0,
                overtone_ratio: 1.0,
            },
        };
        self.rows.push(row);
        row
    }

    /// Replace the row carrying the same id. Returns false if none did.
    pub fn edit_row(&mut self, row: OvertoneRow) -> bool {
        match self.rows.iter_mut().find(|r| r.id == row.id) {
            Some(slot) => {
                *slot = OvertoneRow {
                    gain_level: clamp_gain(row.gain_level),
                    ..row
                };
                true
            }
            None => false,
        }
    }

    pub fn delete_row(&mut self, id: u32) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.id != id);
        self.rows.len() != before
    }

    pub fn notes(&self, base_frequency_hz: f64) -> Vec<Note> {
        compose(&self.rows, base_frequency_hz)
    }
}

/// Turn overtone rows into simultaneous notes at `base * ratio`.
pub fn compose(rows: &[OvertoneRow], base_frequency_hz: f64) -> Vec<Note> {
    rows.iter()
        .filter(|r| r.overtone_ratio.is_finite() && r.overtone_ratio > 0.0)
        .map(|r| {
            Note::new(
                format!("Overtone-{}", r.overtone_ratio),
                base_frequency_hz * r.overtone_ratio,
                0,
            )
            .with_gain(r.gain_level)
            .with_wave(r.wave_shape)
        })
        .collect()
}
