//! Pure snapshot of what the grid should look like.
//!
//! The presentation layer samples [`RenderModel`] every frame and maps each
//! [`CellColor`] to its own palette; nothing here draws.

use crate::activation::ActivationPolicy;
use crate::constants::{ROWS, STEPS};
use crate::grid::DragSelection;
use crate::note::NoteSet;
use crate::pitch::row_for_name;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellColor {
    #[default]
    Empty,
    /// First step of a note.
    Note,
    /// Later step covered by a longer note.
    Sustain,
    /// Inside an open drag selection.
    Pending,
    /// Note cell sounding at the current step.
    Playing,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderModel {
    pub playhead_percent: f64,
    /// Step under the playhead while playing.
    pub current_step: Option<usize>,
    cells: Vec<CellColor>,
}

impl Default for RenderModel {
    fn default() -> Self {
        Self {
            playhead_percent: 0.0,
            current_step: None,
            cells: vec![CellColor::Empty; ROWS * STEPS],
        }
    }
}

impl RenderModel {
    /// Build the snapshot. `playing` carries the current step and the policy
    /// used to decide which note cells light up.
    pub fn build(
        notes: &NoteSet,
        selection: Option<DragSelection>,
        playhead_percent: f64,
        playing: Option<(usize, ActivationPolicy)>,
    ) -> Self {
        let mut model = RenderModel {
            playhead_percent,
            current_step: playing.map(|(step, _)| step),
            ..Default::default()
        };
        for note in notes {
            let Some(row) = row_for_name(&note.name) else {
                continue;
            };
            let end = note.end_step().min(STEPS);
            for col in note.start_step..end {
                let color = match playing {
                    Some((step, policy)) if step == col && policy.is_active(note, step) => {
                        CellColor::Playing
                    }
                    _ if col == note.start_step => CellColor::Note,
                    _ => CellColor::Sustain,
                };
                model.cells[row * STEPS + col] = color;
            }
        }
        if let Some(sel) = selection {
            for col in sel.start_col..=sel.end_col.min(STEPS - 1) {
                if sel.row < ROWS {
                    model.cells[sel.row * STEPS + col] = CellColor::Pending;
                }
            }
        }
        model
    }

    /// Colour of a cell; off-grid coordinates read as empty.
    pub fn cell_color(&self, row: usize, col: usize) -> CellColor {
        if row >= ROWS || col >= STEPS {
            return CellColor::Empty;
        }
        self.cells[row * STEPS + col]
    }
}
