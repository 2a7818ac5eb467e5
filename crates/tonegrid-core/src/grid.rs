//! Pointer gestures on the pitch × step grid.
//!
//! In trigger mode a click toggles a one-step note. In sustain mode a press
//! opens a [`DragSelection`], moving right extends it, and release commits
//! one note spanning the selection. A release without any extension is a
//! plain click and toggles a one-step note, so a click on a note's start
//! cell removes it in either mode.

use crate::activation::ActivationPolicy;
use crate::constants::{ROWS, STEPS};
use crate::note::{Note, NoteSet};
use crate::pitch::row_pitch;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// Pointer event already mapped to a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub row: usize,
    pub col: usize,
}

impl PointerEvent {
    pub fn down(row: usize, col: usize) -> Self {
        Self {
            kind: PointerKind::Down,
            row,
            col,
        }
    }

    pub fn moved(row: usize, col: usize) -> Self {
        Self {
            kind: PointerKind::Move,
            row,
            col,
        }
    }

    pub fn up(row: usize, col: usize) -> Self {
        Self {
            kind: PointerKind::Up,
            row,
            col,
        }
    }
}

/// In-progress drag span on one row. Only exists while a button is held.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragSelection {
    pub row: usize,
    pub start_col: usize,
    pub end_col: usize,
}

impl DragSelection {
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row == self.row && col >= self.start_col && col <= self.end_col
    }

    pub fn duration_steps(&self) -> usize {
        self.end_col - self.start_col + 1
    }
}

/// What an event did to the note set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridChange {
    None,
    /// Drag selection opened or extended; the note set is unchanged.
    Selecting,
    /// A one-step note was added (`true`) or removed (`false`).
    Toggled(bool),
    /// A drag committed a note, displacing this many older notes.
    Committed { displaced: usize },
}

impl GridChange {
    pub fn notes_changed(self) -> bool {
        matches!(self, GridChange::Toggled(_) | GridChange::Committed { .. })
    }
}

#[derive(Clone, Debug, Default)]
pub struct GridController {
    policy: ActivationPolicy,
    selection: Option<DragSelection>,
}

impl GridController {
    pub fn new(policy: ActivationPolicy) -> Self {
        Self {
            policy,
            selection: None,
        }
    }

    pub fn policy(&self) -> ActivationPolicy {
        self.policy
    }

    /// Switching modes drops any open selection.
    pub fn set_policy(&mut self, policy: ActivationPolicy) {
        self.policy = policy;
        self.selection = None;
    }

    pub fn selection(&self) -> Option<DragSelection> {
        self.selection
    }

    /// Drop the open selection without committing (pointer left the grid).
    pub fn cancel(&mut self) {
        self.selection = None;
    }

    pub fn handle(&mut self, ev: PointerEvent, notes: &mut NoteSet) -> GridChange {
        if ev.kind == PointerKind::Down && (ev.row >= ROWS || ev.col >= STEPS) {
            return GridChange::None;
        }
        // An open selection keeps its row; only the column follows the pointer.
        let col = ev.col.min(STEPS - 1);
        match (self.policy, ev.kind) {
            (ActivationPolicy::Trigger, PointerKind::Down) => toggle_unit(notes, ev.row, ev.col),
            (ActivationPolicy::Trigger, _) => GridChange::None,
            (ActivationPolicy::Sustain, PointerKind::Down) => {
                self.selection = Some(DragSelection {
                    row: ev.row,
                    start_col: ev.col,
                    end_col: ev.col,
                });
                GridChange::Selecting
            }
            (ActivationPolicy::Sustain, PointerKind::Move) => match self.selection.as_mut() {
                Some(sel) if col > sel.end_col => {
                    sel.end_col = col;
                    GridChange::Selecting
                }
                _ => GridChange::None,
            },
            (ActivationPolicy::Sustain, PointerKind::Up) => match self.selection.take() {
                Some(sel) => commit(sel, notes),
                None => GridChange::None,
            },
        }
    }
}

fn toggle_unit(notes: &mut NoteSet, row: usize, col: usize) -> GridChange {
    let pitch = row_pitch(row);
    let note = Note::new(pitch.name, pitch.frequency, col);
    let existed = notes.contains(&note);
    if notes.toggle(note) {
        GridChange::Toggled(!existed)
    } else {
        GridChange::None
    }
}

fn commit(sel: DragSelection, notes: &mut NoteSet) -> GridChange {
    if sel.end_col < sel.start_col {
        return GridChange::None;
    }
    if sel.end_col == sel.start_col {
        return toggle_unit(notes, sel.row, sel.start_col);
    }
    let pitch = row_pitch(sel.row);
    let note = Note::new(pitch.name, pitch.frequency, sel.start_col)
        .with_duration(sel.duration_steps());
    log::debug!(
        "[grid] commit {}@{} for {} steps",
        note.name,
        note.start_step,
        note.duration_steps
    );
    GridChange::Committed {
        displaced: notes.replace(note),
    }
}
