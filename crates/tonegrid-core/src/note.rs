//! Note values and the note collection edited by the grid.
//!
//! Notes are immutable once built. Every edit goes through [`NoteSet`], which
//! replaces whole records keyed by `(name, start_step)` and keeps at most one
//! note per key with no overlapping spans at the same pitch.

use crate::constants::{GAIN_FLOOR, STEPS};
use serde::{Deserialize, Serialize};

/// Oscillator shape used when a note sounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveShape {
    #[default]
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// A note event on the cyclic timeline.
///
/// Fields:
/// - `name`: pitch name, e.g. `"C3"` (or `"Overtone-2"` in generator mode)
/// - `frequency`: pitch in Hertz, always positive
/// - `start_step`: first step the note occupies (0..STEPS)
/// - `duration_steps`: number of steps the note stays active, at least 1
/// - `gain_level`: peak gain in (0, 1]
/// - `wave_shape`: oscillator type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub name: String,
    pub frequency: f64,
    pub start_step: usize,
    #[serde(default = "default_duration")]
    pub duration_steps: usize,
    #[serde(default = "default_gain")]
    pub gain_level: f32,
    #[serde(default)]
    pub wave_shape: WaveShape,
}

fn default_duration() -> usize {
    1
}

fn default_gain() -> f32 {
    1.0
}

impl Note {
    /// Unit-length sine note at full gain.
    pub fn new(name: impl Into<String>, frequency: f64, start_step: usize) -> Self {
        Self {
            name: name.into(),
            frequency,
            start_step,
            duration_steps: 1,
            gain_level: 1.0,
            wave_shape: WaveShape::Sine,
        }
    }

    pub fn with_duration(mut self, steps: usize) -> Self {
        self.duration_steps = steps.max(1);
        self
    }

    pub fn with_gain(mut self, gain: f32) -> Self {
        self.gain_level = clamp_gain(gain);
        self
    }

    pub fn with_wave(mut self, wave: WaveShape) -> Self {
        self.wave_shape = wave;
        self
    }

    /// Identity on the timeline: same rounded frequency, name and start step.
    pub fn equals(&self, other: &Note) -> bool {
        self.same_pitch(other) && self.start_step == other.start_step
    }

    /// Generator-mode equality: start step is ignored.
    pub fn same_pitch(&self, other: &Note) -> bool {
        self.frequency.floor() == other.frequency.floor() && self.name == other.name
    }

    /// Exclusive end step of the occupied span.
    pub fn end_step(&self) -> usize {
        self.start_step.saturating_add(self.duration_steps)
    }

    pub fn covers(&self, step: usize) -> bool {
        step >= self.start_step && step < self.end_step()
    }

    pub fn overlaps(&self, other: &Note) -> bool {
        self.start_step < other.end_step() && other.start_step < self.end_step()
    }

    /// Check the data-model constraints a persisted or composed note must meet.
    pub fn is_valid(&self) -> bool {
        self.frequency.is_finite()
            && self.frequency > 0.0
            && self.start_step < STEPS
            && self.duration_steps >= 1
            && self.duration_steps <= STEPS - self.start_step
            && self.gain_level.is_finite()
            && self.gain_level > 0.0
            && self.gain_level <= 1.0
    }
}

pub fn clamp_gain(gain: f32) -> f32 {
    if gain.is_finite() {
        gain.clamp(GAIN_FLOOR, 1.0)
    } else {
        1.0
    }
}

/// Note collection keyed by `(name, start_step)`, kept ordered by start step.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NoteSet {
    notes: Vec<Note>,
}

impl NoteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn as_slice(&self) -> &[Note] {
        &self.notes
    }

    pub fn contains(&self, candidate: &Note) -> bool {
        self.notes.iter().any(|n| n.equals(candidate))
    }

    /// Note at `name` whose span covers `step`, if any.
    pub fn note_at(&self, name: &str, step: usize) -> Option<&Note> {
        self.notes.iter().find(|n| n.name == name && n.covers(step))
    }

    /// Remove an equal note if present, otherwise insert the candidate.
    ///
    /// A candidate that would overlap a different note at the same pitch is
    /// rejected and the set is left unchanged. Returns whether the set changed.
    pub fn toggle(&mut self, candidate: Note) -> bool {
        if let Some(idx) = self.notes.iter().position(|n| n.equals(&candidate)) {
            self.notes.remove(idx);
            return true;
        }
        if self.collides(&candidate) {
            log::debug!(
                "[notes] rejected {}@{}: overlaps an existing note",
                candidate.name,
                candidate.start_step
            );
            return false;
        }
        self.insert_sorted(candidate);
        true
    }

    /// Insert the candidate after removing every same-pitch note it overlaps.
    ///
    /// Returns how many notes were displaced.
    pub fn replace(&mut self, candidate: Note) -> usize {
        let before = self.notes.len();
        self.notes
            .retain(|n| !(n.same_pitch(&candidate) && n.overlaps(&candidate)));
        let displaced = before - self.notes.len();
        self.insert_sorted(candidate);
        displaced
    }

    /// Remove the note with the given identity. Returns the removed note.
    pub fn remove(&mut self, key: &Note) -> Option<Note> {
        let idx = self.notes.iter().position(|n| n.equals(key))?;
        Some(self.notes.remove(idx))
    }

    pub fn clear(&mut self) {
        self.notes.clear();
    }

    // Kept ordered by (start_step, name).
    fn insert_sorted(&mut self, note: Note) {
        let idx = self
            .notes
            .partition_point(|n| (n.start_step, &n.name) <= (note.start_step, &note.name));
        self.notes.insert(idx, note);
    }

    fn collides(&self, candidate: &Note) -> bool {
        self.notes
            .iter()
            .any(|n| n.same_pitch(candidate) && n.overlaps(candidate))
    }
}

impl FromIterator<Note> for NoteSet {
    /// Builds a set through [`NoteSet::toggle`], so colliding notes are dropped.
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Self {
        let mut set = NoteSet::new();
        for note in iter {
            if !set.contains(&note) {
                set.toggle(note);
            }
        }
        set
    }
}

impl<'a> IntoIterator for &'a NoteSet {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}
