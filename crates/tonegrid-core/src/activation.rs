use crate::note::Note;
use smallvec::SmallVec;

/// How a note's timeline position turns into sound.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActivationPolicy {
    /// Sounds only on its start step, ignoring duration.
    Trigger,
    /// Sounds for every step in `[start, start + duration)`.
    #[default]
    Sustain,
}

impl ActivationPolicy {
    pub fn is_active(self, note: &Note, step: usize) -> bool {
        match self {
            ActivationPolicy::Trigger => note.start_step == step,
            ActivationPolicy::Sustain => note.covers(step),
        }
    }
}

/// Active notes are bounded by the pitch rows, so they rarely spill.
pub type ActiveNotes<'a> = SmallVec<[&'a Note; 8]>;

/// Notes sounding at `step` under `policy`, in note-set order.
pub fn active_notes<'a, I>(notes: I, step: usize, policy: ActivationPolicy) -> ActiveNotes<'a>
where
    I: IntoIterator<Item = &'a Note>,
{
    notes
        .into_iter()
        .filter(|n| policy.is_active(n, step))
        .collect()
}
