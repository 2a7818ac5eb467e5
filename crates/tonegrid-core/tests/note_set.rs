// Note identity, toggling and replace-in-collection rules.

use tonegrid_core::*;

fn note(row: usize, start: usize) -> Note {
    let p = row_pitch(row);
    Note::new(p.name, p.frequency, start)
}

#[test]
fn equality_ignores_duration_and_gain() {
    let a = note(3, 4);
    let b = note(3, 4).with_duration(5).with_gain(0.2);
    assert!(a.equals(&b));
    assert!(!a.equals(&note(3, 5)));
    assert!(!a.equals(&note(4, 4)));
}

#[test]
fn equality_rounds_frequency_down() {
    let a = Note::new("A3", 220.2, 0);
    let b = Note::new("A3", 220.9, 0);
    let c = Note::new("A3", 221.0, 0);
    assert!(a.equals(&b));
    assert!(!a.equals(&c));
}

#[test]
fn generator_equality_ignores_start_step() {
    let a = Note::new("Overtone-2", 440.0, 0);
    let b = Note::new("Overtone-2", 440.0, 7);
    assert!(a.same_pitch(&b));
    assert!(!a.equals(&b));
}

#[test]
fn toggle_twice_round_trips() {
    let mut set: NoteSet = [note(0, 0), note(5, 3), note(9, 12)].into_iter().collect();
    let original = set.clone();

    for candidate in [note(5, 3), note(1, 1), note(0, 0), note(9, 12)] {
        assert!(set.toggle(candidate.clone()));
        assert!(set.toggle(candidate));
        assert_eq!(set, original);
    }
}

#[test]
fn toggle_adds_then_removes() {
    let mut set = NoteSet::new();
    assert!(set.toggle(note(2, 6)));
    assert_eq!(set.len(), 1);
    assert!(set.contains(&note(2, 6)));
    assert!(set.toggle(note(2, 6)));
    assert!(set.is_empty());
}

#[test]
fn toggle_rejects_overlap_at_same_pitch() {
    let mut set = NoteSet::new();
    set.replace(note(4, 2).with_duration(4));
    let before = set.clone();

    assert!(!set.toggle(note(4, 3)));
    assert_eq!(set, before);
    // Another pitch in the same columns is fine.
    assert!(set.toggle(note(5, 3)));
    assert_eq!(set.len(), 2);
}

#[test]
fn replace_displaces_overlapping_same_pitch_notes() {
    let mut set = NoteSet::new();
    set.toggle(note(10, 2));
    set.toggle(note(10, 4));
    set.toggle(note(10, 9));
    set.toggle(note(11, 3));

    let displaced = set.replace(note(10, 2).with_duration(4));
    assert_eq!(displaced, 2);
    assert_eq!(set.len(), 3);
    let long = set.note_at(&row_pitch(10).name, 5).expect("covering note");
    assert_eq!(long.start_step, 2);
    assert_eq!(long.duration_steps, 4);
    assert!(set.contains(&note(10, 9)));
    assert!(set.contains(&note(11, 3)));
}

#[test]
fn at_most_one_note_per_key() {
    let mut set = NoteSet::new();
    set.replace(note(7, 0).with_duration(2));
    set.replace(note(7, 0).with_duration(6));
    assert_eq!(set.len(), 1);
    assert_eq!(set.iter().next().map(|n| n.duration_steps), Some(6));
}

#[test]
fn remove_and_clear() {
    let mut set: NoteSet = [note(1, 1), note(2, 2)].into_iter().collect();
    let removed = set.remove(&note(1, 1)).expect("present");
    assert_eq!(removed.start_step, 1);
    assert!(set.remove(&note(1, 1)).is_none());
    set.clear();
    assert!(set.is_empty());
}

#[test]
fn builders_clamp_inputs() {
    let n = note(0, 0).with_duration(0).with_gain(3.0);
    assert_eq!(n.duration_steps, 1);
    assert_eq!(n.gain_level, 1.0);
    let quiet = note(0, 0).with_gain(0.0);
    assert!(quiet.gain_level > 0.0);
    assert!(quiet.is_valid());
}

#[test]
fn validity_checks_the_timeline() {
    assert!(note(0, 15).is_valid());
    assert!(!note(0, 16).is_valid());
    assert!(!note(0, 14).with_duration(3).is_valid());
    assert!(!Note::new("X", 0.0, 0).is_valid());
    assert!(!Note::new("X", f64::NAN, 0).is_valid());
}

#[test]
fn oversized_duration_is_invalid_without_overflow() {
    let mut n = Note::new("C2", 65.4, 5);
    n.duration_steps = usize::MAX;
    assert!(!n.is_valid());
    assert_eq!(n.end_step(), usize::MAX);
    assert!(n.covers(15));

    n.duration_steps = STEPS - 5;
    assert!(n.is_valid());
    n.duration_steps = STEPS - 4;
    assert!(!n.is_valid());
}
