// Click and drag gestures on the pitch × step grid.

use tonegrid_core::*;

fn sustain() -> GridController {
    GridController::new(ActivationPolicy::Sustain)
}

fn drag(
    grid: &mut GridController,
    notes: &mut NoteSet,
    row: usize,
    from: usize,
    to: usize,
) -> GridChange {
    grid.handle(PointerEvent::down(row, from), notes);
    for col in from..=to {
        grid.handle(PointerEvent::moved(row, col), notes);
    }
    grid.handle(PointerEvent::up(row, to), notes)
}

#[test]
fn drag_two_to_five_commits_four_steps() {
    let mut grid = sustain();
    let mut notes = NoteSet::new();
    let change = drag(&mut grid, &mut notes, 10, 2, 5);

    assert_eq!(change, GridChange::Committed { displaced: 0 });
    assert_eq!(notes.len(), 1);
    let n = notes.iter().next().expect("committed note");
    assert_eq!(n.name, row_pitch(10).name);
    assert_eq!(n.start_step, 2);
    assert_eq!(n.duration_steps, 4);
    assert!(grid.selection().is_none());
}

#[test]
fn second_drag_on_same_start_replaces() {
    let mut grid = sustain();
    let mut notes = NoteSet::new();
    drag(&mut grid, &mut notes, 10, 2, 5);
    let change = drag(&mut grid, &mut notes, 10, 2, 8);

    assert_eq!(change, GridChange::Committed { displaced: 1 });
    assert_eq!(notes.len(), 1);
    assert_eq!(notes.iter().next().map(|n| n.duration_steps), Some(7));
}

#[test]
fn overlapping_drag_from_inside_replaces_too() {
    let mut grid = sustain();
    let mut notes = NoteSet::new();
    drag(&mut grid, &mut notes, 4, 0, 5);
    drag(&mut grid, &mut notes, 4, 3, 9);
    assert_eq!(notes.len(), 1);
    let n = notes.iter().next().expect("note");
    assert_eq!((n.start_step, n.duration_steps), (3, 7));
}

#[test]
fn selection_only_grows_forward() {
    let mut grid = sustain();
    let mut notes = NoteSet::new();
    grid.handle(PointerEvent::down(3, 6), &mut notes);
    assert_eq!(grid.handle(PointerEvent::moved(3, 9), &mut notes), GridChange::Selecting);
    assert_eq!(grid.handle(PointerEvent::moved(3, 7), &mut notes), GridChange::None);
    assert_eq!(grid.handle(PointerEvent::moved(3, 2), &mut notes), GridChange::None);
    // Moving onto another row keeps the selection on its own row.
    grid.handle(PointerEvent::moved(20, 10), &mut notes);

    let sel = grid.selection().expect("open selection");
    assert_eq!(sel, DragSelection { row: 3, start_col: 6, end_col: 10 });
    assert!(notes.is_empty());
}

#[test]
fn move_without_press_does_nothing() {
    let mut grid = sustain();
    let mut notes = NoteSet::new();
    assert_eq!(grid.handle(PointerEvent::moved(1, 4), &mut notes), GridChange::None);
    assert_eq!(grid.handle(PointerEvent::up(1, 4), &mut notes), GridChange::None);
    assert!(grid.selection().is_none());
    assert!(notes.is_empty());
}

#[test]
fn zero_width_release_is_a_click() {
    let mut grid = sustain();
    let mut notes = NoteSet::new();
    grid.handle(PointerEvent::down(8, 4), &mut notes);
    assert_eq!(grid.handle(PointerEvent::up(8, 4), &mut notes), GridChange::Toggled(true));
    assert_eq!(notes.iter().next().map(|n| n.duration_steps), Some(1));

    grid.handle(PointerEvent::down(8, 4), &mut notes);
    assert_eq!(grid.handle(PointerEvent::up(8, 4), &mut notes), GridChange::Toggled(false));
    assert!(notes.is_empty());
}

#[test]
fn click_on_long_note_start_removes_it() {
    let mut grid = sustain();
    let mut notes = NoteSet::new();
    drag(&mut grid, &mut notes, 2, 1, 6);
    grid.handle(PointerEvent::down(2, 1), &mut notes);
    assert_eq!(grid.handle(PointerEvent::up(2, 1), &mut notes), GridChange::Toggled(false));
    assert!(notes.is_empty());
}

#[test]
fn click_inside_long_note_is_rejected() {
    let mut grid = sustain();
    let mut notes = NoteSet::new();
    drag(&mut grid, &mut notes, 2, 1, 6);
    let before = notes.clone();
    grid.handle(PointerEvent::down(2, 3), &mut notes);
    assert_eq!(grid.handle(PointerEvent::up(2, 3), &mut notes), GridChange::None);
    assert_eq!(notes, before);
}

#[test]
fn drag_past_the_last_column_is_clamped() {
    let mut grid = sustain();
    let mut notes = NoteSet::new();
    grid.handle(PointerEvent::down(0, 12), &mut notes);
    grid.handle(PointerEvent::moved(0, 40), &mut notes);
    grid.handle(PointerEvent::up(0, 40), &mut notes);
    let n = notes.iter().next().expect("note");
    assert_eq!(n.end_step(), STEPS);
    assert!(n.is_valid());
}

#[test]
fn press_outside_the_grid_is_ignored() {
    let mut grid = sustain();
    let mut notes = NoteSet::new();
    assert_eq!(grid.handle(PointerEvent::down(ROWS, 0), &mut notes), GridChange::None);
    assert_eq!(grid.handle(PointerEvent::down(0, STEPS), &mut notes), GridChange::None);
    assert!(grid.selection().is_none());
}

#[test]
fn cancel_discards_the_selection() {
    let mut grid = sustain();
    let mut notes = NoteSet::new();
    grid.handle(PointerEvent::down(5, 1), &mut notes);
    grid.handle(PointerEvent::moved(5, 4), &mut notes);
    grid.cancel();
    assert_eq!(grid.handle(PointerEvent::up(5, 4), &mut notes), GridChange::None);
    assert!(notes.is_empty());
}

#[test]
fn trigger_mode_toggles_on_press() {
    let mut grid = GridController::new(ActivationPolicy::Trigger);
    let mut notes = NoteSet::new();
    assert_eq!(grid.handle(PointerEvent::down(6, 9), &mut notes), GridChange::Toggled(true));
    assert_eq!(grid.handle(PointerEvent::moved(6, 12), &mut notes), GridChange::None);
    assert_eq!(grid.handle(PointerEvent::up(6, 12), &mut notes), GridChange::None);
    assert!(grid.selection().is_none());
    assert_eq!(notes.len(), 1);
    assert_eq!(grid.handle(PointerEvent::down(6, 9), &mut notes), GridChange::Toggled(false));
    assert!(notes.is_empty());
}

#[test]
fn switching_policy_drops_open_selection() {
    let mut grid = sustain();
    let mut notes = NoteSet::new();
    grid.handle(PointerEvent::down(5, 1), &mut notes);
    grid.set_policy(ActivationPolicy::Trigger);
    assert!(grid.selection().is_none());
    assert_eq!(grid.policy(), ActivationPolicy::Trigger);
}

#[test]
fn change_reports_note_mutations() {
    assert!(GridChange::Toggled(true).notes_changed());
    assert!(GridChange::Committed { displaced: 0 }.notes_changed());
    assert!(!GridChange::Selecting.notes_changed());
    assert!(!GridChange::None.notes_changed());
}
