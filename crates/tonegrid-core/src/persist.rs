//! Text encoding of the note list for the client-local storage slot.
//!
//! Loading never fails outward: unreadable text yields an empty set and
//! individual records that break the data model are dropped.

use crate::error::PersistError;
use crate::note::{Note, NoteSet};

pub fn encode(notes: &NoteSet) -> Result<String, PersistError> {
    Ok(serde_json::to_string(notes)?)
}

/// Strict decode: the text must be a JSON array. Invalid records inside the
/// array are skipped rather than failing the whole list.
pub fn decode(text: &str) -> Result<NoteSet, PersistError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let serde_json::Value::Array(items) = value else {
        return Err(PersistError::NotAnArray);
    };
    let total = items.len();
    let mut set = NoteSet::new();
    for item in items {
        let note = match serde_json::from_value::<Note>(item) {
            Ok(n) if n.is_valid() => n,
            Ok(n) => {
                log::warn!("[persist] dropping invalid note {}@{}", n.name, n.start_step);
                continue;
            }
            Err(e) => {
                log::warn!("[persist] dropping unreadable note: {}", e);
                continue;
            }
        };
        if set.contains(&note) || !set.toggle(note) {
            log::warn!("[persist] dropping duplicate or overlapping note");
        }
    }
    if set.len() != total {
        log::info!("[persist] restored {} of {} notes", set.len(), total);
    }
    Ok(set)
}

/// Decode the storage slot, falling back to an empty set when the slot is
/// missing or corrupt.
pub fn load_or_empty(slot: Option<&str>) -> NoteSet {
    let Some(text) = slot else {
        return NoteSet::new();
    };
    match decode(text) {
        Ok(set) => set,
        Err(e) => {
            log::warn!("[persist] discarding stored notes: {}", e);
            NoteSet::new()
        }
    }
}
