use tonegrid_core::persist;
use tonegrid_core::{NoteSet, STORAGE_KEY};
use web_sys as web;

fn local_storage(window: &web::Window) -> anyhow::Result<web::Storage> {
    window
        .local_storage()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("localStorage unavailable"))
}

/// Saved notes, or an empty set when storage is missing or unreadable.
pub fn load_notes(window: &web::Window) -> NoteSet {
    let text = match local_storage(window) {
        Ok(storage) => storage.get_item(STORAGE_KEY).ok().flatten(),
        Err(e) => {
            log::warn!("[storage] {}", e);
            None
        }
    };
    persist::load_or_empty(text.as_deref())
}

pub fn save_notes(notes: &NoteSet) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let text = persist::encode(notes)?;
    local_storage(&window)?
        .set_item(STORAGE_KEY, &text)
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Save and log on failure; used from event handlers.
pub fn persist_notes(notes: &NoteSet) {
    match save_notes(notes) {
        Ok(()) => log::debug!("[storage] saved {} note(s)", notes.len()),
        Err(e) => log::error!("[storage] save failed: {}", e),
    }
}
