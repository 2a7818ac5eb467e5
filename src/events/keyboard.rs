use crate::frame::HostClock;
use crate::SharedSequencer;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, seq: &SharedSequencer, clock: HostClock) {
    if ev.repeat() {
        return;
    }
    match ev.key().as_str() {
        " " | "Spacebar" => {
            ev.prevent_default();
            super::toggle_playback(seq, clock);
        }
        "Escape" => seq.borrow_mut().cancel_gesture(),
        _ => {}
    }
}

pub fn wire_global_keydown(seq: SharedSequencer, clock: HostClock) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &seq, clock);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
