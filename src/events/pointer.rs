use crate::input;
use crate::storage;
use crate::SharedSequencer;
use glam::Vec2;
use tonegrid_core::{GridChange, PointerEvent};
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub seq: SharedSequencer,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_pointercancel(&w);
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

#[inline]
fn canvas_size(canvas: &web::HtmlCanvasElement) -> Vec2 {
    Vec2::new(canvas.width() as f32, canvas.height() as f32)
}

fn apply(w: &InputWiring, ev: PointerEvent) {
    let mut seq = w.seq.borrow_mut();
    let change = seq.pointer(ev);
    match change {
        GridChange::Toggled(added) => log::debug!("[grid] toggle {} -> {}", ev.col, added),
        GridChange::Committed { displaced } => {
            log::debug!("[grid] committed span, displaced {}", displaced)
        }
        _ => {}
    }
    if change.notes_changed() {
        storage::persist_notes(seq.notes());
    }
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let pos = pointer_canvas_px(&ev, &w.canvas);
        let Some((row, col)) = input::cell_at(pos, canvas_size(&w.canvas)) else {
            return;
        };
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        // First gesture on the page; lets the audio context leave "suspended".
        w.seq.borrow_mut().prepare_audio();
        apply(&w, PointerEvent::down(row, col));
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if w.seq.borrow().selection().is_none() {
            return;
        }
        let pos = pointer_canvas_px(&ev, &w.canvas);
        let (row, col) = input::cell_at_clamped(pos, canvas_size(&w.canvas));
        apply(&w, PointerEvent::moved(row, col));
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
        if w.seq.borrow().selection().is_none() {
            return;
        }
        let pos = pointer_canvas_px(&ev, &w.canvas);
        let (row, col) = input::cell_at_clamped(pos, canvas_size(&w.canvas));
        apply(&w, PointerEvent::up(row, col));
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointercancel(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.seq.borrow_mut().cancel_gesture();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
    closure.forget();
}
