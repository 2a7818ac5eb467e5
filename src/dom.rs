use crate::audio::WebAudioBackend;
use crate::constants::STATUS_ID;
use crate::input;
use crate::SharedSequencer;
use glam::Vec2;
use tonegrid_core::Sequencer;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Run `action` against the sequencer whenever button `#id` is clicked.
/// A missing button is logged once and skipped.
pub fn wire_button(
    document: &web::Document,
    id: &str,
    seq: &SharedSequencer,
    action: impl Fn(&mut Sequencer<WebAudioBackend>) + 'static,
) {
    let Some(button) = document.get_element_by_id(id) else {
        log::warn!("[dom] missing #{}", id);
        return;
    };
    let seq = seq.clone();
    let closure = Closure::wrap(Box::new(move || {
        action(&mut seq.borrow_mut());
    }) as Box<dyn FnMut()>);
    _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Resize the canvas backing store to its CSS box at the current
/// devicePixelRatio so grid lines stay crisp.
pub fn fit_canvas(canvas: &web::HtmlCanvasElement) {
    let Some(window) = web::window() else {
        return;
    };
    let rect = canvas.get_bounding_client_rect();
    let css = Vec2::new(rect.width() as f32, rect.height() as f32);
    let (w, h) = input::backing_px(css, window.device_pixel_ratio() as f32);
    if canvas.width() != w || canvas.height() != h {
        canvas.set_width(w);
        canvas.set_height(h);
    }
}

pub fn wire_canvas_resize(window: &web::Window, canvas: web::HtmlCanvasElement) {
    let closure = Closure::wrap(Box::new(move || fit_canvas(&canvas)) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn status_element(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(STATUS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}
