use crate::render;
use crate::SharedSequencer;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use tonegrid_core::{Frame, PlayingState};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Monotonic milliseconds since page start, shared by every handler.
#[derive(Clone, Copy)]
pub struct HostClock {
    origin: Instant,
}

impl Default for HostClock {
    fn default() -> Self {
        Self::new()
    }
}

impl HostClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

pub struct FrameContext {
    pub seq: SharedSequencer,
    pub clock: HostClock,
    pub canvas: web::HtmlCanvasElement,
    pub ctx2d: web::CanvasRenderingContext2d,
    pub status: Option<web::HtmlElement>,
    pub last_status: Option<String>,
}

fn status_text(frame: &Frame, live: usize) -> String {
    match frame.state {
        PlayingState::Playing => format!(
            "playing step {} / beat {:.2} ({} sounding)",
            frame.reading.current_step + 1,
            frame.reading.beat,
            live
        ),
        PlayingState::Generating => format!("generating ({} sounding)", live),
        PlayingState::Paused => "paused".to_string(),
    }
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now_ms = self.clock.now_ms();
        let (frame, live, model) = {
            let mut seq = self.seq.borrow_mut();
            let frame = seq.advance(now_ms);
            (frame, seq.live().len(), seq.render_model())
        };
        if frame.report.created + frame.report.released > 0 {
            log::debug!("[frame] {:?}", frame.report);
        }

        let size = Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32);
        render::draw_grid(&self.ctx2d, size, &model);

        if let Some(el) = &self.status {
            let text = status_text(&frame, live);
            if self.last_status.as_deref() != Some(text.as_str()) {
                el.set_inner_text(&text);
                self.last_status = Some(text);
            }
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref().map(|c| c.as_ref().clone()))
    else {
        return;
    };
    if let Err(e) = w.request_animation_frame(cb.unchecked_ref()) {
        log::error!("requestAnimationFrame error: {:?}", e);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
