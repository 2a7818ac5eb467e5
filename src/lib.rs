#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use tonegrid_core::{Sequencer, SequencerParams};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod storage;

pub type SharedSequencer = Rc<RefCell<Sequencer<audio::WebAudioBackend>>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tonegrid starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let ctx2d: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    dom::fit_canvas(&canvas);
    dom::wire_canvas_resize(&window, canvas.clone());

    let notes = storage::load_notes(&window);
    log::info!("[init] restored {} note(s)", notes.len());
    let seq: SharedSequencer = Rc::new(RefCell::new(Sequencer::with_notes(
        audio::WebAudioBackend::new(),
        SequencerParams::default(),
        notes,
    )));
    let clock = frame::HostClock::new();

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        seq: seq.clone(),
    });
    events::wire_buttons(&document, &seq, clock);
    events::wire_global_keydown(seq.clone(), clock);

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        seq,
        clock,
        canvas,
        ctx2d,
        status: dom::status_element(&document),
        last_status: None,
    })));
    Ok(())
}
