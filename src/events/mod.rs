pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_input_handlers, InputWiring};

use crate::constants::*;
use crate::dom;
use crate::frame::HostClock;
use crate::storage;
use crate::SharedSequencer;
use tonegrid_core::{ActivationPolicy, PlayingState};
use web_sys as web;

/// Play, or pause when already playing.
pub fn toggle_playback(seq: &SharedSequencer, clock: HostClock) {
    let mut s = seq.borrow_mut();
    if s.state() == PlayingState::Playing {
        s.pause(clock.now_ms());
    } else {
        s.play(clock.now_ms());
    }
}

pub fn wire_buttons(document: &web::Document, seq: &SharedSequencer, clock: HostClock) {
    dom::wire_button(document, BUTTON_PLAY, seq, move |s| s.play(clock.now_ms()));
    dom::wire_button(document, BUTTON_PAUSE, seq, move |s| {
        s.pause(clock.now_ms());
    });
    dom::wire_button(document, BUTTON_CLEAR, seq, |s| {
        s.clear();
        storage::persist_notes(s.notes());
    });
    dom::wire_button(document, BUTTON_GENERATE, seq, |s| {
        if s.composer().rows().is_empty() {
            s.composer_mut().add_row();
        }
        s.generate();
    });
    dom::wire_button(document, BUTTON_MODE, seq, |s| {
        let next = match s.params().policy {
            ActivationPolicy::Trigger => ActivationPolicy::Sustain,
            ActivationPolicy::Sustain => ActivationPolicy::Trigger,
        };
        s.set_policy(next);
    });
    dom::wire_button(document, BUTTON_ADD_OVERTONE, seq, |s| {
        let row = s.composer_mut().add_row();
        log::info!(
            "[generator] row {} ratio {} gain {:.3}",
            row.id,
            row.overtone_ratio,
            row.gain_level
        );
    });
    dom::wire_button(document, BUTTON_REMOVE_OVERTONE, seq, |s| {
        if let Some(id) = s.composer().rows().last().map(|r| r.id) {
            s.composer_mut().delete_row(id);
        }
    });
}
