// Recording audio backend shared by the integration tests.
#![allow(dead_code)]

use tonegrid_core::{AudioBackend, WaveShape};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Create { id: u32, frequency_hz: f64, wave: WaveShape },
    SetGain { id: u32, level: f32, ramp_sec: f64 },
    Stop { id: u32, at_offset_sec: f64 },
    Prepare,
}

#[derive(Debug, Default)]
pub struct MockBackend {
    pub calls: Vec<Call>,
    pub unavailable: bool,
    next_id: u32,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn creates(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Create { .. }))
            .count()
    }

    pub fn stops(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Stop { .. }))
            .count()
    }
}

impl AudioBackend for MockBackend {
    type Handle = u32;

    fn create_tone(&mut self, frequency_hz: f64, wave: WaveShape) -> Option<u32> {
        if self.unavailable {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.calls.push(Call::Create {
            id,
            frequency_hz,
            wave,
        });
        Some(id)
    }

    fn set_gain(&mut self, handle: &u32, level: f32, ramp_sec: f64) {
        self.calls.push(Call::SetGain {
            id: *handle,
            level,
            ramp_sec,
        });
    }

    fn stop(&mut self, handle: &u32, at_offset_sec: f64) {
        self.calls.push(Call::Stop {
            id: *handle,
            at_offset_sec,
        });
    }

    fn prepare(&mut self) {
        self.calls.push(Call::Prepare);
    }
}
