use crate::constants::MASTER_LEVEL;
use tonegrid_core::{AudioBackend, WaveShape, GAIN_FLOOR};
use web_sys as web;

/// One oscillator and its envelope gain stage.
pub struct Voice {
    osc: web::OscillatorNode,
    gain: web::GainNode,
}

/// WebAudio implementation of the core's audio boundary.
///
/// The `AudioContext` is created once, on the first gesture or sound, and
/// reused for the lifetime of the page.
#[derive(Default)]
pub struct WebAudioBackend {
    ctx: Option<web::AudioContext>,
    master: Option<web::GainNode>,
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> Option<web::GainNode> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Some(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            None
        }
    }
}

fn oscillator_type(wave: WaveShape) -> web::OscillatorType {
    match wave {
        WaveShape::Sine => web::OscillatorType::Sine,
        WaveShape::Square => web::OscillatorType::Square,
        WaveShape::Sawtooth => web::OscillatorType::Sawtooth,
        WaveShape::Triangle => web::OscillatorType::Triangle,
    }
}

impl WebAudioBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_context(&mut self) -> Option<&web::AudioContext> {
        if self.ctx.is_none() {
            let ctx = match web::AudioContext::new() {
                Ok(c) => c,
                Err(e) => {
                    log::error!("AudioContext error: {:?}", e);
                    return None;
                }
            };
            let master = create_gain(&ctx, MASTER_LEVEL, "Master")?;
            _ = master.connect_with_audio_node(&ctx.destination());
            log::info!("[audio] context created at {} Hz", ctx.sample_rate());
            self.master = Some(master);
            self.ctx = Some(ctx);
        }
        self.ctx.as_ref()
    }

    fn now(&self) -> f64 {
        self.ctx.as_ref().map(|c| c.current_time()).unwrap_or(0.0)
    }
}

impl AudioBackend for WebAudioBackend {
    type Handle = Voice;

    fn create_tone(&mut self, frequency_hz: f64, wave: WaveShape) -> Option<Voice> {
        let ctx = self.ensure_context()?.clone();
        if ctx.state() != web::AudioContextState::Running {
            // Suspended until a user gesture; the tone stays pending.
            _ = ctx.resume();
            return None;
        }
        let master = self.master.as_ref()?;
        let osc = web::OscillatorNode::new(&ctx)
            .map_err(|e| log::error!("OscillatorNode error: {:?}", e))
            .ok()?;
        osc.set_type(oscillator_type(wave));
        osc.frequency().set_value(frequency_hz as f32);
        let gain = create_gain(&ctx, GAIN_FLOOR, "Voice")?;
        _ = osc.connect_with_audio_node(&gain);
        _ = gain.connect_with_audio_node(master);
        if let Err(e) = osc.start_with_when(ctx.current_time()) {
            log::error!("oscillator start error: {:?}", e);
            _ = gain.disconnect();
            return None;
        }
        Some(Voice { osc, gain })
    }

    fn set_gain(&mut self, handle: &Voice, level: f32, ramp_sec: f64) {
        let now = self.now();
        let param = handle.gain.gain();
        // Anchor the ramp at the current level so a fade never jumps.
        _ = param.cancel_scheduled_values(now);
        _ = param.set_value_at_time(param.value().max(GAIN_FLOOR), now);
        _ = param.exponential_ramp_to_value_at_time(level.max(GAIN_FLOOR), now + ramp_sec);
    }

    fn stop(&mut self, handle: &Voice, at_offset_sec: f64) {
        let when = self.now() + at_offset_sec;
        _ = handle.osc.stop_with_when(when);
    }

    fn prepare(&mut self) {
        if let Some(ctx) = self.ensure_context() {
            _ = ctx.resume();
        }
    }
}
