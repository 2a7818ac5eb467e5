//! Cyclic playback clock.
//!
//! Time is measured from the moment playback starts, never from the host
//! epoch, so stopping and restarting always begins a fresh cycle at step 0.

use crate::constants::{BEATS_PER_CYCLE, DEFAULT_BPM, STEPS};

/// Position within the cycle for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClockReading {
    /// Playhead position in percent of the cycle, 0..100.
    pub progress_percent: f64,
    /// Continuous beat position in steps, 0..STEPS.
    pub beat: f64,
    pub current_step: usize,
}

/// Length of one full cycle in milliseconds.
pub fn cycle_ms(bpm: f64) -> f64 {
    let bpm = if bpm.is_finite() && bpm > 0.0 {
        bpm
    } else {
        DEFAULT_BPM
    };
    60_000.0 / bpm * BEATS_PER_CYCLE
}

/// Convert elapsed playback time into a position within the cycle.
pub fn tick(elapsed_ms: f64, bpm: f64) -> ClockReading {
    let cycle = cycle_ms(bpm);
    let elapsed = if elapsed_ms.is_finite() {
        elapsed_ms.max(0.0)
    } else {
        0.0
    };
    let fraction = (elapsed % cycle) / cycle;
    let beat = fraction * STEPS as f64;
    ClockReading {
        progress_percent: fraction * 100.0,
        beat,
        current_step: (beat.floor() as usize).min(STEPS - 1),
    }
}

/// Start/stop bookkeeping for a host-driven loop.
///
/// The host passes its own monotonic timestamp (e.g. milliseconds since the
/// page loaded) into every call.
#[derive(Clone, Debug, Default)]
pub struct PlaybackClock {
    started_at_ms: Option<f64>,
}

impl PlaybackClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now_ms: f64) {
        self.started_at_ms = Some(now_ms);
    }

    pub fn stop(&mut self) {
        self.started_at_ms = None;
    }

    pub fn is_running(&self) -> bool {
        self.started_at_ms.is_some()
    }

    pub fn elapsed(&self, now_ms: f64) -> f64 {
        match self.started_at_ms {
            Some(t0) => (now_ms - t0).max(0.0),
            None => 0.0,
        }
    }

    pub fn reading(&self, now_ms: f64, bpm: f64) -> ClockReading {
        tick(self.elapsed(now_ms), bpm)
    }
}
