//! Oscillator lifecycle: diff the desired tones against the live generators.
//!
//! The diff itself ([`plan`]) is pure. [`Reconciler`] owns the live set and
//! the audio backend and applies a plan with click-free gain ramps:
//!
//! - create: start at `GAIN_FLOOR`, ramp up to the target over `ATTACK_SEC`
//! - retain: untouched, or a short glide when only the level changed
//! - release: ramp down to `GAIN_FLOOR` over `RELEASE_FADE_SEC`, then stop at
//!   `STOP_AFTER_SEC`
//!
//! Released generators leave the live set in the same call that schedules
//! their stop, so a fading oscillator can never be matched again.

use crate::constants::{
    ATTACK_SEC, FREQUENCY_TOLERANCE_HZ, GAIN_EPSILON, GAIN_FLOOR, GAIN_GLIDE_SEC,
    RELEASE_FADE_SEC, STOP_AFTER_SEC,
};
use crate::note::{clamp_gain, Note, WaveShape};
use fnv::FnvHashSet;
use smallvec::SmallVec;

/// The three operations the core needs from an audio subsystem.
pub trait AudioBackend {
    type Handle;

    /// Create and start an oscillator at `GAIN_FLOOR` level.
    ///
    /// Returns `None` when the subsystem is unavailable or suspended; the
    /// caller retries on a later tick.
    fn create_tone(&mut self, frequency_hz: f64, wave: WaveShape) -> Option<Self::Handle>;

    /// Exponentially ramp the tone's gain to `level` over `ramp_sec`.
    fn set_gain(&mut self, handle: &Self::Handle, level: f32, ramp_sec: f64);

    /// Hard-stop the tone `at_offset_sec` seconds from now.
    fn stop(&mut self, handle: &Self::Handle, at_offset_sec: f64);

    /// Lazily bring the subsystem up. Called from a user gesture.
    fn prepare(&mut self) {}
}

/// A desired sounding tone.
#[derive(Clone, Debug, PartialEq)]
pub struct Tone {
    pub label: String,
    pub frequency_hz: f64,
    pub wave: WaveShape,
    pub gain: f32,
}

impl Tone {
    pub fn from_note(note: &Note) -> Self {
        Self {
            label: note.name.clone(),
            frequency_hz: note.frequency,
            wave: note.wave_shape,
            gain: clamp_gain(note.gain_level),
        }
    }

    fn matches(&self, frequency_hz: f64, wave: WaveShape) -> bool {
        self.wave == wave && (self.frequency_hz - frequency_hz).abs() <= FREQUENCY_TOLERANCE_HZ
    }
}

/// One sounding oscillator, owned by the [`Reconciler`].
#[derive(Debug)]
pub struct LiveGenerator<H> {
    pub generation: u64,
    pub label: String,
    pub frequency_hz: f64,
    pub wave: WaveShape,
    pub gain: f32,
    pub started_at_ms: f64,
    handle: H,
}

/// Create/retain/release decisions for one tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconcilePlan {
    /// Indices into the desired tones that need a new generator.
    pub create: SmallVec<[usize; 8]>,
    /// `(generation, desired index)` pairs kept alive.
    pub retain: SmallVec<[(u64, usize); 8]>,
    /// Generations to fade out and stop.
    pub release: SmallVec<[u64; 8]>,
}

impl ReconcilePlan {
    pub fn is_empty(&self) -> bool {
        self.create.is_empty() && self.release.is_empty()
    }
}

/// Diff desired tones against live generators.
///
/// A tone matches a live generator with the same wave shape whose frequency
/// lies within `FREQUENCY_TOLERANCE_HZ`. Each generator is claimed at most
/// once; a later tone within tolerance of a pitch this plan already sounds
/// (retained or created) collapses onto it.
pub fn plan<H>(desired: &[Tone], live: &[LiveGenerator<H>]) -> ReconcilePlan {
    let mut out = ReconcilePlan::default();
    let mut claimed: FnvHashSet<u64> = FnvHashSet::default();
    let mut sounding: SmallVec<[(f64, WaveShape); 8]> = SmallVec::new();

    for (i, tone) in desired.iter().enumerate() {
        if sounding.iter().any(|&(hz, wave)| tone.matches(hz, wave)) {
            continue;
        }
        let hit = live
            .iter()
            .find(|g| !claimed.contains(&g.generation) && tone.matches(g.frequency_hz, g.wave));
        match hit {
            Some(g) => {
                claimed.insert(g.generation);
                out.retain.push((g.generation, i));
                sounding.push((g.frequency_hz, g.wave));
            }
            None => {
                out.create.push(i);
                sounding.push((tone.frequency_hz, tone.wave));
            }
        }
    }

    out.release = live
        .iter()
        .filter(|g| !claimed.contains(&g.generation))
        .map(|g| g.generation)
        .collect();
    out
}

/// Counts of what one reconciliation did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub created: usize,
    pub retained: usize,
    /// Retained generators whose level was glided to a new gain.
    pub adjusted: usize,
    pub released: usize,
    /// Creations skipped because the backend was unavailable.
    pub failed: usize,
}

impl ReconcileReport {
    /// True when nothing audible changed.
    pub fn is_quiet(&self) -> bool {
        self.created == 0 && self.released == 0 && self.adjusted == 0
    }
}

/// Owns the live generator set and applies plans through an [`AudioBackend`].
pub struct Reconciler<B: AudioBackend> {
    backend: B,
    live: Vec<LiveGenerator<B::Handle>>,
    next_generation: u64,
}

impl<B: AudioBackend> Reconciler<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            live: Vec::new(),
            next_generation: 0,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn live(&self) -> &[LiveGenerator<B::Handle>] {
        &self.live
    }

    pub fn reconcile(&mut self, desired: &[Tone], now_ms: f64) -> ReconcileReport {
        let plan = plan(desired, &self.live);
        let mut report = ReconcileReport::default();

        for generation in &plan.release {
            let Some(idx) = self.live.iter().position(|g| g.generation == *generation) else {
                continue;
            };
            let gone = self.live.remove(idx);
            self.backend.set_gain(&gone.handle, GAIN_FLOOR, RELEASE_FADE_SEC);
            self.backend.stop(&gone.handle, STOP_AFTER_SEC);
            log::debug!(
                "[osc] release #{} {} {:.1}Hz",
                gone.generation,
                gone.label,
                gone.frequency_hz
            );
            report.released += 1;
        }

        for (generation, idx) in &plan.retain {
            let target = clamp_gain(desired[*idx].gain);
            if let Some(g) = self.live.iter_mut().find(|g| g.generation == *generation) {
                report.retained += 1;
                if (g.gain - target).abs() > GAIN_EPSILON {
                    self.backend.set_gain(&g.handle, target, GAIN_GLIDE_SEC);
                    g.gain = target;
                    report.adjusted += 1;
                }
            }
        }

        for idx in &plan.create {
            let tone = &desired[*idx];
            let Some(handle) = self.backend.create_tone(tone.frequency_hz, tone.wave) else {
                report.failed += 1;
                continue;
            };
            let gain = clamp_gain(tone.gain);
            self.backend.set_gain(&handle, gain, ATTACK_SEC);
            let generation = self.next_generation;
            self.next_generation += 1;
            log::debug!(
                "[osc] create #{} {} {:.1}Hz {:?}",
                generation,
                tone.label,
                tone.frequency_hz,
                tone.wave
            );
            self.live.push(LiveGenerator {
                generation,
                label: tone.label.clone(),
                frequency_hz: tone.frequency_hz,
                wave: tone.wave,
                gain,
                started_at_ms: now_ms,
                handle,
            });
            report.created += 1;
        }

        if report.failed > 0 {
            log::debug!("[osc] audio unavailable, {} tone(s) pending", report.failed);
        }
        report
    }

    /// Fade out everything. Same path as reconciling an empty desired set.
    pub fn release_all(&mut self, now_ms: f64) -> ReconcileReport {
        self.reconcile(&[], now_ms)
    }
}
