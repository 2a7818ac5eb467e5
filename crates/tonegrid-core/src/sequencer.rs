use crate::activation::{active_notes, ActivationPolicy};
use crate::clock::{ClockReading, PlaybackClock};
use crate::composer::Composer;
use crate::constants::{BASE_FREQUENCY_HZ, DEFAULT_BPM};
use crate::grid::{DragSelection, GridChange, GridController, PointerEvent};
use crate::note::NoteSet;
use crate::reconcile::{AudioBackend, LiveGenerator, ReconcileReport, Reconciler, Tone};
use crate::render_model::RenderModel;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayingState {
    Playing,
    #[default]
    Paused,
    /// Overtone chord from the composer, no timeline.
    Generating,
}

/// Runtime parameters for the sequencer.
///
/// - `bpm`: tempo; one cycle is four beats
/// - `policy`: trigger (one step) or sustain (full duration) playback
/// - `base_frequency_hz`: fundamental for generator mode overtones
#[derive(Clone, Debug)]
pub struct SequencerParams {
    pub bpm: f64,
    pub policy: ActivationPolicy,
    pub base_frequency_hz: f64,
}

impl Default for SequencerParams {
    fn default() -> Self {
        Self {
            bpm: DEFAULT_BPM,
            policy: ActivationPolicy::Sustain,
            base_frequency_hz: BASE_FREQUENCY_HZ,
        }
    }
}

/// Result of one [`Sequencer::advance`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub state: PlayingState,
    pub reading: ClockReading,
    pub report: ReconcileReport,
}

/// Note set, playback clock and oscillator reconciler behind one pull-based
/// `advance` call.
///
/// Typical usage from a host loop:
/// - pointer handlers call [`Sequencer::pointer`]
/// - every frame calls [`Sequencer::advance`] with a monotonic timestamp
/// - the renderer samples [`Sequencer::render_model`]
pub struct Sequencer<B: AudioBackend> {
    params: SequencerParams,
    notes: NoteSet,
    grid: GridController,
    composer: Composer,
    clock: PlaybackClock,
    state: PlayingState,
    reconciler: Reconciler<B>,
    last_reading: ClockReading,
}

impl<B: AudioBackend> Sequencer<B> {
    pub fn new(backend: B, params: SequencerParams) -> Self {
        Self::with_notes(backend, params, NoteSet::new())
    }

    pub fn with_notes(backend: B, params: SequencerParams, notes: NoteSet) -> Self {
        let grid = GridController::new(params.policy);
        Self {
            params,
            notes,
            grid,
            composer: Composer::new(),
            clock: PlaybackClock::new(),
            state: PlayingState::Paused,
            reconciler: Reconciler::new(backend),
            last_reading: ClockReading::default(),
        }
    }

    pub fn params(&self) -> &SequencerParams {
        &self.params
    }

    pub fn state(&self) -> PlayingState {
        self.state
    }

    pub fn notes(&self) -> &NoteSet {
        &self.notes
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut Composer {
        &mut self.composer
    }

    pub fn selection(&self) -> Option<DragSelection> {
        self.grid.selection()
    }

    pub fn live(&self) -> &[LiveGenerator<B::Handle>] {
        self.reconciler.live()
    }

    pub fn backend(&self) -> &B {
        self.reconciler.backend()
    }

    pub fn set_policy(&mut self, policy: ActivationPolicy) {
        self.params.policy = policy;
        self.grid.set_policy(policy);
        log::info!("[seq] policy {:?}", policy);
    }

    /// Give the backend a chance to unlock audio from a user gesture.
    pub fn prepare_audio(&mut self) {
        self.reconciler.backend_mut().prepare();
    }

    /// Start the cycle from step 0. Already playing is a no-op.
    pub fn play(&mut self, now_ms: f64) {
        if self.state == PlayingState::Playing {
            return;
        }
        self.prepare_audio();
        self.clock.start(now_ms);
        self.state = PlayingState::Playing;
        log::info!("[seq] play at {:.0} bpm", self.params.bpm);
    }

    /// Stop the clock and fade out every live generator.
    pub fn pause(&mut self, now_ms: f64) -> ReconcileReport {
        self.clock.stop();
        self.state = PlayingState::Paused;
        self.last_reading = ClockReading::default();
        log::info!("[seq] pause");
        self.reconciler.release_all(now_ms)
    }

    /// Switch to the continuous overtone chord.
    pub fn generate(&mut self) {
        self.prepare_audio();
        self.clock.stop();
        self.state = PlayingState::Generating;
        log::info!("[seq] generate {} overtone(s)", self.composer.rows().len());
    }

    pub fn clear(&mut self) {
        self.grid.cancel();
        self.notes.clear();
        log::info!("[seq] cleared notes");
    }

    pub fn pointer(&mut self, ev: PointerEvent) -> GridChange {
        self.grid.handle(ev, &mut self.notes)
    }

    pub fn cancel_gesture(&mut self) {
        self.grid.cancel();
    }

    /// Tones that should be sounding for this state and step.
    pub fn desired_tones(&self, step: usize) -> Vec<Tone> {
        match self.state {
            PlayingState::Playing => active_notes(&self.notes, step, self.params.policy)
                .into_iter()
                .map(Tone::from_note)
                .collect(),
            PlayingState::Generating => self
                .composer
                .notes(self.params.base_frequency_hz)
                .iter()
                .map(Tone::from_note)
                .collect(),
            PlayingState::Paused => Vec::new(),
        }
    }

    /// Advance to `now_ms` and reconcile the live generators.
    pub fn advance(&mut self, now_ms: f64) -> Frame {
        let reading = match self.state {
            PlayingState::Playing => self.clock.reading(now_ms, self.params.bpm),
            _ => ClockReading::default(),
        };
        let desired = self.desired_tones(reading.current_step);
        let report = self.reconciler.reconcile(&desired, now_ms);
        self.last_reading = reading;
        Frame {
            state: self.state,
            reading,
            report,
        }
    }

    pub fn render_model(&self) -> RenderModel {
        let playing = (self.state == PlayingState::Playing)
            .then_some((self.last_reading.current_step, self.params.policy));
        RenderModel::build(
            &self.notes,
            self.grid.selection(),
            self.last_reading.progress_percent,
            playing,
        )
    }
}
