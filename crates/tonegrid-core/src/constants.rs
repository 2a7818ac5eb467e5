// Shared timing, grid and audio tuning constants for the sequencer core.

// Timeline
pub const STEPS: usize = 16; // columns in one cycle
pub const BEATS_PER_CYCLE: f64 = 4.0;
pub const DEFAULT_BPM: f64 = 80.0;

// Pitch grid
pub const ROWS: usize = 32;
pub const GRID_OCTAVE: i32 = 2; // octave of row 0
pub const DEGREES_PER_OCTAVE: usize = 7; // C D E F G A B
pub const A4_HZ: f64 = 440.0;

// Generator mode
pub const BASE_FREQUENCY_HZ: f64 = 220.0;

// Envelope ramps (seconds, AudioContext time)
pub const GAIN_FLOOR: f32 = 0.000_01; // exponential ramps cannot reach 0
pub const ATTACK_SEC: f64 = 0.02;
pub const RELEASE_FADE_SEC: f64 = 0.5;
pub const STOP_AFTER_SEC: f64 = 1.0; // must stay after RELEASE_FADE_SEC
pub const GAIN_GLIDE_SEC: f64 = 0.05; // retained generator level change

// Matching
pub const FREQUENCY_TOLERANCE_HZ: f64 = 1.0;
pub const GAIN_EPSILON: f32 = 1e-4;

// Persistence
pub const STORAGE_KEY: &str = "tonegrid.notes";
