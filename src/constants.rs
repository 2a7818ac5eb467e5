// Visual and audio tuning constants used by the web frontend.

// Output
pub const MASTER_LEVEL: f32 = 0.25; // headroom for many simultaneous oscillators

// Cell palette
pub const COLOR_EMPTY: &str = "#ffffff";
pub const COLOR_NOTE: &str = "#2e9e44"; // green
pub const COLOR_SUSTAIN: &str = "#9fdcaa"; // light green
pub const COLOR_PENDING: &str = "#f0a030"; // orange
pub const COLOR_PLAYING: &str = "#d64545"; // red-ish
pub const COLOR_GRID_LINE: &str = "#000000";
pub const COLOR_PLAYHEAD: &str = "#ff0000";
pub const COLOR_LABEL: &str = "#000000";

// Grid drawing
pub const GRID_LINE_WIDTH: f64 = 1.0;
pub const PLAYHEAD_WIDTH: f64 = 2.0;
pub const LABEL_FONT: &str = "12px system-ui";
pub const LABEL_MIN_CELL_PX: f64 = 36.0; // skip labels on cramped cells

// DOM ids
pub const CANVAS_ID: &str = "grid-canvas";
pub const STATUS_ID: &str = "status";
pub const BUTTON_PLAY: &str = "play";
pub const BUTTON_PAUSE: &str = "pause";
pub const BUTTON_CLEAR: &str = "clear";
pub const BUTTON_GENERATE: &str = "generate";
pub const BUTTON_MODE: &str = "mode";
pub const BUTTON_ADD_OVERTONE: &str = "add-overtone";
pub const BUTTON_REMOVE_OVERTONE: &str = "remove-overtone";
