//! Application-level configuration constants.

// Haptic pulses (ms)
pub const VIBRATE_START_MS: u32 = 100;
pub const VIBRATE_DONE_MS: u32 = 200;
pub const VIBRATE_REGENERATE_MS: u32 = 100;

// Element ids
pub const CANVAS_ID: &str = "sort-canvas";
pub const SPEED_INPUT_ID: &str = "speed";
pub const SIZE_INPUT_ID: &str = "size";

// UI constants
pub const SLIDER_STEP: u32 = 1;
