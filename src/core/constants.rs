// Interaction and audio tuning constants.
//
// Timings are milliseconds unless the name says otherwise. Transform values
// use the scene graph's units: degrees for rotation, plain factors for scale.
// Tap handling
pub const TAP_COOLDOWN_MS: u32 = 1000;
pub const TAP_BOUNCE_FACTOR: f32 = 1.04; // peak scale relative to rest
pub const TAP_BOUNCE_DURATION_MS: u32 = 200;

// Hover (desktop pointer)
pub const HOVER_SCALE_FACTOR: f32 = 1.02;
pub const HOVER_DURATION_MS: u32 = 150;

// Rotation
pub const ROTATE_STEP_DEG: f32 = 90.0;
pub const ROTATE_DURATION_MS: u32 = 300;

// Rest pose
pub const MODEL_REST_SCALE: f32 = 5.0;
pub const MODEL_REST_ROTATION_DEG: [f32; 3] = [-90.0, 0.0, 0.0];
pub const WRAPPER_REST_ROTATION_DEG: [f32; 3] = [0.0, 0.0, 0.0];
pub const WRAPPER_REST_SCALE: f32 = 1.0;

// Page lifecycle
pub const LOADING_SCREEN_DELAY_MS: u32 = 100;
pub const INSTRUCTIONS_VISIBLE_MS: u32 = 5000;
pub const ORIENTATION_RESET_DELAY_MS: u32 = 500;
pub const MOUNT_RETRY_MS: u32 = 100; // fallback poll when MutationObserver is unavailable

// Primary sample
pub const SAMPLE_VOLUME: f64 = 0.7;

// UI click tone
pub const TONE_START_HZ: f32 = 800.0;
pub const TONE_END_HZ: f32 = 300.0;
pub const TONE_START_GAIN: f32 = 0.3;
pub const TONE_END_GAIN: f32 = 0.01;
pub const TONE_DURATION_SEC: f64 = 0.1;

// Topics
pub const DEFAULT_TOPIC: &str = "general";
