// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive() {
    assert!(TAP_COOLDOWN_MS > 0);
    assert!(TAP_BOUNCE_DURATION_MS > 0);
    assert!(HOVER_DURATION_MS > 0);
    assert!(ROTATE_DURATION_MS > 0);
    assert!(LOADING_SCREEN_DELAY_MS > 0);
    assert!(INSTRUCTIONS_VISIBLE_MS > 0);
    assert!(ORIENTATION_RESET_DELAY_MS > 0);
    assert!(MOUNT_RETRY_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn bounce_finishes_inside_cooldown() {
    // Alternate direction plays the tween twice.
    assert!(TAP_BOUNCE_DURATION_MS * 2 <= TAP_COOLDOWN_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scale_factors_enlarge_slightly() {
    assert!(TAP_BOUNCE_FACTOR > 1.0 && TAP_BOUNCE_FACTOR < 1.2);
    assert!(HOVER_SCALE_FACTOR > 1.0 && HOVER_SCALE_FACTOR < TAP_BOUNCE_FACTOR);
    assert!(MODEL_REST_SCALE > 0.0);
    assert_eq!(WRAPPER_REST_SCALE, 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tone_envelope_decays() {
    assert!(TONE_START_HZ > TONE_END_HZ);
    assert!(TONE_START_GAIN > TONE_END_GAIN);
    // Exponential ramps cannot reach zero.
    assert!(TONE_END_GAIN > 0.0 && TONE_END_HZ > 0.0);
    assert!(TONE_DURATION_SEC > 0.0);
    assert!(SAMPLE_VOLUME > 0.0 && SAMPLE_VOLUME <= 1.0);
}

#[test]
fn rest_pose_faces_model_upright() {
    assert_eq!(MODEL_REST_ROTATION_DEG, [-90.0, 0.0, 0.0]);
    assert_eq!(WRAPPER_REST_ROTATION_DEG, [0.0, 0.0, 0.0]);
    assert_eq!(ROTATE_STEP_DEG, 90.0);
    assert_eq!(DEFAULT_TOPIC, "general");
}
