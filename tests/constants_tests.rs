// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include its constants module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use sphere_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_constants_are_within_reasonable_bounds() {
    assert!(SPHERE_RADIUS > 0.0);
    assert!(MIN_PHOTO_COUNT > 0);
    assert!(PHOTO_SIZE > 0.0);
    assert!((0.0..1.0).contains(&PHOTO_SIZE_JITTER));

    // Animation timing
    assert!(APPROACH_RATE_PER_SEC > 0.0);
    assert!(FOCUS_ANIMATION_DURATION_SEC > 0.0);
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC < 1.0);

    // Focus look
    assert!(FOCUSED_SCALE > 1.0);
    assert!(DIMMED_OPACITY > 0.0 && DIMMED_OPACITY < 1.0);
    assert!(ROTATION_DAMPING > 0.0 && ROTATION_DAMPING <= 1.0);
    assert!(HOVER_BRIGHTEN >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_sees_the_whole_sphere() {
    assert!(ORBIT_MIN_DISTANCE < ORBIT_MAX_DISTANCE);
    assert!((ORBIT_MIN_DISTANCE..=ORBIT_MAX_DISTANCE).contains(&CAMERA_DISTANCE));
    assert!(CAMERA_DISTANCE > SPHERE_RADIUS + PHOTO_SIZE);
    // the focused photo lands between the camera and the sphere centre
    assert!(FOCUS_DISTANCE < CAMERA_DISTANCE);
    // ...and in front of the photos on its surface
    assert!(CAMERA_DISTANCE - FOCUS_DISTANCE > SPHERE_RADIUS + 0.5 * PHOTO_SIZE * FOCUSED_SCALE);
    assert!(CAMERA_FOVY_DEG > 0.0 && CAMERA_FOVY_DEG < 180.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn input_constants_are_positive() {
    assert!(CLICK_DRAG_THRESHOLD_PX > 0.0);
    assert!(WHEEL_PIXELS_PER_STEP > 0.0);
    assert!(WHEEL_LINE_HEIGHT_PX > 0.0);
    assert!(MAX_TEXTURE_DIM >= 64);
}

#[test]
fn dom_ids_are_distinct() {
    assert_ne!(CANVAS_ID, OVERLAY_ID);
    assert_ne!(OVERLAY_ID, OVERLAY_IMAGE_ID);
    assert!(!PHOTOS_DATA_KEY.is_empty());
    assert!(CLEAR_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
}

#[test]
fn default_config_mirrors_constants() {
    let config = SphereConfig::default();
    assert_eq!(config.photo_count, MIN_PHOTO_COUNT);
    assert_eq!(config.sphere_radius, SPHERE_RADIUS);
    assert_eq!(config.focused_scale, FOCUSED_SCALE);
    assert_eq!(config.presentation, FocusPresentation::Circle);
    assert!((config.fovy_radians - CAMERA_FOVY_DEG.to_radians()).abs() < 1e-6);
    assert!(config.validate().is_ok());
}
