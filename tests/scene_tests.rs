// Host-side tests for scene attribute formatting and event vocabularies.

mod support;

use glam::Vec3;
use support::core::readiness::*;
use support::core::scene::*;
use support::core::state::AppState;

#[test]
fn vec3_formats_as_space_separated_triple() {
    assert_eq!(format_vec3(Vec3::new(-90.0, 0.0, 0.0)), "-90 0 0");
    assert_eq!(format_vec3(Vec3::new(0.0, 450.0, 0.0)), "0 450 0");
    assert_eq!(format_vec3(Vec3::splat(5.5)), "5.5 5.5 5.5");
}

#[test]
fn vec3_parses_partial_and_rejects_garbage() {
    assert_eq!(parse_vec3("0 90 0"), Some(Vec3::new(0.0, 90.0, 0.0)));
    assert_eq!(parse_vec3("  1.5\t2 "), Some(Vec3::new(1.5, 2.0, 0.0)));
    assert_eq!(parse_vec3(""), None);
    assert_eq!(parse_vec3("a b c"), None);
    assert_eq!(parse_vec3("1 2 3 4"), None);
}

#[test]
fn bounce_animation_renders_component_string() {
    let anim = Animation::new(
        AnimationSlot::Click,
        AnimatedProperty::Scale,
        Vec3::splat(5.2),
        200,
    )
    .starting_at(Vec3::splat(5.0))
    .alternate(1);
    assert_eq!(
        anim.to_attribute_value(),
        "property: scale; from: 5 5 5; to: 5.2 5.2 5.2; dur: 200; dir: alternate; loop: 1; easing: easeOutQuad"
    );
}

#[test]
fn rotate_animation_renders_component_string() {
    let anim = Animation::new(
        AnimationSlot::Rotate,
        AnimatedProperty::Rotation,
        Vec3::new(0.0, 90.0, 0.0),
        300,
    )
    .easing(Easing::EaseInOutQuad);
    assert_eq!(
        anim.to_attribute_value(),
        "property: rotation; to: 0 90 0; dur: 300; easing: easeInOutQuad"
    );
}

#[test]
fn slots_map_to_distinct_attribute_names() {
    let names: Vec<_> = AnimationSlot::ALL.iter().map(|s| s.attribute_name()).collect();
    assert_eq!(
        names,
        vec!["animation", "animation__click", "animation__hover", "animation__rotate"]
    );
    assert_eq!(SceneNode::Wrapper.element_id(), "penguin-wrapper");
    assert_eq!(SceneNode::Model.element_id(), "penguin");
}

#[test]
fn lifecycle_names_round_trip() {
    for name in SceneLifecycle::EVENT_NAMES {
        assert!(SceneLifecycle::from_event_name(name).is_some(), "{}", name);
    }
    assert_eq!(SceneLifecycle::from_event_name("click"), None);
}

#[test]
fn gesture_names_round_trip() {
    for name in GestureEvent::EVENT_NAMES {
        assert!(GestureEvent::from_event_name(name).is_some(), "{}", name);
    }
    assert_eq!(GestureEvent::from_event_name("pinch"), None);
    assert_eq!(GestureEvent::PinchStart.describe(), "started - pinch");
}

#[test]
fn loaded_and_renderstart_initialize_once() {
    let mut state = AppState::default();
    assert!(!state.scene_loaded);
    assert_eq!(admit(&mut state, SceneLifecycle::CameraReady), Admission::Informational);
    assert!(!state.scene_loaded);
    assert_eq!(admit(&mut state, SceneLifecycle::RenderStart), Admission::Initialize);
    assert!(state.scene_loaded);
    assert_eq!(admit(&mut state, SceneLifecycle::Loaded), Admission::AlreadyInitialized);
    assert_eq!(admit(&mut state, SceneLifecycle::RenderStart), Admission::AlreadyInitialized);
}
