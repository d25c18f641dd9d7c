// Host-side tests for transform easing and idle rotation.

use glam::{Quat, Vec3};
use sphere_core::*;

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn approx_v(a: Vec3, b: Vec3, eps: f32) -> bool {
    a.distance(b) <= eps
}

#[test]
fn approach_step_is_clamped() {
    assert_eq!(approach_step(5.0, 0.0), 0.0);
    assert_eq!(approach_step(5.0, -1.0), 0.0);
    assert!(approx(approach_step(5.0, 0.1), 0.5, 1e-6));
    assert_eq!(approach_step(5.0, 10.0), 1.0);
}

#[test]
fn approach_never_overshoots() {
    let mut value = 0.0;
    for _ in 0..200 {
        let next = approach(value, 1.0, approach_step(5.0, 0.05));
        assert!(next >= value && next <= 1.0);
        value = next;
    }
    assert!(approx(value, 1.0, 1e-4));

    let mut down = 3.0;
    for _ in 0..50 {
        down = approach(down, 1.0, 0.3);
        assert!(down >= 1.0);
    }
}

#[test]
fn focus_point_sits_in_front_of_viewer() {
    let frame = AnimationFrame::new(0.016, Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    assert!(approx_v(frame.focus_point(8.0), Vec3::new(0.0, 0.0, 2.0), 1e-5));
}

#[test]
fn local_frame_inverts_container_rotation() {
    let container = Quat::from_rotation_y(0.7);
    let frame = AnimationFrame::new(0.1, Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    let local = frame.to_local(container);
    assert!(approx_v(container * local.viewer, frame.viewer, 1e-4));
    assert_eq!(local.dt, frame.dt);
}

#[test]
fn targets_per_entity_state() {
    let config = SphereConfig::default();
    let origin = Vec3::new(5.0, 0.0, 0.0);
    let fp = Vec3::new(0.0, 0.0, 2.0);

    let idle = target_transform(EntityFocus::Unfocused, origin, fp, &config);
    assert_eq!(idle.position, origin);
    assert_eq!((idle.scale, idle.opacity, idle.roundness), (1.0, 1.0, 1.0));

    let focused = target_transform(EntityFocus::Focused, origin, fp, &config);
    assert_eq!(focused.position, fp);
    assert_eq!(focused.scale, config.focused_scale);
    assert_eq!(focused.opacity, 1.0);
    assert_eq!(focused.roundness, 1.0);

    let dimmed = target_transform(EntityFocus::Backgrounded, origin, fp, &config);
    assert_eq!(dimmed.position, origin);
    assert_eq!(dimmed.scale, 1.0);
    assert_eq!(dimmed.opacity, config.dimmed_opacity);
}

#[test]
fn rectangle_presentation_squares_the_focused_photo() {
    let config = SphereConfig::default().with_presentation(FocusPresentation::Rectangle);
    let focused = target_transform(EntityFocus::Focused, Vec3::X, Vec3::ZERO, &config);
    assert_eq!(focused.roundness, 0.0);
    let dimmed = target_transform(EntityFocus::Backgrounded, Vec3::X, Vec3::ZERO, &config);
    assert_eq!(dimmed.roundness, 1.0);
}

#[test]
fn billboard_faces_the_viewer() {
    let viewer = Vec3::new(0.0, 0.0, 10.0);
    for position in [
        Vec3::new(5.0, 0.0, 0.0),
        Vec3::new(-3.0, 2.0, -3.0),
        Vec3::new(0.0, 5.0, 0.0),
        Vec3::new(0.0, 0.0, -5.0),
    ] {
        let q = billboard_rotation(position, viewer);
        let expected = (viewer - position).normalize();
        assert!(approx_v(q * Vec3::Z, expected, 1e-4), "at {:?}", position);
        assert!(approx(q.length(), 1.0, 1e-4));
    }
}

#[test]
fn billboard_handles_viewer_straight_above() {
    let q = billboard_rotation(Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0));
    assert!(approx_v(q * Vec3::Z, Vec3::Y, 1e-4));
    assert_eq!(billboard_rotation(Vec3::ONE, Vec3::ONE), Quat::IDENTITY);
}

fn registry_with(count: usize) -> (SphereConfig, EntityRegistry) {
    let config = SphereConfig {
        photo_count: count,
        ..SphereConfig::default()
    };
    let registry = EntityRegistry::new(&config, Vec::new());
    (config, registry)
}

#[test]
fn zero_dt_leaves_transforms_unchanged() {
    let (config, mut registry) = registry_with(12);
    let before: Vec<_> = registry.entities().iter().map(|e| e.transform.position).collect();
    let frame = AnimationFrame::new(0.0, Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    animate_entities(registry.entities_mut(), FocusState::Focused(2), &frame, &config);
    for (e, p) in registry.entities().iter().zip(before) {
        assert_eq!(e.transform.position, p);
        assert_eq!(e.transform.scale, 1.0);
        assert_eq!(e.transform.opacity, 1.0);
    }
}

#[test]
fn focused_photo_converges_on_focus_point() {
    let (config, mut registry) = registry_with(12);
    let frame = AnimationFrame::new(0.1, Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    let focus = FocusState::Focused(5);
    for _ in 0..60 {
        animate_entities(registry.entities_mut(), focus, &frame, &config);
    }
    let focused = &registry.entities()[5];
    assert!(approx_v(focused.transform.position, Vec3::new(0.0, 0.0, 2.0), 1e-3));
    assert!(approx(focused.transform.scale, config.focused_scale, 1e-3));
    assert!(approx(focused.transform.opacity, 1.0, 1e-6));

    for e in registry.entities().iter().filter(|e| e.index != 5) {
        assert!(approx_v(e.transform.position, e.original_position, 1e-5));
        assert!(approx(e.transform.opacity, config.dimmed_opacity, 1e-3));
    }
}

#[test]
fn focused_photo_moves_monotonically() {
    let (config, mut registry) = registry_with(8);
    let frame = AnimationFrame::new(1.0 / 60.0, Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    let target = frame.focus_point(focus_distance(&frame, &config));
    let mut last = registry.entities()[3].transform.position.distance(target);
    for _ in 0..30 {
        animate_entities(registry.entities_mut(), FocusState::Focused(3), &frame, &config);
        let d = registry.entities()[3].transform.position.distance(target);
        assert!(d < last);
        last = d;
    }
}

#[test]
fn unfocusing_returns_photos_home() {
    let (config, mut registry) = registry_with(8);
    let frame = AnimationFrame::new(0.1, Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    for _ in 0..30 {
        animate_entities(registry.entities_mut(), FocusState::Focused(1), &frame, &config);
    }
    for _ in 0..60 {
        animate_entities(registry.entities_mut(), FocusState::None, &frame, &config);
    }
    for e in registry.entities() {
        assert!(approx_v(e.transform.position, e.original_position, 1e-3));
        assert!(approx(e.transform.scale, 1.0, 1e-3));
        assert!(approx(e.transform.opacity, 1.0, 1e-3));
    }
}

#[test]
fn ambient_rotation_freezes_while_focused() {
    let mut ambient = AmbientRotation::new(Vec3::new(0.1, 0.2, 0.0));
    ambient.advance(1.0, FocusState::None);
    assert!(approx_v(ambient.angles, Vec3::new(0.1, 0.2, 0.0), 1e-6));
    let held = ambient.angles;
    ambient.advance(5.0, FocusState::Focused(0));
    assert_eq!(ambient.angles, held);
}

#[test]
fn ambient_rotation_angles_wrap() {
    let mut ambient = AmbientRotation::new(Vec3::new(1.0, 0.0, 0.0));
    for _ in 0..100 {
        ambient.advance(0.5, FocusState::None);
    }
    assert!(ambient.angles.x >= 0.0 && ambient.angles.x < std::f32::consts::TAU);
}

#[test]
fn focus_distance_keeps_the_photo_outside_the_sphere() {
    let config = SphereConfig::default();
    let near = AnimationFrame::new(0.1, Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    assert_eq!(focus_distance(&near, &config), config.focus_distance);

    // a far focus distance is pulled in front of the sphere surface
    let far = SphereConfig {
        focus_distance: 8.0,
        ..SphereConfig::default()
    };
    let d = focus_distance(&near, &far);
    let half = 0.5 * far.photo_size * far.focused_scale;
    assert!(approx(d, 10.0 - far.sphere_radius - half, 1e-5));
    let point = near.focus_point(d);
    assert!(point.length() - half >= far.sphere_radius - 1e-4);

    // from inside the sphere the configured distance is kept
    let inside = AnimationFrame::new(0.1, Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO);
    assert_eq!(focus_distance(&inside, &far), far.focus_distance);
}
