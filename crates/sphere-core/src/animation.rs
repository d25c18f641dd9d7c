//! Per-frame easing of photo transforms toward their focus-driven targets.
//!
//! Every animated field follows the same exponential approach:
//! `current += (target - current) * min(1, rate * dt)`. The step is
//! compensated by the frame's elapsed time, never overshoots, and only
//! reaches the target asymptotically.

use crate::config::{FocusPresentation, SphereConfig};
use crate::entity::PhotoEntity;
use crate::focus::{EntityFocus, FocusState};
use glam::{EulerRot, Mat3, Quat, Vec3};
use std::f32::consts::TAU;

/// Ephemeral per-frame input: elapsed time and where the viewer is.
#[derive(Clone, Copy, Debug)]
pub struct AnimationFrame {
    pub dt: f32,
    pub viewer: Vec3,
    pub look_at: Vec3,
}

impl AnimationFrame {
    pub fn new(dt: f32, viewer: Vec3, look_at: Vec3) -> Self {
        Self {
            dt,
            viewer,
            look_at,
        }
    }

    /// Point `distance` in front of the viewer along the viewing axis.
    pub fn focus_point(&self, distance: f32) -> Vec3 {
        self.viewer + (self.look_at - self.viewer).normalize_or_zero() * distance
    }

    /// Same frame expressed in a container's local space.
    pub fn to_local(&self, container: Quat) -> Self {
        let inv = container.inverse();
        Self {
            dt: self.dt,
            viewer: inv * self.viewer,
            look_at: inv * self.look_at,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub scale: f32,
    pub opacity: f32,
    /// 1 renders a disc, 0 a rounded rectangle.
    pub roundness: f32,
    pub orientation: Quat,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformTarget {
    pub position: Vec3,
    pub scale: f32,
    pub opacity: f32,
    pub roundness: f32,
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            scale: 1.0,
            opacity: 1.0,
            roundness: 1.0,
            orientation: Quat::IDENTITY,
        }
    }

    /// Direction the flat image presents towards.
    #[inline]
    pub fn facing(&self) -> Vec3 {
        self.orientation * Vec3::Z
    }

    pub fn approach(&mut self, target: &TransformTarget, step: f32) {
        self.position = self.position.lerp(target.position, step);
        self.scale = approach(self.scale, target.scale, step);
        self.opacity = approach(self.opacity, target.opacity, step);
        self.roundness = approach(self.roundness, target.roundness, step);
    }
}

#[inline]
pub fn approach_step(rate: f32, dt: f32) -> f32 {
    (rate * dt.max(0.0)).min(1.0)
}

#[inline]
pub fn approach(current: f32, target: f32, step: f32) -> f32 {
    current + (target - current) * step
}

pub fn target_transform(
    state: EntityFocus,
    original_position: Vec3,
    focus_point: Vec3,
    config: &SphereConfig,
) -> TransformTarget {
    match state {
        EntityFocus::Unfocused => TransformTarget {
            position: original_position,
            scale: 1.0,
            opacity: 1.0,
            roundness: 1.0,
        },
        EntityFocus::Focused => TransformTarget {
            position: focus_point,
            scale: config.focused_scale,
            opacity: 1.0,
            roundness: match config.presentation {
                FocusPresentation::Circle => 1.0,
                FocusPresentation::Rectangle => 0.0,
            },
        },
        EntityFocus::Backgrounded => TransformTarget {
            position: original_position,
            scale: 1.0,
            opacity: config.dimmed_opacity,
            roundness: 1.0,
        },
    }
}

/// Rotation whose +Z axis points from `position` at `viewer`, keeping +Y up
/// where possible.
pub fn billboard_rotation(position: Vec3, viewer: Vec3) -> Quat {
    let Some(forward) = (viewer - position).try_normalize() else {
        return Quat::IDENTITY;
    };
    let up_hint = if forward.y.abs() > 0.999 {
        Vec3::Z
    } else {
        Vec3::Y
    };
    let right = up_hint.cross(forward).normalize();
    let up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}

/// How far in front of the viewer the focused photo settles: the configured
/// distance, pulled closer when that would put the enlarged photo among the
/// others on the sphere.
pub fn focus_distance(frame: &AnimationFrame, config: &SphereConfig) -> f32 {
    let half_focused = 0.5 * config.photo_size * config.focused_scale;
    let room = frame.viewer.distance(Vec3::ZERO) - config.sphere_radius - half_focused;
    if room > 0.0 {
        config.focus_distance.min(room)
    } else {
        // viewer is inside the sphere
        config.focus_distance
    }
}

/// Advance every photo by one frame. All photos see the same `focus` and
/// `frame`; `frame` must be in the photos' (container-local) space.
pub fn animate_entities(
    entities: &mut [PhotoEntity],
    focus: FocusState,
    frame: &AnimationFrame,
    config: &SphereConfig,
) {
    let step = approach_step(config.approach_rate, frame.dt);
    let focus_point = frame.focus_point(focus_distance(frame, config));
    for entity in entities.iter_mut() {
        let target = target_transform(
            focus.entity_state(entity.index),
            entity.original_position,
            focus_point,
            config,
        );
        entity.transform.approach(&target, step);
        entity.transform.orientation = billboard_rotation(entity.transform.position, frame.viewer);
    }
}

/// Slow idle spin of the whole collection; frozen while a photo is focused.
#[derive(Clone, Debug, Default)]
pub struct AmbientRotation {
    pub angles: Vec3,
    pub rates: Vec3,
}

impl AmbientRotation {
    pub fn new(rates: Vec3) -> Self {
        Self {
            angles: Vec3::ZERO,
            rates,
        }
    }

    pub fn advance(&mut self, dt: f32, focus: FocusState) {
        if focus.any_focused() {
            return;
        }
        let a = self.angles + self.rates * dt.max(0.0);
        self.angles = Vec3::new(a.x.rem_euclid(TAU), a.y.rem_euclid(TAU), a.z.rem_euclid(TAU));
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.angles.x, self.angles.y, self.angles.z)
    }
}
