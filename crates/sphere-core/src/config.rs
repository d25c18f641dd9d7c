//! Static scene configuration.

use crate::constants::*;
use glam::Vec3;
use thiserror::Error;

/// How the focused photo is presented once it reaches the viewer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusPresentation {
    /// The disc simply scales up.
    #[default]
    Circle,
    /// The disc morphs into a rounded rectangle while scaling up.
    Rectangle,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("sphere radius must be positive, got {0}")]
    Radius(f32),
    #[error("photo size must be positive, got {0}")]
    PhotoSize(f32),
    #[error("size jitter must be within [0, 1), got {0}")]
    SizeJitter(f32),
    #[error("approach rate must be positive, got {0}")]
    ApproachRate(f32),
    #[error("focused scale must be greater than 1, got {0}")]
    FocusedScale(f32),
    #[error("dimmed opacity must be within (0, 1), got {0}")]
    DimmedOpacity(f32),
    #[error("orbit distance range {min}..{max} is empty or not positive")]
    OrbitRange { min: f32, max: f32 },
    #[error("{field} must be finite and non-negative, got {value}")]
    NonNegative { field: &'static str, value: f32 },
}

#[derive(Clone, Debug)]
pub struct SphereConfig {
    pub photo_count: usize,
    pub sphere_radius: f32,
    pub photo_size: f32,
    pub size_jitter: f32,
    pub approach_rate: f32,
    pub focused_scale: f32,
    pub dimmed_opacity: f32,
    pub focus_animation_duration: f32,
    pub focus_distance: f32,
    pub rotation_damping: f32,
    pub ambient_rotation: Vec3,
    pub camera_distance: f32,
    pub fovy_radians: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub presentation: FocusPresentation,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            photo_count: MIN_PHOTO_COUNT,
            sphere_radius: SPHERE_RADIUS,
            photo_size: PHOTO_SIZE,
            size_jitter: PHOTO_SIZE_JITTER,
            approach_rate: APPROACH_RATE_PER_SEC,
            focused_scale: FOCUSED_SCALE,
            dimmed_opacity: DIMMED_OPACITY,
            focus_animation_duration: FOCUS_ANIMATION_DURATION_SEC,
            focus_distance: FOCUS_DISTANCE,
            rotation_damping: ROTATION_DAMPING,
            ambient_rotation: AMBIENT_ROTATION_RATES,
            camera_distance: CAMERA_DISTANCE,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            presentation: FocusPresentation::Circle,
        }
    }
}

impl SphereConfig {
    /// At least `MIN_PHOTO_COUNT` photos, more when there are more images.
    pub fn with_photo_count_for(mut self, image_count: usize) -> Self {
        self.photo_count = MIN_PHOTO_COUNT.max(image_count);
        self
    }

    pub fn with_presentation(mut self, presentation: FocusPresentation) -> Self {
        self.presentation = presentation;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sphere_radius > 0.0) {
            return Err(ConfigError::Radius(self.sphere_radius));
        }
        if !(self.photo_size > 0.0) {
            return Err(ConfigError::PhotoSize(self.photo_size));
        }
        if !(0.0..1.0).contains(&self.size_jitter) {
            return Err(ConfigError::SizeJitter(self.size_jitter));
        }
        if !(self.approach_rate > 0.0) {
            return Err(ConfigError::ApproachRate(self.approach_rate));
        }
        if !(self.focused_scale > 1.0) {
            return Err(ConfigError::FocusedScale(self.focused_scale));
        }
        if !(self.dimmed_opacity > 0.0 && self.dimmed_opacity < 1.0) {
            return Err(ConfigError::DimmedOpacity(self.dimmed_opacity));
        }
        if !(self.min_distance > 0.0 && self.min_distance <= self.max_distance) {
            return Err(ConfigError::OrbitRange {
                min: self.min_distance,
                max: self.max_distance,
            });
        }
        for (field, value) in [
            ("focus_animation_duration", self.focus_animation_duration),
            ("focus_distance", self.focus_distance),
            ("rotation_damping", self.rotation_damping),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::NonNegative { field, value });
            }
        }
        Ok(())
    }
}
