//! Viewer camera and the orbit controller that drives it.
//!
//! These types avoid platform-specific APIs and are shared by the native and
//! web frontends for both rendering and picking.

use crate::config::SphereConfig;
use glam::{Mat4, Vec3, Vec4};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Compute a world-space ray through a pixel of a `width` x `height`
    /// viewport.
    ///
    /// Returns `(ray_origin, ray_direction)` in world space.
    pub fn screen_ray(&self, sx: f32, sy: f32, width: f32, height: f32) -> (Vec3, Vec3) {
        let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let rd = (p1 - self.eye).normalize_or_zero();
        (self.eye, rd)
    }
}

const ELEVATION_LIMIT: f32 = FRAC_PI_2 - 0.01;
const ZOOM_STEP: f32 = 0.95;

/// Damped orbit around the sphere centre: drag to rotate, wheel to zoom.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub azimuth: f32,
    pub elevation: f32,
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub damping: f32,
    pub fovy_radians: f32,
    pending_azimuth: f32,
    pending_elevation: f32,
}

impl OrbitCamera {
    pub fn new(config: &SphereConfig) -> Self {
        Self {
            target: Vec3::ZERO,
            azimuth: 0.0,
            elevation: 0.0,
            distance: config
                .camera_distance
                .clamp(config.min_distance, config.max_distance),
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            damping: config.rotation_damping,
            fovy_radians: config.fovy_radians,
            pending_azimuth: 0.0,
            pending_elevation: 0.0,
        }
    }

    /// Queue a rotation from a pointer drag of `(dx, dy)` pixels.
    pub fn drag(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.pending_azimuth -= TAU * dx / h;
        self.pending_elevation += TAU * dy / h;
    }

    /// Positive steps move away from the target.
    pub fn zoom(&mut self, steps: f32) {
        self.distance =
            (self.distance * ZOOM_STEP.powf(-steps)).clamp(self.min_distance, self.max_distance);
    }

    /// Apply queued rotation with damping. While disabled, queued input is
    /// discarded and the camera holds still.
    pub fn update(&mut self, dt: f32, enabled: bool) {
        if !enabled {
            self.pending_azimuth = 0.0;
            self.pending_elevation = 0.0;
            return;
        }
        let fraction = if self.damping > 0.0 {
            // damping is specified per 60 Hz frame
            1.0 - (1.0 - self.damping.min(1.0)).powf(dt.max(0.0) * 60.0)
        } else {
            1.0
        };
        let d_az = self.pending_azimuth * fraction;
        let d_el = self.pending_elevation * fraction;
        self.pending_azimuth -= d_az;
        self.pending_elevation -= d_el;
        self.azimuth = (self.azimuth + d_az).rem_euclid(TAU);
        self.elevation = (self.elevation + d_el).clamp(-ELEVATION_LIMIT, ELEVATION_LIMIT);
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        let (sin_el, cos_el) = self.elevation.sin_cos();
        self.target + Vec3::new(cos_el * sin_az, sin_el, cos_el * cos_az) * self.distance
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians: self.fovy_radians,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}
