//! Golden-angle spiral placement of photos on the sphere surface.

use crate::config::SphereConfig;
use crate::photo::ImageRef;
use fnv::FnvHasher;
use glam::Vec3;
use std::f64::consts::TAU;
use std::hash::Hasher;

pub type SpherePoint = Vec3;

/// Spread `count` points evenly over a sphere of `radius`.
///
/// Inclination follows `acos(1 - 2t)` so every band of equal height receives
/// the same number of points; azimuth advances by a golden-ratio multiple of
/// a full turn so no two points share a meridian. The output depends only on
/// the inputs.
pub fn generate_sphere_points(count: usize, radius: f32) -> Vec<SpherePoint> {
    let golden_ratio = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let angle_increment = TAU * golden_ratio;
    let radius = radius as f64;

    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64;
            let inclination = (1.0 - 2.0 * t).acos();
            let azimuth = angle_increment * i as f64;
            let (sin_inc, cos_inc) = inclination.sin_cos();
            let (sin_az, cos_az) = azimuth.sin_cos();
            Vec3::new(
                (sin_inc * cos_az * radius) as f32,
                (sin_inc * sin_az * radius) as f32,
                (cos_inc * radius) as f32,
            )
        })
        .collect()
}

/// Cyclic image assignment; `None` when there are no references at all.
#[inline]
pub fn image_for_index(refs: &[ImageRef], index: usize) -> Option<&ImageRef> {
    if refs.is_empty() {
        return None;
    }
    refs.get(index % refs.len())
}

/// Per-photo diameter, varied deterministically by `size_jitter`.
pub fn entity_size(config: &SphereConfig, index: usize) -> f32 {
    let spread = unit_hash(index) * 2.0 - 1.0;
    config.photo_size * (1.0 + config.size_jitter * spread)
}

/// Stable hash of an index mapped into [0, 1).
pub(crate) fn unit_hash(index: usize) -> f32 {
    let mut hasher = FnvHasher::default();
    hasher.write_u64(index as u64);
    // top 24 bits fit an f32 mantissa exactly
    (hasher.finish() >> 40) as f32 / (1u64 << 24) as f32
}
