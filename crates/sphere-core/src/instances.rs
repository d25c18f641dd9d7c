use crate::constants::HOVER_BRIGHTEN;
use crate::entity::Fill;
use crate::scene::PhotoSphere;
use glam::Vec3;

/// Per-photo vertex data, one instance per billboarded quad.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PhotoInstance {
    pub center: [f32; 3],
    pub size: f32,
    pub right: [f32; 3],
    pub roundness: f32,
    pub up: [f32; 3],
    pub textured: f32,
    pub color: [f32; 4],
}

/// Instances sorted back-to-front from `viewer`, each paired with the entity
/// index whose texture it samples. The focused photo is always drawn last.
pub fn build_instances(scene: &PhotoSphere, viewer: Vec3) -> Vec<(usize, PhotoInstance)> {
    let container = scene.container_rotation();
    let hover = scene.hover();
    let focused = scene.focus().focused();
    let mut out: Vec<(f32, usize, PhotoInstance)> = scene
        .entities()
        .iter()
        .map(|e| {
            let t = &e.transform;
            let center = container * t.position;
            let rotation = container * t.orientation;
            let brighten = if hover == Some(e.index) {
                HOVER_BRIGHTEN
            } else {
                1.0
            };
            let (textured, color) = match e.fill() {
                Fill::Texture => (1.0, [brighten, brighten, brighten, t.opacity]),
                Fill::Color(c) => (
                    0.0,
                    [
                        (c[0] * brighten).min(1.0),
                        (c[1] * brighten).min(1.0),
                        (c[2] * brighten).min(1.0),
                        c[3] * t.opacity,
                    ],
                ),
            };
            let instance = PhotoInstance {
                center: center.to_array(),
                size: e.size * t.scale,
                right: (rotation * Vec3::X).to_array(),
                roundness: t.roundness,
                up: (rotation * Vec3::Y).to_array(),
                textured,
                color,
            };
            let depth = if focused == Some(e.index) {
                f32::NEG_INFINITY
            } else {
                center.distance_squared(viewer)
            };
            (depth, e.index, instance)
        })
        .collect();
    out.sort_by(|a, b| b.0.total_cmp(&a.0));
    out.into_iter().map(|(_, i, inst)| (i, inst)).collect()
}
