use crate::entity::PhotoEntity;
use glam::{Quat, Vec3};

/// Distance along the ray to a disc of `radius` at `center` facing `normal`.
#[inline]
pub fn ray_disc(
    ray_origin: Vec3,
    ray_dir: Vec3,
    center: Vec3,
    normal: Vec3,
    radius: f32,
) -> Option<f32> {
    let denom = ray_dir.dot(normal);
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = (center - ray_origin).dot(normal) / denom;
    if t < 0.0 {
        return None;
    }
    let hit = ray_origin + ray_dir * t;
    (hit.distance_squared(center) <= radius * radius).then_some(t)
}

/// Distance along the ray to one photo's disc; the photo lives in the space
/// of `container`.
pub fn hit_entity(
    entity: &PhotoEntity,
    container: Quat,
    ray_origin: Vec3,
    ray_dir: Vec3,
) -> Option<f32> {
    let center = container * entity.transform.position;
    let normal = container * entity.transform.facing();
    let radius = 0.5 * entity.size * entity.transform.scale;
    ray_disc(ray_origin, ray_dir, center, normal, radius)
}

/// Index of the nearest photo hit by the ray; photos live in the space of
/// `container`.
pub fn pick_entity(
    entities: &[PhotoEntity],
    container: Quat,
    ray_origin: Vec3,
    ray_dir: Vec3,
) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for e in entities {
        if let Some(t) = hit_entity(e, container, ray_origin, ray_dir) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((e.index, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}
