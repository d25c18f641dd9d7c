//! Arena of photo entities indexed by their stable index.

use crate::animation::Transform;
use crate::config::SphereConfig;
use crate::layout::{entity_size, generate_sphere_points, image_for_index, SpherePoint};
use crate::photo::{fallback_color, ImageRef, LoadError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageStatus {
    Pending,
    Loading,
    Loaded,
    Failed,
}

/// What the renderer paints a photo with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fill {
    Texture,
    Color([f32; 4]),
}

#[derive(Clone, Debug)]
pub struct PhotoEntity {
    pub index: usize,
    pub image_ref: Option<ImageRef>,
    pub original_position: SpherePoint,
    pub transform: Transform,
    pub size: f32,
    pub image: ImageStatus,
    pub fallback: [f32; 4],
}

impl PhotoEntity {
    #[inline]
    pub fn fill(&self) -> Fill {
        match self.image {
            ImageStatus::Loaded => Fill::Texture,
            _ => Fill::Color(self.fallback),
        }
    }
}

/// One load attempt, tagged with the registry generation it was issued for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRequest {
    pub index: usize,
    pub generation: u64,
    pub image_ref: ImageRef,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// The entity was torn down or already resolved; the result was dropped.
    Stale,
}

#[derive(Debug, Default)]
pub struct EntityRegistry {
    entities: Vec<PhotoEntity>,
    image_refs: Vec<ImageRef>,
    generation: u64,
}

impl EntityRegistry {
    pub fn new(config: &SphereConfig, image_refs: Vec<ImageRef>) -> Self {
        let mut registry = Self {
            entities: Vec::new(),
            image_refs,
            generation: 0,
        };
        registry.populate(config);
        registry
    }

    /// Tear down every entity and lay out `config.photo_count` fresh ones.
    /// Outstanding image requests become stale.
    pub fn rebuild(&mut self, config: &SphereConfig) {
        self.generation += 1;
        self.populate(config);
    }

    fn populate(&mut self, config: &SphereConfig) {
        let points = generate_sphere_points(config.photo_count, config.sphere_radius);
        self.entities = points
            .into_iter()
            .enumerate()
            .map(|(index, point)| {
                let image_ref = image_for_index(&self.image_refs, index).cloned();
                let image = if image_ref.is_some() {
                    ImageStatus::Pending
                } else {
                    ImageStatus::Failed
                };
                PhotoEntity {
                    index,
                    image_ref,
                    original_position: point,
                    transform: Transform::at(point),
                    size: entity_size(config, index),
                    image,
                    fallback: fallback_color(index),
                }
            })
            .collect();
        log::info!(
            "[layout] generation={} photos={} images={}",
            self.generation,
            self.entities.len(),
            self.image_refs.len()
        );
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&PhotoEntity> {
        self.entities.get(index)
    }

    #[inline]
    pub fn entities(&self) -> &[PhotoEntity] {
        &self.entities
    }

    #[inline]
    pub fn entities_mut(&mut self) -> &mut [PhotoEntity] {
        &mut self.entities
    }

    /// Hand out one request per entity that has not been attempted yet.
    pub fn take_image_requests(&mut self) -> Vec<ImageRequest> {
        let generation = self.generation;
        self.entities
            .iter_mut()
            .filter(|e| e.image == ImageStatus::Pending)
            .filter_map(|e| {
                let image_ref = e.image_ref.clone()?;
                e.image = ImageStatus::Loading;
                Some(ImageRequest {
                    index: e.index,
                    generation,
                    image_ref,
                })
            })
            .collect()
    }

    /// Apply the result of `request` exactly once.
    pub fn complete_image<T>(
        &mut self,
        request: &ImageRequest,
        outcome: &Result<T, LoadError>,
    ) -> Completion {
        if request.generation != self.generation {
            log::debug!(
                "[image] dropping result for {} from generation {}",
                request.image_ref,
                request.generation
            );
            return Completion::Stale;
        }
        let Some(entity) = self.entities.get_mut(request.index) else {
            return Completion::Stale;
        };
        if entity.image != ImageStatus::Loading {
            return Completion::Stale;
        }
        entity.image = match outcome {
            Ok(_) => ImageStatus::Loaded,
            Err(e) => {
                log::warn!(
                    "[image] photo {} ({}) falls back to colour: {}",
                    request.index,
                    request.image_ref,
                    e
                );
                ImageStatus::Failed
            }
        };
        Completion::Applied
    }
}
