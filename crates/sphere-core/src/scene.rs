//! The photo sphere as a whole: registry, focus, hover and idle rotation.

use crate::animation::{animate_entities, AmbientRotation, AnimationFrame};
use crate::config::{ConfigError, SphereConfig};
use crate::entity::{Completion, EntityRegistry, ImageRequest, ImageStatus, PhotoEntity};
use crate::focus::{FocusChange, FocusState, InteractionEvent};
use crate::photo::{ImageRef, LoadError};
use crate::picking::{hit_entity, pick_entity};
use glam::{Quat, Vec3};

pub struct PhotoSphere {
    config: SphereConfig,
    registry: EntityRegistry,
    focus: FocusState,
    hover: Option<usize>,
    ambient: AmbientRotation,
    since_focus_change: f32,
}

impl PhotoSphere {
    pub fn new(config: SphereConfig, image_refs: Vec<ImageRef>) -> Result<Self, ConfigError> {
        config.validate()?;
        let registry = EntityRegistry::new(&config, image_refs);
        let ambient = AmbientRotation::new(config.ambient_rotation);
        Ok(Self {
            since_focus_change: config.focus_animation_duration,
            config,
            registry,
            focus: FocusState::None,
            hover: None,
            ambient,
        })
    }

    #[inline]
    pub fn config(&self) -> &SphereConfig {
        &self.config
    }

    #[inline]
    pub fn focus(&self) -> FocusState {
        self.focus
    }

    #[inline]
    pub fn hover(&self) -> Option<usize> {
        self.hover
    }

    #[inline]
    pub fn entities(&self) -> &[PhotoEntity] {
        self.registry.entities()
    }

    #[inline]
    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    /// Rotation applied to the whole collection this frame.
    #[inline]
    pub fn container_rotation(&self) -> Quat {
        self.ambient.rotation()
    }

    /// Whether the camera may be orbited by the user.
    #[inline]
    pub fn orbit_enabled(&self) -> bool {
        !self.focus.any_focused()
    }

    /// True once the last focus transition has had its full duration.
    pub fn focus_settled(&self) -> bool {
        self.since_focus_change >= self.config.focus_animation_duration
    }

    pub fn handle(&mut self, event: InteractionEvent) -> FocusChange {
        let previous = self.focus;
        let current = previous.on_event(event, self.registry.len());
        if current != previous {
            self.focus = current;
            self.since_focus_change = 0.0;
            match current {
                FocusState::Focused(i) => log::info!("[focus] photo {}", i),
                FocusState::None => log::info!("[focus] cleared"),
            }
        }
        FocusChange { previous, current }
    }

    pub fn set_hover(&mut self, hover: Option<usize>) {
        self.hover = hover.filter(|i| *i < self.registry.len());
    }

    /// Advance the idle rotation and every photo by one frame.
    pub fn advance(&mut self, frame: &AnimationFrame) {
        self.since_focus_change += frame.dt.max(0.0);
        self.ambient.advance(frame.dt, self.focus);
        let local = frame.to_local(self.ambient.rotation());
        animate_entities(
            self.registry.entities_mut(),
            self.focus,
            &local,
            &self.config,
        );
    }

    /// Photo under a world-space ray. The focused photo wins wherever it
    /// covers the ray.
    pub fn pick(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<usize> {
        let container = self.ambient.rotation();
        let focused = self
            .focus
            .focused()
            .and_then(|i| self.registry.get(i))
            .filter(|e| hit_entity(e, container, ray_origin, ray_dir).is_some());
        if let Some(e) = focused {
            return Some(e.index);
        }
        pick_entity(
            self.registry.entities(),
            container,
            ray_origin,
            ray_dir,
        )
    }

    /// Image to present full-size: the focused photo's, once it has loaded.
    pub fn overlay_ref(&self) -> Option<&ImageRef> {
        self.focus
            .focused()
            .and_then(|i| self.registry.get(i))
            .filter(|e| e.image == ImageStatus::Loaded)
            .and_then(|e| e.image_ref.as_ref())
    }

    /// Regenerate the layout for `count` photos. Focus and hover are cleared
    /// and in-flight image loads become stale.
    pub fn rebuild(&mut self, count: usize) {
        self.config.photo_count = count;
        self.registry.rebuild(&self.config);
        self.focus = FocusState::None;
        self.hover = None;
        self.since_focus_change = self.config.focus_animation_duration;
    }

    pub fn take_image_requests(&mut self) -> Vec<ImageRequest> {
        self.registry.take_image_requests()
    }

    pub fn complete_image<T>(
        &mut self,
        request: &ImageRequest,
        outcome: &Result<T, LoadError>,
    ) -> Completion {
        self.registry.complete_image(request, outcome)
    }
}
