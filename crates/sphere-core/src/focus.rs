//! Scene-wide focus selection and the per-photo state it implies.

/// Pointer interactions the front-ends report to the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionEvent {
    EntityClicked(usize),
    BackgroundClicked,
}

/// At most one focused photo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusState {
    #[default]
    None,
    Focused(usize),
}

/// Animation state of a single photo under a given `FocusState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityFocus {
    Unfocused,
    Focused,
    Backgrounded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusChange {
    pub previous: FocusState,
    pub current: FocusState,
}

impl FocusChange {
    #[inline]
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

impl FocusState {
    #[inline]
    pub fn focused(self) -> Option<usize> {
        match self {
            FocusState::Focused(i) => Some(i),
            FocusState::None => None,
        }
    }

    #[inline]
    pub fn any_focused(self) -> bool {
        matches!(self, FocusState::Focused(_))
    }

    /// Next state after `event`; clicks on indices outside `count` are ignored.
    pub fn on_event(self, event: InteractionEvent, count: usize) -> FocusState {
        match event {
            InteractionEvent::BackgroundClicked => FocusState::None,
            InteractionEvent::EntityClicked(i) if i >= count => self,
            InteractionEvent::EntityClicked(i) => match self {
                FocusState::Focused(current) if current == i => FocusState::None,
                _ => FocusState::Focused(i),
            },
        }
    }

    pub fn entity_state(self, index: usize) -> EntityFocus {
        match self {
            FocusState::None => EntityFocus::Unfocused,
            FocusState::Focused(i) if i == index => EntityFocus::Focused,
            FocusState::Focused(_) => EntityFocus::Backgrounded,
        }
    }
}
