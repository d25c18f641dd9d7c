use crate::constants::CLICK_DRAG_THRESHOLD_PX;
use glam::Vec2;

/// Pointer position plus click-versus-drag tracking, in viewport pixels.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
    press: Vec2,
    dragging: bool,
}

impl PointerState {
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn dragging(&self) -> bool {
        self.dragging
    }

    pub fn press(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.down = true;
        self.press = Vec2::new(x, y);
        self.dragging = false;
    }

    /// Move the pointer; returns the drag delta while a button is held.
    pub fn move_to(&mut self, x: f32, y: f32) -> Option<Vec2> {
        let delta = Vec2::new(x - self.x, y - self.y);
        self.x = x;
        self.y = y;
        if !self.down {
            return None;
        }
        if !self.dragging && self.press.distance(Vec2::new(x, y)) > CLICK_DRAG_THRESHOLD_PX {
            self.dragging = true;
        }
        Some(delta)
    }

    /// Release the button; true when the press never became a drag.
    pub fn release(&mut self) -> bool {
        let was_click = self.down && !self.dragging;
        self.down = false;
        self.dragging = false;
        was_click
    }
}
