use crate::constants::WHEEL_LINE_HEIGHT_PX;
use crate::dom;
use crate::frame::canvas_aspect;
use glam::Vec2;
use sphere_core::{InteractionEvent, OrbitCamera, PhotoSphere, PointerState, WHEEL_PIXELS_PER_STEP};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<PhotoSphere>>,
    pub orbit: Rc<RefCell<OrbitCamera>>,
    pub pointer: Rc<RefCell<PointerState>>,
}

impl InputWiring {
    /// Photo under canvas pixel (`x`, `y`).
    fn pick(&self, x: f32, y: f32) -> Option<usize> {
        let camera = self.orbit.borrow().camera(canvas_aspect(&self.canvas));
        let (ro, rd) = camera.screen_ray(
            x,
            y,
            self.canvas.width() as f32,
            self.canvas.height() as f32,
        );
        self.scene.borrow().pick(ro, rd)
    }
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = pointer_canvas_px(&ev, &w.canvas);
        let (delta, dragging) = {
            let mut pointer = w.pointer.borrow_mut();
            let delta = pointer.move_to(pos.x, pos.y);
            (delta, pointer.dragging())
        };

        if let (Some(delta), true) = (delta, dragging) {
            if w.scene.borrow().orbit_enabled() {
                w.orbit
                    .borrow_mut()
                    .drag(delta.x, delta.y, w.canvas.height() as f32);
            }
        }

        let hover = if dragging { None } else { w.pick(pos.x, pos.y) };
        if hover != w.scene.borrow().hover() {
            w.scene.borrow_mut().set_hover(hover);
            dom::set_cursor(&w.canvas, hover.is_some());
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let pos = pointer_canvas_px(&ev, &w.canvas);
        w.pointer.borrow_mut().press(pos.x, pos.y);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (clicked, pos) = {
            let mut pointer = w.pointer.borrow_mut();
            (pointer.release(), pointer.position())
        };
        if !clicked {
            return;
        }
        let event = match w.pick(pos.x, pos.y) {
            Some(i) => InteractionEvent::EntityClicked(i),
            None => InteractionEvent::BackgroundClicked,
        };
        w.scene.borrow_mut().handle(event);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        if !w.scene.borrow().orbit_enabled() {
            return;
        }
        let mut dy = ev.delta_y() as f32;
        if ev.delta_mode() == web::WheelEvent::DOM_DELTA_LINE {
            dy *= WHEEL_LINE_HEIGHT_PX;
        }
        // wheel down moves the camera away
        w.orbit.borrow_mut().zoom(dy / WHEEL_PIXELS_PER_STEP);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
