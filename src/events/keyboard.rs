use sphere_core::{InteractionEvent, PhotoSphere};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Escape dismisses the focused photo, same as clicking the background.
pub fn handle_global_keydown(ev: &web::KeyboardEvent, scene: &Rc<RefCell<PhotoSphere>>) {
    if ev.repeat() {
        return;
    }
    if ev.key() == "Escape" && scene.borrow().focus().any_focused() {
        scene.borrow_mut().handle(InteractionEvent::BackgroundClicked);
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(scene: Rc<RefCell<PhotoSphere>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &scene);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
