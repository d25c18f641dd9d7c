#![cfg(target_arch = "wasm32")]
use instant::Instant;
use sphere_core::{OrbitCamera, PhotoSphere, PointerState, SphereConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod loader;
mod overlay;
mod render;

use constants::CANVAS_ID;

// Keep the canvas backing store at CSS size * devicePixelRatio
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sphere-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    wire_canvas_resize(&canvas);
    overlay::hide_photo(&document);

    let image_refs = dom::photo_refs(&canvas);
    if image_refs.is_empty() {
        log::warn!("[image] no data-photos on #{}; showing fallback colours", CANVAS_ID);
    }
    let config = SphereConfig::default().with_photo_count_for(image_refs.len());
    let mut scene = PhotoSphere::new(config, image_refs)?;
    let orbit = OrbitCamera::new(scene.config());

    let loads: loader::LoadQueue = Rc::new(RefCell::new(Vec::new()));
    loader::spawn_loads(scene.take_image_requests(), &loads);

    let scene = Rc::new(RefCell::new(scene));
    let orbit = Rc::new(RefCell::new(orbit));

    // Avoid grabbing a 2D context so WebGPU can acquire the canvas
    let gpu = frame::init_gpu(&canvas).await;

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        orbit: orbit.clone(),
        pointer: Rc::new(RefCell::new(PointerState::default())),
    });
    events::wire_global_keydown(scene.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        orbit,
        loads,
        canvas,
        document,
        gpu,
        last_instant: Instant::now(),
        overlay_shown: None,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
