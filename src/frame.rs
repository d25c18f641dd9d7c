use crate::loader::LoadQueue;
use crate::overlay;
use crate::render;
use instant::Instant;
use sphere_core::{
    AnimationFrame, Camera, Completion, FocusState, OrbitCamera, PhotoSphere, MAX_FRAME_DT_SEC,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<PhotoSphere>>,
    pub orbit: Rc<RefCell<OrbitCamera>>,
    pub loads: LoadQueue,

    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: Option<render::GpuState<'a>>,

    pub last_instant: Instant,
    pub overlay_shown: Option<usize>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        self.apply_loaded_photos();

        let camera = {
            let mut orbit = self.orbit.borrow_mut();
            orbit.update(dt_sec, self.scene.borrow().orbit_enabled());
            orbit.camera(canvas_aspect(&self.canvas))
        };
        self.scene
            .borrow_mut()
            .advance(&AnimationFrame::new(dt_sec, camera.eye, camera.target));

        self.sync_overlay();
        self.render(&camera);
    }

    fn apply_loaded_photos(&mut self) {
        let finished: Vec<_> = self.loads.borrow_mut().drain(..).collect();
        if finished.is_empty() {
            return;
        }
        let mut scene = self.scene.borrow_mut();
        for (request, outcome) in finished {
            if scene.complete_image(&request, &outcome) != Completion::Applied {
                continue;
            }
            if let (Ok(photo), Some(g)) = (&outcome, &mut self.gpu) {
                g.upload_photo(request.index, photo);
            }
        }
    }

    /// Show the focused photo full-size once its zoom has finished; hide it
    /// as soon as focus moves away. Photos that failed to load keep their
    /// fallback disc.
    fn sync_overlay(&mut self) {
        let scene = self.scene.borrow();
        let wanted = match scene.focus() {
            FocusState::Focused(i) if scene.focus_settled() => Some(i),
            FocusState::Focused(i) if self.overlay_shown == Some(i) => Some(i),
            _ => None,
        };
        if wanted == self.overlay_shown {
            return;
        }
        let url = wanted.and_then(|_| scene.overlay_ref());
        match url {
            Some(url) => overlay::show_photo(&self.document, url.as_str()),
            None => overlay::hide_photo(&self.document),
        }
        self.overlay_shown = wanted.filter(|_| url.is_some());
    }

    fn render(&mut self, camera: &Camera) {
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&self.scene.borrow(), camera) {
                log::error!("[gpu] render error: {:?}", e);
            }
        }
    }
}

#[inline]
pub fn canvas_aspect(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.width().max(1) as f32 / canvas.height().max(1) as f32
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(tick: &TickClosure) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
