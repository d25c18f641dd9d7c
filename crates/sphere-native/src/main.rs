use std::path::PathBuf;
use std::time::Instant;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::{CursorIcon, Window, WindowBuilder},
};

use sphere_core::{
    AnimationFrame, Camera, Completion, FocusPresentation, InteractionEvent, OrbitCamera,
    PhotoRenderer, PhotoSphere, PointerState, SphereConfig, MAX_FRAME_DT_SEC,
    WHEEL_PIXELS_PER_STEP,
};

mod constants;
mod loader;

use constants::{CLEAR_COLOR, DEFAULT_PHOTO_DIR, WINDOW_TITLE};
use loader::PhotoLoader;

struct GpuState<'w> {
    window: &'w Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: PhotoRenderer,
    width: u32,
    height: u32,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        let renderer = PhotoRenderer::new(&device, &queue, format);
        log::info!("[gpu] surface {}x{} {:?}", config.width, config.height, format);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            width: config.width,
            height: config.height,
            config,
            renderer,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    fn render(&mut self, scene: &PhotoSphere, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.renderer
            .prepare(&self.device, &self.queue, scene, camera);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.renderer.draw(&mut rpass);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

struct App<'w> {
    gpu: GpuState<'w>,
    scene: PhotoSphere,
    orbit: OrbitCamera,
    pointer: PointerState,
    loader: PhotoLoader,
    last_frame: Instant,
}

impl<'w> App<'w> {
    fn frame(&mut self) -> Result<(), wgpu::SurfaceError> {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_frame = now;

        self.apply_loaded_photos();
        self.orbit.update(dt, self.scene.orbit_enabled());
        let camera = self.camera();
        self.scene
            .advance(&AnimationFrame::new(dt, camera.eye, camera.target));
        self.gpu.render(&self.scene, &camera)
    }

    fn camera(&self) -> Camera {
        self.orbit.camera(self.gpu.aspect())
    }

    fn apply_loaded_photos(&mut self) {
        for (request, outcome) in self.loader.drain() {
            if self.scene.complete_image(&request, &outcome) != Completion::Applied {
                continue;
            }
            if let Ok(photo) = &outcome {
                self.gpu
                    .renderer
                    .upload_photo(&self.gpu.device, &self.gpu.queue, request.index, photo);
            }
        }
    }

    fn pick(&self, x: f32, y: f32) -> Option<usize> {
        let (ro, rd) =
            self.camera()
                .screen_ray(x, y, self.gpu.width as f32, self.gpu.height as f32);
        self.scene.pick(ro, rd)
    }

    fn pointer_moved(&mut self, x: f32, y: f32) {
        if let Some(delta) = self.pointer.move_to(x, y) {
            if self.pointer.dragging() && self.scene.orbit_enabled() {
                self.orbit.drag(delta.x, delta.y, self.gpu.height as f32);
            }
        }
        let hover = if self.pointer.dragging() {
            None
        } else {
            self.pick(x, y)
        };
        if hover != self.scene.hover() {
            self.scene.set_hover(hover);
            self.gpu.window.set_cursor_icon(if hover.is_some() {
                CursorIcon::Pointer
            } else {
                CursorIcon::Default
            });
        }
    }

    fn pointer_released(&mut self) {
        if !self.pointer.release() {
            return;
        }
        let event = match self.pick(self.pointer.x, self.pointer.y) {
            Some(i) => InteractionEvent::EntityClicked(i),
            None => InteractionEvent::BackgroundClicked,
        };
        self.scene.handle(event);
    }

    fn wheel(&mut self, steps: f32) {
        if self.scene.orbit_enabled() {
            self.orbit.zoom(steps);
        }
    }
}

struct Options {
    photo_dir: PathBuf,
    presentation: FocusPresentation,
}

impl Options {
    fn parse(args: impl Iterator<Item = String>) -> Self {
        let mut options = Self {
            photo_dir: PathBuf::from(DEFAULT_PHOTO_DIR),
            presentation: FocusPresentation::Circle,
        };
        for arg in args {
            match arg.as_str() {
                "--rectangle" => options.presentation = FocusPresentation::Rectangle,
                "--circle" => options.presentation = FocusPresentation::Circle,
                flag if flag.starts_with("--") => {
                    log::warn!("ignoring unknown option {}", flag);
                }
                _ => options.photo_dir = PathBuf::from(&arg),
            }
        }
        options
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let options = Options::parse(std::env::args().skip(1));
    let image_refs = loader::discover_photos(&options.photo_dir);
    if image_refs.is_empty() {
        log::warn!(
            "[image] no photos in {}; showing fallback colours",
            options.photo_dir.display()
        );
    }
    let config = SphereConfig::default()
        .with_photo_count_for(image_refs.len())
        .with_presentation(options.presentation);
    let mut scene = PhotoSphere::new(config, image_refs)?;
    let orbit = OrbitCamera::new(scene.config());

    let loader = PhotoLoader::spawn()?;
    loader.request(scene.take_image_requests());

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .build(&event_loop)?;
    let gpu = pollster::block_on(GpuState::new(&window))?;

    let mut app = App {
        gpu,
        scene,
        orbit,
        pointer: PointerState::default(),
        loader,
        last_frame: Instant::now(),
    };

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => app.gpu.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                app.pointer_moved(position.x as f32, position.y as f32)
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => app.pointer.press(app.pointer.x, app.pointer.y),
                ElementState::Released => app.pointer_released(),
            },
            WindowEvent::MouseWheel { delta, .. } => match delta {
                MouseScrollDelta::LineDelta(_, y) => app.wheel(-y),
                MouseScrollDelta::PixelDelta(p) => app.wheel(-(p.y as f32) / WHEEL_PIXELS_PER_STEP),
            },
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                app.scene.handle(InteractionEvent::BackgroundClicked);
            }
            _ => {}
        },
        Event::AboutToWait => match app.frame() {
            Ok(_) => app.gpu.window.request_redraw(),
            Err(wgpu::SurfaceError::Lost) => app.gpu.resize(app.gpu.window.inner_size()),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[gpu] out of memory");
                elwt.exit()
            }
            Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
        },
        _ => {}
    })?;
    Ok(())
}
