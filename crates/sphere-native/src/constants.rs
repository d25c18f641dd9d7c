// Native window and asset settings.

pub const WINDOW_TITLE: &str = "Photo Sphere (native)";
pub const DEFAULT_PHOTO_DIR: &str = "photos";
pub const PHOTO_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];

// Background behind the sphere
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};
