use glam::Vec3;

// Shared visual tuning constants used by both web and native frontends.

// Scene layout
pub const SPHERE_RADIUS: f32 = 5.0; // radius of the invisible sphere
pub const MIN_PHOTO_COUNT: usize = 50; // fewer images than this are reused cyclically

// Photo sizing
pub const PHOTO_SIZE: f32 = 0.8; // disc diameter of each photo
pub const PHOTO_SIZE_JITTER: f32 = 0.0; // +/- fraction of PHOTO_SIZE varied per photo

// Focus transition
pub const APPROACH_RATE_PER_SEC: f32 = 5.0; // fraction of remaining distance covered per second
pub const FOCUS_ANIMATION_DURATION_SEC: f32 = 0.8;
pub const FOCUSED_SCALE: f32 = 3.0;
pub const DIMMED_OPACITY: f32 = 0.7; // opacity of the other photos while one is focused
pub const FOCUS_DISTANCE: f32 = 3.0; // distance from the viewer to the focused photo

// Frame timing
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // longer gaps (backgrounded tab, breakpoint) are clamped

// Rotation
pub const ROTATION_DAMPING: f32 = 0.05; // orbit momentum lost per 60 Hz frame
pub const AMBIENT_ROTATION_RATES: Vec3 = Vec3::new(0.03, 0.06, 0.0); // rad/s while idle

// Camera
pub const CAMERA_DISTANCE: f32 = 10.0;
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const ORBIT_MIN_DISTANCE: f32 = 3.0;
pub const ORBIT_MAX_DISTANCE: f32 = 15.0;

// Interaction
pub const HOVER_BRIGHTEN: f32 = 1.15;
pub const CLICK_DRAG_THRESHOLD_PX: f32 = 4.0; // pointer travel beyond this turns a click into a drag
pub const WHEEL_PIXELS_PER_STEP: f32 = 100.0; // pixel-precise wheels report this much per notch

// Images
pub const MAX_TEXTURE_DIM: u32 = 512; // decoded photos are downscaled to fit this square
