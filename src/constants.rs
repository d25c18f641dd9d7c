// DOM wiring and web-only tuning constants.
// Scene tuning shared with the native frontend lives in `sphere_core`.

// Element ids expected in the host page
pub const CANVAS_ID: &str = "app-canvas";
pub const OVERLAY_ID: &str = "photo-overlay";
pub const OVERLAY_IMAGE_ID: &str = "photo-overlay-image";

// `data-photos` on the canvas lists image URLs
pub const PHOTOS_DATA_KEY: &str = "photos";
pub const PHOTO_LIST_SEPARATOR: char = ',';

// WheelEvent.deltaMode == DOM_DELTA_LINE reports lines, not pixels
pub const WHEEL_LINE_HEIGHT_PX: f32 = 16.0;

// Canvas background behind the sphere
pub const CLEAR_COLOR: [f64; 4] = [1.0, 1.0, 1.0, 1.0];
