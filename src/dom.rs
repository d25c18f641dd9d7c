use crate::constants::{PHOTOS_DATA_KEY, PHOTO_LIST_SEPARATOR};
use sphere_core::{parse_image_list, ImageRef};
use web_sys as web;

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Image URLs listed in the canvas' `data-photos` attribute.
pub fn photo_refs(canvas: &web::HtmlCanvasElement) -> Vec<ImageRef> {
    canvas
        .dataset()
        .get(PHOTOS_DATA_KEY)
        .map(|raw| parse_image_list(&raw, PHOTO_LIST_SEPARATOR))
        .unwrap_or_default()
}

#[inline]
pub fn set_cursor(canvas: &web::HtmlCanvasElement, pointer: bool) {
    let cursor = if pointer { "pointer" } else { "auto" };
    _ = canvas.style().set_property("cursor", cursor);
}
