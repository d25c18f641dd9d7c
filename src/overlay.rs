use crate::constants::{OVERLAY_ID, OVERLAY_IMAGE_ID};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Show `url` in the full-size photo overlay.
pub fn show_photo(document: &web::Document, url: &str) {
    if let Some(img) = document
        .get_element_by_id(OVERLAY_IMAGE_ID)
        .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
    {
        img.set_src(url);
    }
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

pub fn hide_photo(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}
