//! Image references, decoding and deterministic fallback colours.

use crate::layout::unit_hash;
use image::imageops::FilterType;
use thiserror::Error;

/// Opaque handle to image data: a URL on the web, a file path natively.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ImageRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split a separated list of references, dropping blanks.
pub fn parse_image_list(raw: &str, separator: char) -> Vec<ImageRef> {
    raw.split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ImageRef::from)
        .collect()
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {reason}")]
    Io { path: String, reason: String },
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("image data is empty")]
    Empty,
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Square RGBA8 pixels ready for upload.
#[derive(Clone, Debug)]
pub struct DecodedPhoto {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Decode, centre-crop to a square and downscale to at most `max_dim`.
pub fn decode_photo(bytes: &[u8], max_dim: u32) -> Result<DecodedPhoto, LoadError> {
    if bytes.is_empty() {
        return Err(LoadError::Empty);
    }
    let img = image::load_from_memory(bytes)?;
    let side = img.width().min(img.height());
    if side == 0 {
        return Err(LoadError::Empty);
    }
    let x = (img.width() - side) / 2;
    let y = (img.height() - side) / 2;
    let mut square = img.crop_imm(x, y, side, side);
    let target = side.min(max_dim.max(1));
    if target < side {
        square = square.resize_exact(target, target, FilterType::Triangle);
    }
    let rgba = square.to_rgba8();
    Ok(DecodedPhoto {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}

/// Opaque colour used in place of a photo that failed to load.
pub fn fallback_color(index: usize) -> [f32; 4] {
    let hue = unit_hash(index) * 360.0;
    let [r, g, b] = hsl_to_rgb(hue, 0.65, 0.55);
    [r, g, b, 1.0]
}

fn hsl_to_rgb(hue_deg: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = (hue_deg.rem_euclid(360.0)) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    [r + m, g + m, b + m]
}
