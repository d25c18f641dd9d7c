pub mod animation;
pub mod camera;
pub mod config;
pub mod constants;
pub mod entity;
pub mod focus;
pub mod input;
pub mod instances;
pub mod layout;
pub mod photo;
pub mod picking;
#[cfg(feature = "gpu")]
pub mod render;
pub mod scene;
pub static PHOTO_WGSL: &str = include_str!("../shaders/photo.wgsl");

pub use animation::*;
pub use camera::*;
pub use config::*;
pub use constants::*;
pub use entity::*;
pub use focus::*;
pub use input::*;
pub use instances::*;
pub use layout::*;
pub use photo::*;
pub use picking::*;
#[cfg(feature = "gpu")]
pub use render::*;
pub use scene::*;
