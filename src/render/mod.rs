//! Rendering modules
//!
//! Turns a finished symbol into pixels, or passes pre-rendered image data
//! through untouched.

/// Data-URI pass-through
pub mod image_ref;
/// Matrix to pixel surface conversion
pub mod raster;

pub use image_ref::{IMAGE_DATA_MARKER, ImageReference};
pub use raster::{PixelSurface, QUIET_ZONE, rasterize};

/// Output of [`crate::render`]
#[derive(Debug, Clone)]
pub enum Rendered {
    /// Freshly encoded and rasterized symbol
    Surface(PixelSurface),
    /// Input was already image data
    Image(ImageReference),
}

impl Rendered {
    /// Display width in pixels
    pub fn width(&self) -> u32 {
        match self {
            Rendered::Surface(s) => s.width(),
            Rendered::Image(i) => i.width,
        }
    }

    /// Display height in pixels
    pub fn height(&self) -> u32 {
        match self {
            Rendered::Surface(s) => s.height(),
            Rendered::Image(i) => i.height,
        }
    }

    pub fn as_surface(&self) -> Option<&PixelSurface> {
        match self {
            Rendered::Surface(s) => Some(s),
            Rendered::Image(_) => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageReference> {
        match self {
            Rendered::Image(i) => Some(i),
            Rendered::Surface(_) => None,
        }
    }
}
