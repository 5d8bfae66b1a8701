use image::{GrayImage, Luma, RgbaImage};

use crate::models::QrMatrix;

/// Light modules on each side of the symbol
pub const QUIET_ZONE: usize = 4;

const LIGHT: Luma<u8> = Luma([255]);
const DARK: Luma<u8> = Luma([0]);

/// Rasterized symbol, one byte per pixel (0 = dark, 255 = light)
#[derive(Debug, Clone)]
pub struct PixelSurface {
    image: GrayImage,
    scale: u32,
}

impl PixelSurface {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixels per module
    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn is_dark(&self, x: u32, y: u32) -> bool {
        x < self.width() && y < self.height() && self.image.get_pixel(x, y) == &DARK
    }

    pub fn as_image(&self) -> &GrayImage {
        &self.image
    }

    pub fn into_image(self) -> GrayImage {
        self.image
    }

    /// Opaque RGBA copy for surfaces that want four channels
    pub fn to_rgba(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width(), self.height(), |x, y| {
            let v = self.image.get_pixel(x, y)[0];
            image::Rgba([v, v, v, 255])
        })
    }
}

/// Scale `matrix` plus its quiet zone to the largest integer module size
/// that fits `target_size` pixels (at least one pixel per module)
pub fn rasterize(matrix: &QrMatrix, target_size: u32) -> PixelSurface {
    let total_modules = (matrix.size() + 2 * QUIET_ZONE) as u32;
    let scale = (target_size / total_modules).max(1);
    let side = total_modules * scale;

    let mut image = GrayImage::from_pixel(side, side, LIGHT);
    let size = matrix.size();
    for y in 0..size {
        for x in 0..size {
            if !matrix.is_dark(x, y) {
                continue;
            }
            let px = (x + QUIET_ZONE) as u32 * scale;
            let py = (y + QUIET_ZONE) as u32 * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    image.put_pixel(px + dx, py + dy, DARK);
                }
            }
        }
    }

    PixelSurface { image, scale }
}
