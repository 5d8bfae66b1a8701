//! RustQR Encode - byte-mode QR code generation
//!
//! Converts an arbitrary byte string into the smallest level-L QR symbol
//! that holds it, and rasterizes symbols into pixel surfaces.
//!
//! ```
//! let qr = rust_qr_encode::encode("HELLO").unwrap();
//! assert_eq!(qr.size(), 21);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR code encoding modules (error correction, bitstream, layout, masking)
pub mod encoder;
/// Error type shared by the encoder
pub mod error;
/// Core data structures (QrMatrix, BitMatrix, Version, etc.)
pub mod models;
/// Rasterization and pre-rendered image pass-through
pub mod render;
/// Helpers shared by the command-line tool
pub mod tools;

pub use encoder::QrEncoder;
pub use encoder::config::{EncodeOptions, PadStyle};
pub use error::{EncodeError, Result};
pub use models::{BitMatrix, ECLevel, MaskPattern, QrMatrix, Version};
pub use render::{ImageReference, PixelSurface, Rendered};

/// Encode `text` with options taken from the environment
///
/// # Errors
/// [`EncodeError::DataTooLarge`] when `text` exceeds version 40-L capacity
pub fn encode(text: impl AsRef<[u8]>) -> Result<QrMatrix> {
    encode_with_options(text, &EncodeOptions::from_env())
}

/// Encode `text` with explicit options
pub fn encode_with_options(text: impl AsRef<[u8]>, options: &EncodeOptions) -> Result<QrMatrix> {
    QrEncoder::new(*options).encode(text.as_ref())
}

/// Render `data` for a `target_size`-pixel square display
///
/// Input starting with the `data:` marker is returned as an
/// [`ImageReference`] without encoding; anything else is encoded and
/// rasterized with a four-module quiet zone.
pub fn render(data: &str, target_size: u32) -> Result<Rendered> {
    render_with_options(data, target_size, &EncodeOptions::from_env())
}

/// [`render`] with explicit encoder options
pub fn render_with_options(
    data: &str,
    target_size: u32,
    options: &EncodeOptions,
) -> Result<Rendered> {
    if let Some(image) = ImageReference::detect(data, target_size) {
        return Ok(Rendered::Image(image));
    }
    let matrix = encode_with_options(data, options)?;
    Ok(Rendered::Surface(render::rasterize(&matrix, target_size)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_bypasses_encoder_for_data_uri() {
        // Far beyond symbol capacity: only the pass-through path can succeed
        let uri = format!("data:image/png;base64,{}", "A".repeat(5000));
        let rendered = render(&uri, 280).unwrap();
        let image = rendered.as_image().unwrap();
        assert_eq!(image.uri, uri);
        assert_eq!((rendered.width(), rendered.height()), (280, 280));
    }

    #[test]
    fn test_render_text() {
        let rendered = render("HELLO", 280).unwrap();
        let surface = rendered.as_surface().unwrap();
        assert_eq!(surface.width(), 261);
        assert!(rendered.as_image().is_none());
    }

    #[test]
    fn test_render_propagates_capacity_error() {
        let text = "x".repeat(3000);
        assert!(matches!(
            render(&text, 280),
            Err(EncodeError::DataTooLarge { len: 3000, .. })
        ));
    }
}
