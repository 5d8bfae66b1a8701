/// Prefix identifying input that is already an encoded image (a data URI)
pub const IMAGE_DATA_MARKER: &str = "data:";

/// Pre-rendered image passed through untouched, with its display box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    /// The original data URI
    pub uri: String,
    /// Display width in pixels
    pub width: u32,
    /// Display height in pixels
    pub height: u32,
}

impl ImageReference {
    /// `Some` when `data` carries the image-data marker
    pub fn detect(data: &str, target_size: u32) -> Option<Self> {
        data.starts_with(IMAGE_DATA_MARKER).then(|| Self {
            uri: data.to_owned(),
            width: target_size,
            height: target_size,
        })
    }

    /// Media type of the data URI, e.g. `image/png`; empty when omitted
    pub fn media_type(&self) -> &str {
        let rest = &self.uri[IMAGE_DATA_MARKER.len()..];
        let end = rest.find([';', ',']).unwrap_or(rest.len());
        &rest[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        let r = ImageReference::detect("data:image/png;base64,iVBORw0KGgo=", 280).unwrap();
        assert_eq!(r.width, 280);
        assert_eq!(r.height, 280);
        assert_eq!(r.media_type(), "image/png");
        assert!(ImageReference::detect("https://example.com", 280).is_none());
        assert!(ImageReference::detect("DATA:image/png", 280).is_none());
    }

    #[test]
    fn test_media_type_variants() {
        let bare = ImageReference::detect("data:", 10).unwrap();
        assert_eq!(bare.media_type(), "");
        let plain = ImageReference::detect("data:,hello", 10).unwrap();
        assert_eq!(plain.media_type(), "");
        let svg = ImageReference::detect("data:image/svg+xml,<svg/>", 10).unwrap();
        assert_eq!(svg.media_type(), "image/svg+xml");
    }
}
