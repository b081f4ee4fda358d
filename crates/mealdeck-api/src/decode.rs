//! Image byte decoding for thumbnails

use mealdeck_core::prelude::*;
use mealdeck_core::{Thumbnail, MAX_THUMBNAIL_EDGE};

/// Decode PNG/JPEG/GIF/WebP bytes into a [`Thumbnail`] no larger than
/// [`MAX_THUMBNAIL_EDGE`] on either side, keeping the aspect ratio.
pub fn decode_thumbnail(bytes: &[u8]) -> Result<Thumbnail> {
    if bytes.is_empty() {
        return Err(Error::image_decode("no image data"));
    }

    let decoded =
        image::load_from_memory(bytes).map_err(|e| Error::image_decode(e.to_string()))?;

    let reduced = if decoded.width() > MAX_THUMBNAIL_EDGE || decoded.height() > MAX_THUMBNAIL_EDGE
    {
        decoded.thumbnail(MAX_THUMBNAIL_EDGE, MAX_THUMBNAIL_EDGE)
    } else {
        decoded
    };

    let rgb = reduced.to_rgb8();
    let (width, height) = rgb.dimensions();
    let pixels = rgb.pixels().map(|p| p.0).collect();

    Thumbnail::new(width, height, pixels)
        .ok_or_else(|| Error::image_decode(format!("unusable dimensions {width}x{height}")))
}
