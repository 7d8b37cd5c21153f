//! HEIC/HEIF Decoding
//!
//! Uses libheif-rs to decode HEIC/HEIF images straight to interleaved
//! 8-bit RGB.

use crate::errors::{Error, Result};
use image::RgbImage;
use libheif_rs::{ColorSpace, HeifContext, LibHeif, RgbChroma};
use std::path::Path;

/// The decoding capability, constructed once per run and passed to the
/// converter. Wraps the libheif library handle.
pub struct HeifDecoder {
    lib_heif: LibHeif,
}

impl HeifDecoder {
    pub fn new() -> Self {
        Self {
            lib_heif: LibHeif::new(),
        }
    }

    /// Decode the primary image of a HEIC file to a 3-channel RGB buffer.
    ///
    /// Requesting `ColorSpace::Rgb(RgbChroma::Rgb)` makes libheif perform
    /// the color-mode normalization: any source layout comes back as
    /// interleaved RGB with alpha discarded.
    pub fn decode_rgb(&self, path: &Path) -> Result<RgbImage> {
        let ctx = HeifContext::read_from_file(path.to_string_lossy().as_ref())
            .map_err(|e| Error::Decode(format!("Failed to read HEIC: {}", e)))?;

        let handle = ctx
            .primary_image_handle()
            .map_err(|e| Error::Decode(format!("Failed to get primary image: {}", e)))?;

        let width = handle.width();
        let height = handle.height();

        let decoded = self
            .lib_heif
            .decode(&handle, ColorSpace::Rgb(RgbChroma::Rgb), None)
            .map_err(|e| Error::Decode(format!("Failed to decode HEIC: {}", e)))?;

        let planes = decoded.planes();
        let plane = planes
            .interleaved
            .ok_or_else(|| Error::Decode("No RGB plane found".to_string()))?;

        // The interleaved plane may carry row padding past width * 3.
        let row_len = width as usize * 3;
        let data = if plane.stride == row_len {
            plane.data.to_vec()
        } else {
            let mut buf = Vec::with_capacity(row_len * height as usize);
            for row in plane.data.chunks(plane.stride).take(height as usize) {
                buf.extend_from_slice(&row[..row_len]);
            }
            buf
        };

        RgbImage::from_raw(width, height, data)
            .ok_or_else(|| Error::Decode("Failed to create RGB image".to_string()))
    }
}

impl Default for HeifDecoder {
    fn default() -> Self {
        Self::new()
    }
}
