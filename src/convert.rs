//! HEIC → JPEG Conversion
//!
//! Per-file conversion plus the sequential directory driver. A failure on
//! one file is reported and never aborts the run.

use crate::decode::HeifDecoder;
use crate::errors::Result;
use crate::scan::heic_files;
use image::codecs::jpeg::JpegEncoder;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Fixed JPEG quality on the 0-100 scale.
pub const JPEG_QUALITY: u8 = 90;

/// Destination for a source file: same directory and stem, `.jpg` extension.
/// `photo.heic` becomes `photo.jpg`, never `photo.heic.jpg`.
pub fn jpeg_sibling(path: &Path) -> PathBuf {
    path.with_extension("jpg")
}

/// Convert one file, returning the destination path on success.
///
/// An existing destination is silently overwritten. A failed write may leave
/// a truncated destination behind.
pub fn convert_file(decoder: &HeifDecoder, source: &Path) -> Result<PathBuf> {
    let rgb = decoder.decode_rgb(source)?;
    let destination = jpeg_sibling(source);

    let file = File::create(&destination)?;
    let mut writer = BufWriter::new(file);
    let mut encoder = JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);
    encoder.encode_image(&rgb)?;
    writer.flush()?;

    debug!(
        "Wrote {} ({}x{})",
        destination.display(),
        rgb.width(),
        rgb.height()
    );
    Ok(destination)
}

/// Convert every `.heic` file under `root`, one at a time, in enumeration
/// order. Outcomes are reported on stdout per file; no summary is printed.
pub fn convert_directory(root: &Path) -> Result<()> {
    let decoder = HeifDecoder::new();

    for source in heic_files(root) {
        let name = file_name(&source);
        println!("Converting: {}", name);

        match convert_file(&decoder, &source) {
            Ok(destination) => {
                println!("  ✓ Saved as: {}", file_name(&destination));
            }
            Err(e) => {
                warn!("Conversion failed for {}: {}", source.display(), e);
                println!("  ✗ Error converting {}: {}", name, e);
            }
        }
    }

    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
