//! Load, erase and write back the news template.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};

use crate::error::{Error, Result};
use crate::strip;

/// Template image, relative to the tool directory.
pub const TEMPLATE_PATH: &str = "../public/template-news.png";

/// Where the clean copy is written, relative to the tool directory.
pub const OUTPUT_PATH: &str = "../public/template-news-clean.png";

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EraseOutcome {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Number of rows painted at the bottom.
    pub strip_height: u32,
    /// Files written, in write order.
    pub written: Vec<PathBuf>,
}

/// Erase the logo strip from `template`, writing the result to `output` and
/// then back over `template`.
///
/// The image is encoded once and the same bytes land in both files. Writes are
/// not atomic: if the second write fails the clean copy is left in place.
///
/// # Errors
///
/// Returns [`Error::Load`] if `template` cannot be opened or decoded,
/// [`Error::Encode`] if encoding fails and [`Error::Write`] if a destination
/// cannot be written.
pub fn erase_template(template: &Path, output: &Path) -> Result<EraseOutcome> {
    let source = image::open(template).map_err(|source| Error::Load {
        path: template.to_path_buf(),
        source,
    })?;
    let (width, height) = (source.width(), source.height());
    let strip_height = strip::strip_height(height);
    log::debug!(
        "{}: {width}x{height}, painting rows {}..{height}",
        template.display(),
        strip::strip_top(height)
    );

    let clean = strip::erase_bottom_strip(&source);
    let bytes = encode_png(&clean)?;

    let mut written = Vec::with_capacity(2);
    for path in [output, template] {
        std::fs::write(path, &bytes).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("[OK] wrote {}", path.display());
        written.push(path.to_path_buf());
    }

    Ok(EraseOutcome {
        width,
        height,
        strip_height,
        written,
    })
}

/// Erase the logo strip from [`TEMPLATE_PATH`], resolved against the current
/// working directory.
///
/// Returns `true` when both files were written. Any failure is logged and
/// reported as `false`.
#[must_use]
pub fn remove_bottom_text() -> bool {
    remove_bottom_text_from(Path::new("."))
}

/// Like [`remove_bottom_text`], with [`TEMPLATE_PATH`] and [`OUTPUT_PATH`]
/// resolved against `base` instead of the working directory.
#[must_use]
pub fn remove_bottom_text_from(base: &Path) -> bool {
    let template = base.join(TEMPLATE_PATH);
    let output = base.join(OUTPUT_PATH);

    match erase_template(&template, &output) {
        Ok(outcome) => {
            log::info!(
                "Erased bottom {} of {} rows ({}x{})",
                outcome.strip_height,
                outcome.height,
                outcome.width,
                outcome.height
            );
            true
        }
        Err(e) => {
            log::error!("[FAIL] error processing image: {e}");
            false
        }
    }
}

/// Encode an image as PNG.
fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn constant_paths_share_the_public_directory() {
        assert_eq!(
            Path::new(TEMPLATE_PATH).parent(),
            Path::new(OUTPUT_PATH).parent()
        );
    }

    #[test]
    fn encode_png_decodes_to_same_pixels() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 3, Rgb([1, 2, 3])));
        let bytes = encode_png(&img).unwrap();
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.to_rgb8(), img.to_rgb8());
    }
}
