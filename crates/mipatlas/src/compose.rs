//! Canvas allocation, resampling and pasting.

use image::imageops::{self, FilterType};
use image::DynamicImage;

use crate::layout::{AtlasLayout, MipLevel};
use crate::source::SourceImage;
use crate::{Error, Result};

/// Bicubic filter used for every level.
pub const MIP_FILTER: FilterType = FilterType::CatmullRom;

/// Render the atlas described by `layout` from `source`.
///
/// The canvas has the source's pixel format. Every level is resampled from
/// the original source, never from the previous level.
pub fn compose_atlas(source: &SourceImage, layout: &AtlasLayout) -> Result<DynamicImage> {
    let original = source.image();
    let mut canvas = DynamicImage::new(
        layout.canvas_width(),
        layout.canvas_height(),
        original.color(),
    );

    paste(&mut canvas, original, 0, 0)?;

    for level in layout.mip_chain() {
        if level.is_empty() {
            log::debug!(
                "level {}: {}x{}, nothing to paste",
                level.index,
                level.width,
                level.height
            );
            continue;
        }

        let resized = resample(original, level);
        log::debug!(
            "level {}: {}x{} at ({}, {})",
            level.index,
            level.width,
            level.height,
            level.x,
            level.y
        );
        paste(&mut canvas, &resized, level.x, level.y)?;
    }

    Ok(canvas)
}

/// Resample `original` down to the size of `level`.
pub fn resample(original: &DynamicImage, level: &MipLevel) -> DynamicImage {
    original.resize_exact(level.width, level.height, MIP_FILTER)
}

/// Copy `top` into `canvas` at `(x, y)` without converting pixel formats.
fn paste(canvas: &mut DynamicImage, top: &DynamicImage, x: u32, y: u32) -> Result<()> {
    let (x, y) = (i64::from(x), i64::from(y));
    let expected = canvas.color();

    match (canvas, top) {
        (DynamicImage::ImageLuma8(c), DynamicImage::ImageLuma8(t)) => imageops::replace(c, t, x, y),
        (DynamicImage::ImageLumaA8(c), DynamicImage::ImageLumaA8(t)) => imageops::replace(c, t, x, y),
        (DynamicImage::ImageRgb8(c), DynamicImage::ImageRgb8(t)) => imageops::replace(c, t, x, y),
        (DynamicImage::ImageRgba8(c), DynamicImage::ImageRgba8(t)) => imageops::replace(c, t, x, y),
        (DynamicImage::ImageLuma16(c), DynamicImage::ImageLuma16(t)) => imageops::replace(c, t, x, y),
        (DynamicImage::ImageLumaA16(c), DynamicImage::ImageLumaA16(t)) => imageops::replace(c, t, x, y),
        (DynamicImage::ImageRgb16(c), DynamicImage::ImageRgb16(t)) => imageops::replace(c, t, x, y),
        (DynamicImage::ImageRgba16(c), DynamicImage::ImageRgba16(t)) => imageops::replace(c, t, x, y),
        (DynamicImage::ImageRgb32F(c), DynamicImage::ImageRgb32F(t)) => imageops::replace(c, t, x, y),
        (DynamicImage::ImageRgba32F(c), DynamicImage::ImageRgba32F(t)) => imageops::replace(c, t, x, y),
        _ => {
            return Err(Error::PixelFormatMismatch {
                expected,
                actual: top.color(),
            })
        }
    }

    Ok(())
}
