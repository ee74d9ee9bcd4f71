//! Part decoding, canvas fitting and layer compositing

use crate::algorithm::ordering::Part;
use crate::algorithm::selection::Selection;
use crate::catalog::Catalog;
use crate::io::configuration::CANVAS_SIZE;
use crate::io::error::{Result, RoboHashError};
use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};
use std::path::Path;

/// Decode a part file into an RGBA raster
///
/// # Errors
///
/// Returns an error if the file cannot be read from the catalog or is not a PNG
pub fn decode_part<C: Catalog + ?Sized>(catalog: &C, part: &Part) -> Result<RgbaImage> {
    let bytes = catalog.read_file(&part.path)?;
    let img = image::load_from_memory_with_format(&bytes, ImageFormat::Png).map_err(|e| {
        RoboHashError::Decode {
            path: part.path.clone(),
            source: e,
        }
    })?;
    Ok(img.to_rgba8())
}

/// Scale an image to `size`×`size` with bilinear filtering
///
/// Resampling happens on premultiplied color, so transparent texels never
/// darken the edges of opaque ones. Images already at that size are returned
/// untouched.
pub fn fit_to_canvas(mut img: RgbaImage, size: u32) -> RgbaImage {
    if img.dimensions() == (size, size) {
        return img;
    }
    premultiply(&mut img);
    let mut fitted = resize_premultiplied(img, size);
    unpremultiply(&mut fitted);
    fitted
}

/// Blend `src` over `dst` pixel by pixel, both premultiplied and equally sized
///
/// Each channel becomes `src + dst × (255 − src.alpha) / 255` with rounding, so
/// an opaque destination stays opaque.
pub fn source_over(dst: &mut RgbaImage, src: &RgbaImage) {
    for (below, above) in dst.pixels_mut().zip(src.pixels()) {
        *below = over(*below, *above);
    }
}

/// Stack the selected parts into one canvas
///
/// Layers are blended source-over in order onto a transparent canvas. A
/// background replaces a fresh canvas first and the layers go over it.
/// Blending runs on premultiplied color and the result is converted back to
/// straight alpha once at the end.
///
/// # Errors
///
/// Returns an error if any part cannot be read or decoded; no partial image
/// is produced
pub fn composite<C: Catalog + ?Sized>(catalog: &C, selection: &Selection) -> Result<RgbaImage> {
    let mut foreground = RgbaImage::new(CANVAS_SIZE, CANVAS_SIZE);
    for part in &selection.layers {
        let layer = load_premultiplied(catalog, part)?;
        source_over(&mut foreground, &layer);
    }

    let mut canvas = match &selection.background {
        Some(background) => {
            let mut canvas = load_premultiplied(catalog, background)?;
            source_over(&mut canvas, &foreground);
            canvas
        }
        None => foreground,
    };
    unpremultiply(&mut canvas);
    Ok(canvas)
}

fn load_premultiplied<C: Catalog + ?Sized>(catalog: &C, part: &Part) -> Result<RgbaImage> {
    let mut img = decode_part(catalog, part)?;
    premultiply(&mut img);
    Ok(resize_premultiplied(img, CANVAS_SIZE))
}

fn resize_premultiplied(img: RgbaImage, size: u32) -> RgbaImage {
    if img.dimensions() == (size, size) {
        return img;
    }
    imageops::resize(&img, size, size, FilterType::Triangle)
}

fn over(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let [.., alpha] = src.0;
    let inverse = 255 - alpha;
    let mut out = src.0;
    for (channel, below) in out.iter_mut().zip(dst.0) {
        *channel = channel.saturating_add(mul_div255(below, inverse));
    }
    Rgba(out)
}

fn premultiply(img: &mut RgbaImage) {
    for pixel in img.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        pixel.0 = [mul_div255(r, a), mul_div255(g, a), mul_div255(b, a), a];
    }
}

fn unpremultiply(img: &mut RgbaImage) {
    for pixel in img.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        pixel.0 = match a {
            0 => [0; 4],
            255 => [r, g, b, a],
            _ => [div255(r, a), div255(g, a), div255(b, a), a],
        };
    }
}

const fn mul_div255(x: u8, y: u8) -> u8 {
    ((x as u32 * y as u32 + 127) / 255) as u8
}

// Inverse of `mul_div255` for a nonzero alpha, clamped to the channel range
const fn div255(channel: u8, alpha: u8) -> u8 {
    let straight = (channel as u32 * 255 + alpha as u32 / 2) / alpha as u32;
    if straight > 255 { 255 } else { straight as u8 }
}

/// Save an assembled image as PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(img: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| RoboHashError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| RoboHashError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
