use std::io::Cursor;

use anyhow::Context;
use image::ImageDecoder as _;

use crate::foundation::error::{FolioError, FolioResult};

/// Straight-alpha RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedRgba {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8.
    pub rgba8: Vec<u8>,
}

impl DecodedRgba {
    /// True when any pixel is not fully opaque.
    pub fn has_alpha(&self) -> bool {
        self.rgba8.chunks_exact(4).any(|px| px[3] != 255)
    }
}

/// Format and pixel dimensions from the header only.
pub fn probe_dimensions(bytes: &[u8]) -> FolioResult<(image::ImageFormat, u32, u32)> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .context("guess image format")?;
    let format = reader
        .format()
        .ok_or_else(|| FolioError::asset("unrecognized image format"))?;
    let (w, h) = reader.into_dimensions().context("read image dimensions")?;
    if w == 0 || h == 0 {
        return Err(FolioError::asset("image has zero size"));
    }
    Ok((format, w, h))
}

/// Number of color components of a JPEG that can be embedded without re-encoding.
///
/// `None` for anything other than 8-bit gray or RGB.
pub fn jpeg_passthrough_components(bytes: &[u8]) -> Option<u8> {
    let decoder = image::codecs::jpeg::JpegDecoder::new(Cursor::new(bytes)).ok()?;
    match decoder.color_type() {
        image::ColorType::L8 => Some(1),
        image::ColorType::Rgb8 => Some(3),
        _ => None,
    }
}

/// Fully decode to straight-alpha RGBA8.
pub fn decode_rgba8(bytes: &[u8]) -> FolioResult<DecodedRgba> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(DecodedRgba {
        width,
        height,
        rgba8: rgba.into_raw(),
    })
}

/// Undo premultiplied alpha, as produced by the rasterizer.
pub(crate) fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((u16::from(px[0]) * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((u16::from(px[1]) * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((u16::from(px[2]) * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
