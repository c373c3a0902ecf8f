//! Conversion of rendered frames to 8-bit images.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};
use log::info;

use crate::{error::Result, render::Frame, vec3::Color};

#[inline]
fn channel(v: f64) -> u8 {
    (v.max(0.0).min(1.0) * 255.0).round() as u8
}

#[inline]
pub fn to_rgb(color: Color) -> Rgb<u8> {
    Rgb([channel(color.x), channel(color.y), channel(color.z)])
}

pub fn to_rgb8(frame: &Frame) -> RgbImage {
    ImageBuffer::from_fn(frame.width, frame.height, |x, y| to_rgb(frame.get(x, y)))
}

/// Writes `frame` as a PNG file.
pub fn save_png<P: AsRef<Path>>(frame: &Frame, path: P) -> Result<()> {
    let path = path.as_ref();
    to_rgb8(frame).save_with_format(path, image::ImageFormat::Png)?;
    info!("Image saved as {}", path.display());

    Ok(())
}
