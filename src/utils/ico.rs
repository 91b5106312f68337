//! Multi-resolution ICO encoding.

use std::io;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};

/// Sizes embedded in generated .ico files, largest first. Windows picks
/// the best fit for the display context.
pub const ICO_SIZES: [u32; 6] = [256, 128, 64, 48, 32, 16];

/// Encode `canvas` as an ICO container with one entry per requested size,
/// each downscaled from the canvas with a Lanczos filter.
pub fn encode_ico(canvas: &RgbaImage, sizes: &[u32]) -> io::Result<Vec<u8>> {
    let master = DynamicImage::ImageRgba8(canvas.clone());

    let mut dir = IconDir::new(ResourceType::Icon);
    for &size in sizes {
        let resized = master.resize_exact(size, size, FilterType::Lanczos3);
        let entry = IconImage::from_rgba_data(size, size, resized.into_rgba8().into_raw());
        dir.add_entry(IconDirEntry::encode(&entry)?);
    }

    let mut bytes = Vec::new();
    dir.write(&mut bytes)?;
    Ok(bytes)
}
