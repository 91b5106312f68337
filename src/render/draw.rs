//! Pixel-level fill primitives.
//!
//! Shapes are filled per pixel over an RGBA canvas. Fills are composited
//! over the existing pixel, so translucent colors act as highlights while
//! opaque colors replace what is underneath.

use image::{Pixel, Rgba, RgbaImage};

/// Fill an axis-aligned rectangle.
///
/// Bounds are inclusive on all four edges and clamped to the canvas;
/// inverted bounds fill nothing.
pub fn fill_rect(img: &mut RgbaImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgba<u8>) {
    if img.width() == 0 || img.height() == 0 {
        return;
    }
    let x1 = x1.min(img.width() - 1);
    let y1 = y1.min(img.height() - 1);
    for y in y0..=y1 {
        for x in x0..=x1 {
            img.get_pixel_mut(x, y).blend(&color);
        }
    }
}

/// Fill a rectangle whose corners are replaced by quarter circles of
/// `radius` pixels.
///
/// The radius is capped at half the rectangle's width and height, so an
/// oversized radius degrades to a capsule instead of an empty shape.
pub fn fill_rounded_rect(
    img: &mut RgbaImage,
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
    radius: u32,
    color: Rgba<u8>,
) {
    if img.width() == 0 || img.height() == 0 || x1 < x0 || y1 < y0 {
        return;
    }
    let radius = radius.min((x1 - x0) / 2).min((y1 - y0) / 2);

    // Centers of the corner arcs; pixels between them lie in the straight
    // sections and always pass the distance test with dx or dy of zero.
    let cx0 = x0 + radius;
    let cx1 = x1 - radius;
    let cy0 = y0 + radius;
    let cy1 = y1 - radius;

    let xe = x1.min(img.width() - 1);
    let ye = y1.min(img.height() - 1);
    for y in y0..=ye {
        for x in x0..=xe {
            let dx = if x < cx0 {
                cx0 - x
            } else if x > cx1 {
                x - cx1
            } else {
                0
            };
            let dy = if y < cy0 {
                cy0 - y
            } else if y > cy1 {
                y - cy1
            } else {
                0
            };
            if dx * dx + dy * dy <= radius * radius {
                img.get_pixel_mut(x, y).blend(&color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_fill_replaces_pixels() {
        let mut img = RgbaImage::new(8, 8);
        fill_rect(&mut img, 2, 2, 5, 5, Rgba([10, 20, 30, 255]));

        assert_eq!(*img.get_pixel(2, 2), Rgba([10, 20, 30, 255]));
        assert_eq!(*img.get_pixel(5, 5), Rgba([10, 20, 30, 255]));
        assert_eq!(img.get_pixel(1, 2)[3], 0);
        assert_eq!(img.get_pixel(6, 5)[3], 0);
    }

    #[test]
    fn translucent_fill_blends_over_base() {
        let mut img = RgbaImage::new(4, 4);
        fill_rect(&mut img, 0, 0, 3, 3, Rgba([0, 0, 0, 255]));
        fill_rect(&mut img, 0, 0, 3, 3, Rgba([255, 255, 255, 128]));

        let px = img.get_pixel(1, 1);
        assert_eq!(px[3], 255);
        assert!(px[0] > 0 && px[0] < 255);
    }

    #[test]
    fn bounds_are_clamped_to_canvas() {
        let mut img = RgbaImage::new(4, 4);
        fill_rect(&mut img, 2, 2, 100, 100, Rgba([1, 2, 3, 255]));

        assert_eq!(*img.get_pixel(3, 3), Rgba([1, 2, 3, 255]));
    }

    #[test]
    fn rounded_corners_stay_empty() {
        let mut img = RgbaImage::new(20, 20);
        fill_rounded_rect(&mut img, 0, 0, 19, 19, 8, Rgba([255, 0, 0, 255]));

        // Corner pixel is outside the arc, center of each edge is inside.
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(19, 19)[3], 0);
        assert_eq!(img.get_pixel(10, 0)[3], 255);
        assert_eq!(img.get_pixel(0, 10)[3], 255);
    }

    #[test]
    fn zero_radius_is_a_plain_rectangle() {
        let mut rounded = RgbaImage::new(10, 10);
        let mut plain = RgbaImage::new(10, 10);
        fill_rounded_rect(&mut rounded, 1, 1, 8, 8, 0, Rgba([9, 9, 9, 255]));
        fill_rect(&mut plain, 1, 1, 8, 8, Rgba([9, 9, 9, 255]));

        assert_eq!(rounded.as_raw(), plain.as_raw());
    }
}
