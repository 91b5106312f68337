//! The calculator illustration.
//!
//! All geometry is integer proportional arithmetic on the canvas size, so
//! the same code draws the artwork at any resolution. Drawing order is
//! back to front: body, face panel, display with shine, then the key grid.

use image::{Rgba, RgbaImage};

use crate::render::draw::{fill_rect, fill_rounded_rect};

// Palette.
const BODY: Rgba<u8> = Rgba([20, 22, 28, 255]);
const PANEL: Rgba<u8> = Rgba([28, 31, 40, 255]);
const DISPLAY: Rgba<u8> = Rgba([18, 80, 60, 255]);
const DISPLAY_SHINE: Rgba<u8> = Rgba([255, 255, 255, 30]);
const NUMERAL: Rgba<u8> = Rgba([50, 54, 66, 255]);
const OPERATOR: Rgba<u8> = Rgba([230, 145, 36, 255]);
const FUNCTION: Rgba<u8> = Rgba([60, 65, 80, 255]);
const KEY_HIGHLIGHT: Rgba<u8> = Rgba([255, 255, 255, 18]);

const GRID_COLS: u32 = 4;
const GRID_ROWS: u32 = 4;

/// Layout of the key grid for a given canvas size.
///
/// The grid spans 12%-88% of the canvas horizontally and 40%-88%
/// vertically, with uniform gaps of 3%; cell dimensions are whatever
/// exactly fills that region.
struct GridMetrics {
    left: u32,
    top: u32,
    cell_w: u32,
    cell_h: u32,
    gap: u32,
}

fn grid_metrics(size: u32) -> GridMetrics {
    let left = size * 12 / 100;
    let right = size * 88 / 100;
    let top = size * 40 / 100;
    let bottom = size * 88 / 100;
    let gap = size * 3 / 100;
    GridMetrics {
        left,
        top,
        cell_w: (right - left - gap * (GRID_COLS - 1)) / GRID_COLS,
        cell_h: (bottom - top - gap * (GRID_ROWS - 1)) / GRID_ROWS,
        gap,
    }
}

/// Inclusive bounding box of the key at (col, row).
fn key_rect(m: &GridMetrics, col: u32, row: u32) -> (u32, u32, u32, u32) {
    let x0 = m.left + col * (m.cell_w + m.gap);
    let y0 = m.top + row * (m.cell_h + m.gap);
    (x0, y0, x0 + m.cell_w, y0 + m.cell_h)
}

/// Fill class for the key at (col, row): the right column is operators in
/// every row, the rest of the top row is function keys, everything else is
/// numerals.
fn key_fill(col: u32, row: u32) -> Rgba<u8> {
    if col == GRID_COLS - 1 {
        OPERATOR
    } else if row == 0 {
        FUNCTION
    } else {
        NUMERAL
    }
}

/// Draw the calculator icon onto a fresh transparent canvas of
/// `size` x `size` pixels.
///
/// Pure function of `size`: repeated calls produce identical canvases. A
/// size of zero is caller error and panics on underflow in debug builds;
/// the CLI rejects it before it gets here.
pub fn render(size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);

    // Outer body and the inset face panel.
    let pad = (size / 18).max(1);
    let body_radius = (size / 10).max(6);
    fill_rounded_rect(&mut img, pad, pad, size - pad, size - pad, body_radius, BODY);

    let inset = pad + (size / 60).max(2);
    let panel_radius = body_radius.saturating_sub((size / 40).max(2)).max(5);
    fill_rounded_rect(
        &mut img,
        inset,
        inset,
        size - inset,
        size - inset,
        panel_radius,
        PANEL,
    );

    // Display strip with a shine across its top.
    let display_top = size * 12 / 100;
    let display_bottom = display_top + size * 23 / 100;
    let display_pad_x = size / 10;
    fill_rounded_rect(
        &mut img,
        display_pad_x,
        display_top,
        size - display_pad_x,
        display_bottom,
        (size / 30).max(6),
        DISPLAY,
    );

    let shine_inset = size * 3 / 100;
    fill_rect(
        &mut img,
        display_pad_x + shine_inset,
        display_top + shine_inset,
        size - display_pad_x - shine_inset,
        display_top + size * 6 / 100,
        DISPLAY_SHINE,
    );

    // Key grid: each key gets its class fill and a highlight strip along
    // the top edge.
    let m = grid_metrics(size);
    let key_radius = (size / 35).max(5);
    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            let (x0, y0, x1, y1) = key_rect(&m, col, row);
            fill_rounded_rect(&mut img, x0, y0, x1, y1, key_radius, key_fill(col, row));
            fill_rect(
                &mut img,
                x0 + 2,
                y0 + 2,
                x1.saturating_sub(2),
                y0 + 6,
                KEY_HIGHLIGHT,
            );
        }
    }

    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_size_same_pixels() {
        let a = render(512);
        let b = render(512);
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn corners_stay_transparent() {
        let img = render(512);
        for (x, y) in [(0, 0), (511, 0), (0, 511), (511, 511)] {
            assert_eq!(img.get_pixel(x, y)[3], 0);
        }
    }

    #[test]
    fn probe_pixels_have_layer_colors() {
        let img = render(512);
        // Body edge: inside the outer pad (28) but left of the panel inset (36).
        assert_eq!(*img.get_pixel(30, 256), BODY);
        // Panel between the display bottom (178) and the grid top (204).
        assert_eq!(*img.get_pixel(256, 190), PANEL);
        // Display center, below the shine strip.
        assert_eq!(*img.get_pixel(256, 130), DISPLAY);
    }

    #[test]
    fn shine_lightens_the_display() {
        let img = render(512);
        let shined = img.get_pixel(256, 80);
        assert_eq!(shined[3], 255);
        assert!(shined[0] > DISPLAY[0]);
        assert!(shined[1] > DISPLAY[1]);
    }

    #[test]
    fn display_pixels_stay_inside_the_body() {
        let size = 512;
        let img = render(size);
        let pad = (size / 18).max(1);
        for (x, y, px) in img.enumerate_pixels() {
            if *px == DISPLAY {
                assert!(x > pad && x < size - pad);
                assert!(y > pad && y < size - pad);
            }
        }
    }

    #[test]
    fn operator_column_in_every_row() {
        for row in 0..GRID_ROWS {
            assert_eq!(key_fill(GRID_COLS - 1, row), OPERATOR);
        }
    }

    #[test]
    fn key_classes_by_position() {
        assert_eq!(key_fill(0, 0), FUNCTION);
        assert_eq!(key_fill(2, 0), FUNCTION);
        assert_eq!(key_fill(3, 0), OPERATOR);
        assert_eq!(key_fill(0, 1), NUMERAL);
        assert_eq!(key_fill(2, 3), NUMERAL);
    }

    #[test]
    fn rendered_key_centers_have_class_colors() {
        let img = render(512);
        let m = grid_metrics(512);
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                let (x0, y0, x1, y1) = key_rect(&m, col, row);
                let center = img.get_pixel((x0 + x1) / 2, (y0 + y1) / 2);
                assert_eq!(*center, key_fill(col, row));
            }
        }
    }

    #[test]
    fn sixteen_disjoint_keys_inside_the_canvas() {
        for size in [64u32, 128, 256, 512] {
            let m = grid_metrics(size);
            let mut rects = Vec::new();
            for row in 0..GRID_ROWS {
                for col in 0..GRID_COLS {
                    rects.push(key_rect(&m, col, row));
                }
            }
            assert_eq!(rects.len(), 16);

            for &(x0, y0, x1, y1) in &rects {
                assert!(x0 < x1 && y0 < y1);
                assert!(x1 < size && y1 < size);
            }
            for (i, &(ax0, ay0, ax1, ay1)) in rects.iter().enumerate() {
                for &(bx0, by0, bx1, by1) in &rects[i + 1..] {
                    let overlaps = ax0 <= bx1 && bx0 <= ax1 && ay0 <= by1 && by0 <= ay1;
                    assert!(!overlaps, "keys overlap at size {}", size);
                }
            }
        }
    }
}
