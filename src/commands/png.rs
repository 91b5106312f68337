use std::path::Path;

use crate::render::calculator;

/// Render the icon at `size` pixels and save it as a PNG at `output`.
pub fn run(size: u32, output: &Path) -> image::ImageResult<()> {
    calculator::render(size).save(output)
}
