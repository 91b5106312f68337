//! macOS .icns export.
//!
//! Renders the master canvas and writes it as an icon family, the same
//! shape macOS app bundles embed as AppIcon.icns.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use icns::{IconFamily, Image, PixelFormat};

use crate::commands::generate::MASTER_SIZE;
use crate::render::calculator;

/// Errors from .icns export.
#[derive(Debug)]
pub enum IcnsError {
    /// Failed to build or encode the icon family.
    IconProcessing(String),
    /// Failed to create the output file.
    FileWrite(io::Error),
}

impl fmt::Display for IcnsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IcnsError::IconProcessing(msg) => write!(f, "Icon processing failed: {}", msg),
            IcnsError::FileWrite(e) => write!(f, "Failed to write file: {}", e),
        }
    }
}

impl std::error::Error for IcnsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IcnsError::FileWrite(e) => Some(e),
            _ => None,
        }
    }
}

/// Render the master canvas and write it as an .icns icon family at
/// `output`.
pub fn run(output: &Path) -> Result<(), IcnsError> {
    let canvas = calculator::render(MASTER_SIZE);
    let image = Image::from_data(PixelFormat::RGBA, MASTER_SIZE, MASTER_SIZE, canvas.into_raw())
        .map_err(|e| IcnsError::IconProcessing(format!("Failed to build image: {}", e)))?;

    let mut family = IconFamily::new();
    family
        .add_icon(&image)
        .map_err(|e| IcnsError::IconProcessing(format!("Failed to add icon: {}", e)))?;

    let file = File::create(output).map_err(IcnsError::FileWrite)?;
    family
        .write(BufWriter::new(file))
        .map_err(|e| IcnsError::IconProcessing(format!("Failed to write icns: {}", e)))?;

    Ok(())
}
