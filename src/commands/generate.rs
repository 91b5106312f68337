//! Generate the full icon asset set for a project root.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::render::calculator;
use crate::utils::ico::{ICO_SIZES, encode_ico};

/// Directory for application assets, relative to the project root.
pub const ASSETS_DIR: &str = "assets";
/// Directory for installer resources, relative to the project root.
pub const INSTALLER_DIR: &str = "installer";
/// Full-resolution PNG filename.
pub const ICON_PNG: &str = "app.png";
/// Multi-resolution icon filename, used in both output locations.
pub const ICON_ICO: &str = "app.ico";

/// Master render size; every ICO entry is downscaled from this canvas.
pub const MASTER_SIZE: u32 = 512;

/// Errors from asset generation.
#[derive(Debug)]
pub enum GenerateError {
    /// Failed to create an output directory.
    DirectoryCreation(io::Error),
    /// Failed to encode or write the PNG.
    PngEncode(image::ImageError),
    /// Failed to encode the ICO container.
    IcoEncode(io::Error),
    /// Failed to write or copy an output file.
    FileWrite(io::Error),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::DirectoryCreation(e) => write!(f, "Failed to create directory: {}", e),
            GenerateError::PngEncode(e) => write!(f, "Failed to write PNG: {}", e),
            GenerateError::IcoEncode(e) => write!(f, "Failed to encode ICO: {}", e),
            GenerateError::FileWrite(e) => write!(f, "Failed to write file: {}", e),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::DirectoryCreation(e) => Some(e),
            GenerateError::PngEncode(e) => Some(e),
            GenerateError::IcoEncode(e) => Some(e),
            GenerateError::FileWrite(e) => Some(e),
        }
    }
}

/// Paths written by a successful run.
pub struct GeneratedAssets {
    pub png: PathBuf,
    pub ico: PathBuf,
    pub installer_ico: PathBuf,
}

/// Generate all icon assets under `root`.
///
/// Creates the assets and installer directories if absent, renders the
/// master canvas once, then writes the PNG, the multi-size ICO, and the
/// installer copy of the ICO. Re-running overwrites the same outputs with
/// identical bytes.
pub fn run(root: &Path) -> Result<GeneratedAssets, GenerateError> {
    let assets_dir = root.join(ASSETS_DIR);
    let installer_dir = root.join(INSTALLER_DIR);
    fs::create_dir_all(&assets_dir).map_err(GenerateError::DirectoryCreation)?;
    fs::create_dir_all(&installer_dir).map_err(GenerateError::DirectoryCreation)?;

    let png_path = assets_dir.join(ICON_PNG);
    let ico_path = assets_dir.join(ICON_ICO);
    let installer_ico_path = installer_dir.join(ICON_ICO);

    let canvas = calculator::render(MASTER_SIZE);
    canvas.save(&png_path).map_err(GenerateError::PngEncode)?;

    let ico_bytes = encode_ico(&canvas, &ICO_SIZES).map_err(GenerateError::IcoEncode)?;
    fs::write(&ico_path, &ico_bytes).map_err(GenerateError::FileWrite)?;

    // Installer gets a byte-for-byte copy of the same icon.
    fs::copy(&ico_path, &installer_ico_path).map_err(GenerateError::FileWrite)?;

    Ok(GeneratedAssets {
        png: png_path,
        ico: ico_path,
        installer_ico: installer_ico_path,
    })
}
