//! PNG export of rendered output

use crate::io::error::{Result, SynthesisError};
use image::RgbaImage;
use std::path::Path;

/// Save a rendered image, creating missing parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the path
pub fn export_png<P: AsRef<Path>>(image: &RgbaImage, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    ensure_parent_dir(output_path)?;

    image
        .save(output_path)
        .map_err(|e| SynthesisError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Create the directory that will hold `path`, if it has one
///
/// # Errors
///
/// Returns an error if the directory cannot be created
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| SynthesisError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })
        }
        _ => Ok(()),
    }
}
