//! Exemplar loading and colour labelling

use crate::io::error::{Result, SynthesisError, invalid_parameter};
use image::RgbaImage;
use ndarray::Array2;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Source image converted to a grid of colour labels plus its palette
///
/// Labels index into the palette. Alpha is not meaningful for synthesis, so
/// every palette entry is opaque.
#[derive(Debug, Clone)]
pub struct Exemplar {
    labels: Array2<usize>,
    palette: Vec<[u8; 4]>,
}

impl Exemplar {
    /// Load and label an exemplar from an image file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file at the given path cannot be opened or read
    /// - The file is not a valid image format
    pub fn from_png_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let img = image::open(&path_buf).map_err(|e| SynthesisError::ImageLoad {
            path: path_buf,
            source: e,
        })?;
        Ok(Self::from_rgba_image(&img.to_rgba8()))
    }

    /// Decode and label an exemplar from encoded image bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a supported image format
    pub fn from_memory(bytes: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(bytes)?;
        Ok(Self::from_rgba_image(&img.to_rgba8()))
    }

    /// Label every pixel of an RGBA image
    pub fn from_rgba_image(image: &RgbaImage) -> Self {
        let opaque = |pixel: &image::Rgba<u8>| [pixel.0[0], pixel.0[1], pixel.0[2], 255];

        let color_set: HashSet<[u8; 4]> = image.pixels().map(opaque).collect();

        // Deterministic color ordering ensures reproducible pattern indices
        let mut palette: Vec<[u8; 4]> = color_set.into_iter().collect();
        palette.sort_unstable();

        let color_mapping: HashMap<[u8; 4], usize> = palette
            .iter()
            .enumerate()
            .map(|(index, &color)| (color, index))
            .collect();

        let (width, height) = (image.width() as usize, image.height() as usize);
        let mut labels = Array2::zeros((height, width));
        for (x, y, pixel) in image.enumerate_pixels() {
            let label = color_mapping.get(&opaque(pixel)).copied().unwrap_or(0);
            if let Some(cell) = labels.get_mut((y as usize, x as usize)) {
                *cell = label;
            }
        }

        Self { labels, palette }
    }

    /// Build an exemplar from precomputed labels
    ///
    /// # Errors
    ///
    /// Returns an error if any label has no palette entry
    pub fn from_labels(labels: Array2<usize>, palette: Vec<[u8; 4]>) -> Result<Self> {
        if let Some(&label) = labels.iter().find(|&&label| label >= palette.len()) {
            return Err(invalid_parameter(
                "labels",
                &label,
                &format!("palette only has {} colours", palette.len()),
            ));
        }
        let palette = palette
            .into_iter()
            .map(|[r, g, b, _]| [r, g, b, 255])
            .collect();
        Ok(Self { labels, palette })
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.labels.ncols()
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.labels.nrows()
    }

    /// Label grid indexed by `(row, col)`
    pub const fn labels(&self) -> &Array2<usize> {
        &self.labels
    }

    /// RGBA colour of each label
    pub fn palette(&self) -> &[[u8; 4]] {
        &self.palette
    }

    /// Label at a position, wrapping around both edges
    pub fn label_wrapped(&self, row: usize, col: usize) -> usize {
        let (height, width) = self.labels.dim();
        if height == 0 || width == 0 {
            return 0;
        }
        self.labels
            .get((row % height, col % width))
            .copied()
            .unwrap_or(0)
    }

    /// RGBA colour at a position, without wrapping
    pub fn color_at(&self, row: usize, col: usize) -> Option<[u8; 4]> {
        let label = self.labels.get((row, col))?;
        self.palette.get(*label).copied()
    }
}
