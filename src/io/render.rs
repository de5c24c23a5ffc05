//! Painting grid state onto pixel surfaces

use crate::io::configuration::{CONTRADICTION_COLOUR, MAX_IMAGE_DIMENSION};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::cell::Cell;
use crate::spatial::grid::OutputGrid;
use crate::spatial::tiles::PatternCatalog;
use image::{Rgba, RgbaImage};

/// Anything that can be filled with solid rectangles
///
/// Coordinates are in pixels and may be fractional when the surface size is
/// not a multiple of the grid size.
pub trait Surface {
    /// Fill the rectangle with its top-left corner at `(x, y)`
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: [u8; 4]);
}

impl Surface for RgbaImage {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: [u8; 4]) {
        let clamp = |value: f64, limit: u32| value.floor().clamp(0.0, f64::from(limit)) as u32;
        let (x0, x1) = (clamp(x, self.width()), clamp(x + width, self.width()));
        let (y0, y1) = (clamp(y, self.height()), clamp(y + height, self.height()));

        for py in y0..y1 {
            for px in x0..x1 {
                if let Some(pixel) = self.get_pixel_mut_checked(px, py) {
                    *pixel = Rgba(color);
                }
            }
        }
    }
}

/// Frequency-weighted average colour of a cell's remaining patterns
///
/// Each pattern contributes its representative colour. A cell with no
/// pattern left is drawn in [`CONTRADICTION_COLOUR`].
pub fn cell_color(cell: &Cell, catalog: &PatternCatalog) -> [u8; 4] {
    let mut sums = [0u64; 4];
    let mut total = 0u64;

    for index in cell.possible().iter() {
        let (Some(pattern), Some(color)) = (catalog.get(index), catalog.representative_color(index))
        else {
            continue;
        };
        let weight = u64::from(pattern.frequency());
        for (sum, channel) in sums.iter_mut().zip(color) {
            *sum += weight * u64::from(channel);
        }
        total += weight;
    }

    if total == 0 {
        return CONTRADICTION_COLOUR;
    }
    sums.map(|sum| ((sum + total / 2) / total) as u8)
}

/// Paint every cell of the grid onto a `width` × `height` pixel surface
pub fn draw_grid<S: Surface + ?Sized>(grid: &OutputGrid, surface: &mut S, width: u32, height: u32) {
    let cell_width = f64::from(width) / grid.width() as f64;
    let cell_height = f64::from(height) / grid.height() as f64;
    let catalog = grid.model().catalog();

    for ((row, col), cell) in grid.cells().indexed_iter() {
        surface.fill_rect(
            col as f64 * cell_width,
            row as f64 * cell_height,
            cell_width,
            cell_height,
            cell_color(cell, catalog),
        );
    }
}

/// Render the grid to an image with square cells of `cell_pixels` pixels
///
/// # Errors
///
/// Returns an error if either side of the image would exceed
/// [`MAX_IMAGE_DIMENSION`] pixels
pub fn render_grid(grid: &OutputGrid, cell_pixels: u32) -> Result<RgbaImage> {
    let cell_pixels = cell_pixels.max(1);
    let width = image_side(grid.width(), cell_pixels)?;
    let height = image_side(grid.height(), cell_pixels)?;
    let mut image = RgbaImage::new(width, height);
    draw_grid(grid, &mut image, width, height);
    Ok(image)
}

fn image_side(cells: usize, cell_pixels: u32) -> Result<u32> {
    u32::try_from(cells)
        .ok()
        .and_then(|count| count.checked_mul(cell_pixels))
        .filter(|&side| side <= MAX_IMAGE_DIMENSION)
        .ok_or_else(|| {
            invalid_parameter(
                "cell_pixels",
                &cell_pixels,
                &format!("{cells} cells of this size exceed {MAX_IMAGE_DIMENSION} pixels"),
            )
        })
}
