//! Tests for weighted-average cell colours and surface painting

#[cfg(test)]
mod tests {
    use image::RgbaImage;
    use std::sync::Arc;
    use wavetile::{Surface, SynthesisError};
    use wavetile::algorithm::bitset::PatternBitset;
    use wavetile::algorithm::model::SynthesisModel;
    use wavetile::io::configuration::{CONTRADICTION_COLOUR, MAX_IMAGE_DIMENSION};
    use wavetile::io::render::{cell_color, draw_grid, render_grid};
    use wavetile::spatial::OutputGrid;
    use wavetile::spatial::cell::Cell;
    use wavetile::spatial::grid::Wrap;
    use wavetile::spatial::tiles::PatternCatalog;

    // Black with weight 1 and white with weight 3
    fn catalog() -> PatternCatalog {
        PatternCatalog::from_blocks(
            vec![(vec![0], 1), (vec![1], 3)],
            1,
            vec![[0, 0, 0, 255], [200, 100, 40, 255]],
        )
        .expect("valid blocks")
    }

    struct Recorder {
        rects: Vec<(f64, f64, f64, f64, [u8; 4])>,
    }

    impl Surface for Recorder {
        fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: [u8; 4]) {
            self.rects.push((x, y, width, height, color));
        }
    }

    // Tests the average is weighted by pattern frequency
    // Verified by averaging without weights
    #[test]
    fn test_cell_color_weighted_average() {
        let catalog = catalog();
        let cell = Cell::full(&catalog);
        assert_eq!(cell_color(&cell, &catalog), [150, 75, 30, 255]);
    }

    // Tests a collapsed cell shows its own colour
    // Verified by always averaging over the whole catalog
    #[test]
    fn test_cell_color_collapsed() {
        let catalog = catalog();
        let mut cell = Cell::full(&catalog);
        cell.collapse_to(0, &catalog);
        assert_eq!(cell_color(&cell, &catalog), [0, 0, 0, 255]);
    }

    // Tests an empty possibility set is drawn in the contradiction colour
    // Verified by drawing empty cells black
    #[test]
    fn test_cell_color_contradiction() {
        let catalog = catalog();
        let mut cell = Cell::full(&catalog);
        cell.restrict(&PatternBitset::new(2), &catalog);
        assert_eq!(cell_color(&cell, &catalog), CONTRADICTION_COLOUR);
    }

    // Tests each cell covers its share of the surface
    // Verified by using the grid height for both axes
    #[test]
    fn test_draw_grid_rectangles() {
        let model = Arc::new(SynthesisModel::new(catalog()));
        let grid = OutputGrid::new(model, 4, 2, Wrap::Both, 0).expect("grid");
        let mut recorder = Recorder { rects: Vec::new() };

        draw_grid(&grid, &mut recorder, 100, 50);

        assert_eq!(recorder.rects.len(), 8);
        let last = recorder.rects.last().copied().expect("rect");
        assert!((last.0 - 75.0).abs() < 1e-9);
        assert!((last.1 - 25.0).abs() < 1e-9);
        assert!((last.2 - 25.0).abs() < 1e-9);
        assert!((last.3 - 25.0).abs() < 1e-9);
    }

    // Tests fractional rectangles on an image are clipped and floored
    // Verified by painting past the image bounds
    #[test]
    fn test_image_fill_rect_clips() {
        let mut image = RgbaImage::new(4, 4);
        image.fill_rect(2.5, -1.0, 10.0, 2.0, [9, 9, 9, 255]);

        assert_eq!(image.get_pixel(2, 0).0, [9, 9, 9, 255]);
        assert_eq!(image.get_pixel(3, 0).0, [9, 9, 9, 255]);
        assert_eq!(image.get_pixel(1, 0).0, [0, 0, 0, 0]);
        assert_eq!(image.get_pixel(2, 1).0, [0, 0, 0, 0]);
    }

    // Tests rendered images tile the surface without gaps
    // Verified by dropping the last column of cells
    #[test]
    fn test_render_grid_covers_image() {
        let model = Arc::new(SynthesisModel::new(catalog()));
        let grid = OutputGrid::new(model, 3, 2, Wrap::None, 0).expect("grid");
        let image = render_grid(&grid, 5).expect("image");

        assert_eq!(image.dimensions(), (15, 10));
        assert!(image.pixels().all(|pixel| pixel.0 == [150, 75, 30, 255]));
    }

    // Tests image sizes that overflow or exceed the limit are rejected
    // Verified by multiplying the cell size without a bound
    #[test]
    fn test_render_grid_rejects_oversized_image() {
        let model = Arc::new(SynthesisModel::new(catalog()));
        let wide = OutputGrid::new(Arc::clone(&model), 10_000, 1, Wrap::None, 0).expect("grid");
        assert!(matches!(
            render_grid(&wide, 500_000),
            Err(SynthesisError::InvalidParameter {
                parameter: "cell_pixels",
                ..
            })
        ));

        let strip = OutputGrid::new(model, 2048, 1, Wrap::None, 0).expect("grid");
        let cell_pixels = MAX_IMAGE_DIMENSION / 2048;
        let image = render_grid(&strip, cell_pixels).expect("image at the limit");
        assert_eq!(image.width(), MAX_IMAGE_DIMENSION);
        assert!(render_grid(&strip, cell_pixels + 1).is_err());
    }
}
