//! Tests for text and PNG rendering of tile grids

#[cfg(test)]
mod tests {
    use tileilp::TileError;
    use tileilp::io::configuration::{CELL_PIXELS, MAX_BOARD_DIMENSION, MAX_IMAGE_DIMENSION};
    use tileilp::solution::assignment::TileGrid;
    use tileilp::solution::render::{EMPTY_CELL, default_palette, export_grid_as_png, render_text};

    fn grid() -> TileGrid {
        let mut grid = TileGrid::new(3, 2, vec!["belt".to_string(), "w".to_string()]);
        grid.set(0, 0, Some(0));
        grid.set(1, 0, Some(1));
        grid.set(2, 1, Some(0));
        grid
    }

    // Tests rows are padded to the longest name and empty cells marked
    // Verified by rendering columns as rows
    #[test]
    fn test_render_text() {
        let text = render_text(&grid());
        assert_eq!(text, format!("belt w    {EMPTY_CELL}\n{EMPTY_CELL}    {EMPTY_CELL}    belt\n"));
    }

    // Tests palette colours are opaque and distinct
    // Verified by using a fixed hue step of 360 degrees
    #[test]
    fn test_default_palette() {
        let palette = default_palette(12);
        assert_eq!(palette.len(), 12);
        assert!(palette.iter().all(|color| color[3] == 255));
        for (i, a) in palette.iter().enumerate() {
            for b in palette.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert!(default_palette(0).is_empty());
    }

    // Tests PNG export writes one swatch per cell with transparent gaps
    // Verified by writing empty cells black and opaque
    #[test]
    fn test_export_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("grid.png");
        let palette = default_palette(2);
        export_grid_as_png(&grid(), &palette, &path).unwrap();

        let image = image::open(&path).unwrap().to_rgba8();
        assert_eq!(image.dimensions(), (3 * CELL_PIXELS, 2 * CELL_PIXELS));
        assert_eq!(image.get_pixel(0, 0).0, palette[0]);
        assert_eq!(image.get_pixel(CELL_PIXELS, 0).0, palette[1]);
        assert_eq!(image.get_pixel(0, CELL_PIXELS).0, [0, 0, 0, 0]);
    }

    // Tests a palette missing a placed tile is rejected
    // Verified by falling back to black
    #[test]
    fn test_export_short_palette() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.png");
        let result = export_grid_as_png(&grid(), &default_palette(1), &path);
        assert!(matches!(result, Err(TileError::InvalidParameter { .. })));
        assert!(!path.exists());
    }

    // Tests boards too large to render are rejected before allocating
    // Verified by removing the image size limit
    #[test]
    fn test_export_oversized_board() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.png");
        let grid = TileGrid::new(MAX_BOARD_DIMENSION, 1, vec!["A".to_string()]);
        let result = export_grid_as_png(&grid, &default_palette(1), &path);

        assert!(matches!(
            result,
            Err(TileError::InvalidParameter { parameter: "board size", .. })
        ));
        assert!(!path.exists());

        let largest = (MAX_IMAGE_DIMENSION / CELL_PIXELS) as usize;
        let edge = TileGrid::new(largest, 1, vec!["A".to_string()]);
        let edge_path = dir.path().join("edge.png");
        export_grid_as_png(&edge, &default_palette(1), &edge_path).unwrap();
        assert!(edge_path.exists());
    }
}
