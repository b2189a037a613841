//! Text and PNG rendering of decoded tile grids

use crate::io::configuration::{CELL_PIXELS, MAX_IMAGE_DIMENSION};
use crate::io::error::{Result, TileError, invalid_parameter};
use crate::solution::assignment::TileGrid;
use image::{ImageBuffer, Rgba};
use std::fmt::Write as _;
use std::path::Path;

/// Marker printed for empty cells
pub const EMPTY_CELL: &str = ".";

/// Render a grid as text, one line per board row
///
/// Columns are padded to the longest tile name so rows line up.
pub fn render_text(grid: &TileGrid) -> String {
    let column_width = grid
        .tile_names()
        .iter()
        .map(String::len)
        .max()
        .unwrap_or(0)
        .max(EMPTY_CELL.len());

    let mut out = String::new();
    for y in 0..grid.height() {
        let row: Vec<String> = (0..grid.width())
            .map(|x| {
                let label = grid.name_at(x, y).unwrap_or(EMPTY_CELL);
                format!("{label:<column_width$}")
            })
            .collect();
        let _ = writeln!(out, "{}", row.join(" ").trim_end());
    }
    out
}

/// Distinct opaque colours for `tile_count` tiles
///
/// Hues are spread by the golden angle, so neighbouring indices contrast.
pub fn default_palette(tile_count: usize) -> Vec<[u8; 4]> {
    const GOLDEN_ANGLE: f64 = 137.507_764;
    (0..tile_count)
        .map(|index| {
            let hue = (index as f64 * GOLDEN_ANGLE) % 360.0;
            let [r, g, b] = hsv_to_rgb(hue, 0.65, 0.9);
            [r, g, b, 255]
        })
        .collect()
}

fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> [u8; 3] {
    let chroma = value * saturation;
    let sector = hue / 60.0;
    let secondary = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, secondary, 0.0),
        1 => (secondary, chroma, 0.0),
        2 => (0.0, chroma, secondary),
        3 => (0.0, secondary, chroma),
        4 => (secondary, 0.0, chroma),
        _ => (chroma, 0.0, secondary),
    };
    let offset = value - chroma;
    [r, g, b].map(|channel| ((channel + offset) * 255.0).round() as u8)
}

/// Export the grid as a PNG with one square swatch per cell
///
/// Empty cells are transparent.
///
/// # Errors
///
/// Returns an error if:
/// - The image would exceed [`MAX_IMAGE_DIMENSION`] pixels on either side
/// - A placed tile has no colour in the palette
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &TileGrid, palette: &[[u8; 4]], output_path: &Path) -> Result<()> {
    let width = image_side(grid.width())?;
    let height = image_side(grid.height())?;
    let mut img = ImageBuffer::new(width, height);

    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let color = match grid.get(x, y) {
                Some(tile) => {
                    let rgba = palette.get(tile).copied().ok_or_else(|| {
                        invalid_parameter(
                            "palette",
                            &palette.len(),
                            &format!("no colour for tile index {tile}"),
                        )
                    })?;
                    Rgba(rgba)
                }
                None => Rgba([0, 0, 0, 0]),
            };

            let (left, top) = (x as u32 * CELL_PIXELS, y as u32 * CELL_PIXELS);
            for dx in 0..CELL_PIXELS {
                for dy in 0..CELL_PIXELS {
                    img.put_pixel(left + dx, top + dy, color);
                }
            }
        }
    }

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| TileError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| TileError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

// Large boards would otherwise request a buffer beyond available memory
fn image_side(cells: usize) -> Result<u32> {
    u32::try_from(cells)
        .ok()
        .and_then(|cells| cells.checked_mul(CELL_PIXELS))
        .filter(|&pixels| pixels <= MAX_IMAGE_DIMENSION)
        .ok_or_else(|| {
            invalid_parameter(
                "board size",
                &cells,
                &format!("rendered image would exceed {MAX_IMAGE_DIMENSION} pixels per side"),
            )
        })
}
