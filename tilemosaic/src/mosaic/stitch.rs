use crate::error::RegionError;
use image::{DynamicImage, Rgba, RgbaImage, imageops};
use tilemosaic_core::{TILE_SIZE, TileBBox};

/// Fill color of raster cells before any tile is copied in. Deliberately
/// not zero/transparent, so an uncovered region is visibly distinct from
/// legitimately transparent tile content.
pub const NO_DATA: Rgba<u8> = Rgba([255, 0, 255, 255]);

/// Assembles the grid's tile images into one contiguous raster.
///
/// `tiles` must hold exactly one 256×256 image per grid coordinate, in the
/// grid's row-major iteration order ([`TileBBox::iter_coords`]). Each tile
/// is copied to the block at (column · 256, row · 256), column/row being
/// the tile's x/y offset from the grid minimum; increasing tile x maps to
/// increasing raster column, increasing tile y to increasing raster row.
/// Every block is written exactly once.
///
/// The output is always `(grid.width() · 256) × (grid.height() · 256)`
/// pixels.
///
/// # Errors
/// Returns [`RegionError::GridMismatch`] if the tile count does not match
/// the grid size.
pub fn stitch(grid: &TileBBox, tiles: &[DynamicImage]) -> Result<RgbaImage, RegionError> {
	if tiles.len() as u64 != grid.count_tiles() {
		return Err(RegionError::GridMismatch {
			expected: grid.count_tiles(),
			actual: tiles.len(),
		});
	}

	let mut canvas = RgbaImage::from_pixel(grid.raster_width(), grid.raster_height(), NO_DATA);
	for (coord, tile) in grid.iter_coords().zip(tiles) {
		let (column, row) = grid
			.block_index(&coord)
			.expect("iterated coordinates lie inside the grid");
		imageops::replace(
			&mut canvas,
			&tile.to_rgba8(),
			i64::from(column * TILE_SIZE),
			i64::from(row * TILE_SIZE),
		);
	}
	Ok(canvas)
}

#[cfg(test)]
mod tests {
	use super::*;
	use image::Rgba;

	fn tile(shade: u8) -> DynamicImage {
		DynamicImage::ImageRgba8(RgbaImage::from_pixel(TILE_SIZE, TILE_SIZE, Rgba([shade, shade, shade, 255])))
	}

	#[test]
	fn output_dimensions_are_tile_multiples() {
		let grid = TileBBox::from_min_and_max(10, 239, 422, 241, 424).unwrap();
		let tiles: Vec<DynamicImage> = (0..9).map(|i| tile(i * 20)).collect();
		let canvas = stitch(&grid, &tiles).unwrap();
		assert_eq!((canvas.width(), canvas.height()), (768, 768));
	}

	#[test]
	fn single_tile_grid() {
		let grid = TileBBox::from_min_and_max(10, 239, 424, 239, 424).unwrap();
		let canvas = stitch(&grid, &[tile(7)]).unwrap();
		assert_eq!((canvas.width(), canvas.height()), (256, 256));
		assert_eq!(canvas.get_pixel(0, 0).0, [7, 7, 7, 255]);
		assert_eq!(canvas.get_pixel(255, 255).0, [7, 7, 7, 255]);
	}

	#[test]
	fn blocks_land_row_major() {
		// 2x2 grid, tiles shaded 0, 1, 2, 3 in iteration order:
		//   row 0 (north): 0 1
		//   row 1 (south): 2 3
		let grid = TileBBox::from_min_and_max(5, 10, 20, 11, 21).unwrap();
		let tiles: Vec<DynamicImage> = (0..4).map(tile).collect();
		let canvas = stitch(&grid, &tiles).unwrap();

		assert_eq!(canvas.get_pixel(0, 0).0[0], 0); // north-west block
		assert_eq!(canvas.get_pixel(256, 0).0[0], 1); // north-east block
		assert_eq!(canvas.get_pixel(0, 256).0[0], 2); // south-west block
		assert_eq!(canvas.get_pixel(256, 256).0[0], 3); // south-east block
		assert_eq!(canvas.get_pixel(511, 255).0[0], 1); // last pixel of block 1
	}

	#[test]
	fn every_cell_is_covered() {
		let grid = TileBBox::from_min_and_max(5, 10, 20, 12, 21).unwrap();
		let tiles: Vec<DynamicImage> = (0..6).map(|i| tile(i + 1)).collect();
		let canvas = stitch(&grid, &tiles).unwrap();
		assert!(canvas.pixels().all(|p| *p != NO_DATA));
	}

	#[test]
	fn tile_count_mismatch_is_rejected() {
		let grid = TileBBox::from_min_and_max(5, 10, 20, 11, 21).unwrap();
		let tiles: Vec<DynamicImage> = (0..3).map(tile).collect();
		match stitch(&grid, &tiles).unwrap_err() {
			RegionError::GridMismatch { expected, actual } => {
				assert_eq!(expected, 4);
				assert_eq!(actual, 3);
			}
			other => panic!("expected GridMismatch, got {other:?}"),
		}
	}
}
