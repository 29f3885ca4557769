//! The exact pixel sub-window of a stitched raster corresponding to a
//! geographic bounding box.
//!
//! This is the single place where geographic coordinates are translated
//! into raster offsets. The stitcher and cropper consume the resulting
//! window; neither performs any axis flipping or offset arithmetic of its
//! own.

use crate::{
	GeoBBox, TileBBox,
	projection::{lat_to_pixel_y, lon_to_pixel_x},
};
use anyhow::{Result, ensure};
use std::fmt::{self, Debug};

/// A crop window in raster pixel coordinates, relative to the top-left
/// corner of the stitched raster.
///
/// Derivation (zoom and grid fixed):
/// - `left`/`top` are the floors of the bbox's western/northern pixel
///   offsets from the grid's minimum tile origin,
/// - `width` = `round(pixel_x(lon_max) - pixel_x(lon_min)) + 1`,
/// - `height` = `round(pixel_y(lat_min) - pixel_y(lat_max)) + 1`
///
/// so the window spans the inclusive pixel range of the requested box.
/// The extents are clamped to the raster as a guard against half-pixel
/// rounding when a bbox edge falls within 0.5 px of the grid's outer edge.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct PixelWindow {
	/// Leftmost raster column of the window.
	pub left: u32,
	/// Topmost raster row of the window.
	pub top: u32,
	/// Window width in pixels.
	pub width: u32,
	/// Window height in pixels.
	pub height: u32,
}

impl PixelWindow {
	/// Computes the crop window of `bbox` within the raster stitched from
	/// `grid`.
	///
	/// # Errors
	/// Returns an error if `grid` does not cover `bbox` (the grid produced
	/// by [`TileBBox::from_geo`] for the same bbox and zoom always does).
	///
	/// # Examples
	///
	/// ```
	/// use tilemosaic_core::{GeoBBox, PixelWindow, TileBBox};
	///
	/// let geo = GeoBBox::new(-95.80204, 29.38048, -94.92313, 30.14344).unwrap();
	/// let grid = TileBBox::from_geo(10, &geo).unwrap();
	/// let window = PixelWindow::from_geo(&geo, &grid).unwrap();
	/// assert_eq!((window.width, window.height), (641, 641));
	/// ```
	pub fn from_geo(bbox: &GeoBBox, grid: &TileBBox) -> Result<PixelWindow> {
		let zoom = grid.zoom;
		let west = lon_to_pixel_x(bbox.lon_min, zoom) - grid.pixel_origin_x();
		let east = lon_to_pixel_x(bbox.lon_max, zoom) - grid.pixel_origin_x();
		let north = lat_to_pixel_y(bbox.lat_max, zoom) - grid.pixel_origin_y();
		let south = lat_to_pixel_y(bbox.lat_min, zoom) - grid.pixel_origin_y();

		ensure!(
			west >= 0.0 && north >= 0.0,
			"grid {grid:?} does not cover the north-west corner of {bbox:?}"
		);
		ensure!(
			east < f64::from(grid.raster_width()) + 0.5 && south < f64::from(grid.raster_height()) + 0.5,
			"grid {grid:?} does not cover the south-east corner of {bbox:?}"
		);

		let left = west.floor() as u32;
		let top = north.floor() as u32;
		let width = ((east - west).round() as u32 + 1).min(grid.raster_width() - left);
		let height = ((south - north).round() as u32 + 1).min(grid.raster_height() - top);

		Ok(PixelWindow {
			left,
			top,
			width,
			height,
		})
	}

	/// Rightmost raster column of the window (inclusive).
	#[must_use]
	pub fn right(&self) -> u32 {
		self.left + self.width - 1
	}

	/// Bottommost raster row of the window (inclusive).
	#[must_use]
	pub fn bottom(&self) -> u32 {
		self.top + self.height - 1
	}
}

impl Debug for PixelWindow {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"PixelWindow({}x{} at {},{})",
			self.width, self.height, self.left, self.top
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::projection::{lat_to_pixel_y, lon_to_pixel_x};
	use rstest::rstest;

	fn window(zoom: u8, lon_min: f64, lat_min: f64, lon_max: f64, lat_max: f64) -> (PixelWindow, TileBBox) {
		let geo = GeoBBox::new(lon_min, lat_min, lon_max, lat_max).unwrap();
		let grid = TileBBox::from_geo(zoom, &geo).unwrap();
		(PixelWindow::from_geo(&geo, &grid).unwrap(), grid)
	}

	#[test]
	fn houston_z10() {
		let (w, grid) = window(10, -95.80204, 29.38048, -94.92313, 30.14344);
		assert_eq!((w.left, w.top), (127, 1));
		assert_eq!((w.width, w.height), (641, 641));
		// The right edge lands exactly on the last raster column.
		assert_eq!(w.right(), grid.raster_width() - 1);
		assert!(w.bottom() < grid.raster_height());
	}

	#[test]
	fn single_tile_box() {
		let (w, grid) = window(10, -95.9, 29.3, -95.7, 29.5);
		assert_eq!(grid.count_tiles(), 1);
		assert_eq!((w.left, w.top), (55, 29));
		assert_eq!((w.width, w.height), (147, 168));
		// Strictly smaller than the single 256x256 tile.
		assert!(w.width < 256 && w.height < 256);
	}

	// Crop extents follow round(pixel span) + 1 regardless of how many
	// tiles the box spans.
	#[rstest]
	#[case(10, -95.80204, 29.38048, -94.92313, 30.14344)]
	#[case(10, -95.9, 29.3, -95.7, 29.5)]
	#[case(9, 8.0653, 51.3563, 12.3528, 52.2564)]
	#[case(14, 8.0, 51.0, 8.0, 51.0)] // degenerate box -> 1x1 window
	fn extents_match_pixel_span(
		#[case] zoom: u8,
		#[case] lon_min: f64,
		#[case] lat_min: f64,
		#[case] lon_max: f64,
		#[case] lat_max: f64,
	) {
		let (w, _) = window(zoom, lon_min, lat_min, lon_max, lat_max);
		let dx = lon_to_pixel_x(lon_max, zoom) - lon_to_pixel_x(lon_min, zoom);
		let dy = lat_to_pixel_y(lat_min, zoom) - lat_to_pixel_y(lat_max, zoom);
		assert_eq!(w.width, dx.round() as u32 + 1);
		assert_eq!(w.height, dy.round() as u32 + 1);
	}

	#[test]
	fn window_fits_raster() {
		for (lon_min, lon_max) in [(-95.99, -95.01), (-0.5, 0.5), (10.0, 10.001)] {
			for (lat_min, lat_max) in [(29.01, 29.99), (-0.25, 0.25)] {
				let (w, grid) = window(11, lon_min, lat_min, lon_max, lat_max);
				assert!(w.right() < grid.raster_width());
				assert!(w.bottom() < grid.raster_height());
			}
		}
	}

	#[test]
	fn rejects_grid_not_covering_bbox() {
		let geo = GeoBBox::new(-95.80204, 29.38048, -94.92313, 30.14344).unwrap();
		let elsewhere = TileBBox::from_min_and_max(10, 0, 0, 1, 1).unwrap();
		assert!(PixelWindow::from_geo(&geo, &elsewhere).is_err());
	}
}
