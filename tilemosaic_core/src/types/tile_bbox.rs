//! Tile-aligned bounding boxes: the rectangular tile grid covering a
//! geographic bounding box at one zoom level.
//!
//! ## Conventions
//! - Tile ranges are inclusive on both ends.
//! - Y increases downward (southward), so the grid's `y_min` row is the
//!   northern edge and `y_max` the southern edge.
//! - Grid edges come from plain floor division of the pixel coordinates:
//!   `x_min = lon_to_tile_x(lon_min)`, `x_max = lon_to_tile_x(lon_max)`,
//!   `y_min = lat_to_tile_y(lat_max)`, `y_max = lat_to_tile_y(lat_min)`.
//!   A box edge lying exactly on a tile boundary therefore includes the
//!   tile east/south of it, which keeps the crop window inside the
//!   stitched raster.
//! - No antimeridian wrapping: the covering grid of a valid [`GeoBBox`]
//!   is always a contiguous rectangle.

use crate::{
	GeoBBox, TileCoord,
	projection::{TILE_SIZE, lat_to_tile_y, lon_to_tile_x},
};
use anyhow::{Result, ensure};
use itertools::Itertools;
use std::fmt::{self, Debug};

/// A rectangular, inclusive range of tiles at a single zoom level.
///
/// # Examples
///
/// ```
/// use tilemosaic_core::{GeoBBox, TileBBox};
///
/// let geo = GeoBBox::new(-95.80204, 29.38048, -94.92313, 30.14344).unwrap();
/// let grid = TileBBox::from_geo(10, &geo).unwrap();
/// assert_eq!((grid.x_min(), grid.x_max()), (239, 241));
/// assert_eq!((grid.y_min(), grid.y_max()), (422, 424));
/// assert_eq!(grid.count_tiles(), 9);
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct TileBBox {
	/// Zoom level of the grid.
	pub zoom: u8,
	x_min: u32,
	y_min: u32,
	x_max: u32,
	y_max: u32,
}

impl TileBBox {
	/// Creates a grid from inclusive minimum and maximum tile indices.
	///
	/// # Errors
	/// Returns an error if the indices are out of range for the zoom level
	/// or the minima exceed the maxima.
	pub fn from_min_and_max(zoom: u8, x_min: u32, y_min: u32, x_max: u32, y_max: u32) -> Result<TileBBox> {
		ensure!(zoom <= 31, "zoom ({zoom}) must be <= 31");
		let max = ((1u64 << zoom) - 1) as u32;
		ensure!(x_min <= x_max, "x_min ({x_min}) must be <= x_max ({x_max})");
		ensure!(y_min <= y_max, "y_min ({y_min}) must be <= y_max ({y_max})");
		ensure!(x_max <= max, "x_max ({x_max}) must be <= max ({max})");
		ensure!(y_max <= max, "y_max ({y_max}) must be <= max ({max})");
		Ok(TileBBox {
			zoom,
			x_min,
			y_min,
			x_max,
			y_max,
		})
	}

	/// The grid of tiles fully covering `bbox` at the given zoom level.
	///
	/// Every point of `bbox` projects into one of the grid's tiles.
	///
	/// # Errors
	/// Returns an error if `zoom` > 31.
	pub fn from_geo(zoom: u8, bbox: &GeoBBox) -> Result<TileBBox> {
		ensure!(zoom <= 31, "zoom ({zoom}) must be <= 31");
		TileBBox::from_min_and_max(
			zoom,
			lon_to_tile_x(bbox.lon_min, zoom),
			lat_to_tile_y(bbox.lat_max, zoom), // north edge: smaller row index
			lon_to_tile_x(bbox.lon_max, zoom),
			lat_to_tile_y(bbox.lat_min, zoom),
		)
	}

	/// Western (minimum) tile column.
	#[must_use]
	pub fn x_min(&self) -> u32 {
		self.x_min
	}

	/// Northern (minimum) tile row.
	#[must_use]
	pub fn y_min(&self) -> u32 {
		self.y_min
	}

	/// Eastern (maximum) tile column.
	#[must_use]
	pub fn x_max(&self) -> u32 {
		self.x_max
	}

	/// Southern (maximum) tile row.
	#[must_use]
	pub fn y_max(&self) -> u32 {
		self.y_max
	}

	/// Number of tile columns.
	#[must_use]
	pub fn width(&self) -> u32 {
		self.x_max - self.x_min + 1
	}

	/// Number of tile rows.
	#[must_use]
	pub fn height(&self) -> u32 {
		self.y_max - self.y_min + 1
	}

	/// Total number of tiles in the grid.
	#[must_use]
	pub fn count_tiles(&self) -> u64 {
		u64::from(self.width()) * u64::from(self.height())
	}

	/// Pixel width of the raster stitched from this grid.
	#[must_use]
	pub fn raster_width(&self) -> u32 {
		self.width() * TILE_SIZE
	}

	/// Pixel height of the raster stitched from this grid.
	#[must_use]
	pub fn raster_height(&self) -> u32 {
		self.height() * TILE_SIZE
	}

	/// Global pixel-x of the grid's top-left corner (the minimum tile's
	/// origin).
	#[must_use]
	pub fn pixel_origin_x(&self) -> f64 {
		f64::from(self.x_min) * f64::from(TILE_SIZE)
	}

	/// Global pixel-y of the grid's top-left corner.
	#[must_use]
	pub fn pixel_origin_y(&self) -> f64 {
		f64::from(self.y_min) * f64::from(TILE_SIZE)
	}

	/// Zero-based column/row block indices of `coord` within this grid.
	///
	/// # Errors
	/// Returns an error if `coord` lies outside the grid or on a different
	/// zoom level.
	pub fn block_index(&self, coord: &TileCoord) -> Result<(u32, u32)> {
		ensure!(
			coord.zoom == self.zoom,
			"coord zoom ({}) does not match grid zoom ({})",
			coord.zoom,
			self.zoom
		);
		ensure!(
			coord.x >= self.x_min && coord.x <= self.x_max && coord.y >= self.y_min && coord.y <= self.y_max,
			"tile {coord} lies outside grid {self:?}"
		);
		Ok((coord.x - self.x_min, coord.y - self.y_min))
	}

	/// Iterates all tile coordinates of the grid in row-major order: the
	/// northernmost row first, west to east within each row.
	///
	/// This is the canonical order in which tile images are handed to the
	/// stitcher.
	pub fn iter_coords(&self) -> impl Iterator<Item = TileCoord> + '_ {
		(self.y_min..=self.y_max)
			.cartesian_product(self.x_min..=self.x_max)
			.map(|(y, x)| TileCoord { zoom: self.zoom, x, y })
	}
}

impl Debug for TileBBox {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"TileBBox({}, [{},{}] - [{},{}])",
			self.zoom, self.x_min, self.y_min, self.x_max, self.y_max
		)
	}
}
