use crate::projection::{lat_to_tile_y, lon_to_tile_x};
use anyhow::{Result, ensure};
use std::fmt::{self, Debug, Display};

/// A slippy-map tile address: zoom level plus x/y grid indices.
///
/// `x` and `y` are in `[0, 2^zoom - 1]`; y grows southward. Coordinates
/// are derived from geographic positions via [`TileCoord::from_geo`]
/// rather than constructed ad hoc.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct TileCoord {
	/// Zoom level of the tile.
	pub zoom: u8,
	/// Column index, growing eastward.
	pub x: u32,
	/// Row index, growing southward.
	pub y: u32,
}

impl TileCoord {
	/// Creates a tile coordinate, validating the indices against the zoom
	/// level.
	///
	/// # Errors
	/// Returns an error if `zoom` > 31 or either index is out of range.
	pub fn new(zoom: u8, x: u32, y: u32) -> Result<TileCoord> {
		ensure!(zoom <= 31, "zoom ({zoom}) must be <= 31");
		let max = 1u64 << zoom;
		ensure!(u64::from(x) < max, "x ({x}) out of bounds for zoom {zoom}");
		ensure!(u64::from(y) < max, "y ({y}) out of bounds for zoom {zoom}");
		Ok(TileCoord { zoom, x, y })
	}

	/// The tile containing the given longitude/latitude at `zoom`.
	///
	/// # Errors
	/// Returns an error if `zoom` > 31.
	///
	/// # Examples
	///
	/// ```
	/// use tilemosaic_core::TileCoord;
	///
	/// let coord = TileCoord::from_geo(6.0402, 50.7929, 18).unwrap();
	/// assert_eq!((coord.x, coord.y), (135470, 87999));
	/// ```
	pub fn from_geo(lon: f64, lat: f64, zoom: u8) -> Result<TileCoord> {
		ensure!(zoom <= 31, "zoom ({zoom}) must be <= 31");
		TileCoord::new(zoom, lon_to_tile_x(lon, zoom), lat_to_tile_y(lat, zoom))
	}

	/// Longitude/latitude of this tile's northwest corner, in degrees.
	#[must_use]
	pub fn as_geo(&self) -> [f64; 2] {
		let n = 2.0f64.powi(i32::from(self.zoom));
		let lon = f64::from(self.x) / n * 360.0 - 180.0;
		let lat = (std::f64::consts::PI * (1.0 - 2.0 * f64::from(self.y) / n))
			.sinh()
			.atan()
			.to_degrees();
		[lon, lat]
	}
}

impl Debug for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TileCoord({}, {}, {})", self.zoom, self.x, self.y)
	}
}

/// Renders as `zoom/x/y`, the order used in tile URLs.
impl Display for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
	}
}
