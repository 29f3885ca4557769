//! Web-Mercator pixel and tile arithmetic for the slippy-map tile scheme.
//!
//! At zoom level `z` the world is a square of `2^z × 2^z` tiles, each
//! [`TILE_SIZE`] pixels on a side. Longitude maps linearly to pixel-x;
//! latitude maps through the Mercator transform to pixel-y, which grows
//! southward. Tile indices are the pixel coordinates divided by
//! [`TILE_SIZE`], floored.
//!
//! The pixel functions perform no input normalization: longitudes outside
//! `[-180, 180]` extrapolate linearly and latitudes at the poles produce
//! infinities. [`GeoBBox`](crate::GeoBBox) validation keeps the fetch path
//! inside the usable domain.
//!
//! # Examples
//!
//! ```
//! use tilemosaic_core::projection::{lon_to_tile_x, lat_to_tile_y};
//!
//! // The OSM wiki reference point: 50.7929°N 6.0402°E at zoom 18.
//! assert_eq!(lon_to_tile_x(6.0402, 18), 135470);
//! assert_eq!(lat_to_tile_y(50.7929, 18), 87999);
//! ```

use std::f64::consts::PI;

/// Width and height of a single map tile, in pixels.
pub const TILE_SIZE: u32 = 256;

/// Width (= height) of the full world in pixels at the given zoom level.
#[must_use]
pub fn world_pixel_size(zoom: u8) -> f64 {
	f64::from(TILE_SIZE) * 2.0f64.powi(i32::from(zoom))
}

/// Maps a longitude in degrees to a global pixel-x coordinate at `zoom`.
///
/// Monotonically non-decreasing in `lon`.
#[must_use]
pub fn lon_to_pixel_x(lon: f64, zoom: u8) -> f64 {
	(lon + 180.0) / 360.0 * world_pixel_size(zoom)
}

/// Maps a latitude in degrees to a global pixel-y coordinate at `zoom`.
///
/// Pixel-y grows southward: monotonically non-increasing in `lat`.
/// Produces ±infinity at `lat = ±90`.
#[must_use]
pub fn lat_to_pixel_y(lat: f64, zoom: u8) -> f64 {
	let merc = (PI / 4.0 + lat * PI / 360.0).tan().ln();
	(1.0 - merc / PI) / 2.0 * world_pixel_size(zoom)
}

/// Tile column containing the given longitude at `zoom`.
#[must_use]
pub fn lon_to_tile_x(lon: f64, zoom: u8) -> u32 {
	pixel_to_tile(lon_to_pixel_x(lon, zoom), zoom)
}

/// Tile row containing the given latitude at `zoom`.
///
/// Rows grow southward, so a larger latitude yields a smaller row index.
#[must_use]
pub fn lat_to_tile_y(lat: f64, zoom: u8) -> u32 {
	pixel_to_tile(lat_to_pixel_y(lat, zoom), zoom)
}

// Floor to the containing tile, clamped into the valid index range. The
// clamp absorbs floating-point spill at the exact Mercator edge, where the
// pixel coordinate can land a hair outside [0, world_pixel_size).
fn pixel_to_tile(pixel: f64, zoom: u8) -> u32 {
	let max = (1u64 << zoom) - 1;
	let tile = (pixel / f64::from(TILE_SIZE)).floor();
	(tile.max(0.0) as u64).min(max) as u32
}
