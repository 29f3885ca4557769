//! Coordinate mathematics for the slippy-map tile scheme: Web-Mercator
//! projection, tile grids covering geographic bounding boxes, and exact
//! raster crop windows. No I/O lives here.

pub mod projection;
pub mod types;

pub use projection::TILE_SIZE;
pub use types::{GeoBBox, MAX_MERCATOR_LAT, PixelWindow, TileBBox, TileCoord};
