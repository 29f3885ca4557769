//! Coordinate types: geographic bounding boxes, tile addresses, tile
//! grids and raster crop windows.

mod geo_bbox;
mod pixel_window;
mod tile_bbox;
mod tile_coord;

pub use geo_bbox::{GeoBBox, MAX_MERCATOR_LAT};
pub use pixel_window::PixelWindow;
pub use tile_bbox::TileBBox;
pub use tile_coord::TileCoord;
