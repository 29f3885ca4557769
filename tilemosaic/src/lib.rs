//! Fetches slippy-map raster tiles covering a geographic bounding box,
//! stitches them into one contiguous image and crops the result to the
//! exact pixel extent of the request.
//!
//! # Example
//!
//! ```no_run
//! use tilemosaic::{TileProvider, TileSource, fetch_region};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = TileProvider::from_name("osm")?;
//! let source = TileSource::open_http(provider, true)?;
//! let region = fetch_region(&source, &[-95.80204, -94.92313], &[29.38048, 30.14344], 10).await?;
//! println!("{region}");
//! region.raster().save("houston.png")?;
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod error;
pub mod fetch;
pub mod mosaic;
pub mod region;
pub mod source;

pub use cache::TileCache;
pub use error::RegionError;
pub use fetch::{MAX_RECOMMENDED_ZOOM, fetch_region};
pub use region::RegionMap;
pub use source::{HttpTransport, TileProvider, TileSource, TileTransport};

pub use tilemosaic_core::{GeoBBox, PixelWindow, TILE_SIZE, TileBBox, TileCoord};
