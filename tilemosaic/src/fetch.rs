//! The region fetch pipeline: normalize the requested ranges, enumerate
//! the covering tile grid, fetch every tile, stitch, crop.

use crate::{
	error::RegionError,
	mosaic::{crop, stitch},
	region::RegionMap,
	source::TileSource,
};
use futures::{StreamExt, TryStreamExt, stream};
use image::DynamicImage;
use log::{info, warn};
use tilemosaic_core::{GeoBBox, PixelWindow, TileBBox};

/// Zoom levels above this produce impractically large tile grids; they are
/// not rejected, only warned about.
pub const MAX_RECOMMENDED_ZOOM: u8 = 18;

/// Fetches the raster covering the given longitude/latitude ranges at
/// `zoom` and crops it to their exact pixel extent.
///
/// The ranges may be unordered and may contain non-finite values, which
/// are ignored. Tiles are fetched concurrently up to the source's
/// configured limit; results arrive in grid order, so the stitcher sees
/// tiles exactly as enumerated. A single failing tile aborts the whole
/// request; there is no partial result.
///
/// # Errors
/// - [`RegionError::InvalidRange`] if no finite range values remain or the
///   box lies outside the Web-Mercator domain.
/// - [`RegionError::TileUnavailable`] if any tile fails to fetch or
///   decode.
/// - [`RegionError::GridMismatch`] if the source yields a wrong tile count
///   (a programming error).
pub async fn fetch_region(
	source: &TileSource,
	lon_range: &[f64],
	lat_range: &[f64],
	zoom: u8,
) -> Result<RegionMap, RegionError> {
	if zoom > MAX_RECOMMENDED_ZOOM {
		warn!("zoom {zoom} exceeds the recommended maximum of {MAX_RECOMMENDED_ZOOM}");
	}

	let bbox = GeoBBox::from_ranges(lon_range, lat_range).map_err(|e| RegionError::InvalidRange(format!("{e:#}")))?;
	let grid = TileBBox::from_geo(zoom, &bbox).map_err(|e| RegionError::InvalidRange(format!("{e:#}")))?;
	info!(
		"fetching {} tiles ({}x{}) at zoom {zoom} from '{}' for {bbox:?}",
		grid.count_tiles(),
		grid.width(),
		grid.height(),
		source.provider().name(),
	);

	let tiles: Vec<DynamicImage> = stream::iter(grid.iter_coords())
		.map(|coord| source.fetch_tile(coord))
		.buffered(source.concurrency())
		.try_collect()
		.await?;

	let stitched = stitch(&grid, &tiles)?;
	let window =
		PixelWindow::from_geo(&bbox, &grid).map_err(|e| RegionError::InvalidRange(format!("{e:#}")))?;
	let raster = crop(&stitched, &window);

	let region = RegionMap::new(raster, bbox, zoom);
	info!("assembled region: {region}");
	Ok(region)
}
