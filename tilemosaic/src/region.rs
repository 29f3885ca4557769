use image::RgbaImage;
use std::fmt::{self, Debug, Display};
use tilemosaic_core::GeoBBox;

/// The result of a region fetch: the cropped raster plus the geographic
/// bounding box it depicts.
///
/// The bounding box is the originally requested one, not the tile-aligned
/// grid extent. Immutable once produced.
pub struct RegionMap {
	raster: RgbaImage,
	bbox: GeoBBox,
	zoom: u8,
}

impl RegionMap {
	pub(crate) fn new(raster: RgbaImage, bbox: GeoBBox, zoom: u8) -> RegionMap {
		RegionMap { raster, bbox, zoom }
	}

	/// The cropped raster.
	#[must_use]
	pub fn raster(&self) -> &RgbaImage {
		&self.raster
	}

	/// Consumes the result, returning the raster.
	#[must_use]
	pub fn into_raster(self) -> RgbaImage {
		self.raster
	}

	/// The requested geographic bounding box.
	#[must_use]
	pub fn bbox(&self) -> &GeoBBox {
		&self.bbox
	}

	/// The zoom level the raster was fetched at.
	#[must_use]
	pub fn zoom(&self) -> u8 {
		self.zoom
	}

	/// Raster width in pixels.
	#[must_use]
	pub fn width(&self) -> u32 {
		self.raster.width()
	}

	/// Raster height in pixels.
	#[must_use]
	pub fn height(&self) -> u32 {
		self.raster.height()
	}
}

/// Human-readable summary of geographic bounds and pixel dimensions, e.g.
/// `Lat: 29.38 - 30.14 (641 px); Lon: -95.80 - -94.92 (641 px)`.
impl Display for RegionMap {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Lat: {:.2} - {:.2} ({} px); Lon: {:.2} - {:.2} ({} px)",
			self.bbox.lat_min,
			self.bbox.lat_max,
			self.height(),
			self.bbox.lon_min,
			self.bbox.lon_max,
			self.width()
		)
	}
}

impl Debug for RegionMap {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RegionMap")
			.field("bbox", &self.bbox)
			.field("zoom", &self.zoom)
			.field("width", &self.width())
			.field("height", &self.height())
			.finish()
	}
}
