use anyhow::{Result, ensure};
use std::fmt::Debug;

/// Largest latitude representable in the Web-Mercator projection.
pub static MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;

/// A geographic bounding box in WGS84 degrees.
///
/// Stores the minimum and maximum longitude and latitude. Valid instances
/// satisfy `lon_min <= lon_max`, `lat_min <= lat_max`, longitudes within
/// `[-180, 180]` and latitudes within the Web-Mercator domain
/// `[-85.05112877980659, 85.05112877980659]`. Boxes crossing the
/// antimeridian or touching the poles cannot be constructed; requests for
/// them fail before any tile is enumerated.
///
/// # Examples
///
/// ```
/// use tilemosaic_core::GeoBBox;
///
/// let bbox = GeoBBox::from_ranges(&[-94.92313, -95.80204], &[30.14344, 29.38048]).unwrap();
/// assert_eq!(bbox.lon_min, -95.80204);
/// assert_eq!(bbox.lat_max, 30.14344);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct GeoBBox {
	/// Western edge, degrees longitude.
	pub lon_min: f64,
	/// Southern edge, degrees latitude.
	pub lat_min: f64,
	/// Eastern edge, degrees longitude.
	pub lon_max: f64,
	/// Northern edge, degrees latitude.
	pub lat_max: f64,
}

impl GeoBBox {
	/// Creates a bounding box from already-ordered edges.
	///
	/// # Errors
	/// Returns an error if any edge is outside its valid domain or the
	/// minima exceed the maxima.
	pub fn new(lon_min: f64, lat_min: f64, lon_max: f64, lat_max: f64) -> Result<GeoBBox> {
		GeoBBox {
			lon_min,
			lat_min,
			lon_max,
			lat_max,
		}
		.checked()
	}

	/// Builds a bounding box from arbitrary longitude and latitude samples.
	///
	/// The samples may be unordered and may contain non-finite values, which
	/// are discarded. The box spans the minimum to the maximum of what
	/// remains.
	///
	/// # Errors
	/// Returns an error if either slice contains no finite value, or if the
	/// resulting edges fall outside the valid domain.
	///
	/// # Examples
	///
	/// ```
	/// use tilemosaic_core::GeoBBox;
	///
	/// let bbox = GeoBBox::from_ranges(&[10.0, f64::NAN, 8.0], &[51.0, 52.0]).unwrap();
	/// assert_eq!((bbox.lon_min, bbox.lon_max), (8.0, 10.0));
	/// ```
	pub fn from_ranges(lons: &[f64], lats: &[f64]) -> Result<GeoBBox> {
		fn span(values: &[f64], axis: &str) -> Result<(f64, f64)> {
			let mut bounds: Option<(f64, f64)> = None;
			for &v in values.iter().filter(|v| v.is_finite()) {
				bounds = Some(match bounds {
					Some((min, max)) => (min.min(v), max.max(v)),
					None => (v, v),
				});
			}
			bounds.ok_or_else(|| anyhow::anyhow!("{axis} range contains no finite values"))
		}

		let (lon_min, lon_max) = span(lons, "longitude")?;
		let (lat_min, lat_max) = span(lats, "latitude")?;
		GeoBBox::new(lon_min, lat_min, lon_max, lat_max)
	}

	/// Longitude span in degrees.
	#[must_use]
	pub fn lon_span(&self) -> f64 {
		self.lon_max - self.lon_min
	}

	/// Latitude span in degrees.
	#[must_use]
	pub fn lat_span(&self) -> f64 {
		self.lat_max - self.lat_min
	}

	/// Returns the edges as `[lon_min, lat_min, lon_max, lat_max]`.
	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.lon_min, self.lat_min, self.lon_max, self.lat_max]
	}

	fn checked(self) -> Result<Self> {
		ensure!(self.lon_min >= -180.0, "lon_min ({}) must be >= -180", self.lon_min);
		ensure!(self.lon_max <= 180.0, "lon_max ({}) must be <= 180", self.lon_max);
		ensure!(
			self.lat_min >= -MAX_MERCATOR_LAT,
			"lat_min ({}) must be >= {} (Web-Mercator limit)",
			self.lat_min,
			-MAX_MERCATOR_LAT
		);
		ensure!(
			self.lat_max <= MAX_MERCATOR_LAT,
			"lat_max ({}) must be <= {} (Web-Mercator limit)",
			self.lat_max,
			MAX_MERCATOR_LAT
		);
		ensure!(
			self.lon_min <= self.lon_max,
			"lon_min ({}) must be <= lon_max ({})",
			self.lon_min,
			self.lon_max
		);
		ensure!(
			self.lat_min <= self.lat_max,
			"lat_min ({}) must be <= lat_max ({})",
			self.lat_min,
			self.lat_max
		);
		Ok(self)
	}
}

impl Debug for GeoBBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"GeoBBox({}, {}, {}, {})",
			self.lon_min, self.lat_min, self.lon_max, self.lat_max
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn new_keeps_edges() {
		let bbox = GeoBBox::new(-10.0, -5.0, 10.0, 5.0).unwrap();
		assert_eq!(bbox.as_array(), [-10.0, -5.0, 10.0, 5.0]);
		assert_eq!(bbox.lon_span(), 20.0);
		assert_eq!(bbox.lat_span(), 10.0);
	}

	#[rstest]
	#[case(&[-95.80204, -94.92313], &[29.38048, 30.14344], [-95.80204, 29.38048, -94.92313, 30.14344])]
	#[case(&[-94.92313, -95.80204], &[30.14344, 29.38048], [-95.80204, 29.38048, -94.92313, 30.14344])]
	#[case(&[10.0, f64::NAN, 8.0], &[f64::INFINITY, 51.0, 52.0], [8.0, 51.0, 10.0, 52.0])]
	#[case(&[7.5], &[46.0], [7.5, 46.0, 7.5, 46.0])]
	fn from_ranges_normalizes(#[case] lons: &[f64], #[case] lats: &[f64], #[case] expected: [f64; 4]) {
		let bbox = GeoBBox::from_ranges(lons, lats).unwrap();
		assert_eq!(bbox.as_array(), expected);
	}

	#[test]
	fn from_ranges_rejects_all_non_finite() {
		assert!(GeoBBox::from_ranges(&[f64::NAN, f64::NEG_INFINITY], &[50.0]).is_err());
		assert!(GeoBBox::from_ranges(&[8.0], &[]).is_err());
	}

	#[rstest]
	#[case(-190.0, 0.0, 10.0, 5.0)] // west of the antimeridian
	#[case(-10.0, 0.0, 190.0, 5.0)] // east of the antimeridian
	#[case(-10.0, -89.0, 10.0, 5.0)] // south of the Mercator limit
	#[case(-10.0, 0.0, 10.0, 89.0)] // north of the Mercator limit
	fn rejects_out_of_domain(#[case] lon_min: f64, #[case] lat_min: f64, #[case] lon_max: f64, #[case] lat_max: f64) {
		assert!(GeoBBox::new(lon_min, lat_min, lon_max, lat_max).is_err());
	}

	#[test]
	fn accepts_mercator_edges() {
		GeoBBox::new(-180.0, -MAX_MERCATOR_LAT, 180.0, MAX_MERCATOR_LAT).unwrap();
	}

	#[test]
	fn debug_format() {
		let bbox = GeoBBox::new(-10.0, -5.0, 10.0, 5.0).unwrap();
		assert_eq!(format!("{bbox:?}"), "GeoBBox(-10, -5, 10, 5)");
	}
}
