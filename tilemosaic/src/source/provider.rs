use anyhow::{Result, bail, ensure};
use std::str::FromStr;
use tilemosaic_core::TileCoord;

/// Resolves tile coordinates to URLs from a `{z}/{x}/{y}` template.
///
/// A provider is either picked from the built-in registry by name or
/// constructed from an arbitrary template:
///
/// ```
/// use tilemosaic::TileProvider;
/// use tilemosaic_core::TileCoord;
///
/// let provider = TileProvider::from_name("osm").unwrap();
/// let coord = TileCoord::new(10, 239, 424).unwrap();
/// assert_eq!(
/// 	provider.tile_url(&coord),
/// 	"https://tile.openstreetmap.org/10/239/424.png"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileProvider {
	name: String,
	template: String,
}

impl TileProvider {
	/// Creates a provider from a URL template containing the `{x}`, `{y}`
	/// and `{z}` placeholders.
	///
	/// # Errors
	/// Returns an error if any placeholder is missing.
	pub fn new(name: &str, template: &str) -> Result<TileProvider> {
		for placeholder in ["{x}", "{y}", "{z}"] {
			ensure!(
				template.contains(placeholder),
				"tile URL template '{template}' is missing the {placeholder} placeholder"
			);
		}
		Ok(TileProvider {
			name: name.to_string(),
			template: template.to_string(),
		})
	}

	/// Looks up a well-known provider by name.
	///
	/// # Errors
	/// Returns an error listing the known names if `name` is not one of
	/// them.
	pub fn from_name(name: &str) -> Result<TileProvider> {
		let template = match name {
			"osm" => "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
			"osm-de" => "https://tile.openstreetmap.de/{z}/{x}/{y}.png",
			"otm" => "https://tile.opentopomap.org/{z}/{x}/{y}.png",
			"carto" => "https://basemaps.cartocdn.com/light_all/{z}/{x}/{y}.png",
			_ => bail!("unknown tile provider '{name}', expected one of: osm, osm-de, otm, carto"),
		};
		TileProvider::new(name, template)
	}

	/// The provider's name (or the raw template for ad-hoc providers).
	#[must_use]
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The URL of the tile at `coord`.
	#[must_use]
	pub fn tile_url(&self, coord: &TileCoord) -> String {
		self
			.template
			.replace("{z}", &coord.zoom.to_string())
			.replace("{x}", &coord.x.to_string())
			.replace("{y}", &coord.y.to_string())
	}
}

/// Parses a known provider name, falling back to treating the input as a
/// URL template. This is what the CLI's `--provider` flag accepts.
impl FromStr for TileProvider {
	type Err = anyhow::Error;

	fn from_str(input: &str) -> Result<TileProvider> {
		if input.contains("{x}") {
			TileProvider::new(input, input)
		} else {
			TileProvider::from_name(input)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("osm", "https://tile.openstreetmap.org/3/1/2.png")]
	#[case("osm-de", "https://tile.openstreetmap.de/3/1/2.png")]
	#[case("otm", "https://tile.opentopomap.org/3/1/2.png")]
	#[case("carto", "https://basemaps.cartocdn.com/light_all/3/1/2.png")]
	fn registry_templates(#[case] name: &str, #[case] url: &str) {
		let provider = TileProvider::from_name(name).unwrap();
		let coord = TileCoord::new(3, 1, 2).unwrap();
		assert_eq!(provider.tile_url(&coord), url);
		assert_eq!(provider.name(), name);
	}

	#[test]
	fn unknown_name_is_rejected() {
		assert!(TileProvider::from_name("nope").is_err());
	}

	#[test]
	fn template_requires_all_placeholders() {
		assert!(TileProvider::new("t", "https://example.org/{z}/{x}.png").is_err());
		TileProvider::new("t", "https://example.org/{z}/{x}/{y}.png").unwrap();
	}

	#[test]
	fn from_str_accepts_names_and_templates() {
		let by_name: TileProvider = "osm".parse().unwrap();
		assert_eq!(by_name.name(), "osm");

		let by_template: TileProvider = "https://example.org/{z}/{x}/{y}@2x.png".parse().unwrap();
		let coord = TileCoord::new(1, 0, 1).unwrap();
		assert_eq!(by_template.tile_url(&coord), "https://example.org/1/0/1@2x.png");

		assert!("wat".parse::<TileProvider>().is_err());
	}
}
