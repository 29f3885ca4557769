//! Tile retrieval: provider URL templates, the byte transport, and the
//! cache-aware [`TileSource`] that turns tile coordinates into decoded
//! images.

mod provider;
mod transport;

pub use provider::TileProvider;
pub use transport::{HttpTransport, TileTransport};

use crate::{cache::TileCache, error::RegionError};
use image::DynamicImage;
use log::debug;
use tilemosaic_core::{TILE_SIZE, TileCoord};

/// A cache-aware source of decoded tile images.
///
/// Combines a [`TileProvider`] (coordinate → URL), a [`TileTransport`]
/// (URL → bytes) and an optional injected [`TileCache`]. Fetched tiles are
/// decoded (PNG or JPEG) and verified to be 256×256 before they are
/// cached and returned.
#[derive(Debug)]
pub struct TileSource {
	provider: TileProvider,
	transport: Box<dyn TileTransport>,
	cache: Option<TileCache>,
	concurrency: usize,
}

impl TileSource {
	/// Creates a source without a cache.
	#[must_use]
	pub fn new(provider: TileProvider, transport: Box<dyn TileTransport>) -> TileSource {
		TileSource {
			provider,
			transport,
			cache: None,
			concurrency: default_concurrency(),
		}
	}

	/// Opens an HTTP-backed source, optionally with a fresh cache.
	///
	/// # Errors
	/// Returns an error if the HTTP client cannot be built.
	pub fn open_http(provider: TileProvider, use_cache: bool) -> anyhow::Result<TileSource> {
		let mut source = TileSource::new(provider, Box::new(HttpTransport::new()?));
		if use_cache {
			source = source.with_cache(TileCache::new());
		}
		Ok(source)
	}

	/// Injects `cache`, replacing any previous one.
	#[must_use]
	pub fn with_cache(mut self, cache: TileCache) -> TileSource {
		self.cache = Some(cache);
		self
	}

	/// Overrides the number of tiles fetched concurrently.
	#[must_use]
	pub fn with_concurrency(mut self, concurrency: usize) -> TileSource {
		self.concurrency = concurrency.max(1);
		self
	}

	/// The provider resolving coordinates to URLs.
	#[must_use]
	pub fn provider(&self) -> &TileProvider {
		&self.provider
	}

	/// The injected cache, if caching is enabled.
	#[must_use]
	pub fn cache(&self) -> Option<&TileCache> {
		self.cache.as_ref()
	}

	/// Concurrent fetch limit used by the region fetcher.
	#[must_use]
	pub fn concurrency(&self) -> usize {
		self.concurrency
	}

	/// Fetches and decodes the tile at `coord`, consulting the cache first.
	///
	/// # Errors
	/// Returns [`RegionError::TileUnavailable`] if the transport fails, the
	/// payload does not decode, or the decoded tile is not 256×256.
	pub async fn fetch_tile(&self, coord: TileCoord) -> Result<DynamicImage, RegionError> {
		let url = self.provider.tile_url(&coord);

		if let Some(cache) = &self.cache {
			if let Some(image) = cache.get(&url) {
				debug!("tile {coord}: cache hit");
				return Ok(image);
			}
		}

		debug!("tile {coord}: fetching '{url}'");
		let unavailable = |reason: String| RegionError::TileUnavailable {
			coord,
			url: url.clone(),
			reason,
		};

		let bytes = self
			.transport
			.get(&url)
			.await
			.map_err(|e| unavailable(format!("{e:#}")))?;
		let image = image::load_from_memory(&bytes).map_err(|e| unavailable(format!("decoding failed: {e}")))?;

		if image.width() != TILE_SIZE || image.height() != TILE_SIZE {
			return Err(unavailable(format!(
				"expected a {TILE_SIZE}x{TILE_SIZE} tile, got {}x{}",
				image.width(),
				image.height()
			)));
		}

		if let Some(cache) = &self.cache {
			cache.put(&url, image.clone());
		}
		Ok(image)
	}
}

// I/O-bound work: more workers than cores, within reason.
fn default_concurrency() -> usize {
	(num_cpus::get() * 3).clamp(4, 16)
}
