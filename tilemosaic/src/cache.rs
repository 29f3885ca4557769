//! An explicit, shareable cache of decoded tile images keyed by URL.
//!
//! One cache instance lives as long as its owner chooses (typically one
//! per process or per session) and is injected into the
//! [`TileSource`](crate::TileSource). Interior mutability lets concurrent
//! fetches consult and populate it through a shared reference; writes to
//! the same URL are last-writer-wins, which is harmless since tile content
//! for a given URL is immutable.

use image::DynamicImage;
use std::{collections::HashMap, fmt::Debug, sync::Mutex};

/// In-memory tile cache keyed by the resolved tile URL.
pub struct TileCache {
	entries: Mutex<HashMap<String, DynamicImage>>,
}

impl TileCache {
	/// Creates an empty cache.
	#[must_use]
	pub fn new() -> TileCache {
		TileCache {
			entries: Mutex::new(HashMap::new()),
		}
	}

	/// Returns a clone of the cached image for `url`, if present.
	#[must_use]
	pub fn get(&self, url: &str) -> Option<DynamicImage> {
		self.entries.lock().expect("tile cache lock poisoned").get(url).cloned()
	}

	/// Stores `image` under `url`, replacing any previous entry.
	pub fn put(&self, url: &str, image: DynamicImage) {
		self
			.entries
			.lock()
			.expect("tile cache lock poisoned")
			.insert(url.to_string(), image);
	}

	/// Number of cached tiles.
	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.lock().expect("tile cache lock poisoned").len()
	}

	/// `true` if the cache holds no tiles.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Drops all cached tiles.
	pub fn clear(&self) {
		self.entries.lock().expect("tile cache lock poisoned").clear();
	}
}

impl Default for TileCache {
	fn default() -> Self {
		TileCache::new()
	}
}

impl Debug for TileCache {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TileCache").field("length", &self.len()).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use image::DynamicImage;

	fn tile(shade: u8) -> DynamicImage {
		DynamicImage::ImageLuma8(image::GrayImage::from_pixel(4, 4, image::Luma([shade])))
	}

	#[test]
	fn get_put_roundtrip() {
		let cache = TileCache::new();
		assert!(cache.is_empty());
		assert!(cache.get("a").is_none());

		cache.put("a", tile(1));
		cache.put("b", tile(2));
		assert_eq!(cache.len(), 2);
		assert_eq!(cache.get("a").unwrap().to_luma8().get_pixel(0, 0).0, [1]);
		assert_eq!(cache.get("b").unwrap().to_luma8().get_pixel(0, 0).0, [2]);
	}

	#[test]
	fn put_replaces_existing_entry() {
		let cache = TileCache::new();
		cache.put("a", tile(1));
		cache.put("a", tile(9));
		assert_eq!(cache.len(), 1);
		assert_eq!(cache.get("a").unwrap().to_luma8().get_pixel(0, 0).0, [9]);
	}

	#[test]
	fn clear_empties_the_cache() {
		let cache = TileCache::new();
		cache.put("a", tile(1));
		cache.clear();
		assert!(cache.is_empty());
		assert!(cache.get("a").is_none());
	}

	#[test]
	fn shared_across_threads() {
		let cache = std::sync::Arc::new(TileCache::new());
		let handles: Vec<_> = (0..4u8)
			.map(|i| {
				let cache = cache.clone();
				std::thread::spawn(move || cache.put(&format!("t{i}"), tile(i)))
			})
			.collect();
		for handle in handles {
			handle.join().unwrap();
		}
		assert_eq!(cache.len(), 4);
	}
}
