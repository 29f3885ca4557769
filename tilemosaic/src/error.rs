use thiserror::Error;
use tilemosaic_core::TileCoord;

/// Failures a region fetch can surface to its caller.
///
/// All variants propagate unmodified: there is no local recovery and no
/// retry. A single failing tile aborts the whole request.
#[derive(Debug, Error)]
pub enum RegionError {
	/// The requested ranges contain no usable values, or the zoom level is
	/// unusable; nothing can be enumerated.
	#[error("invalid range: {0}")]
	InvalidRange(String),

	/// A tile could not be fetched or decoded. The request carries no
	/// partial result.
	#[error("tile {coord} unavailable from '{url}': {reason}")]
	TileUnavailable {
		/// The tile that failed.
		coord: TileCoord,
		/// The resolved tile URL.
		url: String,
		/// Transport or decoder failure description.
		reason: String,
	},

	/// The number of tile images does not match the enumerated grid. This
	/// is a programming error in the caller, not a recoverable condition.
	#[error("tile count ({actual}) does not match grid size ({expected})")]
	GridMismatch {
		/// Tiles the grid enumerates.
		expected: u64,
		/// Tile images actually supplied.
		actual: usize,
	},
}
