use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tilemosaic::{TileProvider, TileSource, fetch_region};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct Subcommand {
	/// Longitude range in degrees (western and eastern edge, any order)
	#[arg(long, num_args = 2, allow_negative_numbers = true, value_names = ["WEST", "EAST"])]
	lon: Vec<f64>,

	/// Latitude range in degrees (southern and northern edge, any order)
	#[arg(long, num_args = 2, allow_negative_numbers = true, value_names = ["SOUTH", "NORTH"])]
	lat: Vec<f64>,

	/// Zoom level (recommended range 0-18)
	#[arg(long, short)]
	zoom: u8,

	/// Tile provider: a known name (osm, osm-de, otm, carto) or a URL
	/// template containing {x}, {y} and {z}
	#[arg(long, short, default_value = "osm")]
	provider: TileProvider,

	/// Output PNG file
	#[arg(long, short, default_value = "region.png")]
	output: PathBuf,

	/// Fetch every tile over the network, bypassing the tile cache
	#[arg(long)]
	no_cache: bool,

	/// Number of tiles to fetch concurrently
	#[arg(long)]
	concurrency: Option<usize>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let mut source = TileSource::open_http(arguments.provider.clone(), !arguments.no_cache)?;
	if let Some(concurrency) = arguments.concurrency {
		source = source.with_concurrency(concurrency);
	}

	let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
	let region = runtime.block_on(fetch_region(
		&source,
		&arguments.lon,
		&arguments.lat,
		arguments.zoom,
	))?;

	region
		.raster()
		.save(&arguments.output)
		.with_context(|| format!("writing '{}'", arguments.output.display()))?;

	println!("{region}");
	println!("written to '{}'", arguments.output.display());
	Ok(())
}
