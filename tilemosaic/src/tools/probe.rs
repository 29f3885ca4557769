use anyhow::Result;
use clap::Args;
use tilemosaic::{GeoBBox, PixelWindow, TileBBox, TileCoord, TileProvider};

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

	/// Tile provider used to show example tile URLs
	#[arg(long, short, default_value = "osm")]
	provider: TileProvider,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let bbox = GeoBBox::from_ranges(&arguments.lon, &arguments.lat)?;
	let grid = TileBBox::from_geo(arguments.zoom, &bbox)?;
	let window = PixelWindow::from_geo(&bbox, &grid)?;
	let first = TileCoord::new(grid.zoom, grid.x_min(), grid.y_min())?;

	println!("bbox:     {bbox:?}");
	println!(
		"tiles:    x {}-{}, y {}-{} ({} tiles at zoom {})",
		grid.x_min(),
		grid.x_max(),
		grid.y_min(),
		grid.y_max(),
		grid.count_tiles(),
		grid.zoom
	);
	println!("stitched: {}x{} px", grid.raster_width(), grid.raster_height());
	println!("cropped:  {}x{} px at offset {},{}", window.width, window.height, window.left, window.top);
	println!("first:    {}", arguments.provider.tile_url(&first));
	Ok(())
}
