use image::{RgbaImage, imageops};
use tilemosaic_core::PixelWindow;

/// Slices the stitched raster to the exact crop window of the requested
/// bounding box.
///
/// The output dimensions equal `window.width × window.height`; no tile
/// padding survives on any side. All offset arithmetic happens in
/// [`PixelWindow::from_geo`]; this function only cuts.
#[must_use]
pub fn crop(stitched: &RgbaImage, window: &PixelWindow) -> RgbaImage {
	imageops::crop_imm(stitched, window.left, window.top, window.width, window.height).to_image()
}
