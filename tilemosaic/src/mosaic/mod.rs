//! Raster assembly: stitching a tile grid into one image and cropping it
//! to the requested extent.

mod crop;
mod stitch;

pub use crop::crop;
pub use stitch::{NO_DATA, stitch};
