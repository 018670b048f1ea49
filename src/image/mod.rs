//! In-memory image representation.

pub mod geom;
pub mod raster;

pub use geom::{BBox, Point};
pub use raster::{Raster, BLACK, MAX_CHANNELS, MAX_DIMENSION, WHITE};
