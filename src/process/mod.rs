//! Pixel processors over planar rasters.
//!
//! All processors except `grayscale` need a single-channel raster and fail
//! with `UnsupportedChannelLayout` otherwise, leaving the raster untouched.
//! None of them iterate to a fixed point: one call is one pass.
//!
//! ## Module Map
//!
//! - `neighbor_view` - 3x3 neighborhood predicates, `Side`
//! - `tone` - Grayscale reduction and duotone split
//! - `fill` - Hole filling
//! - `directional` - Border thinning and irregularity cleanup
//! - `config` - `ProcessConfig` palette and thresholds

pub mod config;
pub mod directional;
pub mod fill;
pub mod neighbor_view;
pub mod tone;

pub use config::{DEFAULT_DUOTONE_SPLIT, DEFAULT_LONG_LINE_RATIO, ProcessConfig};
pub use directional::{Erosion, cleanup, thin};
pub use fill::fill;
pub use neighbor_view::{NeighborView, Neighbors, Side};
pub use tone::{duotone, grayscale};
