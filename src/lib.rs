//! A reader and writer for a Photoshop-style layered image container, and a
//! morphological pipeline that isolates letter shapes in scanned text.
//!
//! The crate decodes RLE-compressed 8-bit grayscale or RGB files into a
//! planar [`Raster`], runs pixel processors over it (grayscale reduction,
//! duotone split, hole filling, directional thinning and cleanup), traces
//! the remaining foreground into 8-connected regions and fingerprints each
//! region by its run counts.
//!
//! # Quick Start
//!
//! ```no_run
//! use psd_letters::{ProcessConfig, ProcessorKind, Side, Workbench};
//!
//! # fn main() -> psd_letters::Result<()> {
//! let raster = psd_letters::decode("scan.psd")?;
//! let config = ProcessConfig::default();
//! let mut bench = Workbench::new();
//!
//! let mut page = bench.apply(ProcessorKind::Grayscale, &raster, &config)?.raster;
//! for kind in [
//!     ProcessorKind::Duotone { threshold: 127 },
//!     ProcessorKind::Fill,
//!     ProcessorKind::Thin(Side::Top),
//! ] {
//!     bench.apply_in_place(kind, &mut page, &config)?;
//! }
//!
//! for region in bench.trace_all(&page, &config)? {
//!     let shape = region.shape(&page, config.foreground, config.long_line_ratio)?;
//!     println!("{:?} {:?}", region.bounds(), shape);
//! }
//!
//! psd_letters::encode(&page, "letters.psd")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Processing model
//!
//! - Every processor runs exactly one pass per call.
//! - Processors other than grayscale need a single-channel raster.
//! - Replaying the same `Action` list against the same decoded raster gives
//!   the same samples.

pub mod container;
pub mod image;
pub mod letters;
pub mod pipeline;
pub mod process;
pub mod utils;

pub use container::{decode, decode_bytes, decode_from, encode, encode_bytes, encode_to};
pub use image::{BBox, Point, Raster};
pub use letters::{ComponentTracer, Region, ShapeFingerprint, classify};
pub use pipeline::{Action, Applied, ProcessorKind, Workbench};
pub use process::{ProcessConfig, Side};
pub use utils::error::{FormatError, ProcessingError, PsdError, Result};
