//! Letter extraction: region tracing, shape fingerprints and classification.
//!
//! ## Module Map
//!
//! - `tracer` - Cursor-driven connected-component labeling, `Region`
//! - `fingerprint` - Per-row and per-column run counts
//! - `classify` - Opt-in matching against reference letters

pub mod classify;
pub mod fingerprint;
pub mod tracer;

pub use classify::{Candidate, ETALONS, Etalon, best_match, classify, similarity};
pub use fingerprint::{LONG_LINE, ShapeFingerprint, fingerprint};
pub use tracer::{ComponentTracer, Region};
