//! General-purpose utility modules.

pub mod error;
pub mod log;

// Re-export commonly used items
pub use error::{FormatError, ProcessingError, PsdError, Result};
