// src/utils/error.rs

use thiserror::Error;

/// A malformed or unsupported container. Always fatal to the decode call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("bad signature {0:?}, expected \"8BPS\"")]
    BadSignature([u8; 4]),

    #[error("unsupported format version {0}")]
    UnsupportedVersion(u16),

    #[error("unsupported bit depth {0}, only 8 bits per channel is supported")]
    UnsupportedDepth(u16),

    #[error("unsupported color mode {0}")]
    UnsupportedColorMode(u16),

    #[error("unsupported compression method {0}")]
    UnsupportedCompression(u16),

    #[error("invalid channel count {0}")]
    ChannelCount(u16),

    #[error("invalid dimensions {width}x{height}")]
    Dimensions { width: u32, height: u32 },

    #[error("stream ended inside the {0} section")]
    UnexpectedEnd(&'static str),

    #[error("run-length data overruns channel {channel}")]
    RunOverrun { channel: usize },
}

/// A processor could not run on the given raster. The raster is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    #[error("processor requires {required} channel(s), raster has {actual}")]
    UnsupportedChannelLayout { required: &'static str, actual: u16 },

    #[error("tracer cursor was built for {traced:?}, raster is {current:?}; reset the tracer")]
    StaleTracer {
        traced: (u32, u32),
        current: (u32, u32),
    },

    #[error("invalid raster: {0}")]
    InvalidRaster(String),
}

/// The primary error type for all operations in the library.
#[derive(Error, Debug)]
pub enum PsdError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("format error: {0}")]
    Format(#[from] FormatError),

    #[error("channel {channel} truncated after {decoded} of {expected} samples")]
    TruncatedData {
        channel: usize,
        decoded: usize,
        expected: usize,
    },

    #[error("processing error: {0}")]
    Processing(#[from] ProcessingError),
}

/// A specialized `Result` type for library operations.
pub type Result<T> = std::result::Result<T, PsdError>;
