// src/process/tone.rs

//! Channel reduction and thresholding.

use crate::image::Raster;
use crate::utils::error::ProcessingError;

/// Collapses an RGB(A) raster into one luminance channel.
///
/// Uses the 0.299/0.587/0.114 weights, truncating. Channels past the first
/// three are dropped along with green and blue.
pub fn grayscale(raster: &Raster) -> Result<Raster, ProcessingError> {
    if raster.channel_count() < 3 {
        return Err(ProcessingError::UnsupportedChannelLayout {
            required: "at least 3",
            actual: raster.channel_count(),
        });
    }

    let ch = raster.channels();
    let gray: Vec<u8> = ch[0]
        .iter()
        .zip(&ch[1])
        .zip(&ch[2])
        .map(|((&r, &g), &b)| (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) as u8)
        .collect();

    Raster::from_channels(raster.width(), raster.height(), vec![gray])
}

/// Splits a single-channel raster into two tones in place.
///
/// Samples at or above `threshold` become `background`; the rest become
/// `foreground`. Returns whether any sample changed.
pub fn duotone(
    raster: &mut Raster,
    threshold: u8,
    foreground: u8,
    background: u8,
) -> Result<bool, ProcessingError> {
    let mut changed = false;
    for p in raster.samples_mut()? {
        let v = if *p >= threshold { background } else { foreground };
        changed |= *p != v;
        *p = v;
    }
    Ok(changed)
}
