// src/image/raster.rs

//! Planar in-memory pixel buffer.
//!
//! A `Raster` holds one byte array per channel, each in row-major order.
//! Processors mutate the samples in place; anything that changes the
//! dimensions or channel count builds a new `Raster` instead.

use crate::utils::error::ProcessingError;

/// Largest width or height accepted by the container format.
pub const MAX_DIMENSION: u32 = 30_000;
/// Largest channel count accepted by the container format.
pub const MAX_CHANNELS: u16 = 24;

/// Values of a bilevel raster.
pub const BLACK: u8 = 0;
pub const WHITE: u8 = 255;

/// A planar buffer of 8-bit samples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    channels: Vec<Vec<u8>>,
}

impl Raster {
    /// Builds a raster from planar channel data.
    ///
    /// Every channel must hold exactly `width * height` samples.
    pub fn from_channels(
        width: u32,
        height: u32,
        channels: Vec<Vec<u8>>,
    ) -> Result<Self, ProcessingError> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(ProcessingError::InvalidRaster(format!(
                "dimensions {}x{} outside 1..={}",
                width, height, MAX_DIMENSION
            )));
        }
        if channels.is_empty() || channels.len() > MAX_CHANNELS as usize {
            return Err(ProcessingError::InvalidRaster(format!(
                "{} channels outside 1..={}",
                channels.len(),
                MAX_CHANNELS
            )));
        }
        let expected = width as usize * height as usize;
        if let Some((i, ch)) = channels.iter().enumerate().find(|(_, c)| c.len() != expected) {
            return Err(ProcessingError::InvalidRaster(format!(
                "channel {} has {} samples, expected {}",
                i,
                ch.len(),
                expected
            )));
        }
        Ok(Raster {
            width,
            height,
            channels,
        })
    }

    /// A single-channel raster filled with `value`.
    pub fn filled(width: u32, height: u32, value: u8) -> Result<Self, ProcessingError> {
        Self::from_channels(width, height, vec![vec![value; width as usize * height as usize]])
    }

    /// A single-channel raster built from a per-pixel function.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self, ProcessingError>
    where
        F: FnMut(u32, u32) -> u8,
    {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self::from_channels(width, height, vec![data])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the dimensions as a tuple (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn channel_count(&self) -> u16 {
        self.channels.len() as u16
    }

    /// Number of samples in each channel.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn channel(&self, index: usize) -> Option<&[u8]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    pub fn channel_mut(&mut self, index: usize) -> Option<&mut [u8]> {
        self.channels.get_mut(index).map(Vec::as_mut_slice)
    }

    pub fn channels(&self) -> &[Vec<u8>] {
        &self.channels
    }

    pub fn into_channels(self) -> Vec<Vec<u8>> {
        self.channels
    }

    /// Fails with `UnsupportedChannelLayout` unless the raster has exactly one channel.
    pub fn require_single_channel(&self) -> Result<(), ProcessingError> {
        if self.channels.len() != 1 {
            return Err(ProcessingError::UnsupportedChannelLayout {
                required: "exactly 1",
                actual: self.channel_count(),
            });
        }
        Ok(())
    }

    /// The samples of a single-channel raster.
    pub fn samples(&self) -> Result<&[u8], ProcessingError> {
        self.require_single_channel()?;
        Ok(&self.channels[0])
    }

    /// The mutable samples of a single-channel raster.
    pub fn samples_mut(&mut self) -> Result<&mut [u8], ProcessingError> {
        self.require_single_channel()?;
        Ok(&mut self.channels[0])
    }
}
