// src/container/header.rs

//! The fixed-size file header.
//!
//! Layout (all big-endian):
//! ```text
//! 4  signature "8BPS"
//! 2  version (= 1)
//! 6  reserved, zero
//! 2  channel count     [1, 24]
//! 4  height            [1, 30000]
//! 4  width             [1, 30000]
//! 2  depth             (= 8)
//! 2  color mode        (1 = grayscale, 3 = RGB)
//! ```

use super::byte_stream::{SectionRead, SectionWrite};
use crate::image::{MAX_CHANNELS, MAX_DIMENSION, Raster};
use crate::utils::error::{FormatError, Result};
use std::io::{Read, Write};

pub const SIGNATURE: [u8; 4] = *b"8BPS";
pub const VERSION: u16 = 1;
pub const DEPTH: u16 = 8;

const SECTION: &str = "header";

/// Color modes the codec understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Grayscale,
    Rgb,
}

impl ColorMode {
    pub fn from_tag(tag: u16) -> std::result::Result<Self, FormatError> {
        match tag {
            1 => Ok(ColorMode::Grayscale),
            3 => Ok(ColorMode::Rgb),
            other => Err(FormatError::UnsupportedColorMode(other)),
        }
    }

    pub fn tag(self) -> u16 {
        match self {
            ColorMode::Grayscale => 1,
            ColorMode::Rgb => 3,
        }
    }

    /// Minimum number of channels a raster needs for this mode.
    pub fn min_channels(self) -> u16 {
        match self {
            ColorMode::Grayscale => 1,
            ColorMode::Rgb => 3,
        }
    }

    /// The mode written for a raster with `channel_count` channels.
    pub fn for_channels(channel_count: u16) -> Self {
        if channel_count >= 3 {
            ColorMode::Rgb
        } else {
            ColorMode::Grayscale
        }
    }
}

/// Image data compression methods defined by the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum Compression {
    Raw = 0,
    Rle = 1,
    Zip = 2,
    ZipPredict = 3,
}

impl Compression {
    /// Parses a compression tag, accepting only the run-length scheme.
    pub fn decodable(tag: u16) -> std::result::Result<Self, FormatError> {
        match tag {
            1 => Ok(Compression::Rle),
            other => Err(FormatError::UnsupportedCompression(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    pub version: u16,
    pub channel_count: u16,
    pub height: u32,
    pub width: u32,
    pub depth: u16,
    pub color_mode: ColorMode,
}

impl ContainerHeader {
    /// The header describing `raster` as it would be saved now.
    pub fn for_raster(raster: &Raster) -> Self {
        ContainerHeader {
            version: VERSION,
            channel_count: raster.channel_count(),
            height: raster.height(),
            width: raster.width(),
            depth: DEPTH,
            color_mode: ColorMode::for_channels(raster.channel_count()),
        }
    }

    /// Reads and validates the header.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let signature = reader.read_bytes::<4>(SECTION)?;
        if signature != SIGNATURE {
            return Err(FormatError::BadSignature(signature).into());
        }

        let version = reader.read_be_u16(SECTION)?;
        if version != VERSION {
            return Err(FormatError::UnsupportedVersion(version).into());
        }

        let _reserved = reader.read_bytes::<6>(SECTION)?;

        let channel_count = reader.read_be_u16(SECTION)?;
        if channel_count == 0 || channel_count > MAX_CHANNELS {
            return Err(FormatError::ChannelCount(channel_count).into());
        }

        let height = reader.read_be_u32(SECTION)?;
        let width = reader.read_be_u32(SECTION)?;
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(FormatError::Dimensions { width, height }.into());
        }

        let depth = reader.read_be_u16(SECTION)?;
        if depth != DEPTH {
            return Err(FormatError::UnsupportedDepth(depth).into());
        }

        let color_mode = ColorMode::from_tag(reader.read_be_u16(SECTION)?)?;
        if channel_count < color_mode.min_channels() {
            return Err(FormatError::ChannelCount(channel_count).into());
        }

        Ok(ContainerHeader {
            version,
            channel_count,
            height,
            width,
            depth,
            color_mode,
        })
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&SIGNATURE)?;
        writer.write_be_u16(self.version)?;
        writer.write_all(&[0u8; 6])?;
        writer.write_be_u16(self.channel_count)?;
        writer.write_be_u32(self.height)?;
        writer.write_be_u32(self.width)?;
        writer.write_be_u16(self.depth)?;
        writer.write_be_u16(self.color_mode.tag())?;
        Ok(())
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
