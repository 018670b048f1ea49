// src/container/codec.rs

//! Whole-file decode and encode.
//!
//! Decoding reads the header, skips the color-mode-data, image-resources and
//! layer/mask-info sections by their declared lengths, skips the per-row
//! length table, and run-length decodes each channel sequentially.
//!
//! Encoding writes the same layout with empty optional sections. The row
//! length table is written as a zeroed placeholder, then backpatched once
//! every row has been encoded.

use super::byte_stream::{SectionRead, SectionWrite};
use super::header::{Compression, ContainerHeader};
use super::packbits;
use crate::image::Raster;
use crate::utils::error::{FormatError, Result};
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Decodes the file at `path`.
pub fn decode<P: AsRef<Path>>(path: P) -> Result<Raster> {
    let file = File::open(path.as_ref())?;
    let raster = decode_from(&mut BufReader::new(file))?;
    info!(
        "decoded {}: {}x{}, {} channel(s)",
        path.as_ref().display(),
        raster.width(),
        raster.height(),
        raster.channel_count()
    );
    Ok(raster)
}

/// Decodes an in-memory file.
pub fn decode_bytes(bytes: &[u8]) -> Result<Raster> {
    decode_from(&mut Cursor::new(bytes))
}

/// Decodes a file from a seekable reader positioned at its first byte.
pub fn decode_from<R: Read + Seek>(reader: &mut R) -> Result<Raster> {
    let header = ContainerHeader::read_from(reader)?;
    debug!("container header: {:?}", header);

    let color_data = reader.skip_section("color mode data")?;
    let resources = reader.skip_section("image resources")?;
    let layers = reader.skip_section("layer and mask info")?;
    debug!(
        "skipped sections: color mode data {} B, image resources {} B, layer/mask info {} B",
        color_data, resources, layers
    );

    read_image_data(reader, &header)
}

fn read_image_data<R: Read + Seek>(reader: &mut R, header: &ContainerHeader) -> Result<Raster> {
    Compression::decodable(reader.read_be_u16("image data")?)?;

    // Row lengths are not needed: channels decode byte-sequentially.
    let table_len = header.height as i64 * header.channel_count as i64 * 2;
    reader.seek(SeekFrom::Current(table_len))?;

    let pixel_count = header.pixel_count();
    let mut channels = Vec::with_capacity(header.channel_count as usize);
    for channel in 0..header.channel_count as usize {
        let mut samples = vec![0u8; pixel_count];
        packbits::unpack_channel(reader, &mut samples, channel)?;
        channels.push(samples);
    }

    Ok(Raster::from_channels(header.width, header.height, channels)?)
}

/// Encodes `raster` into a new file at `path`, replacing any existing file.
pub fn encode<P: AsRef<Path>>(raster: &Raster, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    encode_to(raster, &mut writer)?;
    writer.flush()?;
    info!(
        "encoded {}: {}x{}, {} channel(s)",
        path.as_ref().display(),
        raster.width(),
        raster.height(),
        raster.channel_count()
    );
    Ok(())
}

/// Encodes `raster` into a byte vector.
pub fn encode_bytes(raster: &Raster) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    encode_to(raster, &mut cursor)?;
    Ok(cursor.into_inner())
}

/// Encodes `raster` to a seekable writer.
pub fn encode_to<W: Write + Seek>(raster: &Raster, writer: &mut W) -> Result<()> {
    let header = ContainerHeader::for_raster(raster);
    header.write_to(writer)?;

    // Color mode data, image resources, layer/mask info: all empty.
    for _ in 0..3 {
        writer.write_be_u32(0)?;
    }

    writer.write_be_u16(Compression::Rle as u16)?;

    let width = raster.width() as usize;
    let rows = raster.height() as usize;
    let mut row_lengths = vec![0u16; rows * raster.channels().len()];

    let table_pos = writer.stream_position()?;
    writer.write_u16_slice(&row_lengths)?;

    let mut encoded = Vec::with_capacity(width + width / packbits::MAX_LITERAL + 1);
    for (c, channel) in raster.channels().iter().enumerate() {
        for (r, row) in channel.chunks_exact(width).enumerate() {
            encoded.clear();
            packbits::pack_row(row, &mut encoded);
            row_lengths[c * rows + r] = u16::try_from(encoded.len()).map_err(|_| {
                FormatError::Dimensions {
                    width: raster.width(),
                    height: raster.height(),
                }
            })?;
            writer.write_all(&encoded)?;
        }
    }

    let end_pos = writer.stream_position()?;
    writer.seek(SeekFrom::Start(table_pos))?;
    writer.write_u16_slice(&row_lengths)?;
    writer.seek(SeekFrom::Start(end_pos))?;

    debug!(
        "encoded {} rows, {} bytes of image data",
        row_lengths.len(),
        end_pos - table_pos
    );
    Ok(())
}
