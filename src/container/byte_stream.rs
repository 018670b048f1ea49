// src/container/byte_stream.rs

//! Big-endian field access for the container format.
//!
//! Every multi-byte field on the wire is big-endian regardless of host byte
//! order. Reads that hit end-of-stream inside a fixed section are reported as
//! `FormatError::UnexpectedEnd` naming that section.

use crate::utils::error::{FormatError, PsdError, Result};
use bytemuck::{Pod, Zeroable, cast_slice};
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Seek, SeekFrom, Write};

fn map_eof<T>(res: io::Result<T>, section: &'static str) -> Result<T> {
    res.map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => PsdError::Format(FormatError::UnexpectedEnd(section)),
        _ => PsdError::Io(e),
    })
}

/// Reading helpers for container sections.
pub trait SectionRead: Read {
    fn read_be_u16(&mut self, section: &'static str) -> Result<u16> {
        map_eof(ReadBytesExt::read_u16::<BigEndian>(self), section)
    }

    fn read_be_u32(&mut self, section: &'static str) -> Result<u32> {
        map_eof(ReadBytesExt::read_u32::<BigEndian>(self), section)
    }

    fn read_bytes<const N: usize>(&mut self, section: &'static str) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        map_eof(self.read_exact(&mut buf), section)?;
        Ok(buf)
    }

    /// Reads a 4-byte length prefix and skips that many payload bytes.
    ///
    /// Returns the skipped length.
    fn skip_section(&mut self, section: &'static str) -> Result<u32>
    where
        Self: Seek,
    {
        let len = self.read_be_u32(section)?;
        self.seek(SeekFrom::Current(len as i64))?;
        Ok(len)
    }
}

impl<T: Read> SectionRead for T {}

/// Writing helpers for container sections.
pub trait SectionWrite: Write {
    fn write_be_u16(&mut self, value: u16) -> Result<()> {
        Ok(WriteBytesExt::write_u16::<BigEndian>(self, value)?)
    }

    fn write_be_u32(&mut self, value: u32) -> Result<()> {
        Ok(WriteBytesExt::write_u32::<BigEndian>(self, value)?)
    }

    /// Writes a slice of u16 values in big-endian format.
    fn write_u16_slice(&mut self, values: &[u16]) -> Result<()> {
        let be_values: Vec<BeU16> = values.iter().map(|&v| v.into()).collect();
        let bytes: &[u8] = cast_slice(&be_values);
        self.write_all(bytes)?;
        Ok(())
    }
}

impl<T: Write> SectionWrite for T {}

/// Big-endian u16 that can be safely cast to/from bytes
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct BeU16([u8; 2]);

impl From<u16> for BeU16 {
    fn from(value: u16) -> Self {
        BeU16(value.to_be_bytes())
    }
}

impl From<BeU16> for u16 {
    fn from(value: BeU16) -> Self {
        u16::from_be_bytes(value.0)
    }
}
