// src/container/packbits.rs

//! PackBits run-length coding of channel data.
//!
//! Each control byte `n`, read as a signed 8-bit value, means:
//! - `n == -128`: no-op, read the next control byte
//! - `0 ..= 127`: copy the next `n + 1` bytes literally
//! - `-127 ..= -1`: repeat the next byte `1 - n` times

use crate::utils::error::{FormatError, PsdError, Result};
use std::io::{self, Read};

/// Longest repeat run the encoder emits.
pub const MAX_REPEAT: usize = 127;
/// Longest literal run the encoder emits.
pub const MAX_LITERAL: usize = 128;

const NOOP: i8 = -128;

/// Decodes run-length data from `reader` until `out` is full.
///
/// Decoding is byte-sequential and ignores row boundaries. A run that would
/// write past the end of `out` is a format error; a stream that ends before
/// `out` is full is reported as truncated channel `channel`.
pub fn unpack_channel<R: Read>(reader: &mut R, out: &mut [u8], channel: usize) -> Result<()> {
    let expected = out.len();
    let truncated = |decoded: usize| PsdError::TruncatedData {
        channel,
        decoded,
        expected,
    };
    let map_read = |e: io::Error, decoded: usize| match e.kind() {
        io::ErrorKind::UnexpectedEof => truncated(decoded),
        _ => PsdError::Io(e),
    };

    let mut filled = 0usize;
    let mut byte = [0u8; 1];
    while filled < expected {
        reader.read_exact(&mut byte).map_err(|e| map_read(e, filled))?;
        let control = byte[0] as i8;

        if control == NOOP {
            continue;
        }

        if control >= 0 {
            let n = control as usize + 1;
            if filled + n > expected {
                return Err(FormatError::RunOverrun { channel }.into());
            }
            reader
                .read_exact(&mut out[filled..filled + n])
                .map_err(|e| map_read(e, filled))?;
            filled += n;
        } else {
            let n = (1 - control as i16) as usize;
            if filled + n > expected {
                return Err(FormatError::RunOverrun { channel }.into());
            }
            reader.read_exact(&mut byte).map_err(|e| map_read(e, filled))?;
            out[filled..filled + n].fill(byte[0]);
            filled += n;
        }
    }
    Ok(())
}

/// Decodes an in-memory run-length stream into exactly `expected` bytes.
pub fn unpack(data: &[u8], expected: usize) -> Result<Vec<u8>> {
    let mut out = vec![0u8; expected];
    let mut reader = data;
    unpack_channel(&mut reader, &mut out, 0)?;
    Ok(out)
}

/// Greedily run-length encodes one row, appending to `out`.
///
/// Two or more identical samples become a repeat run (up to `MAX_REPEAT`).
/// Otherwise a literal run grows (up to `MAX_LITERAL`) until the next pair of
/// identical samples, which then starts a repeat run.
pub fn pack_row(row: &[u8], out: &mut Vec<u8>) {
    let len = row.len();
    let mut i = 0usize;

    while i < len {
        let value = row[i];
        let mut run = 1usize;
        while i + run < len && run < MAX_REPEAT && row[i + run] == value {
            run += 1;
        }

        if run >= 2 {
            out.push((1 - run as i16) as i8 as u8);
            out.push(value);
            i += run;
            continue;
        }

        let start = i;
        let mut lit = 1usize;
        while start + lit < len && lit < MAX_LITERAL {
            let next = start + lit;
            if next + 1 < len && row[next] == row[next + 1] {
                break;
            }
            lit += 1;
        }

        out.push((lit - 1) as u8);
        out.extend_from_slice(&row[start..start + lit]);
        i += lit;
    }
}
