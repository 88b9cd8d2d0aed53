//! Binary codec: a fixed-width, length-prefixed dump/load format
//! for a [`ParseContainer`].
//!
//! Layout: an 8-byte header (`level: u32`, `size: u32`, both little
//! endian) followed by `size` fixed 32-byte core records (`bit_rep: u64`,
//! `label: u32`, `start: u64`, `end: u64`, `bit_size: u8`, 3 reserved
//! bytes), all little endian. No compression, no variable-width fields —
//! the point of this format is that `load` can validate it is
//! well-formed without parsing a single core.

use crate::container::ParseContainer;
use crate::core::Core;
use crate::error::LcpError;

const HEADER_LEN: usize = 8;
const RECORD_LEN: usize = 32;

/// Serializes `container` into the fixed-width binary format.
pub fn dump(container: &ParseContainer) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + container.cores.len() * RECORD_LEN);
    out.extend_from_slice(&container.level.to_le_bytes());
    out.extend_from_slice(&(container.cores.len() as u32).to_le_bytes());

    for core in &container.cores {
        out.extend_from_slice(&core.bit_rep.to_le_bytes());
        out.extend_from_slice(&core.label.to_le_bytes());
        out.extend_from_slice(&(core.start as u64).to_le_bytes());
        out.extend_from_slice(&(core.end as u64).to_le_bytes());
        out.push(core.bit_size);
        out.extend_from_slice(&[0u8; 3]);
    }

    out
}

/// Parses a container out of `bytes` written by [`dump`].
///
/// Returns [`LcpError::InvalidHeader`] when the declared core count could
/// not possibly fit in a `usize` byte length, and
/// [`LcpError::TruncatedInput`] when fewer bytes are present than the
/// header promises.
pub fn load(bytes: &[u8]) -> Result<ParseContainer, LcpError> {
    if bytes.len() < HEADER_LEN {
        return Err(LcpError::TruncatedInput);
    }

    let level = u32::from_le_bytes(bytes[0..4].try_into().unwrap());
    let size = u32::from_le_bytes(bytes[4..8].try_into().unwrap()) as usize;

    let body_len = size
        .checked_mul(RECORD_LEN)
        .ok_or(LcpError::InvalidHeader)?;
    let total_len = HEADER_LEN
        .checked_add(body_len)
        .ok_or(LcpError::InvalidHeader)?;

    if bytes.len() < total_len {
        return Err(LcpError::TruncatedInput);
    }

    let mut cores = Vec::with_capacity(size);
    let mut cursor = HEADER_LEN;
    for _ in 0..size {
        let record = &bytes[cursor..cursor + RECORD_LEN];
        let bit_rep = u64::from_le_bytes(record[0..8].try_into().unwrap());
        let label = u32::from_le_bytes(record[8..12].try_into().unwrap());
        let start = u64::from_le_bytes(record[12..20].try_into().unwrap()) as usize;
        let end = u64::from_le_bytes(record[20..28].try_into().unwrap()) as usize;
        let bit_size = record[28];
        cores.push(Core {
            bit_size,
            bit_rep,
            label,
            start,
            end,
        });
        cursor += RECORD_LEN;
    }

    Ok(ParseContainer { level, cores })
}
