//! Split the unmapped remainder of a record into equal part blocks.
//!
//! The stored part layout is not fully known: 173 bytes across 8 parts leaves
//! 5 bytes that belong to no part. Those bytes are always reported as an
//! [`UnassignedTail`] instead of being folded into a guessed boundary.

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::record::Record;

/// Byte range observed to hold patch-bank selects (bank = byte - 0xE0)
const PATCH_BANK_BYTES: std::ops::RangeInclusive<u8> = 0xE0..=0xE7;

/// One equal-size slice of the remainder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartBlock {
    pub index: usize,
    /// Offset within the record
    pub byte_offset: usize,
    pub bytes: Vec<u8>,
}

impl PartBlock {
    /// `(record offset, bank)` for every byte that looks like a patch-bank select.
    pub fn patch_bank_candidates(&self) -> Vec<(usize, u8)> {
        self.bytes
            .iter()
            .enumerate()
            .filter(|&(_, &b)| PATCH_BANK_BYTES.contains(&b))
            .map(|(i, &b)| (self.byte_offset + i, b - PATCH_BANK_BYTES.start()))
            .collect()
    }
}

/// Trailing bytes that do not divide evenly across the parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnassignedTail {
    pub byte_offset: usize,
    pub bytes: Vec<u8>,
}

/// Result of [`split_remainder`].
///
/// `parts.len() * part_size + tail.bytes.len()` equals the remainder length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartSplit {
    pub part_size: usize,
    pub parts: Vec<PartBlock>,
    pub tail: UnassignedTail,
}

/// Partition `record[start_index..]` into `part_count` contiguous blocks
/// plus the leftover tail.
pub fn split_remainder(
    record: &Record,
    start_index: usize,
    part_count: usize,
) -> Result<PartSplit> {
    if part_count == 0 {
        return Err(Error::InvalidPartCount);
    }
    let bytes = record.bytes();
    let remainder = bytes.get(start_index..).ok_or(Error::Range {
        offset: start_index,
        length: 0,
        image_size: bytes.len(),
    })?;

    let part_size = remainder.len() / part_count;
    let tail_size = remainder.len() % part_count;

    let parts = (0..part_count)
        .map(|index| {
            let offset = index * part_size;
            PartBlock {
                index,
                byte_offset: start_index + offset,
                bytes: remainder[offset..offset + part_size].to_vec(),
            }
        })
        .collect();

    let tail_start = part_count * part_size;
    let tail = UnassignedTail {
        byte_offset: start_index + tail_start,
        bytes: remainder[tail_start..].to_vec(),
    };

    if tail_size > 0 {
        debug!(
            "{} bytes after {} parts of {} at record offset {} are unassigned",
            tail_size, part_count, part_size, tail.byte_offset
        );
    }

    Ok(PartSplit {
        part_size,
        parts,
        tail,
    })
}
