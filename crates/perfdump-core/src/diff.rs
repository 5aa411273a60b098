//! Byte-level comparison of same-shaped records.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::record::Record;

/// A single differing byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiffEntry {
    /// Offset within the records
    pub offset: usize,
    pub value_a: u8,
    pub value_b: u8,
}

/// A run of contiguous differing offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiffRegion {
    pub start: usize,
    pub end_inclusive: usize,
}

impl DiffRegion {
    pub fn len(&self) -> usize {
        self.end_inclusive - self.start + 1
    }

    /// Regions always hold at least one byte
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// List every offset where `a` and `b` differ, in increasing order.
pub fn diff(a: &Record, b: &Record) -> Result<Vec<DiffEntry>> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            len_a: a.len(),
            len_b: b.len(),
        });
    }

    Ok(a.bytes()
        .iter()
        .zip(b.bytes())
        .enumerate()
        .filter(|(_, (x, y))| x != y)
        .map(|(offset, (&value_a, &value_b))| DiffEntry {
            offset,
            value_a,
            value_b,
        })
        .collect())
}

/// Coalesce sorted diff entries into contiguous regions.
///
/// Runs of adjacent changed bytes usually mark one multi-byte field, so the
/// regions hint at field boundaries.
pub fn diff_regions(entries: &[DiffEntry]) -> Vec<DiffRegion> {
    let mut regions: Vec<DiffRegion> = Vec::new();
    for entry in entries {
        match regions.last_mut() {
            Some(region) if region.end_inclusive + 1 == entry.offset => {
                region.end_inclusive = entry.offset;
            }
            _ => regions.push(DiffRegion {
                start: entry.offset,
                end_inclusive: entry.offset,
            }),
        }
    }
    regions
}
