//! Fixed-size record windows sliced out of an image.

mod hexdump;

pub use hexdump::{HexDump, HexLine, parse_hex_column, render};
pub(crate) use hexdump::is_printable;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::memory::BinaryImage;

/// A byte window copied out of a [`BinaryImage`].
///
/// `base_offset + len() <= image.len()` holds at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    source: String,
    base_offset: usize,
    bytes: Vec<u8>,
}

impl Record {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn base_offset(&self) -> usize {
        self.base_offset
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false for records built by [`extract`]; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// A record covering the whole image, for snapshot-to-snapshot comparison.
    pub fn whole(image: &BinaryImage) -> Result<Self> {
        extract(image, 0, image.len())
    }
}

/// Copy `length` bytes starting at `offset` out of the image.
pub fn extract(image: &BinaryImage, offset: usize, length: usize) -> Result<Record> {
    let range_error = || Error::Range {
        offset,
        length,
        image_size: image.len(),
    };

    if length == 0 {
        return Err(range_error());
    }
    let end = offset.checked_add(length).ok_or_else(range_error)?;
    let bytes = image.bytes().get(offset..end).ok_or_else(range_error)?;

    Ok(Record {
        source: image.label().to_string(),
        base_offset: offset,
        bytes: bytes.to_vec(),
    })
}

/// Extract `count` records spaced `stride` bytes apart.
///
/// Each slot fails independently, so a bank that runs past the end of a
/// truncated dump still yields its leading records.
pub fn extract_bank(
    image: &BinaryImage,
    offset: usize,
    stride: usize,
    length: usize,
    count: usize,
) -> Vec<Result<Record>> {
    let records: Vec<Result<Record>> = (0..count)
        .map(|i| {
            let record_offset = i
                .checked_mul(stride)
                .and_then(|delta| offset.checked_add(delta))
                .ok_or(Error::Range {
                    offset,
                    length,
                    image_size: image.len(),
                })?;
            extract(image, record_offset, length)
        })
        .collect();

    let failed = records.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        warn!(
            "{}: {} of {} records at 0x{:X} are out of range",
            image.label(),
            failed,
            count,
            offset
        );
    } else {
        debug!(
            "{}: extracted {} records at 0x{:X}",
            image.label(),
            count,
            offset
        );
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting_image(len: usize) -> BinaryImage {
        BinaryImage::new("rom2", (0..len).map(|i| i as u8).collect())
    }

    #[test]
    fn test_extract_copies_exact_window() {
        let image = counting_image(300);
        for (offset, length) in [(0, 1), (0, 300), (10, 204), (96, 204), (299, 1)] {
            let record = extract(&image, offset, length).unwrap();
            assert_eq!(record.bytes(), &image.bytes()[offset..offset + length]);
            assert_eq!(record.base_offset(), offset);
            assert_eq!(record.len(), length);
            assert_eq!(record.source(), "rom2");
        }
    }

    #[test]
    fn test_extract_out_of_range() {
        let image = counting_image(300);
        for (offset, length) in [(97, 204), (300, 1), (0, 301), (usize::MAX, 2)] {
            let err = extract(&image, offset, length).unwrap_err();
            match err {
                Error::Range {
                    offset: o,
                    length: l,
                    image_size,
                } => {
                    assert_eq!((o, l, image_size), (offset, length, 300));
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_extract_zero_length_is_rejected() {
        let image = counting_image(16);
        assert!(extract(&image, 0, 0).unwrap_err().is_range());
    }

    #[test]
    fn test_extract_from_empty_image() {
        let image = BinaryImage::new("nvram", Vec::new());
        assert!(extract(&image, 0, 1).unwrap_err().is_range());
        assert!(Record::whole(&image).unwrap_err().is_range());
    }

    #[test]
    fn test_whole_record_spans_image() {
        let image = counting_image(32);
        let record = Record::whole(&image).unwrap();
        assert_eq!(record.bytes(), image.bytes());
        assert_eq!(record.base_offset(), 0);
    }

    #[test]
    fn test_extract_bank_partial() {
        // Room for two full records and part of a third
        let image = counting_image(204 * 2 + 100);
        let records = extract_bank(&image, 0, 204, 204, 3);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].as_ref().unwrap().base_offset(), 0);
        assert_eq!(records[1].as_ref().unwrap().base_offset(), 204);
        assert!(records[2].as_ref().unwrap_err().is_range());
    }

    #[test]
    fn test_extract_bank_with_stride() {
        let image = counting_image(64);
        let records = extract_bank(&image, 4, 16, 8, 3);
        let offsets: Vec<usize> = records
            .iter()
            .map(|r| r.as_ref().unwrap().base_offset())
            .collect();
        assert_eq!(offsets, vec![4, 20, 36]);
    }
}
