//! Hexdump rendering for records.
//!
//! Produces rows in traditional hexdump format, one [`HexLine`] per row:
//!
//! ```text
//! 0x10020: 4A 61 7A 7A 20 53 70 6C 69 74 20 20 00 02 7F 40  |Jazz Split  ...@|
//! ```
//!
//! The hex column of every row parses back to that row's bytes with
//! [`parse_hex_column`].

use std::fmt;
use std::num::ParseIntError;

use super::Record;

/// One rendered row of a hexdump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexLine {
    /// Absolute offset in the source image
    pub offset: usize,
    /// Space-separated two-digit hex, padded to `width * 3` characters
    pub hex: String,
    /// Printable bytes as characters, everything else as `.`
    pub ascii: String,
}

impl fmt::Display for HexLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}: {} |{}|", self.offset, self.hex, self.ascii)
    }
}

/// Lazy row iterator returned by [`render`].
#[derive(Debug, Clone)]
pub struct HexDump<'a> {
    record: &'a Record,
    width: usize,
    limit: usize,
    position: usize,
}

/// Render `record` as hexdump rows of `width` bytes.
///
/// Rows starting at or past `max_length` are not produced; every other row
/// is rendered in full, up to the end of the record. A `width` of 0 is
/// treated as 1.
pub fn render(record: &Record, width: usize, max_length: usize) -> HexDump<'_> {
    HexDump {
        record,
        width: width.max(1),
        limit: max_length.min(record.len()),
        position: 0,
    }
}

impl Iterator for HexDump<'_> {
    type Item = HexLine;

    fn next(&mut self) -> Option<HexLine> {
        if self.position >= self.limit {
            return None;
        }

        let start = self.position;
        let end = (start + self.width).min(self.record.len());
        let chunk = &self.record.bytes()[start..end];
        self.position = end;

        let hex = chunk
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(" ");
        let ascii = chunk
            .iter()
            .map(|&b| if is_printable(b) { b as char } else { '.' })
            .collect();

        Some(HexLine {
            offset: self.record.base_offset() + start,
            hex: format!("{:<w$}", hex, w = self.width * 3),
            ascii,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.limit.saturating_sub(self.position);
        let rows = remaining.div_ceil(self.width);
        (rows, Some(rows))
    }
}

impl ExactSizeIterator for HexDump<'_> {}

/// Parse a rendered hex column back into bytes.
pub fn parse_hex_column(hex: &str) -> Result<Vec<u8>, ParseIntError> {
    hex.split_whitespace()
        .map(|token| u8::from_str_radix(token, 16))
        .collect()
}

pub(crate) fn is_printable(byte: u8) -> bool {
    (0x20..0x7F).contains(&byte)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::BinaryImage;
    use crate::record::extract;

    fn record_of(bytes: &[u8], base: usize) -> Record {
        let mut image = vec![0u8; base];
        image.extend_from_slice(bytes);
        extract(&BinaryImage::new("test", image), base, bytes.len()).unwrap()
    }

    #[test]
    fn test_render_row_format() {
        let record = record_of(b"Hello World\0\0\0\0\0", 0x20);
        let lines: Vec<HexLine> = render(&record, 16, record.len()).collect();

        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0].to_string(),
            "0x0020: 48 65 6C 6C 6F 20 57 6F 72 6C 64 00 00 00 00 00  |Hello World.....|"
        );
    }

    #[test]
    fn test_render_offsets_and_padding() {
        let record = record_of(&[0xAA; 20], 0x100);
        let lines: Vec<HexLine> = render(&record, 16, record.len()).collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].offset, 0x100);
        assert_eq!(lines[1].offset, 0x110);
        // Short final row keeps the column width
        assert_eq!(lines[0].hex.len(), 48);
        assert_eq!(lines[1].hex.len(), 48);
        assert_eq!(lines[1].ascii, "....");
    }

    #[test]
    fn test_render_ascii_printable_range() {
        let record = record_of(&[0x1F, 0x20, 0x41, 0x7E, 0x7F, 0xE0], 0);
        let line = render(&record, 16, record.len()).next().unwrap();
        assert_eq!(line.ascii, ". A~..");
    }

    #[test]
    fn test_render_max_length() {
        let record = record_of(&[0x11; 204], 0);
        let lines: Vec<HexLine> = render(&record, 16, 48).collect();
        assert_eq!(lines.len(), 3);

        // A row starting before the limit is rendered whole
        let lines: Vec<HexLine> = render(&record, 16, 21).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            parse_hex_column(&lines[1].hex).unwrap(),
            record.bytes()[16..32].to_vec()
        );

        assert_eq!(render(&record, 16, 0).count(), 0);
    }

    #[test]
    fn test_render_round_trip() {
        let bytes: Vec<u8> = (0..=255u8).chain(0..=10).collect();
        let record = record_of(&bytes, 7);

        for width in [1, 8, 16, 21, 32] {
            let parsed: Vec<u8> = render(&record, width, record.len())
                .flat_map(|line| parse_hex_column(&line.hex).unwrap())
                .collect();
            assert_eq!(parsed, bytes, "width {}", width);
        }
    }

    #[test]
    fn test_render_max_length_stops_at_record_end() {
        let bytes: Vec<u8> = (0..20).collect();
        let record = record_of(&bytes, 0x206A);
        let dump = render(&record, 16, 17);
        assert_eq!(dump.len(), 2);

        let lines: Vec<HexLine> = dump.collect();
        assert_eq!(lines[1].offset, 0x207A);
        assert_eq!(
            parse_hex_column(&lines[1].hex).unwrap(),
            vec![16, 17, 18, 19]
        );
        assert_eq!(lines[1].hex.len(), 48);
    }

    #[test]
    fn test_render_is_restartable() {
        let record = record_of(&[1, 2, 3, 4, 5, 6, 7, 8, 9], 0);
        let dump = render(&record, 4, record.len());
        assert_eq!(dump.len(), 3);

        let first: Vec<HexLine> = dump.clone().collect();
        let second: Vec<HexLine> = dump.collect();
        assert_eq!(first, second);
        assert_eq!(first, render(&record, 4, record.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_render_zero_width() {
        let record = record_of(&[1, 2, 3], 0);
        assert_eq!(render(&record, 0, record.len()).count(), 3);
    }

    #[test]
    fn test_parse_hex_column_invalid() {
        assert!(parse_hex_column("4A ZZ").is_err());
        assert_eq!(parse_hex_column("   ").unwrap(), Vec::<u8>::new());
    }
}
