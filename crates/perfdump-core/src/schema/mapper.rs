//! Map record bytes onto a field table.

use serde::Serialize;
use tracing::debug;

use super::FieldTable;
use crate::interpret::Interpreter;
use crate::record::Record;

/// Stand-in for bytes outside printable ASCII in text fields
const PLACEHOLDER: char = '\u{FFFD}';

/// A named value read from a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterValue {
    pub field_name: String,
    /// Offset within the record
    pub byte_offset: usize,
    pub raw_bytes: Vec<u8>,
    /// Decoded text for multi-byte fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,
}

impl ParameterValue {
    /// The value of a single-byte field
    pub fn raw_value(&self) -> Option<u8> {
        match self.raw_bytes.as_slice() {
            [value] => Some(*value),
            _ => None,
        }
    }
}

/// Result of [`apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappedFields {
    pub values: Vec<ParameterValue>,
    /// Set when an entry did not fit in the record and mapping stopped early
    pub truncated: bool,
    /// Cursor position after the last consumed entry
    pub end: usize,
}

impl MappedFields {
    pub fn get(&self, field_name: &str) -> Option<&ParameterValue> {
        self.values.iter().find(|v| v.field_name == field_name)
    }

    /// Attach interpretations to every single-byte value.
    pub fn interpreted(mut self, interpreter: &Interpreter) -> Self {
        for value in &mut self.values {
            value.interpretation = value
                .raw_value()
                .and_then(|raw| interpreter.interpret(&value.field_name, raw));
        }
        self
    }
}

/// Walk `table` over `record` starting at `start_index`.
///
/// Single-byte entries emit their byte, wider entries emit decoded ASCII text,
/// reserved entries only advance the cursor. Mapping stops at the first entry
/// that would run past the end of the record and reports `truncated`.
pub fn apply(record: &Record, table: &FieldTable, start_index: usize) -> MappedFields {
    let bytes = record.bytes();
    let mut values = Vec::new();
    let mut cursor = start_index;

    for entry in table.entries() {
        let Some(end) = cursor
            .checked_add(entry.width)
            .filter(|&end| end <= bytes.len())
        else {
            debug!(
                "Field '{}' at {} (width {}) exceeds record length {}",
                entry.name,
                cursor,
                entry.width,
                bytes.len()
            );
            return MappedFields {
                values,
                truncated: true,
                end: cursor,
            };
        };

        if !entry.is_reserved() {
            let raw = &bytes[cursor..end];
            values.push(ParameterValue {
                field_name: entry.name.clone(),
                byte_offset: cursor,
                raw_bytes: raw.to_vec(),
                text: (entry.width > 1).then(|| decode_name(raw)),
                interpretation: None,
            });
        }
        cursor = end;
    }

    MappedFields {
        values,
        truncated: false,
        end: cursor,
    }
}

/// Lossy ASCII decode with trailing whitespace trimmed.
pub fn decode_name(raw: &[u8]) -> String {
    let text: String = raw
        .iter()
        .map(|&b| {
            if crate::record::is_printable(b) {
                b as char
            } else {
                PLACEHOLDER
            }
        })
        .collect();
    text.trim_end().to_string()
}
