//! Field tables: ordered, partially-known schemas for mapping record bytes
//! onto named parameters.

mod mapper;
mod parts;

pub use mapper::{MappedFields, ParameterValue, apply, decode_name};
pub use parts::{PartBlock, PartSplit, UnassignedTail, split_remainder};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::memory::layout::performance;

/// Entry name marking a skipped (reserved) span
pub const RESERVED: &str = "-";

/// One schema slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldTableEntry {
    pub name: String,
    #[serde(default = "default_width")]
    pub width: usize,
}

fn default_width() -> usize {
    1
}

impl FieldTableEntry {
    /// Single-byte parameter
    pub fn byte(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            width: 1,
        }
    }

    /// Multi-byte ASCII text field
    pub fn text(name: impl Into<String>, width: usize) -> Self {
        Self {
            name: name.into(),
            width,
        }
    }

    /// Skipped span of `width` bytes
    pub fn reserved(width: usize) -> Self {
        Self {
            name: RESERVED.to_string(),
            width,
        }
    }

    pub fn is_reserved(&self) -> bool {
        self.name == RESERVED
    }
}

/// Ordered field schema. Order is consumption order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldTable {
    entries: Vec<FieldTableEntry>,
}

impl FieldTable {
    /// Build a table, rejecting zero widths and duplicate non-reserved names.
    pub fn new(entries: Vec<FieldTableEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.width == 0 {
                return Err(Error::InvalidFieldTable(format!(
                    "field '{}' has zero width",
                    entry.name
                )));
            }
            if !entry.is_reserved() && !seen.insert(entry.name.as_str()) {
                return Err(Error::InvalidFieldTable(format!(
                    "duplicate field name '{}'",
                    entry.name
                )));
            }
        }
        Ok(Self { entries })
    }

    /// Performance common params: name, key mode, reverb, chorus, voice reserve.
    pub fn performance_common() -> Self {
        let mut entries = vec![
            FieldTableEntry::text("name", performance::NAME_LEN),
            FieldTableEntry::byte("keymode"),
        ];
        entries.extend(
            [
                "reverbtype",
                "reverblevel",
                "reverbtime",
                "reverbfeedback",
                "chorustype",
                "choruslevel",
                "chorusdepth",
                "chorusrate",
                "chorusfeedback",
                "chorusoutput",
            ]
            .into_iter()
            .map(FieldTableEntry::byte),
        );
        entries.extend(
            (1..=performance::PART_COUNT)
                .map(|i| FieldTableEntry::byte(format!("voicereserve{i}"))),
        );
        Self { entries }
    }

    /// Part parameters in SysEx edit order (35 slots, `-` for the unused
    /// high bytes of two-byte values).
    ///
    /// The stored part block is more compact than this, so mapping a stored
    /// part with this table is speculative and always truncates.
    pub fn part_sysex() -> Self {
        let entries = [
            "transmitswitch",
            "transmitchannel",
            "transmitprogramchange",
            RESERVED,
            "transmitvolume",
            RESERVED,
            "transmitpan",
            RESERVED,
            "transmitkeyrangelower",
            "transmitkeyrangeupper",
            "transmitkeytranspose",
            "transmitvelocitysense",
            "transmitvelocitymax",
            "transmitvelocitycurve",
            "internalswitch",
            "internalkeyrangelower",
            "internalkeyrangeupper",
            "internalkeytranspose",
            "internalvelocitysense",
            "internalvelocitymax",
            "internalvelocitycurve",
            "receiveswitch",
            "receivechannel",
            "patchnumber",
            RESERVED,
            "partlevel",
            "partpan",
            "partcoarsetune",
            "partfinetune",
            "reverbswitch",
            "chorusswitch",
            "receiveprogramchange",
            "receivevolume",
            "receivehold1",
            "outputselect",
        ]
        .into_iter()
        .map(FieldTableEntry::byte)
        .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[FieldTableEntry] {
        &self.entries
    }

    /// Bytes consumed when every entry is mapped
    pub fn total_width(&self) -> usize {
        self.entries.iter().map(|e| e.width).sum()
    }

    /// Number of entries that produce a value
    pub fn named_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_reserved()).count()
    }
}
