//! Serializable decode reports for one or more performance records.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::config::Layout;
use crate::error::Result;
use crate::interpret::{Interpreter, KeyMode};
use crate::record::Record;
use crate::schema::{FieldTable, ParameterValue, PartBlock, UnassignedTail, apply, split_remainder};

/// Everything known about one performance record
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceReport {
    pub source: String,
    /// Offset of the record in its image
    pub offset: usize,
    pub name: String,
    pub key_mode: Option<KeyMode>,
    pub params: Vec<ParameterValue>,
    /// The common table did not fit in the record
    pub truncated: bool,
    pub part_size: usize,
    pub parts: Vec<PartBlock>,
    pub unassigned: UnassignedTail,
}

impl PerformanceReport {
    pub fn build(
        record: &Record,
        layout: &Layout,
        table: &FieldTable,
        interpreter: &Interpreter,
    ) -> Result<Self> {
        let mapped = apply(record, table, 0).interpreted(interpreter);
        let split = split_remainder(record, layout.part_start, layout.part_count)?;

        let name_end = layout.name_length.min(record.len());
        let name = crate::schema::decode_name(&record.bytes()[..name_end]);
        let key_mode = mapped
            .get("keymode")
            .and_then(ParameterValue::raw_value)
            .and_then(KeyMode::from_u8);

        Ok(Self {
            source: record.source().to_string(),
            offset: record.base_offset(),
            name,
            key_mode,
            params: mapped.values,
            truncated: mapped.truncated,
            part_size: split.part_size,
            parts: split.parts,
            unassigned: split.tail,
        })
    }
}

/// A batch of reports, as written to disk
#[derive(Debug, Clone, Serialize)]
pub struct ReportBundle {
    pub generated_at: DateTime<Utc>,
    pub reports: Vec<PerformanceReport>,
}

impl ReportBundle {
    pub fn new(reports: Vec<PerformanceReport>) -> Self {
        Self {
            generated_at: Utc::now(),
            reports,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save bundle to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        info!(
            "Saved {} report(s) to {}",
            self.reports.len(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::BinaryImage;
    use crate::memory::layout::{performance, rom2};
    use crate::record::extract;
    use tempfile::NamedTempFile;

    fn jazz_split_image() -> BinaryImage {
        let mut bytes = vec![0u8; rom2::PRESET_A];
        bytes.extend_from_slice(b"Jazz Split  ");
        bytes.push(1);
        bytes.extend(std::iter::repeat_n(0x40, 18));
        bytes.extend(std::iter::repeat_n(0xE1, 173));
        BinaryImage::new("jv880_rom2.bin", bytes)
    }

    fn build_report() -> PerformanceReport {
        let image = jazz_split_image();
        let record = extract(&image, rom2::PRESET_A, performance::SIZE).unwrap();
        PerformanceReport::build(
            &record,
            &Layout::default(),
            &FieldTable::performance_common(),
            &Interpreter::performance_common(),
        )
        .unwrap()
    }

    #[test]
    fn test_build_report() {
        let report = build_report();

        assert_eq!(report.source, "jv880_rom2.bin");
        assert_eq!(report.offset, rom2::PRESET_A);
        assert_eq!(report.name, "Jazz Split");
        assert_eq!(report.key_mode, Some(KeyMode::Zone));
        assert!(!report.truncated);
        assert_eq!(report.params.len(), 20);
        assert_eq!(report.part_size, 21);
        assert_eq!(report.parts.len(), 8);
        assert_eq!(report.unassigned.bytes.len(), 5);
        assert_eq!(report.params[1].interpretation.as_deref(), Some("Zone"));
    }

    #[test]
    fn test_build_report_short_record() {
        let image = BinaryImage::new("sram", b"Syn Lead    ".to_vec());
        let record = extract(&image, 0, 12).unwrap();
        let layout = Layout {
            record_size: 12,
            name_length: 12,
            part_start: 12,
            part_count: 8,
        };

        let report = PerformanceReport::build(
            &record,
            &layout,
            &FieldTable::performance_common(),
            &Interpreter::performance_common(),
        )
        .unwrap();

        assert_eq!(report.name, "Syn Lead");
        assert!(report.truncated);
        assert_eq!(report.key_mode, None);
        assert!(report.unassigned.bytes.is_empty());
    }

    #[test]
    fn test_bundle_json() {
        let bundle = ReportBundle::new(vec![build_report()]);
        let json = bundle.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["reports"][0]["name"], "Jazz Split");
        assert_eq!(value["reports"][0]["key_mode"], "Zone");
        assert_eq!(value["reports"][0]["params"][1]["field_name"], "keymode");
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_bundle_save() {
        let file = NamedTempFile::new().unwrap();
        ReportBundle::new(vec![build_report()])
            .save(file.path())
            .unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        assert!(content.contains("\"unassigned\""));
    }
}
