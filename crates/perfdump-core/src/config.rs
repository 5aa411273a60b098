//! TOML configuration: record layout and named record locations.
//!
//! ```toml
//! [layout]
//! record_size = 204
//! part_start = 31
//! part_count = 8
//!
//! [[location]]
//! label = "Preset A"
//! image = "roms/jv880_rom2.bin"
//! offset = 0x10020
//! count = 16
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::memory::layout::{PERFORMANCES_PER_BANK, nvram, performance, rom2};
use crate::schema::{FieldTable, FieldTableEntry};

/// Shape of one performance record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub record_size: usize,
    pub name_length: usize,
    pub part_start: usize,
    pub part_count: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            record_size: performance::SIZE,
            name_length: performance::NAME_LEN,
            part_start: performance::COMMON_END,
            part_count: performance::PART_COUNT,
        }
    }
}

/// A bank (or single record) of performances inside an image file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Location {
    pub label: String,
    pub image: PathBuf,
    pub offset: usize,
    #[serde(default = "default_count")]
    pub count: usize,
    /// Distance between consecutive records; defaults to the record size
    pub stride: Option<usize>,
}

fn default_count() -> usize {
    1
}

impl Location {
    pub fn stride_or(&self, record_size: usize) -> usize {
        self.stride.unwrap_or(record_size)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: Layout,
    #[serde(rename = "location")]
    pub locations: Vec<Location>,
    /// Replacement for the built-in common-param table
    #[serde(rename = "field")]
    pub fields: Option<Vec<FieldTableEntry>>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        debug!(
            "Loaded config from {} ({} locations)",
            path.display(),
            config.locations.len()
        );
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let layout = &self.layout;
        if layout.record_size == 0 {
            return Err(Error::Config("record_size must be positive".to_string()));
        }
        if layout.part_count == 0 {
            return Err(Error::Config("part_count must be positive".to_string()));
        }
        if layout.part_start > layout.record_size || layout.name_length > layout.record_size {
            return Err(Error::Config(format!(
                "layout does not fit in a {}-byte record",
                layout.record_size
            )));
        }
        Ok(())
    }

    /// Common-param table: the configured one, or the built-in performance table.
    pub fn common_table(&self) -> Result<FieldTable> {
        match &self.fields {
            Some(entries) => FieldTable::new(entries.clone()),
            None => Ok(FieldTable::performance_common()),
        }
    }

    /// Standard JV-880 banks, relative to a ROM directory
    pub fn jv880_locations(rom_dir: &Path) -> Vec<Location> {
        let rom2_path = rom_dir.join("jv880_rom2.bin");
        vec![
            Location {
                label: "Preset A".to_string(),
                image: rom2_path.clone(),
                offset: rom2::PRESET_A,
                count: PERFORMANCES_PER_BANK,
                stride: None,
            },
            Location {
                label: "Preset B".to_string(),
                image: rom2_path,
                offset: rom2::PRESET_B,
                count: PERFORMANCES_PER_BANK,
                stride: None,
            },
            Location {
                label: "Internal".to_string(),
                image: rom_dir.join("jv880_nvram.bin"),
                offset: nvram::INTERNAL,
                count: PERFORMANCES_PER_BANK,
                stride: None,
            },
        ]
    }
}
