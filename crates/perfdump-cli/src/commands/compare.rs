//! Compare command implementation.
//!
//! Diffs two same-sized records byte by byte. Runs of adjacent changes are
//! grouped so field boundaries stand out. Without offsets, two whole snapshots
//! are compared, e.g. SRAM dumps taken before and after editing one parameter.

use std::path::Path;

use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use perfdump_core::memory::layout::{performance, sram};
use perfdump_core::{BinaryImage, Record, decode_name, diff, diff_regions, extract};

use crate::commands::hex_utils::format_hex_bytes;

/// Run the compare command
pub fn run(
    image_path: &Path,
    a: Option<usize>,
    b: Option<usize>,
    other: Option<&Path>,
    length: Option<usize>,
    limit: usize,
) -> Result<()> {
    let image_a = BinaryImage::load(image_path)?;
    let image_b = match other {
        Some(path) => BinaryImage::load(path)?,
        None => image_a.clone(),
    };

    let (record_a, record_b, snapshot) = match (a, b) {
        (Some(a), Some(b)) => {
            let length = length.unwrap_or(performance::SIZE);
            (
                extract(&image_a, a, length)?,
                extract(&image_b, b, length)?,
                false,
            )
        }
        (None, None) => (Record::whole(&image_a)?, Record::whole(&image_b)?, true),
        _ => bail!("--a and --b must be given together"),
    };

    println!(
        "=== Comparing {} @ 0x{:X} vs {} @ 0x{:X} ({} bytes) ===",
        image_a.label(),
        record_a.base_offset(),
        image_b.label(),
        record_b.base_offset(),
        record_a.len()
    );
    if !snapshot {
        let name_len = record_a.len().min(performance::NAME_LEN);
        println!("  Name A: '{}'", decode_name(&record_a.bytes()[..name_len]));
        println!("  Name B: '{}'", decode_name(&record_b.bytes()[..name_len]));
    }

    let entries = diff(&record_a, &record_b)?;

    println!();
    println!("  Differences ({} bytes differ):", entries.len());
    for entry in entries.iter().take(limit) {
        println!(
            "    [{:3}] 0x{:02X}: {:3} vs {:3}",
            entry.offset,
            entry.offset,
            entry.value_a.red(),
            entry.value_b.green()
        );
    }
    if entries.len() > limit {
        println!("    ... and {} more", entries.len() - limit);
    }

    let regions = diff_regions(&entries);
    if !regions.is_empty() {
        println!();
        println!("  Changed regions:");
        for region in &regions {
            let span = region.start..=region.end_inclusive;
            let location = if snapshot {
                temp_performance_offset(region.start)
                    .map(|rel| format!(" (temp performance +{rel})"))
                    .unwrap_or_default()
            } else {
                String::new()
            };
            println!(
                "    [{:3}..={:3}] {:2} byte(s): {} -> {}{}",
                region.start,
                region.end_inclusive,
                region.len(),
                format_hex_bytes(&record_a.bytes()[span.clone()]),
                format_hex_bytes(&record_b.bytes()[span]).bold(),
                location
            );
        }
    }

    Ok(())
}

/// Offset inside the SRAM temporary performance, if `offset` falls in it.
fn temp_performance_offset(offset: usize) -> Option<usize> {
    offset
        .checked_sub(sram::TEMP_PERFORMANCE)
        .filter(|&rel| rel < performance::SIZE)
}
