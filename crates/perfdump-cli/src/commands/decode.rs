//! Decode command implementation.
//!
//! Maps stored performance bytes onto the common-param table and splits the
//! part area, printing the result or saving it as JSON.

use std::path::Path;

use anyhow::Result;
use perfdump_core::{
    BinaryImage, Config, FieldTable, Interpreter, PerformanceReport, ReportBundle, apply, extract,
    extract_bank,
};
use tracing::{info, warn};

use super::hex_utils::format_hex_bytes;

/// Run the decode command
pub fn run(
    image_path: &Path,
    offset: usize,
    count: usize,
    stride: Option<usize>,
    config_path: Option<&Path>,
    json: Option<&Path>,
    sysex_parts: bool,
) -> Result<()> {
    let config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let table = config.common_table()?;
    let interpreter = Interpreter::performance_common();
    let layout = config.layout;

    let image = BinaryImage::load(image_path)?;
    info!("Loaded {} ({} bytes)", image.label(), image.len());

    let stride = stride.unwrap_or(layout.record_size);
    let mut reports = Vec::new();
    for record in extract_bank(&image, offset, stride, layout.record_size, count) {
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                warn!("Skipping record: {}", e);
                continue;
            }
        };

        let report = PerformanceReport::build(&record, &layout, &table, &interpreter)?;
        print_report(&report);
        if sysex_parts {
            print_sysex_parts(&image, &report, &interpreter)?;
        }
        reports.push(report);
    }

    if let Some(path) = json {
        ReportBundle::new(reports).save(path)?;
        println!("Report saved to: {}", path.display());
    }

    Ok(())
}

/// Print one decoded performance
pub fn print_report(report: &PerformanceReport) {
    println!();
    println!(
        "=== '{}' ({} @ 0x{:X}) ===",
        report.name, report.source, report.offset
    );

    println!();
    println!("Common params:");
    for param in &report.params {
        match (&param.text, param.raw_value()) {
            (Some(text), _) => {
                println!(
                    "  [{:3}] {:20} = {:?}",
                    param.byte_offset, param.field_name, text
                );
            }
            (None, Some(value)) => {
                println!(
                    "  [{:3}] {:20} = {:3} (0x{:02X}) {}",
                    param.byte_offset,
                    param.field_name,
                    value,
                    value,
                    param.interpretation.as_deref().unwrap_or("")
                );
            }
            (None, None) => {}
        }
    }
    if report.truncated {
        println!("  (record ended before the field table did)");
    }

    println!();
    println!("Parts ({} bytes each):", report.part_size);
    for part in &report.parts {
        println!(
            "  Part {} [{:3}]: {}",
            part.index + 1,
            part.byte_offset,
            format_hex_bytes(&part.bytes)
        );
        for (offset, bank) in part.patch_bank_candidates() {
            println!("           possible patch bank {} at [{}]", bank, offset);
        }
    }
    if !report.unassigned.bytes.is_empty() {
        println!(
            "  Unassigned [{:3}]: {}",
            report.unassigned.byte_offset,
            format_hex_bytes(&report.unassigned.bytes)
        );
    }
}

/// Map every part with the SysEx edit-order table. The stored format is more
/// compact, so these values are guesses.
fn print_sysex_parts(
    image: &BinaryImage,
    report: &PerformanceReport,
    interpreter: &Interpreter,
) -> Result<()> {
    let table = FieldTable::part_sysex();

    println!();
    println!("Parts under SysEx edit order (speculative):");
    for part in &report.parts {
        if part.bytes.is_empty() {
            continue;
        }
        let record = extract(image, report.offset + part.byte_offset, part.bytes.len())?;
        let mapped = apply(&record, &table, 0).interpreted(interpreter);

        println!("  Part {}:", part.index + 1);
        for param in &mapped.values {
            if let Some(value) = param.raw_value() {
                println!(
                    "    {:24} = {:3} {}",
                    param.field_name,
                    value,
                    param.interpretation.as_deref().unwrap_or("")
                );
            }
        }
        if mapped.truncated {
            println!(
                "    ... {} of {} params fit in {} bytes",
                mapped.values.len(),
                table.named_count(),
                part.bytes.len()
            );
        }
    }

    Ok(())
}
