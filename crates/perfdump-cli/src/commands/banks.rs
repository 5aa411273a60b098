//! Banks command implementation.
//!
//! Decodes every configured performance bank. A missing image or an
//! out-of-range record is logged and skipped; the rest of the batch continues.

use std::path::Path;

use anyhow::Result;
use perfdump_core::{
    BinaryImage, Config, Interpreter, PerformanceReport, ReportBundle, extract_bank,
};
use tracing::{error, info, warn};

use super::decode::print_report;

/// Run the banks command
pub fn run(config_path: &Path, rom_dir: &Path, json: Option<&Path>) -> Result<()> {
    let config = match Config::load(config_path) {
        Ok(c) => {
            info!("Loaded config from {:?}", config_path);
            c
        }
        Err(e) => {
            warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        }
    };

    let locations = if config.locations.is_empty() {
        Config::jv880_locations(rom_dir)
    } else {
        config.locations.clone()
    };
    let table = config.common_table()?;
    let interpreter = Interpreter::performance_common();
    let layout = config.layout;

    let mut reports = Vec::new();
    let mut skipped = 0usize;
    for location in &locations {
        let image = match BinaryImage::load(&location.image) {
            Ok(image) => image,
            Err(e) => {
                error!(
                    "{}: cannot load {}: {}",
                    location.label,
                    location.image.display(),
                    e
                );
                skipped += location.count;
                continue;
            }
        };

        println!();
        println!(
            "========== {} ({} @ 0x{:X}) ==========",
            location.label,
            image.label(),
            location.offset
        );

        let records = extract_bank(
            &image,
            location.offset,
            location.stride_or(layout.record_size),
            layout.record_size,
            location.count,
        );
        for record in records {
            let record = match record {
                Ok(r) => r,
                Err(e) => {
                    warn!("{}: skipping record: {}", location.label, e);
                    skipped += 1;
                    continue;
                }
            };
            let report = PerformanceReport::build(&record, &layout, &table, &interpreter)?;
            print_report(&report);
            reports.push(report);
        }
    }

    println!();
    println!(
        "Decoded {} performance(s), skipped {}",
        reports.len(),
        skipped
    );

    if let Some(path) = json {
        ReportBundle::new(reports).save(path)?;
        println!("Report saved to: {}", path.display());
    }

    Ok(())
}
