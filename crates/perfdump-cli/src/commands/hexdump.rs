//! Hexdump command implementation.
//!
//! Displays raw image bytes in traditional hexdump format, useful for
//! eyeballing record boundaries before decoding.
//!
//! # Output Format
//!
//! ```text
//! 0x10020: 4A 61 7A 7A 20 53 70 6C 69 74 20 20 01 02 7F 40  |Jazz Split  ...@|
//! ```

use std::path::Path;

use anyhow::Result;
use perfdump_core::{BinaryImage, extract, render};

/// Run the hexdump command
pub fn run(
    image_path: &Path,
    offset: usize,
    length: usize,
    width: usize,
    max: Option<usize>,
) -> Result<()> {
    let image = BinaryImage::load(image_path)?;
    let record = extract(&image, offset, length)?;

    println!(
        "Hexdump of {} at 0x{:X} ({} bytes):",
        image.label(),
        offset,
        length
    );
    println!();

    for line in render(&record, width, max.unwrap_or(length)) {
        println!("{}", line);
    }

    Ok(())
}
