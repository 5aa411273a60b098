//! Search command implementation.

use std::path::Path;

use anyhow::{Result, bail};
use perfdump_core::{BinaryImage, extract, find_ascii, render};

/// Run the search command
pub fn run(image_path: &Path, text: &str, limit: usize, context: usize) -> Result<()> {
    if text.is_empty() {
        bail!("Search text must not be empty");
    }

    let image = BinaryImage::load(image_path)?;
    println!(
        "Searching {} ({} bytes) for {:?}",
        image.label(),
        image.len(),
        text
    );
    println!();

    let found = find_ascii(&image, text.as_bytes());
    for (i, &offset) in found.iter().take(limit).enumerate() {
        println!("[{}] 0x{:X}", i + 1, offset);

        // Show context, clipped to the end of the image
        let length = context.max(1).min(image.len() - offset);
        let record = extract(&image, offset, length)?;
        for line in render(&record, 16, length) {
            println!("     {}", line);
        }
        println!();
    }

    println!("Found {} result(s)", found.len());
    if found.len() > limit {
        println!("(limit reached, use --limit to increase)");
    }

    Ok(())
}
