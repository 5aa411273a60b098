//! Hex offset parsing and byte formatting utilities.

use anyhow::Result;

/// Parse a hex offset string (with or without 0x prefix).
///
/// # Examples
///
/// ```ignore
/// assert_eq!(parse_hex_address("0x10020").unwrap(), 0x10020);
/// assert_eq!(parse_hex_address("b0").unwrap(), 0xB0);
/// ```
pub fn parse_hex_address(s: &str) -> Result<usize> {
    let s = s.trim_start_matches("0x").trim_start_matches("0X");
    usize::from_str_radix(s, 16).map_err(|e| anyhow::anyhow!("Invalid hex offset: {}", e))
}

/// Space-separated two-digit hex.
pub fn format_hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
