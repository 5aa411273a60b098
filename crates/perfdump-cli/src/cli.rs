//! Command-line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::hex_utils::parse_hex_address;

#[derive(Parser)]
#[command(name = "perfdump")]
#[command(about = "JV-880 performance record inspector", version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Hexdump a byte window of an image
    Hexdump {
        image: PathBuf,

        /// Start offset (hex)
        #[arg(short, long, value_parser = parse_hex_address)]
        offset: usize,

        #[arg(short, long, default_value_t = 204)]
        length: usize,

        /// Bytes per row
        #[arg(short, long, default_value_t = 16)]
        width: usize,

        /// Render at most this many bytes
        #[arg(long)]
        max: Option<usize>,
    },

    /// Decode performance records
    Decode {
        image: PathBuf,

        /// Offset of the first record (hex)
        #[arg(short, long, value_parser = parse_hex_address)]
        offset: usize,

        /// Number of consecutive records
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        /// Distance between records; defaults to the record size
        #[arg(long)]
        stride: Option<usize>,

        /// Layout / field table overrides
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write a JSON report to this file
        #[arg(long)]
        json: Option<PathBuf>,

        /// Also map each part with the SysEx edit-order table (speculative)
        #[arg(long)]
        sysex_parts: bool,
    },

    /// Byte-level diff of two records, or of two whole snapshots
    Compare {
        image: PathBuf,

        /// Offset of record A (hex); omit with --b to diff whole images
        #[arg(short, long, value_parser = parse_hex_address, requires = "b")]
        a: Option<usize>,

        /// Offset of record B (hex)
        #[arg(short, long, value_parser = parse_hex_address, requires = "a")]
        b: Option<usize>,

        /// Read record B from this image instead
        #[arg(long)]
        other: Option<PathBuf>,

        /// Record length; defaults to 204
        #[arg(short, long, requires = "a")]
        length: Option<usize>,

        /// Differences to list
        #[arg(long, default_value_t = 40)]
        limit: usize,
    },

    /// Find an ASCII string in an image
    Search {
        image: PathBuf,

        text: String,

        #[arg(long, default_value_t = 20)]
        limit: usize,

        /// Bytes of context to dump at each match
        #[arg(long, default_value_t = 48)]
        context: usize,
    },

    /// Decode every configured bank
    Banks {
        #[arg(short, long, default_value = "perfdump.toml")]
        config: PathBuf,

        /// ROM directory used when the config lists no locations
        #[arg(long, default_value = "roms")]
        rom_dir: PathBuf,

        /// Write a JSON report to this file
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_decode() {
        let cli = Cli::try_parse_from([
            "perfdump",
            "decode",
            "roms/jv880_rom2.bin",
            "--offset",
            "0x10020",
            "--count",
            "16",
        ])
        .unwrap();

        match cli.command {
            Command::Decode {
                offset,
                count,
                stride,
                sysex_parts,
                ..
            } => {
                assert_eq!(offset, 0x10020);
                assert_eq!(count, 16);
                assert_eq!(stride, None);
                assert!(!sysex_parts);
            }
            _ => panic!("expected decode"),
        }
    }

    #[test]
    fn test_parse_compare_defaults() {
        let cli = Cli::try_parse_from([
            "perfdump", "compare", "rom2.bin", "-a", "10020", "-b", "100ec",
        ])
        .unwrap();

        match cli.command {
            Command::Compare {
                a,
                b,
                length,
                limit,
                other,
                ..
            } => {
                assert_eq!(a, Some(0x10020));
                assert_eq!(b, Some(0x100EC));
                assert_eq!(length, None);
                assert_eq!(limit, 40);
                assert!(other.is_none());
            }
            _ => panic!("expected compare"),
        }
    }

    #[test]
    fn test_parse_compare_snapshots() {
        let cli = Cli::try_parse_from([
            "perfdump",
            "compare",
            "sram_before.bin",
            "--other",
            "sram_after.bin",
        ])
        .unwrap();

        match cli.command {
            Command::Compare { a, b, other, .. } => {
                assert_eq!(a, None);
                assert_eq!(b, None);
                assert_eq!(other, Some(PathBuf::from("sram_after.bin")));
            }
            _ => panic!("expected compare"),
        }
    }

    #[test]
    fn test_parse_compare_requires_both_offsets() {
        assert!(
            Cli::try_parse_from(["perfdump", "compare", "rom2.bin", "-a", "10020"]).is_err()
        );
    }

    #[test]
    fn test_parse_rejects_bad_offset() {
        assert!(
            Cli::try_parse_from(["perfdump", "hexdump", "nvram.bin", "--offset", "xyz"]).is_err()
        );
    }
}
