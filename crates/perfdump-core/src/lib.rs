//! # perfdump-core
//!
//! Core library for inspecting stored JV-880 performance records in ROM,
//! NVRAM and SRAM dumps.
//!
//! This crate provides:
//! - Image loading and fixed-offset record extraction
//! - Hexdump rendering with round-trippable hex columns
//! - Field-table mapping onto a partially known schema
//! - Part-block splitting with explicit unassigned tails
//! - Heuristic value interpretation
//! - Byte-level record diffing
//!
//! Every operation is a pure function over immutable inputs; schemas and
//! interpretation rules are passed in explicitly.

pub mod config;
pub mod diff;
pub mod error;
pub mod interpret;
pub mod memory;
pub mod record;
pub mod report;
pub mod schema;

pub use config::{Config, Layout, Location};
pub use diff::{DiffEntry, DiffRegion, diff, diff_regions};
pub use error::{Error, Result};
pub use interpret::{Interpreter, KeyMode, NameMatch, Rule};
pub use memory::{BinaryImage, find_ascii};
pub use record::{HexDump, HexLine, Record, extract, extract_bank, parse_hex_column, render};
pub use report::{PerformanceReport, ReportBundle};
pub use schema::{
    FieldTable, FieldTableEntry, MappedFields, ParameterValue, PartBlock, PartSplit,
    UnassignedTail, apply, decode_name, split_remainder,
};
