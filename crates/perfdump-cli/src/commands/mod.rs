//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod banks;
pub mod compare;
pub mod decode;
pub mod hex_utils;
pub mod hexdump;
pub mod search;
