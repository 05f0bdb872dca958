//! Sprite flag table conversion.
//!
//! Flags are authored as a comma separated list of 8 character binary strings,
//! one per sprite, and compiled into a Rust source table of 512 bytes.

use std::{fmt::Write, fs, path::Path};

use log::info;
use thiserror::Error;

/// Only the first 512 sprites can have flags
pub const MAX_FLAGS: usize = 0x200;

#[derive(Debug, Error)]
pub enum FlagError {
    #[error("only the first 512 sprites can have flags, got {0} entries")]
    TooManyEntries(usize),
    #[error("entry \"{0}\" is not 8 characters long")]
    BadLength(String),
    #[error("entry \"{0}\" contains a character other than 0 and 1")]
    BadChar(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Converts one entry. Each character increments the accumulator on '1' and
/// then shifts it left, so the top bit of the input never survives.
pub fn parse_flag(entry: &str) -> Result<u8, FlagError> {
    if entry.len() != 8 {
        return Err(FlagError::BadLength(entry.to_string()));
    }
    let mut ret = 0u8;
    for c in entry.chars() {
        match c {
            '0' => {}
            '1' => ret += 1,
            _ => return Err(FlagError::BadChar(entry.to_string())),
        }
        ret <<= 1;
    }
    Ok(ret)
}

/// Parses a whole flag file. Missing entries are zero.
pub fn parse_flags(input: &str) -> Result<[u8; MAX_FLAGS], FlagError> {
    let entries: Vec<&str> = input.split(',').collect();
    if entries.len() > MAX_FLAGS {
        return Err(FlagError::TooManyEntries(entries.len()));
    }

    let mut table = [0; MAX_FLAGS];
    for (i, entry) in entries.into_iter().enumerate() {
        table[i] = parse_flag(entry)?;
    }
    Ok(table)
}

/// Renders the table as a Rust `static` named `name`.
pub fn render_flags(table: &[u8; MAX_FLAGS], name: &str) -> String {
    let mut out = String::new();
    out.push_str("// Generated by flagconv. Do not edit.\n\n");
    let _ = writeln!(out, "pub static {}: [u8; {:#X}] = [", name, MAX_FLAGS);
    for row in table.chunks(16) {
        out.push_str("   ");
        for b in row {
            let _ = write!(out, " {:#04X},", b);
        }
        out.push('\n');
    }
    out.push_str("];\n");
    out
}

/// Reads `input`, converts it and writes the table to `output`.
/// Nothing is written unless every entry converts.
pub fn convert_flags(input: &Path, output: &Path, name: &str) -> Result<(), FlagError> {
    let text = fs::read_to_string(input)?;
    let table = parse_flags(&text)?;
    fs::write(output, render_flags(&table, name))?;
    info!("wrote {} flag entries to {}", MAX_FLAGS, output.display());
    Ok(())
}
