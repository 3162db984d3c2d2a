//! Network-listing to JSON converter.
//!
//! Reads a plain-text network listing and prints a JSON document mapping each
//! network name to its id and metadata fields, preserving input order.
//!
//! # Example
//!
//! ```sh
//! networks-json networks.txt
//! ```

use chain_utils::networks::NetworkListing;
use clap::Parser;
use eyre::{Result, WrapErr};
use std::{fs, path::PathBuf};

/// Convert a plain-text network listing into a JSON document on stdout
#[derive(Debug, Parser)]
#[command(name = "networks-json", about = "Convert a network listing to JSON")]
struct Args {
    /// Path to the plain-text network listing
    file: PathBuf,
}

/// Entry point
///
/// Reads the listing file fully into memory, parses it and renders the whole
/// JSON document before writing anything, so a malformed record never leaves
/// truncated JSON on stdout.
fn main() -> Result<()> {
    chain_utils::logging::init();

    let args = Args::parse();

    let text = fs::read_to_string(&args.file)
        .wrap_err_with(|| format!("failed to read {}", args.file.display()))?;

    let listing = NetworkListing::parse(&text)?;
    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}
