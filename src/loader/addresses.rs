//! Address loader: one IPv4 or IPv6 address per line.

use super::lines::{read_lines, significant_line};
use crate::models::{Address, AddressSet};
use colored::Colorize;
use std::error::Error;
use std::path::Path;

/// Build an [`AddressSet`] from raw lines, skipping blanks, comments and
/// malformed entries.
pub fn parse_addresses<I, S>(lines: I) -> AddressSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut addresses = AddressSet::new();
    for raw in lines {
        let raw = raw.as_ref();
        let Some(line) = significant_line(raw) else {
            continue;
        };
        match Address::new(line) {
            Ok(addr) => addresses.push(addr),
            Err(e) => {
                log::warn!("invalid ip '{}': {e}", raw.on_red());
            }
        }
    }
    addresses
}

/// Load addresses from a file.
pub fn load_addresses(path: &Path) -> Result<AddressSet, Box<dyn Error>> {
    let lines = read_lines(path)?;
    let addresses = parse_addresses(&lines);
    log::info!(
        "Loaded {} ips from {} ({} lines)",
        addresses.len(),
        path.display(),
        lines.len()
    );
    Ok(addresses)
}
