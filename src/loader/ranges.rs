//! Range loader.
//!
//! Turns lines like `10.0.0.0/24`, `192.168.1.5` or `2001:db8::/32` into a
//! [`RangeSet`]. A bare address becomes a single-host range.

use super::lines::{read_lines, significant_line};
use crate::models::{Address, AddressRange, RangeSet};
use colored::Colorize;
use std::error::Error;
use std::path::Path;

/// Parse one significant line as a range.
///
/// A line without `/` is a single host: `/32` for IPv4, `/128` for IPv6.
pub fn parse_range_line(line: &str) -> Result<AddressRange, Box<dyn Error>> {
    if line.contains('/') {
        AddressRange::new(line)
    } else {
        Ok(AddressRange::host(Address::new(line)?))
    }
}

/// Build a [`RangeSet`] from raw lines, skipping blanks, comments and
/// malformed entries.
pub fn parse_ranges<I, S>(lines: I) -> RangeSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut ranges = RangeSet::new();
    for raw in lines {
        let raw = raw.as_ref();
        let Some(line) = significant_line(raw) else {
            continue;
        };
        match parse_range_line(line) {
            Ok(range) => {
                log::debug!("cidr {line} -> {range}");
                ranges.push(range);
            }
            Err(e) => {
                log::warn!("invalid cidr '{}' in cidrs: {e}", raw.on_red());
            }
        }
    }
    ranges
}

/// Load ranges from a file.
pub fn load_ranges(path: &Path) -> Result<RangeSet, Box<dyn Error>> {
    let lines = read_lines(path)?;
    let ranges = parse_ranges(&lines);
    log::info!(
        "Loaded {} cidrs from {} ({} lines)",
        ranges.len(),
        path.display(),
        lines.len()
    );
    Ok(ranges)
}
