//! Loading of the two input files.
//!
//! - [`ranges`] - range (CIDR) list
//! - [`addresses`] - address list
//!
//! Malformed lines are logged and skipped; only an unreadable file is an error.

mod addresses;
mod lines;
mod ranges;

pub use addresses::{load_addresses, parse_addresses};
pub use lines::{read_lines, significant_line};
pub use ranges::{load_ranges, parse_range_line, parse_ranges};
