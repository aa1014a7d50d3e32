//! Report which addresses fall inside which network ranges.
//!
//! Loads a list of ranges and a list of addresses, then matches each address
//! against the ranges in file order (first match wins).

pub mod config;
pub mod loader;
pub mod logging;
pub mod matcher;
pub mod models;
pub mod output;

use std::error::Error;

pub use config::Config;
pub use matcher::{find_first_match, run, MatchReport, Matcher};
pub use models::{Address, AddressRange, AddressSet, Family, RangeSet};

/// Load both files, match, and return the report without printing it.
pub fn match_files(config: Config) -> Result<MatchReport, Box<dyn Error>> {
    let matcher = Matcher::load(config)?;
    Ok(matcher.matching())
}
