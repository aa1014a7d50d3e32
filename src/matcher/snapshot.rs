//! [`Matcher`]: the loaded ranges and addresses for one pair of input files.

use super::first_match::find_first_match;
use super::report::{run, MatchReport};
use crate::config::Config;
use crate::loader::{load_addresses, load_ranges};
use crate::models::{Address, AddressRange, AddressSet, RangeSet};
use std::error::Error;

/// Loaded snapshot of both input files.
///
/// The sets are only ever replaced whole, never edited in place.
#[derive(Debug)]
pub struct Matcher {
    config: Config,
    ranges: RangeSet,
    addresses: AddressSet,
}

impl Matcher {
    /// Load ranges then addresses from the files named in `config`.
    pub fn load(config: Config) -> Result<Matcher, Box<dyn Error>> {
        let (ranges, addresses) = load_snapshot(&config)?;
        Ok(Matcher {
            config,
            ranges,
            addresses,
        })
    }

    /// Re-read both files. On failure the current snapshot is kept.
    pub fn reload(&mut self) -> Result<(), Box<dyn Error>> {
        let (ranges, addresses) = load_snapshot(&self.config)?;
        self.ranges = ranges;
        self.addresses = addresses;
        Ok(())
    }

    pub fn ranges(&self) -> &RangeSet {
        &self.ranges
    }

    pub fn addresses(&self) -> &AddressSet {
        &self.addresses
    }

    /// First range containing the address in `ip`; unparseable text matches nothing.
    pub fn match_str(&self, ip: &str) -> Option<&AddressRange> {
        let addr = Address::new(ip).ok()?;
        find_first_match(&addr, &self.ranges)
    }

    /// Match every loaded address against the loaded ranges.
    pub fn matching(&self) -> MatchReport {
        log::info!("Starting to match IPs in CIDRs");
        run(&self.addresses, &self.ranges)
    }
}

fn load_snapshot(config: &Config) -> Result<(RangeSet, AddressSet), Box<dyn Error>> {
    log::info!("Loading CIDRs and IPs");
    let ranges = load_ranges(&config.cidr_file).map_err(|e| {
        log::error!("failed to load cidrs at startup: {e}");
        format!("failed to load cidrs: {e}")
    })?;
    let addresses = load_addresses(&config.ip_file).map_err(|e| {
        log::error!("failed to load ips at startup: {e}");
        format!("failed to load ips: {e}")
    })?;
    Ok((ranges, addresses))
}
