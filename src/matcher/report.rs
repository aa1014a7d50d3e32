//! Report generation: match every address and collect distinct ranges.

use super::first_match::find_first_match;
use crate::models::{Address, AddressRange, AddressSet, RangeSet};
use serde::Serialize;
use std::collections::HashMap;

/// Distinct matched ranges keyed by canonical string, in first-matched order.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    ranges: Vec<AddressRange>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl MatchResult {
    pub fn new() -> MatchResult {
        MatchResult::default()
    }

    /// Add `range` unless a range with the same canonical string is present.
    /// Returns true when it was added.
    pub fn insert(&mut self, range: AddressRange) -> bool {
        let key = range.to_string();
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.ranges.len());
        self.ranges.push(range);
        true
    }

    pub fn get(&self, cidr: &str) -> Option<&AddressRange> {
        self.index.get(cidr).map(|&i| &self.ranges[i])
    }

    pub fn contains(&self, cidr: &str) -> bool {
        self.index.contains_key(cidr)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AddressRange> {
        self.ranges.iter()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// One matched address and the first range that contained it.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct AddressMatch {
    pub address: Address,
    pub range: AddressRange,
}

/// Output of one matching pass.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    /// Matches in address order; unmatched addresses are absent.
    pub matches: Vec<AddressMatch>,
    /// Every distinct range that matched at least one address.
    pub matched_ranges: MatchResult,
}

/// Match each address against `ranges`, keeping the first match per address.
pub fn run(addresses: &AddressSet, ranges: &RangeSet) -> MatchReport {
    let mut report = MatchReport::default();
    for addr in addresses {
        match find_first_match(addr, ranges) {
            Some(range) => {
                log::debug!("{addr} matched {range}");
                report.matches.push(AddressMatch {
                    address: *addr,
                    range: *range,
                });
                report.matched_ranges.insert(*range);
            }
            None => log::trace!("{addr} matched nothing"),
        }
    }
    log::info!(
        "Matched {} of {} ips against {} cidrs, {} distinct cidrs",
        report.matches.len(),
        addresses.len(),
        ranges.len(),
        report.matched_ranges.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{parse_addresses, parse_ranges};

    #[test]
    fn test_run_example() {
        let ranges = parse_ranges(["10.0.0.0/24", "192.168.1.5"]);
        let addresses = parse_addresses(["10.0.0.7", "10.0.0.7", "192.168.1.5", "8.8.8.8"]);
        let report = run(&addresses, &ranges);

        let lines: Vec<(String, String)> = report
            .matches
            .iter()
            .map(|m| (m.address.to_string(), m.range.to_string()))
            .collect();
        assert_eq!(
            lines,
            vec![
                ("10.0.0.7".to_string(), "10.0.0.0/24".to_string()),
                ("10.0.0.7".to_string(), "10.0.0.0/24".to_string()),
                ("192.168.1.5".to_string(), "192.168.1.5/32".to_string()),
            ]
        );
        let distinct: Vec<String> = report.matched_ranges.iter().map(|r| r.to_string()).collect();
        assert_eq!(distinct, vec!["10.0.0.0/24", "192.168.1.5/32"]);
    }

    #[test]
    fn test_dedup_positioned_by_first_match() {
        let ranges = parse_ranges(["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/16"]);
        let addresses = parse_addresses([
            "192.168.0.1",
            "10.1.1.1",
            "192.168.0.2",
            "10.2.2.2",
            "192.168.0.3",
        ]);
        let report = run(&addresses, &ranges);
        assert_eq!(report.matches.len(), 5);
        let distinct: Vec<String> = report.matched_ranges.iter().map(|r| r.to_string()).collect();
        assert_eq!(distinct, vec!["192.168.0.0/16", "10.0.0.0/8"]);
    }

    #[test]
    fn test_only_first_match_reported_per_address() {
        let ranges = parse_ranges(["10.0.0.0/8", "10.0.0.0/24"]);
        let addresses = parse_addresses(["10.0.0.7", "10.9.9.9"]);
        let report = run(&addresses, &ranges);
        assert!(report.matches.iter().all(|m| m.range.to_string() == "10.0.0.0/8"));
        assert_eq!(report.matched_ranges.len(), 1);
        assert!(!report.matched_ranges.contains("10.0.0.0/24"));
    }

    #[test]
    fn test_duplicate_ranges_in_set_deduplicate() {
        // A later range with the same canonical form is never reached.
        let ranges = parse_ranges(["10.0.0.9/24", "10.0.0.0/24"]);
        let addresses = parse_addresses(["10.0.0.1"]);
        let report = run(&addresses, &ranges);
        assert_eq!(report.matched_ranges.len(), 1);
        assert!(report.matched_ranges.get("10.0.0.0/24").is_some());
    }

    #[test]
    fn test_match_result_insert() {
        let mut result = MatchResult::new();
        let range = AddressRange::new("10.0.0.0/24").unwrap();
        assert!(result.insert(range));
        assert!(!result.insert(AddressRange::new("10.0.0.5/24").unwrap()));
        assert_eq!(result.len(), 1);
        assert_eq!(result.get("10.0.0.0/24"), Some(&range));
        assert!(result.get("10.0.0.5/24").is_none());
    }

    #[test]
    fn test_no_matches() {
        let ranges = parse_ranges(["10.0.0.0/24"]);
        let addresses = parse_addresses(["8.8.8.8", "::1"]);
        let report = run(&addresses, &ranges);
        assert!(report.matches.is_empty());
        assert!(report.matched_ranges.is_empty());
    }

    #[test]
    fn test_report_serializes() {
        let ranges = parse_ranges(["10.0.0.0/24"]);
        let addresses = parse_addresses(["10.0.0.7"]);
        let report = run(&addresses, &ranges);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "matches": [{"address": "10.0.0.7", "range": "10.0.0.0/24"}],
                "matched_ranges": {"ranges": ["10.0.0.0/24"]}
            })
        );
    }
}
