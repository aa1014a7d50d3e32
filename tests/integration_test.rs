//! Integration tests for cidr-ip-matcher
//!
//! These tests verify the complete workflow from reading input files to the
//! printed report.

use cidr_ip_matcher::{
    loader::{load_addresses, load_ranges},
    match_files,
    output::render_report,
    Config, Matcher,
};
use std::path::Path;

#[test]
fn test_full_workflow_example() {
    let config = Config::new(
        "src/tests/test_data/example_cidrs.txt",
        "src/tests/test_data/example_ips.txt",
    );
    let report = match_files(config).expect("Failed to match files");

    assert_eq!(
        render_report(&report),
        "IP: 10.0.0.7 matches CIDR: 10.0.0.0/24\n\
         IP: 10.0.0.7 matches CIDR: 10.0.0.0/24\n\
         IP: 192.168.1.5 matches CIDR: 192.168.1.5/32\n\
         \n\
         \n\
         CIDRs with matches:\n\
         ---------------\n\
         10.0.0.0/24\n\
         192.168.1.5/32\n"
    );
}

#[test]
fn test_overlapping_ranges_both_families() {
    let config = Config::new(
        "src/tests/test_data/overlap_cidrs.txt",
        "src/tests/test_data/overlap_ips.txt",
    );
    let matcher = Matcher::load(config).expect("Failed to load matcher");
    assert_eq!(matcher.ranges().len(), 4);
    assert_eq!(matcher.addresses().len(), 5);

    let report = matcher.matching();
    let lines: Vec<String> = report
        .matches
        .iter()
        .map(|m| format!("{} {}", m.address, m.range))
        .collect();
    // ::ffff:10.0.0.7 is IPv6 and 172.16.0.1 is outside every range
    assert_eq!(
        lines,
        vec![
            "10.0.0.7 10.0.0.0/8",
            "2001:db8::1 2001:db8::/32",
            "10.1.2.3 10.0.0.0/8",
        ]
    );
    let distinct: Vec<String> = report.matched_ranges.iter().map(|r| r.to_string()).collect();
    assert_eq!(distinct, vec!["10.0.0.0/8", "2001:db8::/32"]);
}

#[test]
fn test_invalid_lines_are_skipped() {
    let ranges = load_ranges(Path::new("src/tests/test_data/cidrs_invalid.txt"))
        .expect("Malformed lines must not abort the load");
    let printed: Vec<String> = ranges.iter().map(|r| r.to_string()).collect();
    assert!(!printed.iter().any(|r| r.contains("not-an-ip")));
    assert_eq!(printed, vec!["10.0.0.0/24", "172.16.0.0/12", "fd00::/8"]);

    let addresses = load_addresses(Path::new("src/tests/test_data/ips_invalid.txt"))
        .expect("Malformed lines must not abort the load");
    assert_eq!(addresses.len(), 2);
}

#[test]
fn test_missing_input_is_fatal() {
    let config = Config::new(
        "src/tests/test_data/example_cidrs.txt",
        "src/tests/test_data/no_such_file.txt",
    );
    let err = match_files(config).expect_err("Missing file must fail");
    assert!(err.to_string().contains("failed to load ips"));
}

#[test]
fn test_loading_twice_is_identical() {
    let path = Path::new("src/tests/test_data/overlap_cidrs.txt");
    let first = load_ranges(path).expect("Failed to load cidrs");
    let second = load_ranges(path).expect("Failed to load cidrs");
    assert_eq!(first, second);
}
