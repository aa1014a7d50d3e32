//! Plain text report for standard output.

use crate::matcher::{AddressMatch, MatchReport};
use itertools::Itertools;

/// Header of the distinct range section.
pub const SUMMARY_HEADER: &str = "CIDRs with matches:";
/// Line printed under [`SUMMARY_HEADER`].
pub const SUMMARY_SEPARATOR: &str = "---------------";

/// Format a single match line.
pub fn format_match(m: &AddressMatch) -> String {
    format!("IP: {} matches CIDR: {}", m.address, m.range)
}

/// Render the whole report: match lines, then the distinct ranges.
pub fn render_report(report: &MatchReport) -> String {
    let mut out = String::new();
    for m in &report.matches {
        out.push_str(&format_match(m));
        out.push('\n');
    }
    out.push_str(&format!("\n\n{SUMMARY_HEADER}\n{SUMMARY_SEPARATOR}\n"));
    if !report.matched_ranges.is_empty() {
        out.push_str(&report.matched_ranges.iter().join("\n"));
        out.push('\n');
    }
    out
}

/// Print the report to stdout.
pub fn print_report(report: &MatchReport) {
    log::info!("#Start print_report()");
    print!("{}", render_report(report));
}
