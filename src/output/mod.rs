//! Output formatting for match reports.
//!
//! - [`terminal`] - plain text report on stdout

mod terminal;

pub use terminal::{format_match, print_report, render_report, SUMMARY_HEADER, SUMMARY_SEPARATOR};
