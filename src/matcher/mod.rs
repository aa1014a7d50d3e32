//! Address matching.
//!
//! - [`first_match`] - first range containing an address
//! - [`report`] - full pass over all addresses with range de-duplication
//! - [`snapshot`] - [`Matcher`] holding the loaded input files

mod first_match;
mod report;
mod snapshot;

pub use first_match::find_first_match;
pub use report::{run, AddressMatch, MatchReport, MatchResult};
pub use snapshot::Matcher;
