//! First-match lookup of an address against a [`RangeSet`].

use crate::models::{Address, AddressRange, RangeSet};

/// Return the first range, in insertion order, that contains `addr`.
pub fn find_first_match<'a>(addr: &Address, ranges: &'a RangeSet) -> Option<&'a AddressRange> {
    ranges.iter().find(|range| range.contains(addr))
}
