//! Ordered collections of ranges and addresses.
//!
//! Both keep insertion (file) order and are read-only once loaded.

use super::{Address, AddressRange};
use std::fmt;

/// Ranges in the order they were loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSet {
    pub ranges: Vec<AddressRange>,
}

impl RangeSet {
    pub fn new() -> RangeSet {
        RangeSet { ranges: vec![] }
    }

    pub fn push(&mut self, range: AddressRange) {
        self.ranges.push(range);
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

impl FromIterator<AddressRange> for RangeSet {
    fn from_iter<I: IntoIterator<Item = AddressRange>>(iter: I) -> Self {
        RangeSet {
            ranges: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = &'a AddressRange;
    type IntoIter = std::slice::Iter<'a, AddressRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

/// Addresses in the order they were loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressSet {
    pub addresses: Vec<Address>,
}

impl AddressSet {
    pub fn new() -> AddressSet {
        AddressSet { addresses: vec![] }
    }

    pub fn push(&mut self, addr: Address) {
        self.addresses.push(addr);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Address> {
        self.addresses.iter()
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

impl FromIterator<Address> for AddressSet {
    fn from_iter<I: IntoIterator<Item = Address>>(iter: I) -> Self {
        AddressSet {
            addresses: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AddressSet {
    type Item = &'a Address;
    type IntoIter = std::slice::Iter<'a, Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.addresses.iter()
    }
}

impl fmt::Display for RangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RangeSet ({} ranges):", self.ranges.len())?;
        for range in &self.ranges {
            writeln!(f, "  - {range}")?;
        }
        Ok(())
    }
}

impl fmt::Display for AddressSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "AddressSet ({} addresses):", self.addresses.len())?;
        for addr in &self.addresses {
            writeln!(f, "  - {addr}")?;
        }
        Ok(())
    }
}
