//! Domain models for address range matching.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Address`] - IPv4 or IPv6 address tagged with its [`Family`]
//! - [`AddressRange`] - network prefix with containment test
//! - [`RangeSet`] and [`AddressSet`] - ordered, loaded collections

mod address;
mod range;
mod sets;

// Re-export public types
pub use address::{Address, Family};
pub use range::{cut_addr, prefix_mask, AddressRange};
pub use sets::{AddressSet, RangeSet};
