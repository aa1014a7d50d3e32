//! Address range (CIDR) for both address families.
//!
//! Provides [`AddressRange`] along with the prefix mask helpers used by the
//! containment test.

use super::address::{Address, Family};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// Bit mask with the leading `len` bits of a `family` sized address set.
///
/// # Examples
/// ```
/// use cidr_ip_matcher::models::{prefix_mask, Family};
/// assert_eq!(prefix_mask(Family::V4, 24).unwrap(), 0xFFFFFF00);
/// ```
pub fn prefix_mask(family: Family, len: u8) -> Result<u128, Box<dyn Error>> {
    let width = family.bit_width();
    if len > width {
        return Err(format!("Network length {len} is too long for {family}").into());
    }
    if len == 0 {
        return Ok(0);
    }
    let all_bits = u128::MAX >> (128 - width as u32);
    let right_len = (width - len) as u32;
    Ok((all_bits >> right_len) << right_len)
}

/// Clear everything after the leading `len` bits of `addr`.
pub fn cut_addr(addr: Address, len: u8) -> Result<Address, Box<dyn Error>> {
    let mask = prefix_mask(addr.family(), len)?;
    Ok(Address::from_bits(addr.family(), addr.bits() & mask))
}

/// Network prefix: base address plus prefix length.
///
/// The base is always stored cut to its prefix, so two ranges covering the
/// same block compare and print the same.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct AddressRange {
    base: Address,
    prefix_len: u8,
    mask: u128,
}

impl AddressRange {
    /// Create a range from an address and prefix length.
    pub fn from_parts(addr: Address, prefix_len: u8) -> Result<AddressRange, Box<dyn Error>> {
        Ok(AddressRange {
            base: cut_addr(addr, prefix_len)?,
            prefix_len,
            mask: prefix_mask(addr.family(), prefix_len)?,
        })
    }

    /// Range matching exactly one address.
    pub fn host(addr: Address) -> AddressRange {
        let prefix_len = addr.family().host_prefix_len();
        AddressRange {
            base: addr,
            prefix_len,
            mask: u128::MAX >> (128 - prefix_len as u32),
        }
    }

    /// Create a range from CIDR text (e.g., "10.0.0.0/24" or "2001:db8::/32").
    pub fn new(addr_cidr: &str) -> Result<AddressRange, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let (addr, len) = addr_cidr
            .split_once('/')
            .ok_or_else(|| format!("Invalid address/mask {addr_cidr}"))?;
        let addr: IpAddr = addr
            .parse()
            .map_err(|e| format!("Invalid address {addr}: {e}"))?;
        if len.is_empty() || !len.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("Invalid network length {len}").into());
        }
        let len: u8 = len
            .parse()
            .map_err(|_| format!("Network length {len} is too long"))?;
        AddressRange::from_parts(Address::from(addr), len)
    }

    pub fn base(&self) -> Address {
        self.base
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub fn family(&self) -> Family {
        self.base.family()
    }

    /// True when `addr` is the same family and shares the leading
    /// `prefix_len` bits with the base.
    pub fn contains(&self, addr: &Address) -> bool {
        addr.family() == self.family() && addr.bits() & self.mask == self.base.bits()
    }
}

impl FromStr for AddressRange {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AddressRange::new(s)
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.prefix_len)
    }
}

impl Serialize for AddressRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AddressRange {
    fn deserialize<D>(deserializer: D) -> Result<AddressRange, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AddressRange::new(&s)
            .map_err(|e| de::Error::custom(format!("invalid CIDR format: {s} ({e})")))
    }
}
