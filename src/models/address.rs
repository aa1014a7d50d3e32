//! Single IPv4 or IPv6 address.
//!
//! An [`Address`] is a family tag plus the address bits, so both families go
//! through the same prefix comparison.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Address family. IPv4 and IPv6 are never cross-matched.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Number of bits in an address of this family.
    pub fn bit_width(self) -> u8 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }

    /// Prefix length of a single-host range (`/32` or `/128`).
    pub fn host_prefix_len(self) -> u8 {
        self.bit_width()
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// IP address of either family.
///
/// `bits` is right aligned: an IPv4 address only uses the low 32 bits.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Address {
    family: Family,
    bits: u128,
}

impl Address {
    /// Parse an address from text, e.g. "10.0.0.7" or "2001:db8::1".
    pub fn new(addr: &str) -> Result<Address, Box<dyn Error>> {
        let ip: IpAddr = addr
            .trim()
            .parse()
            .map_err(|e| format!("Invalid address {addr}: {e}"))?;
        Ok(Address::from(ip))
    }

    pub(crate) fn from_bits(family: Family, bits: u128) -> Address {
        Address { family, bits }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn bits(&self) -> u128 {
        self.bits
    }

    pub fn to_ip_addr(&self) -> IpAddr {
        match self.family {
            Family::V4 => IpAddr::V4(Ipv4Addr::from(self.bits as u32)),
            Family::V6 => IpAddr::V6(Ipv6Addr::from(self.bits)),
        }
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => Address::from(v4),
            IpAddr::V6(v6) => Address::from(v6),
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Address {
            family: Family::V4,
            bits: u32::from(ip) as u128,
        }
    }
}

impl From<Ipv6Addr> for Address {
    fn from(ip: Ipv6Addr) -> Self {
        Address {
            family: Family::V6,
            bits: u128::from(ip),
        }
    }
}

impl FromStr for Address {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::new(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_ip_addr())
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::new(&s).map_err(|_| de::Error::custom(format!("invalid IP address: {s}")))
    }
}
