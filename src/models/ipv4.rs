//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`PrefixLength`] and [`Cidr`] along with the bitwise helpers used
//! to derive masks, network and broadcast addresses.

use crate::error::{
    CidrError, EmptyInputSnafu, InvalidAddressFormatSnafu, InvalidFormatSnafu,
    OctetOutOfRangeSnafu, PrefixOutOfRangeSnafu,
};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Number of leading 1-bits in a subnet mask, always within `0..=32`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PrefixLength(u8);

impl PrefixLength {
    /// Create a prefix length, rejecting anything above 32.
    ///
    /// # Examples
    /// ```
    /// use ipv4_subnet_calc::models::PrefixLength;
    /// assert_eq!(PrefixLength::new(24).unwrap().get(), 24);
    /// assert!(PrefixLength::new(33).is_err());
    /// ```
    pub fn new(len: u8) -> Result<PrefixLength, CidrError> {
        if len > MAX_LENGTH {
            return PrefixOutOfRangeSnafu {
                prefix: len.to_string(),
            }
            .fail();
        }
        Ok(PrefixLength(len))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Bits left for hosts, `32 - prefix`.
    pub fn host_bits(self) -> u8 {
        MAX_LENGTH - self.0
    }
}

impl TryFrom<u8> for PrefixLength {
    type Error = CidrError;

    fn try_from(len: u8) -> Result<Self, Self::Error> {
        PrefixLength::new(len)
    }
}

impl From<PrefixLength> for u8 {
    fn from(len: PrefixLength) -> u8 {
        len.0
    }
}

impl fmt::Display for PrefixLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// The shift runs on a u64 so that a /0 clears all 32 bits instead of
/// shifting a u32 by its own width.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::{get_cidr_mask, PrefixLength};
/// assert_eq!(get_cidr_mask(PrefixLength::new(24).unwrap()), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(PrefixLength::new(0).unwrap()), 0);
/// ```
pub fn get_cidr_mask(len: PrefixLength) -> u32 {
    let right_len = len.host_bits();
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    mask as u32
}

/// Complement of the subnet mask.
pub fn wildcard_mask(len: PrefixLength) -> u32 {
    !get_cidr_mask(len)
}

/// Get the network address for a given address and prefix length.
pub fn network_addr(addr: u32, len: PrefixLength) -> u32 {
    addr & get_cidr_mask(len)
}

/// Calculate the broadcast address for a given address and prefix length.
pub fn broadcast_addr(addr: u32, len: PrefixLength) -> u32 {
    network_addr(addr, len) | wildcard_mask(len)
}

/// Total number of addresses in a subnet, `2^(32 - len)`.
pub fn num_hosts(len: PrefixLength) -> u64 {
    1u64 << len.host_bits()
}

/// Addresses left after removing network and broadcast; zero for /31 and /32.
pub fn num_usable_hosts(len: PrefixLength) -> u64 {
    num_hosts(len).saturating_sub(2)
}

/// Pack four octets big-endian into a u32.
pub fn pack_octets(octets: [u8; 4]) -> u32 {
    ((octets[0] as u32) << 24)
        | ((octets[1] as u32) << 16)
        | ((octets[2] as u32) << 8)
        | octets[3] as u32
}

/// Split a u32 into its four octets, most significant first.
pub fn octets(addr: u32) -> [u8; 4] {
    [
        ((addr >> 24) & 0xFF) as u8,
        ((addr >> 16) & 0xFF) as u8,
        ((addr >> 8) & 0xFF) as u8,
        (addr & 0xFF) as u8,
    ]
}

/// Tokens of a validated `x.x.x.x/y` string.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct CidrParts<'a> {
    pub address: &'a str,
    pub octets: [u8; 4],
    pub prefix: PrefixLength,
}

/// Validate and split a CIDR string.
///
/// Checks run in order: slash split, prefix, address split, octets.
pub(crate) fn split_cidr(input: &str) -> Result<CidrParts<'_>, CidrError> {
    let input = input.trim();
    if input.is_empty() {
        return EmptyInputSnafu.fail();
    }

    let parts: Vec<&str> = input.split('/').collect();
    if parts.len() != 2 {
        return InvalidFormatSnafu { input }.fail();
    }
    let (address, prefix_str) = (parts[0].trim(), parts[1]);

    let prefix = match prefix_str.trim().parse::<i64>() {
        Ok(p) if (0..=MAX_LENGTH as i64).contains(&p) => PrefixLength(p as u8),
        _ => return PrefixOutOfRangeSnafu { prefix: prefix_str }.fail(),
    };

    let address_parts: Vec<&str> = address.split('.').collect();
    if address_parts.len() != 4 {
        return InvalidAddressFormatSnafu { address }.fail();
    }

    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(address_parts) {
        *octet = match part.trim().parse::<i64>() {
            Ok(b) if (0..=255).contains(&b) => b as u8,
            _ => return OctetOutOfRangeSnafu { octet: part }.fail(),
        };
    }

    Ok(CidrParts {
        address,
        octets,
        prefix,
    })
}

/// IPv4 address with a prefix length, written as `x.x.x.x/y`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cidr {
    /// The IPv4 address as entered (host bits are kept).
    pub addr: Ipv4Addr,
    /// The prefix length.
    pub prefix: PrefixLength,
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::new(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}

impl Cidr {
    /// Create a new [`Cidr`] from a string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Cidr, CidrError> {
        let parts = split_cidr(addr_cidr)?;
        Ok(Cidr {
            addr: Ipv4Addr::from(parts.octets),
            prefix: parts.prefix,
        })
    }

    /// Subnet mask for this prefix.
    pub fn mask(&self) -> u32 {
        get_cidr_mask(self.prefix)
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(network_addr(u32::from(self.addr), self.prefix))
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(broadcast_addr(u32::from(self.addr), self.prefix))
    }
}

impl FromStr for Cidr {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cidr::new(s)
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
