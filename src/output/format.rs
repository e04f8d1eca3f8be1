//! Decimal, binary and hexadecimal renderings of 32-bit addresses.

use crate::models::{get_cidr_mask, octets, wildcard_mask, PrefixLength};
use itertools::Itertools;
use serde::Serialize;

/// Separator placed between octets of grouped binary output.
pub const BINARY_GROUP_SEPARATOR: &str = ".";

/// Dotted decimal, most significant octet first.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::output::format_decimal;
/// assert_eq!(format_decimal(0xC0A80101), "192.168.1.1");
/// ```
pub fn format_decimal(addr: u32) -> String {
    octets(addr).iter().join(".")
}

/// 32 zero-padded bits, split into octets with `.` when `grouped`.
pub fn format_binary(addr: u32, grouped: bool) -> String {
    if grouped {
        format_binary_with(addr, BINARY_GROUP_SEPARATOR)
    } else {
        format!("{addr:032b}")
    }
}

/// 32 zero-padded bits, one 8-bit group per octet joined by `separator`.
pub fn format_binary_with(addr: u32, separator: &str) -> String {
    octets(addr)
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .join(separator)
}

/// Uppercase hex with a `0x` prefix and no padding.
pub fn format_hex(addr: u32) -> String {
    format!("0x{addr:X}")
}

/// One mask rendered three ways.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MaskFormats {
    pub decimal: String,
    pub binary: String,
    pub hex: String,
}

impl MaskFormats {
    fn from_bits(bits: u32) -> MaskFormats {
        MaskFormats {
            decimal: format_decimal(bits),
            binary: format_binary(bits, true),
            hex: format_hex(bits),
        }
    }
}

pub fn compute_subnet_mask(len: PrefixLength) -> MaskFormats {
    MaskFormats::from_bits(get_cidr_mask(len))
}

pub fn compute_wildcard_mask(len: PrefixLength) -> MaskFormats {
    MaskFormats::from_bits(wildcard_mask(len))
}
