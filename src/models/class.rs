//! Classful network labels and private range detection.
//!
//! The two checks are independent: 127.0.0.0/8 has no class but is private,
//! and octet 0 has no class either.

use serde::{Serialize, Serializer};
use std::fmt;

/// Historic address class derived from the first octet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NetworkClass {
    A,
    B,
    C,
    /// Multicast, 224-239.
    D,
    /// Reserved, 240-255.
    E,
    /// First octet 0 or 127.
    Unknown,
}

impl NetworkClass {
    pub fn from_first_octet(first_octet: u8) -> NetworkClass {
        match first_octet {
            1..=126 => NetworkClass::A,
            128..=191 => NetworkClass::B,
            192..=223 => NetworkClass::C,
            224..=239 => NetworkClass::D,
            240..=255 => NetworkClass::E,
            _ => NetworkClass::Unknown,
        }
    }

    /// Display label, e.g. `"D (Multicast)"`.
    pub fn label(&self) -> &'static str {
        match self {
            NetworkClass::A => "A",
            NetworkClass::B => "B",
            NetworkClass::C => "C",
            NetworkClass::D => "D (Multicast)",
            NetworkClass::E => "E (Reserved)",
            NetworkClass::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for NetworkClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for NetworkClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

/// True for RFC 1918 ranges plus loopback and link-local.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::is_private_octets;
/// assert!(is_private_octets([172, 31, 0, 1]));
/// assert!(!is_private_octets([172, 32, 0, 1]));
/// ```
pub fn is_private_octets(octets: [u8; 4]) -> bool {
    matches!(
        octets,
        [10, ..] | [172, 16..=31, ..] | [192, 168, ..] | [127, ..] | [169, 254, ..]
    )
}
