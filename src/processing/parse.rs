//! CIDR parsing and validation.

use crate::error::CidrError;
use crate::models::{split_cidr, SubnetDescriptor};
use serde::Serialize;

/// Parse `x.x.x.x/y` into a [`SubnetDescriptor`].
///
/// Surrounding whitespace is ignored. Either every property is derived or an
/// error is returned, never a partial result.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::parse_cidr;
/// let subnet = parse_cidr("192.168.1.0/24").unwrap();
/// assert_eq!(subnet.usable_hosts(), 254);
/// ```
pub fn parse_cidr(input: &str) -> Result<SubnetDescriptor, CidrError> {
    let parts = split_cidr(input).map_err(|e| {
        log::debug!("parse_cidr({input:?}) rejected: {e}");
        e
    })?;
    let subnet = SubnetDescriptor::new(parts.address, parts.octets, parts.prefix);
    log::trace!("parse_cidr({input:?}) => {subnet:?}");
    Ok(subnet)
}

/// Outcome of [`validate_cidr`].
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    /// Error message when `valid` is false.
    pub error: Option<String>,
}

/// Check a CIDR string without propagating the error.
pub fn validate_cidr(input: &str) -> Validation {
    match parse_cidr(input) {
        Ok(_) => Validation {
            valid: true,
            error: None,
        },
        Err(e) => Validation {
            valid: false,
            error: Some(e.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::models::NetworkClass;

    #[test]
    fn test_parse_cidr_24() {
        let s = parse_cidr("192.168.1.0/24").unwrap();
        assert_eq!(s.network_addr().to_string(), "192.168.1.0");
        assert_eq!(s.broadcast_addr().to_string(), "192.168.1.255");
        assert_eq!(s.mask(), 0xFFFFFF00);
        assert_eq!(s.wildcard(), 0x000000FF);
        assert_eq!(s.total_hosts(), 256);
        assert_eq!(s.usable_hosts(), 254);
        assert_eq!(s.network_class(), NetworkClass::C);
        assert!(s.is_private());
    }

    #[test]
    fn test_parse_cidr_8() {
        let s = parse_cidr("10.0.0.0/8").unwrap();
        assert_eq!(s.network_addr().to_string(), "10.0.0.0");
        assert_eq!(s.broadcast_addr().to_string(), "10.255.255.255");
        assert_eq!(s.total_hosts(), 16777216);
        assert_eq!(s.network_class(), NetworkClass::A);
        assert!(s.is_private());
    }

    #[test]
    fn test_parse_cidr_public() {
        let s = parse_cidr("8.8.8.0/24").unwrap();
        assert_eq!(s.network_class(), NetworkClass::A);
        assert!(!s.is_private());
        assert!(s.is_public());
    }

    #[test]
    fn test_parse_cidr_boundaries() {
        let s = parse_cidr("1.2.3.4/0").unwrap();
        assert_eq!(s.mask(), 0);
        assert_eq!(s.network(), 0);
        assert_eq!(s.broadcast(), u32::MAX);
        assert_eq!(s.total_hosts(), 4294967296);
        assert_eq!(s.usable_hosts(), 4294967294);

        let s = parse_cidr("1.2.3.4/32").unwrap();
        assert_eq!(s.mask(), u32::MAX);
        assert_eq!(s.network(), s.address());
        assert_eq!(s.broadcast(), s.address());
        assert_eq!(s.total_hosts(), 1);
        assert_eq!(s.usable_hosts(), 0);

        let s = parse_cidr("1.2.3.4/31").unwrap();
        assert_eq!(s.total_hosts(), 2);
        assert_eq!(s.usable_hosts(), 0);
    }

    #[test]
    fn test_parse_cidr_keeps_address_text() {
        let s = parse_cidr(" 192.168.001.010/24\n").unwrap();
        assert_eq!(s.ip_address(), "192.168.001.010");
        assert_eq!(s.address(), 0xC0A8010A);
    }

    #[test]
    fn test_parse_cidr_trims_address_text() {
        let s = parse_cidr("192.168.1.0 /24").unwrap();
        assert_eq!(s.ip_address(), "192.168.1.0");
        assert_eq!(s.to_string(), "192.168.1.0/24");
    }

    #[test]
    fn test_parse_cidr_errors() {
        let e = parse_cidr("300.1.1.1/24").unwrap_err();
        assert_eq!(e.kind(), ErrorKind::Range);
        assert_eq!(e.to_string(), "Invalid IP address: each octet must be 0-255");

        let e = parse_cidr("1.1.1.1/33").unwrap_err();
        assert_eq!(e.kind(), ErrorKind::Range);
        assert_eq!(e.to_string(), "Prefix length must be between 0 and 32");

        let e = parse_cidr("1.1.1.1").unwrap_err();
        assert_eq!(e.kind(), ErrorKind::Format);

        let e = parse_cidr("").unwrap_err();
        assert_eq!(e, CidrError::EmptyInput);
    }

    #[test]
    fn test_parse_cidr_idempotent() {
        assert_eq!(
            parse_cidr("172.20.14.9/20").unwrap(),
            parse_cidr("172.20.14.9/20").unwrap()
        );
    }

    #[test]
    fn test_validate_cidr() {
        assert_eq!(
            validate_cidr("10.0.0.0/8"),
            Validation {
                valid: true,
                error: None
            }
        );
        let v = validate_cidr("1.1.1.1/33");
        assert!(!v.valid);
        assert_eq!(
            v.error.as_deref(),
            Some("Prefix length must be between 0 and 32")
        );
        let v = validate_cidr("garbage");
        assert!(!v.valid);
        assert_eq!(
            v.error.as_deref(),
            Some("Invalid CIDR format. Expected format: x.x.x.x/y")
        );
    }
}
