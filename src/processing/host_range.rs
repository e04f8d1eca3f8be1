//! First and last usable host of a subnet.

use serde::Serialize;
use std::net::Ipv4Addr;

/// Usable host range; both ends are `None` for /31 and /32.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostRange {
    pub first_host: Option<u32>,
    pub last_host: Option<u32>,
    pub has_usable_hosts: bool,
}

impl HostRange {
    pub fn first_addr(&self) -> Option<Ipv4Addr> {
        self.first_host.map(Ipv4Addr::from)
    }

    pub fn last_addr(&self) -> Option<Ipv4Addr> {
        self.last_host.map(Ipv4Addr::from)
    }
}

/// Compute the usable host range between network and broadcast.
///
/// A subnet of two addresses or fewer has no usable hosts.
pub fn compute_host_range(network: u32, broadcast: u32, total_hosts: u64) -> HostRange {
    if total_hosts <= 2 {
        return HostRange {
            first_host: None,
            last_host: None,
            has_usable_hosts: false,
        };
    }

    HostRange {
        first_host: network.checked_add(1),
        last_host: broadcast.checked_sub(1),
        has_usable_hosts: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_range_24() {
        let range = compute_host_range(0xC0A80100, 0xC0A801FF, 256);
        assert!(range.has_usable_hosts);
        assert_eq!(range.first_addr(), Some(Ipv4Addr::new(192, 168, 1, 1)));
        assert_eq!(range.last_addr(), Some(Ipv4Addr::new(192, 168, 1, 254)));
    }

    #[test]
    fn test_host_range_30() {
        let range = compute_host_range(0x0A000000, 0x0A000003, 4);
        assert_eq!(range.first_host, Some(0x0A000001));
        assert_eq!(range.last_host, Some(0x0A000002));
    }

    #[test]
    fn test_host_range_none() {
        for (network, broadcast, total) in [(0x0A000000, 0x0A000001, 2), (0x0A000000, 0x0A000000, 1)]
        {
            let range = compute_host_range(network, broadcast, total);
            assert!(!range.has_usable_hosts);
            assert_eq!(range.first_host, None);
            assert_eq!(range.last_host, None);
        }
    }

    #[test]
    fn test_host_range_whole_space() {
        let range = compute_host_range(0, u32::MAX, 1 << 32);
        assert_eq!(range.first_addr(), Some(Ipv4Addr::new(0, 0, 0, 1)));
        assert_eq!(range.last_addr(), Some(Ipv4Addr::new(255, 255, 255, 254)));
    }
}
