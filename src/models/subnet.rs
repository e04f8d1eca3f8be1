//! Subnet descriptor model.

use super::class::{is_private_octets, NetworkClass};
use super::ipv4::{
    broadcast_addr, get_cidr_mask, network_addr, num_hosts, num_usable_hosts, pack_octets,
    wildcard_mask, Cidr, PrefixLength,
};
use crate::output::{compute_subnet_mask, compute_wildcard_mask, MaskFormats};
use crate::processing::{compute_host_range, HostRange};
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Every derived property of one `address/prefix` input.
///
/// Built once from validated parts and never mutated afterwards.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetDescriptor {
    /// Address text as entered, without the prefix.
    ip_address: String,
    prefix_length: PrefixLength,
    address: u32,
    mask: u32,
    network: u32,
    broadcast: u32,
    wildcard: u32,
    host_bits: u8,
    total_hosts: u64,
    usable_hosts: u64,
    network_class: NetworkClass,
    is_private: bool,
    is_public: bool,
}

impl SubnetDescriptor {
    /// Derive all subnet properties from already validated parts.
    ///
    /// `ip_address` must be the text the octets were parsed from.
    pub(crate) fn new(
        ip_address: &str,
        octets: [u8; 4],
        prefix_length: PrefixLength,
    ) -> SubnetDescriptor {
        let address = pack_octets(octets);
        let is_private = is_private_octets(octets);
        SubnetDescriptor {
            ip_address: ip_address.to_string(),
            prefix_length,
            address,
            mask: get_cidr_mask(prefix_length),
            network: network_addr(address, prefix_length),
            broadcast: broadcast_addr(address, prefix_length),
            wildcard: wildcard_mask(prefix_length),
            host_bits: prefix_length.host_bits(),
            total_hosts: num_hosts(prefix_length),
            usable_hosts: num_usable_hosts(prefix_length),
            network_class: NetworkClass::from_first_octet(octets[0]),
            is_private,
            is_public: !is_private,
        }
    }

    pub fn ip_address(&self) -> &str {
        &self.ip_address
    }

    pub fn prefix_length(&self) -> PrefixLength {
        self.prefix_length
    }

    pub fn address(&self) -> u32 {
        self.address
    }

    pub fn mask(&self) -> u32 {
        self.mask
    }

    pub fn network(&self) -> u32 {
        self.network
    }

    pub fn broadcast(&self) -> u32 {
        self.broadcast
    }

    pub fn wildcard(&self) -> u32 {
        self.wildcard
    }

    pub fn host_bits(&self) -> u8 {
        self.host_bits
    }

    pub fn total_hosts(&self) -> u64 {
        self.total_hosts
    }

    pub fn usable_hosts(&self) -> u64 {
        self.usable_hosts
    }

    pub fn network_class(&self) -> NetworkClass {
        self.network_class
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }

    pub fn is_public(&self) -> bool {
        self.is_public
    }

    /// The input as a [`Cidr`], host bits preserved.
    pub fn cidr(&self) -> Cidr {
        Cidr {
            addr: Ipv4Addr::from(self.address),
            prefix: self.prefix_length,
        }
    }

    pub fn network_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.network)
    }

    pub fn broadcast_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.broadcast)
    }

    pub fn host_range(&self) -> HostRange {
        compute_host_range(self.network, self.broadcast, self.total_hosts)
    }

    pub fn subnet_mask(&self) -> MaskFormats {
        compute_subnet_mask(self.prefix_length)
    }

    pub fn wildcard_mask(&self) -> MaskFormats {
        compute_wildcard_mask(self.prefix_length)
    }
}

impl From<Cidr> for SubnetDescriptor {
    fn from(cidr: Cidr) -> Self {
        SubnetDescriptor::new(&cidr.addr.to_string(), cidr.addr.octets(), cidr.prefix)
    }
}

impl fmt::Display for SubnetDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.ip_address, self.prefix_length)
    }
}
