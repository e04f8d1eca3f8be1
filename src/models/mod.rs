//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures:
//! - [`PrefixLength`] and [`Cidr`] - validated CIDR notation
//! - [`SubnetDescriptor`] - every derived property of a subnet
//! - [`NetworkClass`] - classful address label

mod class;
mod ipv4;
mod subnet;

// Re-export public types
pub use class::{is_private_octets, NetworkClass};
pub(crate) use ipv4::split_cidr;
pub use ipv4::{
    broadcast_addr, get_cidr_mask, network_addr, num_hosts, num_usable_hosts, octets,
    pack_octets, wildcard_mask, Cidr, PrefixLength, MAX_LENGTH,
};
pub use subnet::SubnetDescriptor;
