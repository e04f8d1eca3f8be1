//! Presentation view of a parsed subnet.

use super::format::{format_binary_with, format_decimal, MaskFormats};
use crate::models::SubnetDescriptor;
use serde::Serialize;

/// Binary renderings shown in the "Binary Representation" section.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BinaryForms {
    pub address: String,
    pub network: String,
    pub broadcast: String,
    pub mask: String,
    pub wildcard: String,
}

/// A [`SubnetDescriptor`] together with every formatted string a front end shows.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetReport {
    pub cidr: String,
    #[serde(flatten)]
    pub subnet: SubnetDescriptor,
    pub network_address: String,
    pub broadcast_address: String,
    pub subnet_mask: MaskFormats,
    pub wildcard_mask: MaskFormats,
    pub first_host: Option<String>,
    pub last_host: Option<String>,
    pub binary: BinaryForms,
}

impl SubnetReport {
    /// Build the report, grouping binary octets with `separator`.
    pub fn new(subnet: &SubnetDescriptor, separator: &str) -> SubnetReport {
        let range = subnet.host_range();
        SubnetReport {
            cidr: subnet.to_string(),
            network_address: format_decimal(subnet.network()),
            broadcast_address: format_decimal(subnet.broadcast()),
            subnet_mask: subnet.subnet_mask(),
            wildcard_mask: subnet.wildcard_mask(),
            first_host: range.first_host.map(format_decimal),
            last_host: range.last_host.map(format_decimal),
            binary: BinaryForms {
                address: format_binary_with(subnet.address(), separator),
                network: format_binary_with(subnet.network(), separator),
                broadcast: format_binary_with(subnet.broadcast(), separator),
                mask: format_binary_with(subnet.mask(), separator),
                wildcard: format_binary_with(subnet.wildcard(), separator),
            },
            subnet: subnet.clone(),
        }
    }
}

/// Pretty-printed JSON array of reports.
pub fn to_json(reports: &[SubnetReport]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(reports)
}
