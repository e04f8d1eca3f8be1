//! CSV output formatting for subnet reports.

use super::report::SubnetReport;
use super::terminal::format_field;

/// Header row matching [`csv_row`].
pub fn csv_header() -> String {
    [
        format_field("cidr", 20),
        format_field("network", 17),
        format_field("broadcast", 17),
        format_field("first_host", 17),
        format_field("last_host", 17),
        format_field("subnet_mask", 17),
        format_field("wildcard_mask", 17),
        format_field("total_hosts", 12),
        format_field("usable_hosts", 12),
        format_field("class", 15),
        format_field("scope", 9),
    ]
    .join(",")
}

/// One quoted, right-aligned CSV row.
pub fn csv_row(report: &SubnetReport) -> String {
    let subnet = &report.subnet;
    format!(
        r#"{cidr},{network},{broadcast},{first},{last},{mask},{wildcard},{total},{usable},{class},{scope}"#,
        cidr = format_field(&report.cidr, 20),
        network = format_field(&report.network_address, 17),
        broadcast = format_field(&report.broadcast_address, 17),
        first = format_field(report.first_host.as_deref().unwrap_or("None"), 17),
        last = format_field(report.last_host.as_deref().unwrap_or("None"), 17),
        mask = format_field(&report.subnet_mask.decimal, 17),
        wildcard = format_field(&report.wildcard_mask.decimal, 17),
        total = format_field(subnet.total_hosts(), 12),
        usable = format_field(subnet.usable_hosts(), 12),
        class = format_field(subnet.network_class(), 15),
        scope = format_field(if subnet.is_private() { "private" } else { "public" }, 9),
    )
}
