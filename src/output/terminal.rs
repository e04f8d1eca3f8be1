//! Terminal output utilities.
//!
//! Provides the coloured text report and field formatting helpers.

use super::report::SubnetReport;
use colored::Colorize;
use std::fmt::Write;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

const LABEL_WIDTH: usize = 20;

fn push_line(out: &mut String, label: &str, value: impl std::fmt::Display) {
    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "  {label:<width$} {value}",
        label = format!("{label}:"),
        width = LABEL_WIDTH
    );
}

fn push_heading(out: &mut String, heading: &str) {
    let _ = writeln!(out, "{}", heading.bold().underline());
}

/// Render the full multi-section report for one subnet.
pub fn render_text(report: &SubnetReport) -> String {
    let subnet = &report.subnet;
    let mut out = String::new();

    let _ = writeln!(out, "{}", report.cidr.bold().cyan());

    push_heading(&mut out, "Subnet Information");
    push_line(&mut out, "Network Address", report.network_address.green());
    push_line(&mut out, "Broadcast Address", report.broadcast_address.green());
    push_line(&mut out, "Subnet Mask", &report.subnet_mask.decimal);
    push_line(&mut out, "Wildcard Mask", &report.wildcard_mask.decimal);
    push_line(&mut out, "Prefix Length", format!("/{}", subnet.prefix_length()));
    push_line(&mut out, "Host Bits", subnet.host_bits());

    push_heading(&mut out, "Host Information");
    push_line(&mut out, "Total Hosts", subnet.total_hosts());
    push_line(&mut out, "Usable Hosts", subnet.usable_hosts());
    match (&report.first_host, &report.last_host) {
        (Some(first), Some(last)) => {
            push_line(&mut out, "First Host", first.green());
            push_line(&mut out, "Last Host", last.green());
        }
        _ => push_line(&mut out, "Host Range", "No usable hosts".yellow()),
    }

    push_heading(&mut out, "Network Classification");
    push_line(&mut out, "Network Class", subnet.network_class());
    let scope = if subnet.is_private() {
        "Private".blue()
    } else {
        "Public".magenta()
    };
    push_line(&mut out, "Address Type", scope);

    push_heading(&mut out, "Binary Representation");
    push_line(&mut out, "IP Address", &report.binary.address);
    push_line(&mut out, "Network Address", &report.binary.network);
    push_line(&mut out, "Broadcast Address", &report.binary.broadcast);
    push_line(&mut out, "Subnet Mask", &report.binary.mask);
    push_line(&mut out, "Wildcard Mask", &report.binary.wildcard);
    push_line(&mut out, "Subnet Mask (hex)", &report.subnet_mask.hex);
    push_line(&mut out, "Wildcard Mask (hex)", &report.wildcard_mask.hex);

    out
}
