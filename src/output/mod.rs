//! Output formatting for subnet data.
//!
//! This module handles formatting and outputting subnet data:
//! - [`format`] - decimal, binary and hex renderings
//! - [`report`] - presentation view and JSON output
//! - [`csv`] - CSV output formatting
//! - [`terminal`] - Terminal output with colors

mod csv;
mod format;
mod report;
mod terminal;

pub use csv::{csv_header, csv_row};
pub use format::{
    compute_subnet_mask, compute_wildcard_mask, format_binary, format_binary_with, format_decimal,
    format_hex, MaskFormats, BINARY_GROUP_SEPARATOR,
};
pub use report::{to_json, BinaryForms, SubnetReport};
pub use terminal::{format_field, render_text};
