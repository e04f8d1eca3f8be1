//! Subnet calculation logic.
//!
//! - [`parse`] - CIDR parsing and validation
//! - [`host_range`] - usable host range

mod host_range;
mod parse;

// Re-export public functions
pub use host_range::{compute_host_range, HostRange};
pub use parse::{parse_cidr, validate_cidr, Validation};
