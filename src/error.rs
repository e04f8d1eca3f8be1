//! Errors raised while parsing CIDR input.

use snafu::Snafu;

/// Broad category of a [`CidrError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Structurally malformed input (wrong segment count, empty input).
    Format,
    /// A numeric token outside its allowed bounds.
    Range,
}

/// Error returned by [`crate::parse_cidr`] and the [`crate::models`] constructors.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CidrError {
    #[snafu(display("Invalid CIDR input"))]
    EmptyInput,

    #[snafu(display("Invalid CIDR format. Expected format: x.x.x.x/y"))]
    InvalidFormat { input: String },

    #[snafu(display("Invalid IP address format. Expected format: x.x.x.x/y"))]
    InvalidAddressFormat { address: String },

    #[snafu(display("Prefix length must be between 0 and 32"))]
    PrefixOutOfRange { prefix: String },

    #[snafu(display("Invalid IP address: each octet must be 0-255"))]
    OctetOutOfRange { octet: String },
}

impl CidrError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CidrError::EmptyInput
            | CidrError::InvalidFormat { .. }
            | CidrError::InvalidAddressFormat { .. } => ErrorKind::Format,
            CidrError::PrefixOutOfRange { .. } | CidrError::OctetOutOfRange { .. } => {
                ErrorKind::Range
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind() {
        assert_eq!(CidrError::EmptyInput.kind(), ErrorKind::Format);
        assert_eq!(
            CidrError::InvalidFormat {
                input: "1.1.1.1".to_string()
            }
            .kind(),
            ErrorKind::Format
        );
        assert_eq!(
            CidrError::PrefixOutOfRange {
                prefix: "33".to_string()
            }
            .kind(),
            ErrorKind::Range
        );
        assert_eq!(
            CidrError::OctetOutOfRange {
                octet: "300".to_string()
            }
            .kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(CidrError::EmptyInput.to_string(), "Invalid CIDR input");
        assert_eq!(
            CidrError::PrefixOutOfRange {
                prefix: "-1".to_string()
            }
            .to_string(),
            "Prefix length must be between 0 and 32"
        );
        assert_eq!(
            CidrError::OctetOutOfRange {
                octet: "256".to_string()
            }
            .to_string(),
            "Invalid IP address: each octet must be 0-255"
        );
    }
}
