//! Validation errors for dotted-quad input.

use thiserror::Error;

/// Why a dotted-quad string (address or mask) was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("expected 4 octets separated by '.', found {found}")]
    InvalidOctetCount { found: usize },

    #[error("octet '{segment}' is not a decimal number in 0-255")]
    InvalidOctetValue { segment: String },

    #[error("mask {mask} is not contiguous 1s followed by 0s in binary")]
    InvalidMaskContiguity { mask: String },
}

/// Which input of an address/mask pair failed, and why.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("invalid IP address: {0}")]
    Address(#[source] ValidationError),

    #[error("invalid subnet mask: {0}")]
    Mask(#[source] ValidationError),
}

impl AnalyzeError {
    /// The underlying validation failure.
    pub fn reason(&self) -> &ValidationError {
        match self {
            AnalyzeError::Address(e) | AnalyzeError::Mask(e) => e,
        }
    }
}
