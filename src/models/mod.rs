//! Domain models for subnet inspection.
//!
//! This module contains the core data structures and the dotted-quad codec:
//! - [`ipv4`] - parsing, formatting and mask validation
//! - [`NetworkInfo`] and [`AddressClass`] - derived network facts
//! - [`ValidationError`] and [`AnalyzeError`] - why input was rejected

mod error;
mod ipv4;
mod network_info;

// Re-export public types
pub use error::{AnalyzeError, ValidationError};
pub use ipv4::{
    format_dotted_quad, get_cidr_mask, parse_dotted_quad, parse_mask, serialize_dotted_quad,
    validate_mask, MAX_LENGTH,
};
pub use network_info::{AddressClass, NetworkInfo};
