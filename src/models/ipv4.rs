//! Dotted-quad IPv4 codec.
//!
//! Converts between the textual `a.b.c.d` form and the packed `u32` used by
//! the calculator, and checks that a subnet mask is a valid CIDR prefix.

use super::ValidationError;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serializer;
use std::error::Error;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Number of octets in a dotted-quad.
const OCTETS: usize = 4;

lazy_static! {
    static ref DIGITS: Regex = Regex::new(r"^[0-9]+$").expect("Invalid Regex?");
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_inspect::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Parse `a.b.c.d` into a u32, first octet most significant.
///
/// Each segment must be plain decimal digits (no sign, no whitespace) with a
/// value in 0-255.
///
/// # Examples
/// ```
/// use subnet_inspect::models::parse_dotted_quad;
/// assert_eq!(parse_dotted_quad("192.168.1.10").unwrap(), 0xC0A8010A);
/// ```
pub fn parse_dotted_quad(text: &str) -> Result<u32, ValidationError> {
    let segments: Vec<&str> = text.split('.').collect();
    if segments.len() != OCTETS {
        return Err(ValidationError::InvalidOctetCount {
            found: segments.len(),
        });
    }

    let mut addr: u32 = 0;
    for segment in segments {
        let octet = parse_octet(segment)?;
        addr = (addr << 8) | u32::from(octet);
    }
    log::trace!("parse_dotted_quad({text}) = {addr:#010x}");
    Ok(addr)
}

fn parse_octet(segment: &str) -> Result<u8, ValidationError> {
    let invalid = || ValidationError::InvalidOctetValue {
        segment: segment.to_string(),
    };
    if !DIGITS.is_match(segment) {
        return Err(invalid());
    }
    // Digits only, so the sole failure left is overflow past 255.
    segment.parse::<u8>().map_err(|_| invalid())
}

/// Format a u32 as `a.b.c.d`, most significant octet first.
pub fn format_dotted_quad(addr: u32) -> String {
    addr.to_be_bytes().iter().join(".")
}

/// True if `mask` is a run of 1-bits followed only by 0-bits.
///
/// Both `0.0.0.0` (/0) and `255.255.255.255` (/32) are valid.
pub fn validate_mask(mask: u32) -> bool {
    mask.leading_ones() + mask.trailing_zeros() == u32::from(MAX_LENGTH)
}

/// Parse a dotted-quad and require it to be a contiguous subnet mask.
pub fn parse_mask(text: &str) -> Result<u32, ValidationError> {
    let mask = parse_dotted_quad(text)?;
    if !validate_mask(mask) {
        log::debug!("mask {text} ({mask:032b}) is not contiguous");
        return Err(ValidationError::InvalidMaskContiguity {
            mask: text.to_string(),
        });
    }
    Ok(mask)
}

/// Serde helper writing a packed address as its dotted-quad string.
pub fn serialize_dotted_quad<S>(addr: &u32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_dotted_quad(*addr))
}
