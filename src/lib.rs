//! Inspect an IPv4 address and subnet mask: network and broadcast addresses,
//! usable hosts, CIDR prefix and classful/classless status.

pub mod config;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod session;

use models::{parse_dotted_quad, parse_mask, AnalyzeError, NetworkInfo};

/// Validate the address, then the mask, then derive the [`NetworkInfo`].
///
/// # Examples
/// ```
/// let info = subnet_inspect::analyze("192.168.1.10", "255.255.255.0").unwrap();
/// assert_eq!(info.prefix_length, 24);
/// assert_eq!(info.usable_hosts, 254);
/// ```
pub fn analyze(address_text: &str, mask_text: &str) -> Result<NetworkInfo, AnalyzeError> {
    let address = parse_dotted_quad(address_text).map_err(AnalyzeError::Address)?;
    let mask = parse_mask(mask_text).map_err(AnalyzeError::Mask)?;
    Ok(processing::calculate(address, mask))
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::ValidationError;

    #[test]
    fn test_analyze_reports_which_input() {
        assert!(matches!(
            analyze("256.1.1.1", "255.0.0.0"),
            Err(AnalyzeError::Address(ValidationError::InvalidOctetValue { .. }))
        ));
        assert!(matches!(
            analyze("10.0.0.1", "255.0.255.0"),
            Err(AnalyzeError::Mask(ValidationError::InvalidMaskContiguity { .. }))
        ));
        assert!(matches!(
            analyze("10.0.0.1", "255.0.0"),
            Err(AnalyzeError::Mask(ValidationError::InvalidOctetCount { found: 3 }))
        ));
    }
}
