//! Terminal output utilities.
//!
//! Provides the human-readable result lines and coloured console output.

use crate::models::{format_dotted_quad, NetworkInfo};
use colored::Colorize;
use std::io::{self, Write};

/// Width of the label column, including the trailing colon.
const LABEL_WIDTH: usize = 20;

/// Format a label and value as one left-aligned `Label: value` line.
///
/// # Arguments
/// * `label` - The field name, without colon
/// * `value` - The value to print after the label
pub fn format_field<T: ToString>(label: &str, value: T) -> String {
    let label = format!("{label}:");
    format!("{label:<LABEL_WIDTH$} {}", value.to_string())
}

/// The seven result lines, in the order they are printed and saved.
pub fn report_lines(info: &NetworkInfo) -> Vec<String> {
    vec![
        format_field("IP Address", format_dotted_quad(info.address)),
        format_field("Subnet Mask", format_dotted_quad(info.mask)),
        format_field("Classful/Classless", info.classification()),
        format_field("Network Address", format_dotted_quad(info.network_address)),
        format_field("Broadcast Address", format_dotted_quad(info.broadcast_address)),
        format_field("Number of Hosts", info.usable_hosts),
        format_field("CIDR Mask", format!("/{}", info.prefix_length)),
    ]
}

/// Print the program banner.
pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    let rule = "=".repeat(50);
    writeln!(out, "{rule}")?;
    writeln!(out, "{}", "Network Investigation Tool".bold())?;
    writeln!(out, "{rule}")?;
    writeln!(out)
}

/// Print the analysis results under a heading.
pub fn print_results<W: Write>(out: &mut W, info: &NetworkInfo) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=== Network Analysis Results ===".green())?;
    for line in report_lines(info) {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{}", "=".repeat(32))
}
