//! Output formatting for analysis results.
//!
//! - [`terminal`] - result lines and coloured console output
//! - [`report`] - the saved report file

mod report;
mod terminal;

pub use report::{render_report, report_file_name, write_report};
pub use terminal::{format_field, print_banner, print_results, report_lines};
