//! Report file output.
//!
//! Saves the analysis next to the console output so it can be handed in.

use super::terminal::report_lines;
use crate::config::{Config, ReportFormat};
use crate::models::{format_dotted_quad, NetworkInfo};
use std::error::Error;
use std::path::PathBuf;

/// `subnet_info_<address>_<student id>.<ext>`
pub fn report_file_name(info: &NetworkInfo, config: &Config) -> String {
    format!(
        "subnet_info_{addr}_{id}.{ext}",
        addr = format_dotted_quad(info.address),
        id = config.student_id,
        ext = config.report_format.extension()
    )
}

/// Render the report body in the configured format.
pub fn render_report(info: &NetworkInfo, format: ReportFormat) -> Result<String, Box<dyn Error>> {
    let body = match format {
        ReportFormat::Text => report_lines(info)
            .into_iter()
            .map(|line| line + "\n")
            .collect(),
        ReportFormat::Json => {
            serde_json::to_string_pretty(info).map_err(|e| format!("Error serializing JSON: {e}"))?
        }
    };
    Ok(body)
}

/// Write the report into `config.output_dir` and return its path.
pub fn write_report(info: &NetworkInfo, config: &Config) -> Result<PathBuf, Box<dyn Error>> {
    let path = config.output_dir.join(report_file_name(info, config));
    let body = render_report(info, config.report_format)?;

    log::info!("Writing report to {}", path.display());
    std::fs::write(&path, body)
        .map_err(|e| format!("Error writing report file {}: {e}", path.display()))?;
    Ok(path)
}
