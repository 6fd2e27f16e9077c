//! Runtime settings, read from the environment (and `.env` via dotenv).

use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_STUDENT_ID: &str = "123456789";
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// File format of the saved report.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format '{other}', use text or json")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Appended to the report file name.
    pub student_id: String,
    pub output_dir: PathBuf,
    pub report_format: ReportFormat,
    /// Skip writing the report file when false.
    pub write_report: bool,
    pub log_config: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            student_id: DEFAULT_STUDENT_ID.to_string(),
            output_dir: PathBuf::from("."),
            report_format: ReportFormat::Text,
            write_report: true,
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read `SUBNET_*` variables.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, falling back to defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(id) = lookup("SUBNET_STUDENT_ID") {
            let id = id.trim();
            if id.is_empty() || id.contains(['/', '\\']) {
                return Err(format!("SUBNET_STUDENT_ID '{id}' is not usable in a file name").into());
            }
            config.student_id = id.to_string();
        }
        if let Some(dir) = lookup("SUBNET_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(format) = lookup("SUBNET_REPORT_FORMAT") {
            config.report_format = format
                .parse()
                .map_err(|e| format!("SUBNET_REPORT_FORMAT: {e}"))?;
        }
        if let Some(write) = lookup("SUBNET_WRITE_REPORT") {
            config.write_report = write
                .trim()
                .parse()
                .map_err(|e| format!("SUBNET_WRITE_REPORT '{write}': {e}"))?;
        }
        if let Some(path) = lookup("SUBNET_LOG_CONFIG") {
            config.log_config = PathBuf::from(path);
        }

        log::debug!("config = {config:?}");
        Ok(config)
    }
}
