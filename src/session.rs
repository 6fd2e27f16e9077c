//! Interactive prompting.
//!
//! Reads the address and mask from any `BufRead`, re-prompting until each is
//! valid, then prints and saves the results.

use crate::config::Config;
use crate::models::{parse_dotted_quad, parse_mask, NetworkInfo, ValidationError};
use crate::output::{print_banner, print_results, write_report};
use crate::processing::calculate;
use colored::Colorize;
use std::error::Error;
use std::io::{BufRead, Write};

const ADDRESS_PROMPT: &str = "Enter IP address (x.x.x.x): ";
const MASK_PROMPT: &str = "Enter Subnet Mask (x.x.x.x): ";

/// Prompt once and return the trimmed line, or an error at end of input.
fn read_trimmed<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, Box<dyn Error>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err("Input closed before a valid value was entered".into());
    }
    Ok(line.trim().to_string())
}

/// Ask repeatedly until `parse` accepts the line.
fn prompt_until_valid<R, W, F>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    what: &str,
    parse: F,
) -> Result<u32, Box<dyn Error>>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<u32, ValidationError>,
{
    loop {
        let text = read_trimmed(input, output, prompt)?;
        match parse(&text) {
            Ok(value) => return Ok(value),
            Err(e) => {
                log::warn!("Rejected {what} '{text}': {e}");
                writeln!(output, "{}: Invalid {what}: {e}", "Error".red())?;
            }
        }
    }
}

/// Read a valid IPv4 address.
pub fn prompt_address<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<u32, Box<dyn Error>> {
    prompt_until_valid(input, output, ADDRESS_PROMPT, "IP address", parse_dotted_quad)
}

/// Read a valid, contiguous subnet mask.
pub fn prompt_mask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<u32, Box<dyn Error>> {
    prompt_until_valid(input, output, MASK_PROMPT, "subnet mask", parse_mask)
}

/// Run one full session: banner, prompts, results and optional report file.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &Config,
) -> Result<NetworkInfo, Box<dyn Error>> {
    log::info!("#Start run_session()");
    print_banner(output)?;
    writeln!(output)?;

    let address = prompt_address(input, output)?;
    let mask = prompt_mask(input, output)?;
    let info = calculate(address, mask);

    if config.write_report {
        let path = write_report(&info, config)?;
        writeln!(output)?;
        writeln!(output, "Output file generated: {}", path.display())?;
    }
    print_results(output, &info)?;

    log::info!("#End run_session() {}", info.classification());
    Ok(info)
}
