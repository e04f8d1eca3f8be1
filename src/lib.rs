//! IPv4 subnet calculator.
//!
//! Parses CIDR notation such as `192.168.1.0/24` into a [`SubnetDescriptor`]
//! and renders its masks, host range and classification.
//!
//! ```
//! use ipv4_subnet_calc::{format_decimal, parse_cidr};
//!
//! let subnet = parse_cidr("10.0.0.0/8").unwrap();
//! assert_eq!(format_decimal(subnet.broadcast()), "10.255.255.255");
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use config::{OutputFormat, Settings};
use serde::Serialize;
use std::error::Error;
use std::io::{BufRead, Write};

pub use error::{CidrError, ErrorKind};
pub use models::{Cidr, NetworkClass, PrefixLength, SubnetDescriptor};
pub use output::{
    compute_subnet_mask, compute_wildcard_mask, format_binary, format_decimal, format_hex,
    MaskFormats, SubnetReport,
};
pub use processing::{compute_host_range, parse_cidr, validate_cidr, HostRange, Validation};

/// Validation outcome for one input line.
#[derive(Serialize, Debug)]
struct ValidationRow<'a> {
    input: &'a str,
    #[serde(flatten)]
    validation: Validation,
}

/// Read one input per line, skipping blank lines.
///
/// Lines that are not valid UTF-8 are kept with replacement characters so
/// they fail parsing and get reported like any other bad input.
pub fn read_inputs<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut inputs = Vec::new();
    for (i, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        let text = String::from_utf8_lossy(&line);
        if let std::borrow::Cow::Owned(_) = text {
            log::warn!("Input line {} is not valid UTF-8", i + 1);
        }
        let text = text.trim();
        if !text.is_empty() {
            inputs.push(text.to_string());
        }
    }
    Ok(inputs)
}

/// Calculate every input and write reports in the configured format.
///
/// Reports go to `out`, per-input errors to `err`. Processing continues past
/// bad inputs.
///
/// # Returns
/// * `Ok(usize)` - number of inputs that failed to parse
/// * `Err` - if writing or serialization fails
pub fn calculate<W: Write, E: Write>(
    inputs: &[String],
    settings: &Settings,
    out: &mut W,
    err: &mut E,
) -> Result<usize, Box<dyn Error>> {
    log::info!("#Start calculate() inputs={}", inputs.len());
    let mut failed = 0;
    let mut reports = Vec::new();

    if settings.format == OutputFormat::Csv {
        writeln!(out, "{}", output::csv_header())?;
    }

    for input in inputs {
        let subnet = match parse_cidr(input) {
            Ok(subnet) => subnet,
            Err(e) => {
                log::warn!("Skipping {input:?}: {e}");
                writeln!(err, "{input}: {e}")?;
                failed += 1;
                continue;
            }
        };
        let report = SubnetReport::new(&subnet, &settings.binary_separator);
        match settings.format {
            OutputFormat::Text => writeln!(out, "{}", output::render_text(&report))?,
            OutputFormat::Csv => writeln!(out, "{}", output::csv_row(&report))?,
            OutputFormat::Json => reports.push(report),
        }
    }

    if settings.format == OutputFormat::Json {
        writeln!(out, "{}", output::to_json(&reports)?)?;
    }

    log::info!("# Done calculate() ok={} failed={failed}", inputs.len() - failed);
    Ok(failed)
}

/// Validate every input without calculating, one result per input.
///
/// # Returns
/// * `Ok(usize)` - number of invalid inputs
pub fn validate_all<W: Write>(
    inputs: &[String],
    settings: &Settings,
    out: &mut W,
) -> Result<usize, Box<dyn Error>> {
    let rows: Vec<ValidationRow> = inputs
        .iter()
        .map(|input| ValidationRow {
            input,
            validation: validate_cidr(input),
        })
        .collect();

    match settings.format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?,
        OutputFormat::Csv => {
            writeln!(
                out,
                "{},{},{}",
                output::format_field("input", 20),
                output::format_field("valid", 7),
                output::format_field("error", 46)
            )?;
            for row in &rows {
                writeln!(
                    out,
                    "{},{},{}",
                    output::format_field(row.input, 20),
                    output::format_field(row.validation.valid, 7),
                    output::format_field(row.validation.error.as_deref().unwrap_or(""), 46)
                )?;
            }
        }
        OutputFormat::Text => {
            for row in &rows {
                match &row.validation.error {
                    None => writeln!(out, "valid   {}", row.input)?,
                    Some(e) => writeln!(out, "invalid {}: {e}", row.input)?,
                }
            }
        }
    }

    Ok(rows.iter().filter(|r| !r.validation.valid).count())
}
