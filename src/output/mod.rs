//! Output formatting module
//!
//! Provides the terminal table view plus CSV, JSON, HTML and XML exports.

pub mod banner;
pub mod csv;
pub mod html;
pub mod json;
pub mod table;
pub mod terminal;
pub mod xml;

use crate::cli::OutputFormat;
use crate::error::{HostHunterError, Result};
use crate::models::{display_or_na, EnrichedResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

pub use banner::print_banner;
pub use table::print_results_table;
pub use terminal::{create_progress_bar, create_spinner, print_error, print_success, print_summary};

/// Timestamp rendering shared by the flat exports
pub(crate) fn format_timestamp(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// One row of the flat export formats (csv, xml, html)
#[derive(Debug, Serialize)]
pub struct FlatRecord {
    pub ip: String,
    pub status: String,
    pub hostname: String,
    pub server: String,
    pub location: String,
    pub ssl_issuer: String,
    pub ssl_valid_from: String,
    pub ssl_valid_to: String,
}

impl FlatRecord {
    pub const FIELD_NAMES: [&'static str; 8] = [
        "ip",
        "status",
        "hostname",
        "server",
        "location",
        "ssl_issuer",
        "ssl_valid_from",
        "ssl_valid_to",
    ];

    pub fn fields(&self) -> [&str; 8] {
        [
            &self.ip,
            &self.status,
            &self.hostname,
            &self.server,
            &self.location,
            &self.ssl_issuer,
            &self.ssl_valid_from,
            &self.ssl_valid_to,
        ]
    }
}

/// Flatten enriched results into export rows, with `N/A` for absent values
pub fn flatten_results(results: &[EnrichedResult]) -> Vec<FlatRecord> {
    results
        .iter()
        .map(|r| FlatRecord {
            ip: r.lookup.ip.to_string(),
            status: r.lookup.status.to_string(),
            hostname: display_or_na(r.lookup.hostname.as_deref()),
            server: display_or_na(r.headers.server.as_deref()),
            location: display_or_na(r.headers.location.as_deref()),
            ssl_issuer: display_or_na(r.certificate.issuer.as_deref()),
            ssl_valid_from: format_timestamp(r.certificate.valid_from),
            ssl_valid_to: format_timestamp(r.certificate.valid_to),
        })
        .collect()
}

/// Escape a value for embedding in XML or HTML markup
pub(crate) fn escape_markup(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render or export results in the requested format.
///
/// `table` always prints to stdout; `json` prints to stdout unless an
/// output file is given; the file-only formats reject a missing path.
pub fn write_results(
    results: &[EnrichedResult],
    format: OutputFormat,
    output: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            print_results_table(results, verbose);
            Ok(())
        }
        OutputFormat::Json => match output {
            Some(path) => {
                json::write_json_file(results, path)?;
                print_success(&format!("Results saved in JSON format at: {}", path.display()));
                Ok(())
            }
            None => json::print_json(results),
        },
        OutputFormat::Csv => {
            let path = require_output(output, "CSV")?;
            csv::write_csv_file(results, path)?;
            print_success(&format!("Results saved in CSV format at: {}", path.display()));
            Ok(())
        }
        OutputFormat::Html => {
            let path = require_output(output, "HTML")?;
            html::write_html_file(results, path)?;
            print_success(&format!("Results saved in HTML format at: {}", path.display()));
            Ok(())
        }
        OutputFormat::Xml => {
            let path = require_output(output, "XML")?;
            xml::write_xml_file(results, path)?;
            print_success(&format!("Results saved in XML format at: {}", path.display()));
            Ok(())
        }
    }
}

fn require_output<'a>(output: Option<&'a Path>, format: &str) -> Result<&'a Path> {
    output.ok_or_else(|| {
        HostHunterError::Output(format!("{} output requires an output file (-o)", format))
    })
}
