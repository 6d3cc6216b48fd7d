//! CLI argument definitions using clap

use crate::config::Settings;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hosthunter")]
#[command(version)]
#[command(about = "Reverse-DNS, HTTP header and TLS certificate enumeration for IPv4 lists", long_about = None)]
pub struct Cli {
    /// Inline IP addresses (comma-separated if multiple)
    #[arg(short = 'i', long = "ips", value_name = "IPS")]
    pub ips: Option<String>,

    /// File containing IP addresses, one per line
    #[arg(short = 'f', long = "file", alias = "iF", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Write output to file (required for csv, html and xml)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Batch size for DNS lookups
    #[arg(long = "batch-size", alias = "batchSize", default_value = "10", value_name = "N")]
    pub batch_size: usize,

    /// Maximum concurrent lookups
    #[arg(
        long = "max-concurrent-lookups",
        alias = "maxConcurrentLookups",
        default_value = "5",
        value_name = "N"
    )]
    pub max_concurrent_lookups: usize,

    /// Verbose table output with certificate and security-header columns
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Timeout for TLS probe connections in seconds
    #[arg(long, default_value = "3", value_name = "SECS")]
    pub timeout: u64,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Supported output formats
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
    Html,
    Xml,
}

impl Cli {
    /// True when no input source was given at all
    pub fn has_input(&self) -> bool {
        self.ips.is_some() || self.file.is_some()
    }

    /// Build runtime settings from the parsed arguments and environment
    pub fn settings(&self) -> Settings {
        let mut settings = Settings {
            batch_size: self.batch_size.max(1),
            max_concurrent_lookups: self.max_concurrent_lookups.max(1),
            verbose: self.verbose,
            tls_timeout_secs: self.timeout,
            ..Settings::default()
        };
        if let Some(ports) = Settings::cert_ports_from_env() {
            if !ports.is_empty() {
                settings.cert_ports = ports;
            }
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_clamp_zero() {
        let cli = Cli::parse_from([
            "hosthunter",
            "-i",
            "1.1.1.1",
            "--batch-size",
            "0",
            "--max-concurrent-lookups",
            "0",
        ]);
        let settings = cli.settings();
        assert_eq!(settings.batch_size, 1);
        assert_eq!(settings.max_concurrent_lookups, 1);
    }

    #[test]
    fn test_camel_case_aliases() {
        let cli = Cli::parse_from([
            "hosthunter",
            "-i",
            "1.1.1.1",
            "--batchSize",
            "20",
            "--maxConcurrentLookups",
            "8",
        ]);
        assert_eq!(cli.batch_size, 20);
        assert_eq!(cli.max_concurrent_lookups, 8);
    }

    #[test]
    fn test_missing_input_detected() {
        let cli = Cli::parse_from(["hosthunter", "--format", "json"]);
        assert!(!cli.has_input());
    }

    #[test]
    fn test_format_values() {
        let cli = Cli::parse_from(["hosthunter", "-i", "1.1.1.1", "--format", "html"]);
        assert_eq!(cli.format, OutputFormat::Html);
    }
}
