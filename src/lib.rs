//! HostHunter - reverse-DNS, HTTP header and TLS certificate enumeration
//!
//! This library provides:
//! - IPv4 target list loading with validation and deduplication
//! - Batched, concurrency-bounded reverse-DNS lookups with retry
//! - TLS certificate probing across a fallback port list (no trust
//!   verification; metadata only)
//! - HTTP response header collection (HTTPS with HTTP fallback)
//! - Table, CSV, JSON, HTML and XML rendering of the results

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod runner;

// Re-export commonly used types for convenience
pub use checks::{CertificateProbe, HeaderChecker, ReverseDnsChecker};
pub use cli::{Cli, OutputFormat};
pub use config::Settings;
pub use error::{HostHunterError, Result};
pub use input::{is_valid_ipv4, load_targets};
pub use models::{
    CertificateSummary, EnrichedResult, HeaderSummary, LookupResult, LookupStatus,
};
pub use runner::{for_each_bounded, HuntRunner};
