//! Result data structures
//!
//! Everything gathered for a target lives in an [`EnrichedResult`]; nothing
//! is persisted beyond the current run.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Outcome of a reverse-DNS lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LookupStatus {
    Success,
    Failed,
}

impl fmt::Display for LookupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupStatus::Success => write!(f, "Success"),
            LookupStatus::Failed => write!(f, "Failed"),
        }
    }
}

/// Reverse-DNS lookup result for a single address
#[derive(Debug, Clone, Serialize)]
pub struct LookupResult {
    pub ip: Ipv4Addr,
    pub status: LookupStatus,
    /// Resolved PTR names joined with ", " on success
    pub hostname: Option<String>,
    /// Terminal error message after retries were exhausted
    pub error: Option<String>,
}

impl LookupResult {
    pub fn success(ip: Ipv4Addr, hostname: String) -> Self {
        Self {
            ip,
            status: LookupStatus::Success,
            hostname: Some(hostname),
            error: None,
        }
    }

    pub fn failure(ip: Ipv4Addr, error: String) -> Self {
        Self {
            ip,
            status: LookupStatus::Failed,
            hostname: None,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == LookupStatus::Success
    }
}

/// Leaf certificate metadata from the TLS probe
#[derive(Debug, Clone, Default, Serialize)]
pub struct CertificateSummary {
    /// Issuer organization, falling back to common name
    pub issuer: Option<String>,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_to: Option<DateTime<Utc>>,
    /// Port that answered with a certificate
    pub port: Option<u16>,
}

impl CertificateSummary {
    pub fn is_empty(&self) -> bool {
        self.issuer.is_none() && self.valid_from.is_none() && self.valid_to.is_none()
    }
}

/// Security-related response headers
#[derive(Debug, Clone, Default, Serialize)]
pub struct SecurityHeaders {
    pub hsts: Option<String>,
    pub csp: Option<String>,
    pub x_frame_options: Option<String>,
    pub x_content_type_options: Option<String>,
    pub x_xss_protection: Option<String>,
}

/// HTTP response headers of interest
#[derive(Debug, Clone, Default, Serialize)]
pub struct HeaderSummary {
    pub server: Option<String>,
    pub x_powered_by: Option<String>,
    pub location: Option<String>,
    pub security: SecurityHeaders,
}

/// A lookup result together with its enrichment data
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedResult {
    #[serde(flatten)]
    pub lookup: LookupResult,
    pub certificate: CertificateSummary,
    pub headers: HeaderSummary,
}

impl EnrichedResult {
    /// Wrap a lookup result with default (absent) enrichment data
    pub fn bare(lookup: LookupResult) -> Self {
        Self {
            lookup,
            certificate: CertificateSummary::default(),
            headers: HeaderSummary::default(),
        }
    }
}

/// Render an optional field the way the exports expect it
pub fn display_or_na(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_result_has_no_enrichment() {
        let lookup = LookupResult::failure("192.0.2.1".parse().unwrap(), "timed out".into());
        let enriched = EnrichedResult::bare(lookup);
        assert!(enriched.certificate.is_empty());
        assert!(enriched.headers.server.is_none());
    }

    #[test]
    fn test_display_or_na() {
        assert_eq!(display_or_na(Some("nginx")), "nginx");
        assert_eq!(display_or_na(Some("")), "N/A");
        assert_eq!(display_or_na(None), "N/A");
    }
}
