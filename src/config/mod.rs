//! Runtime configuration
//!
//! Defaults mirror the tool's historical behavior: small DNS batches, a
//! five-wide lookup pool, and the well-known TLS service ports. The probe
//! port list can be overridden with the `CERT_PORTS` environment variable.

use std::time::Duration;

/// Ports probed for TLS certificates when port 443 yields nothing
pub const DEFAULT_CERT_PORTS: &[u16] = &[21, 25, 443, 993, 8443, 465, 995];

/// Environment variable overriding the certificate probe port list
pub const CERT_PORTS_ENV: &str = "CERT_PORTS";

/// Settings for a single enumeration run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Number of addresses processed per sequential batch
    pub batch_size: usize,

    /// Upper bound on in-flight lookups within a batch
    pub max_concurrent_lookups: usize,

    /// Ports tried, in order, by the certificate probe
    pub cert_ports: Vec<u16>,

    /// Timeout for TLS probe connections, seconds
    pub tls_timeout_secs: u64,

    /// Timeout for header fetch requests, seconds
    pub http_timeout_secs: u64,

    /// Expanded table output with certificate and security-header columns
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            batch_size: 10,
            max_concurrent_lookups: 5,
            cert_ports: DEFAULT_CERT_PORTS.to_vec(),
            tls_timeout_secs: 3,
            http_timeout_secs: 5,
            verbose: false,
        }
    }
}

impl Settings {
    pub fn tls_timeout(&self) -> Duration {
        Duration::from_secs(self.tls_timeout_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Read the probe port override from the environment, if any
    pub fn cert_ports_from_env() -> Option<Vec<u16>> {
        std::env::var(CERT_PORTS_ENV)
            .ok()
            .map(|raw| parse_cert_ports(&raw))
    }
}

/// Parse a comma-separated port list, ignoring entries that are not ports
pub fn parse_cert_ports(raw: &str) -> Vec<u16> {
    raw.split(',')
        .filter_map(|part| part.trim().parse::<u16>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.batch_size, 10);
        assert_eq!(settings.max_concurrent_lookups, 5);
        assert_eq!(settings.cert_ports, DEFAULT_CERT_PORTS);
    }

    #[test]
    fn test_parse_cert_ports() {
        assert_eq!(parse_cert_ports("443,8443"), vec![443, 8443]);
        assert_eq!(parse_cert_ports(" 21 , 993 "), vec![21, 993]);
        assert_eq!(parse_cert_ports("443,nope,70000"), vec![443]);
        assert!(parse_cert_ports("").is_empty());
    }
}
