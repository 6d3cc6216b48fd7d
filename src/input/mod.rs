//! Target list loading and validation
//!
//! Accepts inline comma-separated addresses and/or a file with one address
//! per line. Invalid entries are warned about and skipped; CIDR notation is
//! rejected outright since range expansion is unsupported.

use crate::error::{HostHunterError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::net::Ipv4Addr;
use std::path::Path;
use tracing::warn;

/// True for a plain dotted-quad IPv4 address. CIDR notation does not count.
pub fn is_valid_ipv4(candidate: &str) -> bool {
    candidate.parse::<Ipv4Addr>().is_ok()
}

/// Classify a single raw entry
fn validate_entry(entry: &str) -> Result<Ipv4Addr> {
    if entry.contains('/') {
        return Err(HostHunterError::CidrNotSupported(entry.to_string()));
    }
    entry
        .parse::<Ipv4Addr>()
        .map_err(|_| HostHunterError::InvalidAddress(entry.to_string()))
}

/// Load targets from the inline list and/or file, validate and deduplicate.
///
/// Duplicates keep their first-seen position. Returns a fatal error when the
/// file cannot be read or when no valid address remains after filtering.
pub fn load_targets(inline: Option<&str>, file: Option<&Path>) -> Result<Vec<Ipv4Addr>> {
    let mut raw = Vec::new();

    if let Some(list) = inline {
        raw.extend(list.split(',').map(|s| s.trim().to_string()));
    }

    if let Some(path) = file {
        let file = File::open(path).map_err(|e| {
            HostHunterError::File(format!("Failed to open {}: {}", path.display(), e))
        })?;
        for line in BufReader::new(file).lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            raw.push(trimmed.to_string());
        }
    }

    let mut targets = Vec::new();
    for entry in raw {
        if entry.is_empty() {
            continue;
        }
        match validate_entry(&entry) {
            Ok(ip) => {
                if !targets.contains(&ip) {
                    targets.push(ip);
                }
            }
            Err(e) => warn!("Skipping entry: {}", e),
        }
    }

    if targets.is_empty() {
        return Err(HostHunterError::Input(
            "No valid IP addresses provided. Use inline input or provide a file path.".to_string(),
        ));
    }

    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ipv4() {
        assert!(is_valid_ipv4("8.8.8.8"));
        assert!(is_valid_ipv4("255.255.255.255"));
        assert!(is_valid_ipv4("0.0.0.0"));
    }

    #[test]
    fn test_invalid_ipv4() {
        assert!(!is_valid_ipv4("256.1.1.1"));
        assert!(!is_valid_ipv4("1.1.1"));
        assert!(!is_valid_ipv4("example.com"));
        assert!(!is_valid_ipv4("1.1.1.1/24"));
        assert!(!is_valid_ipv4("::1"));
    }

    #[test]
    fn test_cidr_rejected_with_distinct_error() {
        let err = validate_entry("10.0.0.0/8").unwrap_err();
        assert!(matches!(err, HostHunterError::CidrNotSupported(_)));
    }

    #[test]
    fn test_inline_dedup_preserves_order() {
        let targets = load_targets(Some("1.1.1.1, 8.8.8.8,1.1.1.1"), None).unwrap();
        assert_eq!(
            targets,
            vec![
                "1.1.1.1".parse::<Ipv4Addr>().unwrap(),
                "8.8.8.8".parse().unwrap()
            ]
        );
    }

    #[test]
    fn test_invalid_entries_skipped() {
        let targets = load_targets(Some("1.1.1.1,not-an-ip,9.9.9.9"), None).unwrap();
        assert_eq!(targets.len(), 2);
    }

    #[test]
    fn test_all_invalid_is_fatal() {
        let err = load_targets(Some("nope,also-nope"), None).unwrap_err();
        assert!(matches!(err, HostHunterError::Input(_)));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = load_targets(None, Some(Path::new("/definitely/not/here.txt"))).unwrap_err();
        assert!(matches!(err, HostHunterError::File(_)));
    }
}
