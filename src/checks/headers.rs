//! HTTP response header fetch
//!
//! Requests the target root over HTTPS, falling back to HTTP. Only the
//! response head is of interest; the body is never read and redirects are
//! not followed. TLS verification is disabled, consistent with the
//! certificate probe.

use crate::models::{HeaderSummary, SecurityHeaders};
use reqwest::header::HeaderMap;
use std::time::Duration;
use tracing::debug;

/// Header checker shared across the run
pub struct HeaderChecker {
    client: reqwest::Client,
}

impl HeaderChecker {
    /// Build the underlying client. Fails only on TLS backend
    /// misconfiguration, which is a startup error.
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { client })
    }

    /// Fetch headers for a target, HTTPS first then HTTP. Returns the
    /// default summary when neither scheme answers.
    pub async fn fetch(&self, host: &str) -> HeaderSummary {
        for scheme in ["https", "http"] {
            let url = format!("{}://{}", scheme, host);
            match self.client.get(&url).send().await {
                Ok(response) => return extract_headers(response.headers()),
                Err(e) => debug!("Header fetch failed for {}: {}", url, e),
            }
        }
        HeaderSummary::default()
    }
}

/// Pull the fixed header set out of a response header map
fn extract_headers(headers: &HeaderMap) -> HeaderSummary {
    HeaderSummary {
        server: header_value(headers, "server"),
        x_powered_by: header_value(headers, "x-powered-by"),
        location: header_value(headers, "location"),
        security: SecurityHeaders {
            hsts: header_value(headers, "strict-transport-security"),
            csp: header_value(headers, "content-security-policy"),
            x_frame_options: header_value(headers, "x-frame-options"),
            x_content_type_options: header_value(headers, "x-content-type-options"),
            x_xss_protection: header_value(headers, "x-xss-protection"),
        },
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderName, HeaderValue};

    fn header_map(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(
                HeaderName::from_static(name),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        map
    }

    #[test]
    fn test_extract_known_headers() {
        let map = header_map(&[
            ("server", "nginx/1.24"),
            ("x-powered-by", "PHP/8.2"),
            ("location", "https://example.com/"),
            ("strict-transport-security", "max-age=31536000"),
            ("x-frame-options", "DENY"),
        ]);

        let summary = extract_headers(&map);
        assert_eq!(summary.server.as_deref(), Some("nginx/1.24"));
        assert_eq!(summary.x_powered_by.as_deref(), Some("PHP/8.2"));
        assert_eq!(summary.location.as_deref(), Some("https://example.com/"));
        assert_eq!(
            summary.security.hsts.as_deref(),
            Some("max-age=31536000")
        );
        assert_eq!(summary.security.x_frame_options.as_deref(), Some("DENY"));
        assert!(summary.security.csp.is_none());
    }

    #[test]
    fn test_extract_empty_map() {
        let summary = extract_headers(&HeaderMap::new());
        assert!(summary.server.is_none());
        assert!(summary.security.hsts.is_none());
    }
}
