//! Reverse-DNS lookup checker
//!
//! Performs PTR queries with a fixed number of immediate retries. Retry
//! policy lives here, not in the resolver, so the resolver's own attempt
//! counter is pinned to one.

use crate::models::LookupResult;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;
use tracing::debug;

/// Immediate retries after a failed lookup, no delay between attempts
const LOOKUP_RETRIES: usize = 3;

/// Reverse-DNS checker backed by the system resolver configuration
pub struct ReverseDnsChecker {
    resolver: TokioAsyncResolver,
}

impl ReverseDnsChecker {
    /// Create a checker with the given per-query timeout
    pub fn new(timeout: Duration) -> Self {
        let mut opts = ResolverOpts::default();
        opts.timeout = timeout;
        opts.attempts = 1;
        opts.use_hosts_file = false;

        let resolver = TokioAsyncResolver::tokio(ResolverConfig::default(), opts);
        Self { resolver }
    }

    /// Resolve PTR names for an address, retrying up to [`LOOKUP_RETRIES`]
    /// times. Failure after the last retry is terminal and recorded in the
    /// result, never propagated.
    pub async fn lookup(&self, ip: Ipv4Addr) -> LookupResult {
        let mut last_error = String::new();

        for attempt in 0..=LOOKUP_RETRIES {
            match self.resolver.reverse_lookup(IpAddr::V4(ip)).await {
                Ok(response) => {
                    let names: Vec<String> = response
                        .iter()
                        .map(|ptr| ptr.to_string().trim_end_matches('.').to_string())
                        .collect();

                    if names.is_empty() {
                        last_error = "No PTR records found".to_string();
                    } else {
                        return LookupResult::success(ip, names.join(", "));
                    }
                }
                Err(e) => {
                    last_error = e.to_string();
                }
            }
            debug!(
                "Reverse lookup attempt {}/{} failed for {}: {}",
                attempt + 1,
                LOOKUP_RETRIES + 1,
                ip,
                last_error
            );
        }

        LookupResult::failure(ip, last_error)
    }
}
