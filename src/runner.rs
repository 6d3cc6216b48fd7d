//! Lookup pipeline
//!
//! Drives the run in two phases: reverse-DNS lookups over sequential
//! batches with a bounded worker pool, then enrichment fan-out (certificate
//! probe + header fetch) for every address that resolved. Per-target
//! failures degrade to default records; the pipeline itself never fails
//! once constructed.

use crate::checks::{CertificateProbe, HeaderChecker, ReverseDnsChecker};
use crate::config::Settings;
use crate::error::Result;
use crate::models::{EnrichedResult, LookupResult};
use crate::output::terminal::{create_progress_bar, create_spinner};
use futures::stream::{self, StreamExt};
use std::future::Future;
use std::net::Ipv4Addr;
use std::time::Duration;
use tracing::debug;

/// Per-query timeout for reverse lookups
const DNS_TIMEOUT: Duration = Duration::from_secs(5);

/// Run `f` over every item with at most `limit` futures in flight.
/// Completion order is not related to input order.
pub async fn for_each_bounded<T, R, F, Fut>(items: Vec<T>, limit: usize, f: F) -> Vec<R>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = R>,
{
    stream::iter(items)
        .map(f)
        .buffer_unordered(limit.max(1))
        .collect()
        .await
}

/// Orchestrates lookups and enrichment for one run
pub struct HuntRunner {
    settings: Settings,
    dns: ReverseDnsChecker,
    certificates: CertificateProbe,
    headers: HeaderChecker,
}

impl HuntRunner {
    pub fn new(settings: Settings) -> Result<Self> {
        let dns = ReverseDnsChecker::new(DNS_TIMEOUT);
        let certificates =
            CertificateProbe::new(settings.cert_ports.clone(), settings.tls_timeout());
        let headers = HeaderChecker::new(settings.http_timeout())?;

        Ok(Self {
            settings,
            dns,
            certificates,
            headers,
        })
    }

    /// Process all targets and return enriched results
    pub async fn run(&self, targets: Vec<Ipv4Addr>) -> Vec<EnrichedResult> {
        let lookups = self.lookup_all(targets).await;
        self.enrich_all(lookups).await
    }

    /// Phase 1: reverse-DNS lookups, batched and concurrency-bounded
    async fn lookup_all(&self, targets: Vec<Ipv4Addr>) -> Vec<LookupResult> {
        let progress = create_progress_bar(targets.len() as u64, "Processing IP addresses");
        let mut results = Vec::with_capacity(targets.len());

        let batches: Vec<Vec<Ipv4Addr>> = targets
            .chunks(self.settings.batch_size)
            .map(|chunk| chunk.to_vec())
            .collect();
        let batch_count = batches.len();

        for (index, batch) in batches.into_iter().enumerate() {
            debug!("Processing batch {} of {}", index + 1, batch_count);
            let batch_results =
                for_each_bounded(batch, self.settings.max_concurrent_lookups, |ip| {
                    let progress = &progress;
                    async move {
                        let result = self.dns.lookup(ip).await;
                        progress.inc(1);
                        result
                    }
                })
                .await;
            results.extend(batch_results);
        }

        progress.finish_and_clear();
        results
    }

    /// Phase 2: certificate and header enrichment for resolved addresses.
    /// Failed lookups pass through with default enrichment records.
    async fn enrich_all(&self, lookups: Vec<LookupResult>) -> Vec<EnrichedResult> {
        let spinner = create_spinner("Gathering certificates and headers...");

        let enriched = for_each_bounded(
            lookups,
            self.settings.max_concurrent_lookups,
            |lookup| async move {
                if !lookup.is_success() {
                    return EnrichedResult::bare(lookup);
                }

                let host = lookup.ip.to_string();
                let (certificate, headers) =
                    tokio::join!(self.certificates.probe(&host), self.headers.fetch(&host));

                EnrichedResult {
                    lookup,
                    certificate,
                    headers,
                }
            },
        )
        .await;

        spinner.finish_and_clear();
        enriched
    }
}
