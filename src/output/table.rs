//! Terminal table view
//!
//! Dynamically sized table with color-coded status. Failed lookups sort to
//! the bottom; verbose mode adds certificate and security-header columns.

use crate::models::{display_or_na, EnrichedResult, SecurityHeaders};
use chrono::{DateTime, Utc};
use console::style;
use tabled::builder::Builder;
use tabled::settings::Style as TableStyle;

/// Print the results table to stdout
pub fn print_results_table(results: &[EnrichedResult], verbose: bool) {
    if results.is_empty() {
        println!("{}", style("No results to display.").yellow());
        return;
    }

    // Successes first, failures at the bottom; stable within each group
    let mut ordered: Vec<&EnrichedResult> = results.iter().collect();
    ordered.sort_by_key(|r| !r.lookup.is_success());

    let mut builder = Builder::default();
    builder.push_record(header_row(verbose));
    for result in ordered {
        builder.push_record(data_row(result, verbose));
    }

    let mut table = builder.build();
    table.with(TableStyle::rounded());
    println!("{}", table);
}

fn header_row(verbose: bool) -> Vec<String> {
    let mut row = vec![
        "Status".to_string(),
        "IP Address".to_string(),
        "Hostname".to_string(),
        "Server".to_string(),
    ];
    if verbose {
        row.push("SSL Issuer".to_string());
        row.push("SSL Expires".to_string());
        row.push("Security Headers".to_string());
    }
    row
}

fn data_row(result: &EnrichedResult, verbose: bool) -> Vec<String> {
    let status = if result.lookup.is_success() {
        style("✔ Success").green().to_string()
    } else {
        style("✖ Failed").red().to_string()
    };

    let hostname = match (&result.lookup.hostname, &result.lookup.error) {
        (Some(hostname), _) => hostname.clone(),
        (None, Some(error)) => style(error).dim().to_string(),
        (None, None) => "N/A".to_string(),
    };

    let mut row = vec![
        status,
        result.lookup.ip.to_string(),
        hostname,
        display_or_na(result.headers.server.as_deref()),
    ];

    if verbose {
        row.push(display_or_na(result.certificate.issuer.as_deref()));
        row.push(format_expiry(result.certificate.valid_to));
        row.push(format_security_headers(&result.headers.security));
    }
    row
}

/// Certificate expiry with relative coloring: red when expired, yellow
/// within 30 days, green otherwise
pub fn format_expiry(valid_to: Option<DateTime<Utc>>) -> String {
    let Some(date) = valid_to else {
        return "N/A".to_string();
    };

    let formatted = date.format("%b %d, %Y").to_string();
    let days_left = (date - Utc::now()).num_days();

    if days_left < 0 {
        style(format!("{} (Expired)", formatted)).red().bold().to_string()
    } else if days_left <= 30 {
        style(format!("{} ({}d left)", formatted, days_left))
            .yellow()
            .bold()
            .to_string()
    } else {
        style(formatted).green().to_string()
    }
}

/// Compact ✔/✖ summary of the headers that matter most
pub fn format_security_headers(security: &SecurityHeaders) -> String {
    let flags = [
        ("HSTS", security.hsts.is_some()),
        ("CSP", security.csp.is_some()),
        ("X-Frame", security.x_frame_options.is_some()),
    ];

    flags
        .iter()
        .map(|(name, present)| {
            let icon = if *present {
                style("✔").green().to_string()
            } else {
                style("✖").red().to_string()
            };
            format!("{} {}", icon, name)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    #[test]
    fn test_format_expiry_expired() {
        let past = Utc::now() - ChronoDuration::days(10);
        assert!(format_expiry(Some(past)).contains("Expired"));
    }

    #[test]
    fn test_format_expiry_soon() {
        let soon = Utc::now() + ChronoDuration::days(5);
        assert!(format_expiry(Some(soon)).contains("d left"));
    }

    #[test]
    fn test_format_expiry_absent() {
        assert_eq!(format_expiry(None), "N/A");
    }

    #[test]
    fn test_security_header_summary_lists_all_flags() {
        let summary = format_security_headers(&SecurityHeaders::default());
        assert!(summary.contains("HSTS"));
        assert!(summary.contains("CSP"));
        assert!(summary.contains("X-Frame"));
    }
}
