use chrono::{TimeZone, Utc};
use hosthunter::models::{
    CertificateSummary, EnrichedResult, HeaderSummary, LookupResult, SecurityHeaders,
};
use hosthunter::output::{csv, html, json, xml};

fn sample_results() -> Vec<EnrichedResult> {
    let resolved = EnrichedResult {
        lookup: LookupResult::success("1.1.1.1".parse().unwrap(), "one.one.one.one".into()),
        certificate: CertificateSummary {
            issuer: Some("DigiCert Inc".into()),
            valid_from: Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()),
            valid_to: Some(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()),
            port: Some(443),
        },
        headers: HeaderSummary {
            server: Some("cloudflare".into()),
            x_powered_by: None,
            location: None,
            security: SecurityHeaders {
                hsts: Some("max-age=31536000".into()),
                ..SecurityHeaders::default()
            },
        },
    };

    let failed = EnrichedResult::bare(LookupResult::failure(
        "192.0.2.55".parse().unwrap(),
        "query timed out".into(),
    ));

    vec![resolved, failed]
}

#[test]
fn test_csv_round_trip_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");

    csv::write_csv_file(&sample_results(), &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    assert_eq!(content.lines().count(), 3);
    assert!(content.contains("\"1.1.1.1\""));
    assert!(content.contains("\"DigiCert Inc\""));
    assert!(content.contains("\"2026-01-01 00:00:00 UTC\""));
    assert!(content.contains("\"192.0.2.55\",\"Failed\",\"N/A\""));
}

#[test]
fn test_json_export_keeps_nested_structure() {
    let json = json::to_json(&sample_results()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed[0]["certificate"]["issuer"], "DigiCert Inc");
    assert_eq!(parsed[0]["certificate"]["port"], 443);
    assert_eq!(parsed[0]["headers"]["security"]["hsts"], "max-age=31536000");
    assert_eq!(parsed[1]["status"], "Failed");
    assert_eq!(parsed[1]["error"], "query timed out");
}

#[test]
fn test_xml_export_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.xml");

    xml::write_xml_file(&sample_results(), &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    assert!(content.contains("<ip>1.1.1.1</ip>"));
    assert!(content.contains("<ssl_issuer>DigiCert Inc</ssl_issuer>"));
    assert!(content.contains("<hostname>N/A</hostname>"));
}

#[test]
fn test_html_export_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.html");

    html::write_html_file(&sample_results(), &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    assert!(content.contains("<!DOCTYPE html>"));
    assert!(content.contains("one.one.one.one"));
    assert!(content.contains("tag-green"));
    assert!(content.contains("tag-red"));
}
