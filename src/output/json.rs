//! JSON export
//!
//! Serializes the full enriched records (nested certificate and header
//! data), pretty-printed. Prints to stdout when no output file is given.

use crate::error::Result;
use crate::models::EnrichedResult;
use std::fs;
use std::path::Path;

pub fn to_json(results: &[EnrichedResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// Print results as JSON to stdout
pub fn print_json(results: &[EnrichedResult]) -> Result<()> {
    println!("{}", to_json(results)?);
    Ok(())
}

pub fn write_json_file(results: &[EnrichedResult], path: &Path) -> Result<()> {
    fs::write(path, to_json(results)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LookupResult;

    #[test]
    fn test_json_shape() {
        let results = vec![EnrichedResult::bare(LookupResult::success(
            "8.8.8.8".parse().unwrap(),
            "dns.google".into(),
        ))];
        let json = to_json(&results).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed[0]["ip"], "8.8.8.8");
        assert_eq!(parsed[0]["status"], "Success");
        assert_eq!(parsed[0]["hostname"], "dns.google");
        assert!(parsed[0]["certificate"]["issuer"].is_null());
        assert!(parsed[0]["headers"]["server"].is_null());
    }
}
