//! CSV export

use super::{flatten_results, FlatRecord};
use crate::error::Result;
use crate::models::EnrichedResult;
use std::fs;
use std::path::Path;

/// Render results as CSV with a header row; every value is quoted
pub fn generate_csv(results: &[EnrichedResult]) -> String {
    let mut out = String::new();
    out.push_str(&FlatRecord::FIELD_NAMES.join(","));
    out.push('\n');

    for record in flatten_results(results) {
        let row: Vec<String> = record
            .fields()
            .iter()
            .map(|value| format!("\"{}\"", value.replace('"', "\"\"")))
            .collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

pub fn write_csv_file(results: &[EnrichedResult], path: &Path) -> Result<()> {
    fs::write(path, generate_csv(results))?;
    Ok(())
}
