//! XML export

use super::{escape_markup, flatten_results, FlatRecord};
use crate::error::Result;
use crate::models::EnrichedResult;
use std::fs;
use std::path::Path;

/// Render results as a flat XML document
pub fn generate_xml(results: &[EnrichedResult]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<results>\n");

    for record in flatten_results(results) {
        xml.push_str("  <result>\n");
        for (name, value) in FlatRecord::FIELD_NAMES.iter().zip(record.fields()) {
            xml.push_str(&format!(
                "    <{}>{}</{}>\n",
                name,
                escape_markup(value),
                name
            ));
        }
        xml.push_str("  </result>\n");
    }

    xml.push_str("</results>\n");
    xml
}

pub fn write_xml_file(results: &[EnrichedResult], path: &Path) -> Result<()> {
    fs::write(path, generate_xml(results))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LookupResult;

    #[test]
    fn test_xml_document_shape() {
        let results = vec![EnrichedResult::bare(LookupResult::success(
            "9.9.9.9".parse().unwrap(),
            "dns.quad9.net".into(),
        ))];
        let xml = generate_xml(&results);
        assert!(xml.starts_with("<?xml version=\"1.0\""));
        assert!(xml.contains("<ip>9.9.9.9</ip>"));
        assert!(xml.contains("<status>Success</status>"));
        assert!(xml.contains("<hostname>dns.quad9.net</hostname>"));
        assert!(xml.trim_end().ends_with("</results>"));
    }

    #[test]
    fn test_xml_escapes_values() {
        let mut results = vec![EnrichedResult::bare(LookupResult::failure(
            "192.0.2.1".parse().unwrap(),
            "err".into(),
        ))];
        results[0].headers.server = Some("a<b&c".into());
        let xml = generate_xml(&results);
        assert!(xml.contains("<server>a&lt;b&amp;c</server>"));
    }
}
