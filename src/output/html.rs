//! HTML report generation

use super::{escape_markup, flatten_results};
use crate::error::Result;
use crate::models::EnrichedResult;
use chrono::Utc;
use std::fs;
use std::path::Path;

/// Generate a standalone HTML report for the run
pub fn generate_html_report(results: &[EnrichedResult]) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>HostHunter Results</title>
    <style>
        :root {{
            --primary: #2563eb;
            --success: #16a34a;
            --danger: #dc2626;
            --gray-50: #f9fafb;
            --gray-100: #f3f4f6;
            --gray-200: #e5e7eb;
            --gray-700: #374151;
            --gray-900: #111827;
        }}
        * {{ box-sizing: border-box; }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: var(--gray-900);
            max-width: 1200px;
            margin: 0 auto;
            padding: 2rem;
            background: var(--gray-50);
        }}
        h1 {{ color: var(--primary); border-bottom: 3px solid var(--primary); padding-bottom: 0.5rem; }}
        .card {{
            background: white;
            border-radius: 8px;
            padding: 1.5rem;
            margin: 1rem 0;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
        }}
        table {{ width: 100%; border-collapse: collapse; margin: 1rem 0; }}
        th, td {{ padding: 0.75rem; text-align: left; border-bottom: 1px solid var(--gray-200); }}
        th {{ background: var(--gray-100); font-weight: 600; }}
        tr:hover {{ background: var(--gray-50); }}
        .tag {{
            display: inline-block;
            padding: 0.25rem 0.5rem;
            border-radius: 4px;
            font-size: 0.875rem;
            font-weight: 500;
        }}
        .tag-green {{ background: #dcfce7; color: var(--success); }}
        .tag-red {{ background: #fee2e2; color: var(--danger); }}
        footer {{ margin-top: 3rem; text-align: center; color: var(--gray-700); font-size: 0.875rem; }}
    </style>
</head>
<body>
    <h1>HostHunter Results</h1>
    <p><em>Generated: {}</em></p>
    <div class="card">
    <table>
        <thead>
            <tr>
                <th>IP Address</th>
                <th>Status</th>
                <th>Hostname</th>
                <th>Server</th>
                <th>Location</th>
                <th>SSL Issuer</th>
                <th>SSL Valid From</th>
                <th>SSL Valid To</th>
            </tr>
        </thead>
        <tbody>
"#,
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    for record in flatten_results(results) {
        let status_tag = if record.status == "Success" {
            format!("<span class=\"tag tag-green\">{}</span>", record.status)
        } else {
            format!("<span class=\"tag tag-red\">{}</span>", record.status)
        };

        html.push_str(&format!(
            "            <tr>\n                <td><code>{}</code></td>\n                <td>{}</td>\n",
            escape_markup(&record.ip),
            status_tag
        ));
        for value in &record.fields()[2..] {
            html.push_str(&format!(
                "                <td>{}</td>\n",
                escape_markup(value)
            ));
        }
        html.push_str("            </tr>\n");
    }

    html.push_str(
        r#"        </tbody>
    </table>
    </div>
    <footer>Generated by hosthunter</footer>
</body>
</html>
"#,
    );

    html
}

pub fn write_html_file(results: &[EnrichedResult], path: &Path) -> Result<()> {
    fs::write(path, generate_html_report(results))?;
    Ok(())
}
