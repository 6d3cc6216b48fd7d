//! Terminal output helpers: progress indicators, status lines, run summary

use crate::models::EnrichedResult;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner for long-running operations
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .expect("Invalid spinner template")
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Create a progress bar for batch operations
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .expect("Invalid progress template")
            .progress_chars("█▓░"),
    );
    pb.set_message(message.to_string());
    pb
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), message);
}

pub fn print_success(message: &str) {
    println!("{} {}", style("✔").green(), message);
}

pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ").cyan(), message);
}

/// Print the end-of-run summary with elapsed wall time
pub fn print_summary(results: &[EnrichedResult], elapsed: Duration) {
    let total = results.len();
    let resolved = results.iter().filter(|r| r.lookup.is_success()).count();
    let failed = total - resolved;
    let with_certificate = results
        .iter()
        .filter(|r| !r.certificate.is_empty())
        .count();

    println!();
    println!(
        "{} {} targets, {} resolved, {} failed, {} with certificates",
        style("Summary:").bold(),
        total,
        style(resolved).green(),
        if failed > 0 {
            style(failed).red()
        } else {
            style(failed).dim()
        },
        with_certificate
    );
    println!("Process completed in {}.", format_elapsed(elapsed));
}

/// Render a duration as HH:MM:SS
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_secs(0)), "00:00:00");
        assert_eq!(format_elapsed(Duration::from_secs(61)), "00:01:01");
        assert_eq!(format_elapsed(Duration::from_secs(3723)), "01:02:03");
    }
}
