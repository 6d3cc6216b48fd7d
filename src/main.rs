//! HostHunter CLI entrypoint

use clap::Parser;
use hosthunter::cli::{Cli, OutputFormat};
use hosthunter::error::Result;
use hosthunter::output::{print_banner, print_error, print_summary, write_results};
use hosthunter::runner::HuntRunner;
use hosthunter::{input, output};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Install the ring crypto provider for rustls
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Initialize logging; RUST_LOG wins, DEBUG=true raises the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            if matches!(std::env::var("DEBUG").as_deref(), Ok("true")) {
                EnvFilter::new("debug")
            } else {
                EnvFilter::new("warn")
            }
        }))
        .with_target(false)
        .init();

    if let Err(e) = run().await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    // Machine-readable stdout stays clean
    let json_to_stdout = cli.format == OutputFormat::Json && cli.output.is_none();
    if !json_to_stdout {
        print_banner();
    }

    if !cli.has_input() {
        return Err(hosthunter::HostHunterError::Input(
            "No IP addresses provided. Use inline input (-i) or provide a file path (-f).".into(),
        ));
    }

    let targets = input::load_targets(cli.ips.as_deref(), cli.file.as_deref())?;
    let settings = cli.settings();

    if !json_to_stdout {
        output::terminal::print_info(&format!(
            "Starting HostHunter with {} IPs, batch size {}, and concurrency {}...",
            targets.len(),
            settings.batch_size,
            settings.max_concurrent_lookups
        ));
        println!();
    }

    let start = Instant::now();
    let runner = HuntRunner::new(settings.clone())?;
    let results = runner.run(targets).await;

    write_results(&results, cli.format, cli.output.as_deref(), settings.verbose)?;

    if !json_to_stdout {
        print_summary(&results, start.elapsed());
    }

    Ok(())
}
