//! Robots-Recon main entry point
//!
//! This is the command-line interface for the robots.txt reconnaissance tool.

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use robots_recon::config::{load_config, Config};
use robots_recon::output::console;
use robots_recon::{run_recon, ReconOutcome, TargetSite};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Robots-Recon: probe the paths a site hides from crawlers
///
/// Fetches the target's robots.txt, extracts every Disallow path and requests
/// each one, saving the status code and a short content preview to a report.
/// Only run it against sites you are authorized to test.
#[derive(Parser, Debug)]
#[command(name = "robots-recon")]
#[command(version)]
#[command(about = "Probe the paths listed in a site's robots.txt", long_about = None)]
struct Cli {
    /// Target website (prompted for when omitted)
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,

    /// Report file (prompted for when omitted)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// List the disallowed paths without probing them
    #[arg(long)]
    dry_run: bool,

    /// Do not print the banner
    #[arg(long)]
    no_banner: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress diagnostic logging
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if !cli.no_banner {
        print_banner();
    }

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        None => Config::default(),
    };

    let input = match cli.url {
        Some(url) => url,
        None => prompt("Enter the target website (e.g., https://example.com): ")?,
    };

    let target = match TargetSite::parse(&input) {
        Ok(target) => target,
        Err(e) => {
            console::error(e);
            return Ok(ExitCode::from(2));
        }
    };

    let preset_output = cli.output;
    let choose_output = move || -> io::Result<Option<PathBuf>> {
        let path = match preset_output {
            Some(path) => path,
            None => PathBuf::from(prompt("Enter the output file name (e.g., results.txt): ")?),
        };
        Ok(non_empty_path(path))
    };

    let outcome = run_recon(&config, &target, cli.dry_run, choose_output).await?;

    match outcome {
        ReconOutcome::Completed { summary, .. } => console::info(summary),
        ReconOutcome::Listed(paths) => {
            for path in &paths {
                println!("  {}", path);
            }
        }
        ReconOutcome::RobotsUnavailable
        | ReconOutcome::NoDisallowedPaths
        | ReconOutcome::Aborted => {}
    }

    Ok(ExitCode::SUCCESS)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            // Console lines carry the run; logs only surface problems by default
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("robots_recon=info,warn"),
            2 => EnvFilter::new("robots_recon=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

fn print_banner() {
    let rule = "=====================================================";
    println!();
    println!("{}", rule.green().bold());
    println!("{}", "   ROBOTS-RECON".green().bold());
    println!(
        "{}",
        "   Fetch robots.txt and probe its disallowed paths.".green()
    );
    println!("{}", rule.green().bold());

    let art = r#"
        _______
      /         \
     |  [o] [o]  |
      \    <     |
       \_______ /
        \_____/
"#;
    println!("{}", art.blue());
}

/// Prints `message` and reads one trimmed line from stdin
fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn non_empty_path(path: PathBuf) -> Option<PathBuf> {
    if path.as_os_str().is_empty() {
        None
    } else {
        Some(path)
    }
}
