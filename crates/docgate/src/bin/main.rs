//! docgate CLI
//!
//! Exit status: 0 when every link resolves, 1 when any document fails,
//! 2 when the configuration is unusable.

use anyhow::Context;
use clap::Parser;
use docgate::prelude::*;
use docgate::{DEFAULT_CONFIG_FILE, Error};
use std::path::PathBuf;
use std::process::ExitCode;

/// docgate - check that documentation links resolve before publishing
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Project directory; content and asset paths are relative to it
    #[arg(short, long, env = "DOCGATE_ROOT", default_value = ".")]
    root: PathBuf,

    /// Configuration file (defaults to docgate.yaml in the project directory, if present)
    #[arg(short, long, env = "DOCGATE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the content root from the configuration
    #[arg(long)]
    content_root: Option<String>,

    /// Report format (human, json, text)
    #[arg(short, long, default_value = "human")]
    format: String,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "warn" }),
    )
    .init();

    match run(args).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("❌ {:#}", e);
            let fatal = e.downcast_ref::<Error>().is_some_and(Error::is_fatal);
            ExitCode::from(if fatal { 2 } else { 1 })
        }
    }
}

/// Run one check; `Ok(passed)` once a report was printed.
async fn run(args: Args) -> anyhow::Result<bool> {
    let format = args
        .format
        .parse::<OutputFormat>()
        .map_err(Error::config_error)?;

    let mut config = match &args.config {
        Some(path) => CheckerConfig::load(&args.root.join(path))?,
        None => CheckerConfig::load_or_default(&args.root.join(DEFAULT_CONFIG_FILE))?,
    };
    if let Some(content_root) = args.content_root {
        config.routing.content_root = content_root;
    }
    config.validate_in(&args.root)?;

    log::info!("docgate v{}", env!("CARGO_PKG_VERSION"));
    log::info!(
        "Project: {} | Content root: {} | Format: {}",
        args.root.display(),
        config.routing.content_root,
        format
    );

    let checker = LinkChecker::new(config, FsContentStore::new(&args.root))?;
    let report = checker
        .run()
        .await
        .with_context(|| format!("Failed to check {}", args.root.display()))?;

    print!("{}", ReportFormatter::format(&report, format));
    Ok(report.passed)
}
