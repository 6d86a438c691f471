mod cli;
mod config;
mod error;
mod health;
mod i18n;
mod report;
mod snapshot;
mod summary;
mod types;

use crate::error::HealthError;
use crate::types::config::HealthConfig;
use chrono::Utc;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

const LOG_ENV: &str = "PROFILE_HEALTH_LOG";
const DEFAULT_LOG_LEVEL: &str = "warn";

fn init_tracing(cli: &cli::Cli, config: &HealthConfig) {
    let level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => config.log_level().unwrap_or(DEFAULT_LOG_LEVEL),
            1 => "info",
            _ => "debug",
        }
    };
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn resolve_config(cli: &cli::Cli) -> Result<HealthConfig, HealthError> {
    match &cli.config {
        Some(path) => config::load_config_file(path),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(config::load_config(&cwd)?.unwrap_or_default())
        }
    }
}

fn resolve_locale(flag: Option<cli::LocaleArg>, config: &HealthConfig) -> i18n::Locale {
    match flag {
        Some(cli::LocaleArg::En) => i18n::Locale::En,
        Some(cli::LocaleArg::PtBr) => i18n::Locale::PtBr,
        None => config.locale(),
    }
}

fn output_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn run() -> Result<i32, HealthError> {
    let cli = cli::Cli::parse();
    let loaded = resolve_config(&cli)?;
    init_tracing(&cli, &loaded);
    info!(version = env!("CARGO_PKG_VERSION"), "profile-health starting");

    match &cli.command {
        cli::Commands::Check(cmd) => {
            let now = match &cmd.now {
                Some(text) => health::dates::parse_timestamp(text)
                    .ok_or_else(|| HealthError::InvalidInstant(text.clone()))?,
                None => Utc::now(),
            };
            let mut options = health::ScoringOptions::new(now);
            options.locale = resolve_locale(cmd.locale, &loaded);
            options.unparseable_dates = loaded.unparseable_dates();
            let fail_under = cmd.fail_under.or(loaded.fail_under());

            let mut reports = Vec::new();
            for path in snapshot::discover(&cmd.path)? {
                let loaded_snapshot = snapshot::load_snapshot(&path)?;
                let health_report = health::build_report(&loaded_snapshot.snapshot, &options)
                    .with_source(
                        loaded_snapshot.path.display().to_string(),
                        loaded_snapshot.sha256,
                    );
                reports.push(health_report);
            }

            let rendered = report::render(&reports, output_format(cmd.format))?;
            println!("{rendered}");

            let below_threshold = fail_under.is_some_and(|threshold| {
                reports
                    .iter()
                    .any(|health_report| health_report.overall_score < threshold)
            });
            let has_weak = reports.iter().any(|health_report| health_report.has_weak());

            if below_threshold {
                warn!(fail_under = ?fail_under, "overall score below threshold");
                Ok(exit_code::BLOCKING)
            } else if has_weak {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Summary(cmd) => {
            let locale = resolve_locale(cmd.locale, &loaded);
            let mut summaries = Vec::new();
            for path in snapshot::discover(&cmd.path)? {
                let loaded_snapshot = snapshot::load_snapshot(&path)?;
                summaries.push(summary::summarize(&loaded_snapshot.snapshot, locale));
            }

            let rendered = report::render_summary(&summaries, output_format(cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
