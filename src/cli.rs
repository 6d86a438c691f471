use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "profile-health",
    version,
    about = "Health checks and engagement summaries for business profile snapshots"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Load exactly this config file instead of the layered lookup
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the health battery against one snapshot or a directory of them
    Check(CheckCommand),
    /// Print engagement statistics for one snapshot or a directory of them
    Summary(SummaryCommand),
}

#[derive(Args)]
pub struct CheckCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Reference instant for day counts (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    pub now: Option<String>,
    #[arg(long, value_enum)]
    pub locale: Option<LocaleArg>,
    /// Exit with code 2 when an overall score falls below this value
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub fail_under: Option<u8>,
}

#[derive(Args)]
pub struct SummaryCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[arg(long, value_enum)]
    pub locale: Option<LocaleArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LocaleArg {
    En,
    #[value(name = "pt-br", alias = "pt-BR")]
    PtBr,
}
