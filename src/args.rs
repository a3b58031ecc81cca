use crate::report::OutputFormat;
use crate::results::ValidatorKind;
use clap::{CommandFactory, FromArgMatches, Parser, ValueEnum};
use std::path::PathBuf;

/// Flags shared by every validator binary
#[derive(clap::Args, Debug, Clone)]
pub struct CommonArgs {
    /// Project root holding the HTML pages and sitemap (overrides the config file)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments of the combined runner
#[derive(Parser, Debug)]
#[command(name = "site-audit")]
#[command(about = "Validate SEO meta tags, JSON-LD structured data and the XML sitemap")]
#[command(version)]
pub struct AuditArgs {
    /// Which validator to run
    #[arg(value_enum, default_value_t = CheckArg::All)]
    pub check: CheckArg,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments of the single-validator binaries
#[derive(Parser, Debug)]
#[command(version)]
pub struct ValidatorArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl ValidatorArgs {
    /// Parse process arguments, showing `name` in usage and help
    pub fn parse_named(name: &'static str, about: &'static str) -> Self {
        let matches = Self::command().name(name).about(about).get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CheckArg {
    MetaTags,
    Schema,
    Sitemap,
    All,
}

/// Convert from the CLI check selection to the validators to run
pub fn convert_check(arg: CheckArg) -> Vec<ValidatorKind> {
    match arg {
        CheckArg::MetaTags => vec![ValidatorKind::MetaTags],
        CheckArg::Schema => vec![ValidatorKind::StructuredData],
        CheckArg::Sitemap => vec![ValidatorKind::Sitemap],
        CheckArg::All => vec![
            ValidatorKind::MetaTags,
            ValidatorKind::StructuredData,
            ValidatorKind::Sitemap,
        ],
    }
}
