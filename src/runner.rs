use crate::args::CommonArgs;
use crate::config::AuditConfig;
use crate::error::Result;
use crate::report::{self, OutputFormat};
use crate::results::{RunReport, ValidatorKind};
use crate::validators;
use std::process::ExitCode;

/// Exit status when every validator passed
pub const EXIT_PASSED: u8 = 0;
/// Exit status when validation found errors
pub const EXIT_FAILED: u8 = 1;
/// Exit status when the run could not start
pub const EXIT_UNUSABLE: u8 = 2;

/// Builds the effective configuration from the config file and flags
pub fn load_config(args: &CommonArgs) -> Result<AuditConfig> {
    let mut config = match &args.config {
        Some(path) => {
            ::log::info!("Loading configuration from {}", path.display());
            AuditConfig::from_file(path)?
        }
        None => AuditConfig::default(),
    };

    if let Some(root) = &args.root {
        config.root_dir = root.clone();
    }

    Ok(config)
}

/// Runs one validator against the configured root
pub fn run_validator(kind: ValidatorKind, config: &AuditConfig) -> Result<RunReport> {
    ::log::info!("Running {} in {}", kind.banner_name(), config.root_dir.display());
    match kind {
        ValidatorKind::MetaTags => {
            validators::run_meta_tags(&config.root_dir, &config.meta_tag_rules())
        }
        ValidatorKind::StructuredData => {
            validators::run_structured_data(&config.root_dir, &config.schema_rules())
        }
        ValidatorKind::Sitemap => Ok(validators::run_sitemap(&config.sitemap_path())),
    }
}

/// Runs validators in order, printing each report, and returns the process exit code
pub fn execute(kinds: &[ValidatorKind], args: &CommonArgs) -> ExitCode {
    let config = match load_config(args) {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            return ExitCode::from(EXIT_UNUSABLE);
        }
    };

    // Run every validator, even after a failure
    let mut all_passed = true;
    for &kind in kinds {
        let report = match run_validator(kind, &config) {
            Ok(report) => report,
            Err(e) => {
                ::log::error!("{} could not run: {}", kind.banner_name(), e);
                return ExitCode::from(EXIT_UNUSABLE);
            }
        };

        if let Err(e) = print_report(&report, args.format) {
            ::log::error!("Failed to render report: {}", e);
            return ExitCode::from(EXIT_UNUSABLE);
        }

        all_passed &= report.passed();
    }

    if all_passed {
        ExitCode::from(EXIT_PASSED)
    } else {
        ExitCode::from(EXIT_FAILED)
    }
}

fn print_report(report: &RunReport, format: OutputFormat) -> serde_json::Result<()> {
    let rendered = report::render(report, format)?;
    println!("{}", rendered);
    Ok(())
}
