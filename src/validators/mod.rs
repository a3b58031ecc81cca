pub mod meta_tags;
pub mod sitemap;
pub mod structured_data;

#[cfg(test)]
mod tests;

use crate::error::Result;
use crate::parsers::ParserType;
use crate::results::{FileReport, RunReport, ValidationError, ValidatorKind, Warning};
use crate::utils::{file_label, html_files};
use meta_tags::MetaTagRules;
use std::path::Path;
use structured_data::SchemaRules;

/// Runs `check` on every HTML file directly inside `root`.
///
/// A missing root holds no pages, so it passes with a warning. A file that
/// cannot be read gets a single `FileUnreadable` error and the scan moves on
/// to the next file.
fn scan_html<F>(root: &Path, validator: ValidatorKind, mut check: F) -> Result<RunReport>
where
    F: FnMut(&str, &mut FileReport),
{
    // Collect pages, treating a missing root like an empty one
    let paths = if root.is_dir() {
        html_files(root)?
    } else {
        ::log::warn!("Root directory {} does not exist", root.display());
        Vec::new()
    };

    if paths.is_empty() {
        ::log::warn!("No HTML files found in {}", root.display());
        return Ok(RunReport::new(validator, Vec::new(), vec![Warning::NoHtmlFiles]));
    }

    ::log::info!("Found {} HTML files in {}", paths.len(), root.display());

    // Check each page, recording read failures against the file
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let mut report = FileReport::new(file_label(&path));
        match std::fs::read_to_string(&path) {
            Ok(text) => check(&text, &mut report),
            Err(e) => {
                ::log::warn!("Failed to read {}: {}", path.display(), e);
                report.errors.push(ValidationError::FileUnreadable {
                    message: e.to_string(),
                });
            }
        }
        ::log::debug!("{}: {} errors", report.file, report.error_count());
        files.push(report);
    }

    Ok(RunReport::new(validator, files, Vec::new()))
}

/// Checks meta tags of every HTML page in `root`
pub fn run_meta_tags(root: &Path, rules: &MetaTagRules) -> Result<RunReport> {
    scan_html(root, ValidatorKind::MetaTags, |text, report| {
        report.errors = meta_tags::check_html(text, rules);
    })
}

/// Checks JSON-LD blocks of every HTML page in `root`
pub fn run_structured_data(root: &Path, rules: &SchemaRules) -> Result<RunReport> {
    scan_html(root, ValidatorKind::StructuredData, |text, report| {
        let (schemas, warnings) = structured_data::check_html(text, rules);
        report.schemas = schemas;
        report.warnings = warnings;
    })
}

/// Checks a single sitemap file
pub fn run_sitemap(path: &Path) -> RunReport {
    if ParserType::from_path(path) != ParserType::Sitemap {
        ::log::warn!("Sitemap {} does not have an .xml extension", path.display());
    }

    let outcome = sitemap::validate_sitemap_file(path);
    ::log::info!(
        "Sitemap {} has {} URLs and {} errors",
        path.display(),
        outcome.url_count,
        outcome.errors.len()
    );

    let mut report = FileReport::new(file_label(path));
    report.url_count = Some(outcome.url_count);
    report.errors = outcome.errors;

    RunReport::new(ValidatorKind::Sitemap, vec![report], Vec::new())
}
