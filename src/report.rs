use crate::results::{FileReport, RunReport, ValidatorKind};
use clap::ValueEnum;
use std::fmt::Write;

/// How a run report is printed
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Renders a report in the requested format
pub fn render(report: &RunReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

pub fn render_json(report: &RunReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Human-readable report: one block per file, then a summary and a banner
pub fn render_text(report: &RunReport) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_text(&mut out, report);
    out
}

fn write_text(out: &mut String, report: &RunReport) -> std::fmt::Result {
    writeln!(out, "🔍 {}\n", report.validator.heading())?;

    for warning in &report.warnings {
        writeln!(out, "⚠️  {}", warning)?;
    }

    for file in &report.files {
        match report.validator {
            ValidatorKind::MetaTags => write_meta_file(out, file)?,
            ValidatorKind::StructuredData => write_schema_file(out, file)?,
            ValidatorKind::Sitemap => write_sitemap_file(out, file)?,
        }
    }

    if report.files.is_empty() {
        writeln!(out)?;
    }

    // Summary
    let summary = &report.summary;
    writeln!(out, "📊 Summary:")?;
    if let Some(urls) = summary.urls_checked {
        writeln!(out, "   URLs checked: {}", urls)?;
    } else {
        writeln!(out, "   Files checked: {}", summary.files_checked)?;
    }
    if let Some(schemas) = summary.schemas_found {
        writeln!(out, "   Schemas found: {}", schemas)?;
        writeln!(out, "   Errors: {}\n", summary.error_count)?;
    } else {
        writeln!(out, "   Total errors: {}\n", summary.error_count)?;
    }

    write_banner(out, report)
}

fn write_banner(out: &mut String, report: &RunReport) -> std::fmt::Result {
    if report.passed() {
        writeln!(out, "✅ {} PASSED", report.validator.banner_name())
    } else {
        writeln!(out, "❌ {} FAILED", report.validator.banner_name())
    }
}

fn write_issue_list(out: &mut String, file: &FileReport) -> std::fmt::Result {
    writeln!(out, "  ❌ {} issues found:", file.errors.len())?;
    for error in &file.errors {
        writeln!(out, "    - {}", error)?;
    }
    Ok(())
}

fn write_meta_file(out: &mut String, file: &FileReport) -> std::fmt::Result {
    writeln!(out, "📄 {}", file.file)?;
    if file.errors.is_empty() {
        writeln!(out, "  ✓ All meta tags present")?;
    } else {
        write_issue_list(out, file)?;
    }
    writeln!(out)
}

fn write_schema_file(out: &mut String, file: &FileReport) -> std::fmt::Result {
    writeln!(out, "📄 {}", file.file)?;
    for error in &file.errors {
        writeln!(out, "  ❌ {}", error)?;
    }
    for warning in &file.warnings {
        writeln!(out, "  ⚠️  {}", warning)?;
    }
    for schema in &file.schemas {
        writeln!(out, "  Schema {}: {}", schema.position, schema.schema_type)?;
        for warning in &schema.warnings {
            writeln!(out, "    ⚠️  {}", warning)?;
        }
        if schema.errors.is_empty() {
            writeln!(out, "    ✓ Valid")?;
        } else {
            writeln!(out, "    ❌ Validation errors:")?;
            for error in &schema.errors {
                writeln!(out, "      - {}", error)?;
            }
        }
    }
    writeln!(out)
}

fn write_sitemap_file(out: &mut String, file: &FileReport) -> std::fmt::Result {
    writeln!(out, "📄 Checking {}", file.file)?;
    if let Some(count) = file.url_count.filter(|c| *c > 0) {
        writeln!(out, "  Found {} URLs", count)?;
    }
    if file.errors.is_empty() {
        writeln!(out, "  ✓ Sitemap is valid")?;
    } else {
        write_issue_list(out, file)?;
    }
    writeln!(out)
}
