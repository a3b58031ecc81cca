use crate::document::SelectorKind;
use serde::Serialize;
use thiserror::Error;

/// A rule violation. Every variant counts toward the failing total.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Missing or empty <title> tag")]
    MissingTitle,

    #[error("Title too short: {length} chars (min {min})")]
    TitleTooShort { length: usize, min: usize },

    #[error("Title too long: {length} chars (max {max})")]
    TitleTooLong { length: usize, max: usize },

    #[error("Missing meta tag: {selector}=\"{value}\"")]
    MissingMetaTag { selector: SelectorKind, value: String },

    #[error("Description too short: {length} chars (min {min})")]
    DescriptionTooShort { length: usize, min: usize },

    #[error("Description too long: {length} chars (max {max})")]
    DescriptionTooLong { length: usize, max: usize },

    #[error("Missing canonical URL")]
    MissingCanonical,

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Could not read file: {message}")]
    FileUnreadable { message: String },

    #[error("Sitemap file not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid XML: {message}")]
    InvalidXml { message: String },

    #[error("No URLs found in sitemap")]
    NoUrlsFound,

    #[error("URL {index}: Missing <loc> element")]
    MissingLocation { index: usize },

    #[error("URL {index}: Invalid URL format: {url}")]
    InvalidUrlFormat { index: usize, url: String },

    #[error("URL {index}: Invalid date format in <lastmod>: {value}")]
    InvalidDateFormat { index: usize, value: String },

    #[error("URL {index}: Invalid <changefreq>: {value}")]
    InvalidChangeFreq { index: usize, value: String },

    #[error("URL {index}: Invalid <priority> value: {value}")]
    InvalidPriorityValue { index: usize, value: String },

    #[error("URL {index}: Priority must be between 0.0 and 1.0: {value:?}")]
    PriorityOutOfRange { index: usize, value: f64 },
}

/// A notice that is reported but never fails a run
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    #[error("No HTML files found")]
    NoHtmlFiles,

    #[error("No JSON-LD schemas found")]
    NoStructuredData,

    #[error("Invalid JSON-LD: {message}")]
    InvalidJsonLd { message: String },

    #[error("JSON-LD block is not an object")]
    NotAnObject,

    #[error("No required-field rules for schema type: {schema_type}")]
    UnrecognizedSchemaType { schema_type: String },
}

/// Which validator produced a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidatorKind {
    MetaTags,
    StructuredData,
    Sitemap,
}

impl ValidatorKind {
    /// Line printed when the run starts
    pub fn heading(&self) -> &'static str {
        match self {
            ValidatorKind::MetaTags => "Checking meta tags...",
            ValidatorKind::StructuredData => "Validating schema markup...",
            ValidatorKind::Sitemap => "Validating sitemap...",
        }
    }

    /// Name used in the pass/fail banner
    pub fn banner_name(&self) -> &'static str {
        match self {
            ValidatorKind::MetaTags => "Meta tag check",
            ValidatorKind::StructuredData => "Schema validation",
            ValidatorKind::Sitemap => "Sitemap validation",
        }
    }
}

/// Field check of one JSON-LD block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaReport {
    /// 1-based position among the page's valid blocks
    pub position: usize,
    /// `@type` as written, or `Unknown`
    pub schema_type: String,
    pub errors: Vec<ValidationError>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<Warning>,
}

/// Outcome for a single audited file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    pub file: String,
    /// Errors about the file as a whole
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<Warning>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub schemas: Vec<SchemaReport>,
    /// Number of `<url>` entries (sitemaps only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_count: Option<usize>,
}

impl FileReport {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            errors: Vec::new(),
            warnings: Vec::new(),
            schemas: Vec::new(),
            url_count: None,
        }
    }

    /// File-level errors plus the errors of every schema block
    pub fn error_count(&self) -> usize {
        self.errors.len() + self.schemas.iter().map(|s| s.errors.len()).sum::<usize>()
    }
}

/// Counts shown at the end of a run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub files_checked: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemas_found: Option<usize>,
    /// `<url>` entries across sitemaps (sitemap runs only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls_checked: Option<usize>,
    pub error_count: usize,
    pub passed: bool,
}

/// Result of running one validator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub validator: ValidatorKind,
    pub files: Vec<FileReport>,
    /// Notices about the run as a whole
    pub warnings: Vec<Warning>,
    pub summary: Summary,
}

impl RunReport {
    pub fn new(validator: ValidatorKind, files: Vec<FileReport>, warnings: Vec<Warning>) -> Self {
        let error_count = files.iter().map(FileReport::error_count).sum();
        let schemas_found = match validator {
            ValidatorKind::StructuredData => Some(files.iter().map(|f| f.schemas.len()).sum()),
            _ => None,
        };
        let urls_checked = match validator {
            ValidatorKind::Sitemap => Some(files.iter().filter_map(|f| f.url_count).sum()),
            _ => None,
        };
        let summary = Summary {
            files_checked: files.len(),
            schemas_found,
            urls_checked,
            error_count,
            passed: error_count == 0,
        };

        Self {
            validator,
            files,
            warnings,
            summary,
        }
    }

    pub fn passed(&self) -> bool {
        self.summary.passed
    }

    pub fn error_count(&self) -> usize {
        self.summary.error_count
    }

    /// All errors of the run, flattened in report order
    pub fn errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.files.iter().flat_map(|f| {
            f.errors
                .iter()
                .chain(f.schemas.iter().flat_map(|s| s.errors.iter()))
        })
    }
}
