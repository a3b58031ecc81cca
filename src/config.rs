use crate::error::{AuditError, Result};
use crate::validators::meta_tags::MetaTagRules;
use crate::validators::structured_data::SchemaRules;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Configuration shared by all validators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Project root holding the HTML pages and the sitemap
    #[serde(default = "default_root_dir")]
    pub root_dir: PathBuf,

    /// Sitemap file name, relative to the root directory
    #[serde(default = "default_sitemap_file")]
    pub sitemap_file: String,

    /// Minimum title length in characters
    #[serde(default = "default_title_min")]
    pub title_min: usize,

    /// Maximum title length in characters
    #[serde(default = "default_title_max")]
    pub title_max: usize,

    /// Minimum meta description length in characters
    #[serde(default = "default_description_min")]
    pub description_min: usize,

    /// Maximum meta description length in characters
    #[serde(default = "default_description_max")]
    pub description_max: usize,

    /// Whether JSON-LD blocks with an unrecognized @type produce a warning
    #[serde(default = "default_warn_unknown_schema_types")]
    pub warn_unknown_schema_types: bool,
}

/// Default value for root_dir
fn default_root_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Default value for sitemap_file
fn default_sitemap_file() -> String {
    "sitemap.xml".to_string()
}

fn default_title_min() -> usize {
    30
}

fn default_title_max() -> usize {
    60
}

fn default_description_min() -> usize {
    120
}

fn default_description_max() -> usize {
    160
}

fn default_warn_unknown_schema_types() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            sitemap_file: default_sitemap_file(),
            title_min: default_title_min(),
            title_max: default_title_max(),
            description_min: default_description_min(),
            description_max: default_description_max(),
            warn_unknown_schema_types: default_warn_unknown_schema_types(),
        }
    }
}

impl AuditConfig {
    /// Create a configuration with default values for the given root directory
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject bounds that no input could satisfy
    pub fn validate(&self) -> Result<()> {
        if self.title_min > self.title_max {
            return Err(AuditError::Config(format!(
                "title_min ({}) is greater than title_max ({})",
                self.title_min, self.title_max
            )));
        }
        if self.description_min > self.description_max {
            return Err(AuditError::Config(format!(
                "description_min ({}) is greater than description_max ({})",
                self.description_min, self.description_max
            )));
        }
        if self.sitemap_file.trim().is_empty() {
            return Err(AuditError::Config("sitemap_file is empty".to_string()));
        }
        Ok(())
    }

    /// Full path of the sitemap file
    pub fn sitemap_path(&self) -> PathBuf {
        self.root_dir.join(&self.sitemap_file)
    }

    pub fn meta_tag_rules(&self) -> MetaTagRules {
        MetaTagRules {
            title_min: self.title_min,
            title_max: self.title_max,
            description_min: self.description_min,
            description_max: self.description_max,
        }
    }

    pub fn schema_rules(&self) -> SchemaRules {
        SchemaRules {
            warn_unknown_types: self.warn_unknown_schema_types,
        }
    }
}
