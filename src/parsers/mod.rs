pub mod html;
pub mod sitemap;


use std::path::Path;

/// Kind of artifact a file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserType {
    /// HTML page
    Html,
    /// XML sitemap
    Sitemap,
    /// Anything the validators do not read
    Other,
}

impl ParserType {
    /// Determines the parser type from the file extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("html") => ParserType::Html,
            Some("xml") => ParserType::Sitemap,
            _ => ParserType::Other,
        }
    }
}
