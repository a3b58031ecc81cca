use serde::Serialize;
use std::fmt;

/// Attribute used to select a meta tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorKind {
    /// `<meta name="...">`
    Name,
    /// `<meta property="...">` (Open Graph)
    Property,
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorKind::Name => write!(f, "name"),
            SelectorKind::Property => write!(f, "property"),
        }
    }
}

/// A `<meta>` element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaTag {
    pub name: Option<String>,
    pub property: Option<String>,
    /// Value of the `content` attribute, empty when the attribute is missing
    pub content: String,
}

impl MetaTag {
    /// Returns true if the attribute chosen by `kind` equals `value` exactly
    pub fn matches(&self, kind: SelectorKind, value: &str) -> bool {
        let attr = match kind {
            SelectorKind::Name => self.name.as_deref(),
            SelectorKind::Property => self.property.as_deref(),
        };
        attr == Some(value)
    }
}

/// A `<link>` element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkTag {
    pub rel: String,
    pub href: Option<String>,
}

impl LinkTag {
    /// `rel` is a space-separated token list
    pub fn has_rel(&self, relation: &str) -> bool {
        self.rel.split_whitespace().any(|token| token == relation)
    }
}

/// An embedded `application/ld+json` script
#[derive(Debug, Clone)]
pub struct StructuredDataBlock {
    /// Script text as it appears in the page
    pub raw: String,
    /// Parsed JSON, or the parser's message
    pub parsed: Result<serde_json::Value, String>,
}

/// The parts of an HTML page the validators look at
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Text of the first `<title>`, untrimmed. `None` when there is no title element.
    pub title: Option<String>,
    pub meta_tags: Vec<MetaTag>,
    pub links: Vec<LinkTag>,
    pub structured_data: Vec<StructuredDataBlock>,
}

impl Document {
    /// First meta tag in document order matching the selector
    pub fn find_meta(&self, kind: SelectorKind, value: &str) -> Option<&MetaTag> {
        self.meta_tags.iter().find(|tag| tag.matches(kind, value))
    }

    /// First `<link rel="canonical">`, with or without an `href`
    pub fn canonical(&self) -> Option<&LinkTag> {
        self.links.iter().find(|link| link.has_rel("canonical"))
    }

    pub fn has_canonical(&self) -> bool {
        self.canonical().is_some()
    }
}
