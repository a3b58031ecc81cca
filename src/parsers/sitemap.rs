use roxmltree::Node;

/// XML namespace of the sitemap protocol
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// One `<url>` entry of a sitemap.
///
/// Each optional field is `None` when the element is absent and
/// `Some("")` when the element exists without text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SitemapEntry {
    /// 1-based position in document order
    pub index: usize,
    pub loc: Option<String>,
    pub lastmod: Option<String>,
    pub changefreq: Option<String>,
    pub priority: Option<String>,
}

/// Parses a sitemap document into its `<url>` entries.
///
/// Only elements in the sitemap namespace are considered. `<url>` elements
/// may appear anywhere below the root; their fields must be direct children.
pub fn parse(xml: &str) -> Result<Vec<SitemapEntry>, roxmltree::Error> {
    let doc = roxmltree::Document::parse(xml)?;
    let root = doc.root_element();

    let entries = root
        .descendants()
        .filter(|n| *n != root && n.has_tag_name((SITEMAP_NS, "url")))
        .enumerate()
        .map(|(i, url)| SitemapEntry {
            index: i + 1,
            loc: child_text(url, "loc"),
            lastmod: child_text(url, "lastmod"),
            changefreq: child_text(url, "changefreq"),
            priority: child_text(url, "priority"),
        })
        .collect::<Vec<_>>();

    ::log::debug!("Sitemap parser found {} url entries", entries.len());
    Ok(entries)
}

/// Text of the first `name` child, up to its first child element.
/// Comments and processing instructions are skipped.
fn child_text(parent: Node<'_, '_>, name: &str) -> Option<String> {
    let child = parent
        .children()
        .find(|c| c.has_tag_name((SITEMAP_NS, name)))?;

    Some(
        child
            .children()
            .take_while(|n| !n.is_element())
            .filter(|n| n.is_text())
            .filter_map(|n| n.text())
            .collect(),
    )
}
