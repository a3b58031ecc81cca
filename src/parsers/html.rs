use crate::document::{Document, LinkTag, MetaTag, StructuredDataBlock};
use scraper::{Html, Selector};

/// Content type of embedded structured-data scripts
pub const JSON_LD_TYPE: &str = "application/ld+json";

/// Parses an HTML page into the elements the validators inspect
pub fn parse(html: &str) -> Document {
    let doc = Html::parse_document(html);

    // Extract the elements the validators look at
    let document = Document {
        title: extract_title(&doc),
        meta_tags: extract_meta_tags(&doc),
        links: extract_links(&doc),
        structured_data: extract_json_ld(&doc),
    };

    ::log::debug!(
        "HTML parser found {} meta tags, {} links, {} JSON-LD blocks",
        document.meta_tags.len(),
        document.links.len(),
        document.structured_data.len()
    );

    document
}

/// Extracts only the JSON-LD blocks of a page
pub fn parse_structured_data(html: &str) -> Vec<StructuredDataBlock> {
    let doc = Html::parse_document(html);
    extract_json_ld(&doc)
}

fn extract_title(doc: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").unwrap();
    doc.select(&title_selector)
        .next()
        .map(|e| e.text().collect::<String>())
}

fn extract_meta_tags(doc: &Html) -> Vec<MetaTag> {
    let meta_selector = Selector::parse("meta").unwrap();
    doc.select(&meta_selector)
        .map(|e| {
            let el = e.value();
            MetaTag {
                name: el.attr("name").map(str::to_string),
                property: el.attr("property").map(str::to_string),
                content: el.attr("content").unwrap_or_default().to_string(),
            }
        })
        .collect()
}

fn extract_links(doc: &Html) -> Vec<LinkTag> {
    let link_selector = Selector::parse("link").unwrap();
    doc.select(&link_selector)
        .map(|e| {
            let el = e.value();
            LinkTag {
                rel: el.attr("rel").unwrap_or_default().to_string(),
                href: el.attr("href").map(str::to_string),
            }
        })
        .collect()
}

fn extract_json_ld(doc: &Html) -> Vec<StructuredDataBlock> {
    let script_selector = Selector::parse("script").unwrap();
    doc.select(&script_selector)
        .filter(|e| e.value().attr("type") == Some(JSON_LD_TYPE))
        .map(|e| {
            // Keep the text as written, even when it is not valid JSON
            let raw = e.text().collect::<String>();
            let parsed = serde_json::from_str(&raw).map_err(|err| err.to_string());
            if let Err(message) = &parsed {
                ::log::debug!("JSON-LD block failed to parse: {}", message);
            }
            StructuredDataBlock { raw, parsed }
        })
        .collect()
}
