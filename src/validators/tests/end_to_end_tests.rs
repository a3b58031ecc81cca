use crate::report::render_text;
use crate::results::ValidationError;
use crate::validators::meta_tags::MetaTagRules;
use crate::validators::{run_meta_tags, run_sitemap};
use std::fs;

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en-AU">
<head>
<title>{TITLE}</title>
<meta name="description" content="{DESCRIPTION}">
<meta property="og:title" content="Emergency Plumbing Brisbane">
<meta property="og:description" content="Licensed plumbers available around the clock.">
<meta property="og:image" content="https://example.com/images/og.jpg">
<meta property="og:url" content="https://example.com/">
<meta name="twitter:card" content="summary_large_image">
<link rel="canonical" href="https://example.com/">
</head>
<body><h1>Plumbing</h1></body>
</html>"#;

    #[test]
    fn test_valid_page_passes() {
        let title = "t".repeat(45);
        let description = "d".repeat(140);
        let page = VALID_PAGE
            .replace("{TITLE}", &title)
            .replace("{DESCRIPTION}", &description);

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), page).unwrap();

        let report = run_meta_tags(dir.path(), &MetaTagRules::default()).unwrap();
        assert_eq!(report.error_count(), 0);
        assert!(report.passed());

        let text = render_text(&report);
        assert!(text.contains("Files checked: 1"));
        assert!(text.contains("Total errors: 0"));
        assert!(text.ends_with("✅ Meta tag check PASSED\n"));
    }

    #[test]
    fn test_sitemap_with_bad_changefreq_fails_once() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>https://example.com/</loc>
    <lastmod>2025-01-15T08:00:00Z</lastmod>
    <changefreq>weekly</changefreq>
    <priority>1.0</priority>
  </url>
  <url>
    <loc>https://example.com/services</loc>
    <lastmod>2025-01-10</lastmod>
    <changefreq>biweekly</changefreq>
    <priority>0.8</priority>
  </url>
</urlset>"#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemap.xml");
        fs::write(&path, xml).unwrap();

        let report = run_sitemap(&path);
        assert_eq!(report.error_count(), 1);
        assert_eq!(
            report.errors().cloned().collect::<Vec<_>>(),
            vec![ValidationError::InvalidChangeFreq {
                index: 2,
                value: "biweekly".to_string()
            }]
        );

        let text = render_text(&report);
        assert!(text.contains("Found 2 URLs"));
        assert!(text.contains("❌ 1 issues found:"));
        assert!(text.contains("- URL 2: Invalid <changefreq>: biweekly"));
        assert!(text.ends_with("❌ Sitemap validation FAILED\n"));
    }

    #[test]
    fn test_urlset_without_urls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemap.xml");
        fs::write(
            &path,
            r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"></urlset>"#,
        )
        .unwrap();

        let report = run_sitemap(&path);
        assert_eq!(
            report.errors().cloned().collect::<Vec<_>>(),
            vec![ValidationError::NoUrlsFound]
        );
    }

    #[test]
    fn test_missing_sitemap_fails() {
        let dir = tempfile::tempdir().unwrap();
        let report = run_sitemap(&dir.path().join("sitemap.xml"));
        assert!(!report.passed());
        assert!(render_text(&report).contains("Sitemap file not found"));
    }

    #[test]
    fn test_sitemap_without_xml_extension_still_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemap.txt");
        fs::write(
            &path,
            r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"><url><loc>https://example.com/</loc></url></urlset>"#,
        )
        .unwrap();

        let report = run_sitemap(&path);
        assert!(report.passed());
        assert_eq!(report.summary.urls_checked, Some(1));
        assert!(render_text(&report).contains("   URLs checked: 1\n"));
    }
}
