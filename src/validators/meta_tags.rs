use crate::document::{Document, SelectorKind};
use crate::parsers::html;
use crate::results::ValidationError;
use crate::utils::char_len;

/// Meta tags every page must carry, checked in this order
pub const REQUIRED_META_TAGS: [(SelectorKind, &str); 6] = [
    (SelectorKind::Name, "description"),
    (SelectorKind::Property, "og:title"),
    (SelectorKind::Property, "og:description"),
    (SelectorKind::Property, "og:image"),
    (SelectorKind::Property, "og:url"),
    (SelectorKind::Name, "twitter:card"),
];

/// Inclusive length bounds, in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetaTagRules {
    pub title_min: usize,
    pub title_max: usize,
    pub description_min: usize,
    pub description_max: usize,
}

impl Default for MetaTagRules {
    fn default() -> Self {
        Self {
            title_min: 30,
            title_max: 60,
            description_min: 120,
            description_max: 160,
        }
    }
}

/// Checks title, required meta tags and canonical link of a parsed page
pub fn validate(document: &Document, rules: &MetaTagRules) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Title
    check_title(document.title.as_deref(), rules, &mut errors);

    // Required meta tags, with the description length checked in place
    for (kind, value) in REQUIRED_META_TAGS {
        match document.find_meta(kind, value) {
            None => errors.push(ValidationError::MissingMetaTag {
                selector: kind,
                value: value.to_string(),
            }),
            Some(tag) if kind == SelectorKind::Name && value == "description" => {
                check_description(&tag.content, rules, &mut errors);
            }
            Some(_) => {}
        }
    }

    // Presence is enough, the href is only logged
    match document.canonical() {
        Some(link) => ::log::debug!("Canonical URL: {}", link.href.as_deref().unwrap_or("<none>")),
        None => errors.push(ValidationError::MissingCanonical),
    }

    errors
}

/// Parses and validates raw HTML
pub fn check_html(html_text: &str, rules: &MetaTagRules) -> Vec<ValidationError> {
    validate(&html::parse(html_text), rules)
}

// Emptiness is judged on the trimmed title, length on the title as written.
fn check_title(title: Option<&str>, rules: &MetaTagRules, errors: &mut Vec<ValidationError>) {
    let Some(title) = title.filter(|t| !t.trim().is_empty()) else {
        errors.push(ValidationError::MissingTitle);
        return;
    };

    let length = char_len(title);
    if length < rules.title_min {
        errors.push(ValidationError::TitleTooShort {
            length,
            min: rules.title_min,
        });
    } else if length > rules.title_max {
        errors.push(ValidationError::TitleTooLong {
            length,
            max: rules.title_max,
        });
    }
}

fn check_description(content: &str, rules: &MetaTagRules, errors: &mut Vec<ValidationError>) {
    let length = char_len(content);
    if length < rules.description_min {
        errors.push(ValidationError::DescriptionTooShort {
            length,
            min: rules.description_min,
        });
    } else if length > rules.description_max {
        errors.push(ValidationError::DescriptionTooLong {
            length,
            max: rules.description_max,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(title: &str, description: &str) -> String {
        format!(
            r#"<html><head>
<title>{title}</title>
<meta name="description" content="{description}">
<meta property="og:title" content="Title">
<meta property="og:description" content="Description">
<meta property="og:image" content="https://example.com/og.png">
<meta property="og:url" content="https://example.com/">
<meta name="twitter:card" content="summary_large_image">
<link rel="canonical" href="https://example.com/">
</head><body></body></html>"#
        )
    }

    fn title_errors(title: &str) -> Vec<ValidationError> {
        check_html(&page(title, &"d".repeat(140)), &MetaTagRules::default())
    }

    fn description_errors(description: &str) -> Vec<ValidationError> {
        check_html(&page(&"t".repeat(45), description), &MetaTagRules::default())
    }

    #[test]
    fn test_complete_page_passes() {
        assert!(title_errors(&"t".repeat(45)).is_empty());
    }

    #[test]
    fn test_title_boundaries() {
        assert!(title_errors(&"t".repeat(30)).is_empty());
        assert!(title_errors(&"t".repeat(60)).is_empty());
        assert_eq!(
            title_errors(&"t".repeat(29)),
            vec![ValidationError::TitleTooShort { length: 29, min: 30 }]
        );
        assert_eq!(
            title_errors(&"t".repeat(61)),
            vec![ValidationError::TitleTooLong { length: 61, max: 60 }]
        );
    }

    #[test]
    fn test_blank_title_is_missing() {
        assert_eq!(title_errors(""), vec![ValidationError::MissingTitle]);
        assert_eq!(title_errors("   \n\t "), vec![ValidationError::MissingTitle]);
    }

    #[test]
    fn test_title_length_counts_surrounding_whitespace() {
        // 28 visible characters padded to 30
        let title = format!(" {} ", "t".repeat(28));
        assert!(title_errors(&title).is_empty());
    }

    #[test]
    fn test_title_length_counts_characters() {
        // 30 multi-byte characters
        assert!(title_errors(&"é".repeat(30)).is_empty());
    }

    #[test]
    fn test_missing_title_element() {
        let html = page("x", &"d".repeat(140)).replace("<title>x</title>", "");
        let errors = check_html(&html, &MetaTagRules::default());
        assert_eq!(errors, vec![ValidationError::MissingTitle]);
    }

    #[test]
    fn test_description_boundaries() {
        assert!(description_errors(&"d".repeat(120)).is_empty());
        assert!(description_errors(&"d".repeat(160)).is_empty());
        assert_eq!(
            description_errors(&"d".repeat(119)),
            vec![ValidationError::DescriptionTooShort {
                length: 119,
                min: 120
            }]
        );
        assert_eq!(
            description_errors(&"d".repeat(161)),
            vec![ValidationError::DescriptionTooLong {
                length: 161,
                max: 160
            }]
        );
    }

    #[test]
    fn test_bare_page_reports_everything_in_order() {
        let errors = check_html("<html><head></head></html>", &MetaTagRules::default());
        let mut expected = vec![ValidationError::MissingTitle];
        expected.extend(REQUIRED_META_TAGS.iter().map(|(kind, value)| {
            ValidationError::MissingMetaTag {
                selector: *kind,
                value: value.to_string(),
            }
        }));
        expected.push(ValidationError::MissingCanonical);
        assert_eq!(errors, expected);
    }

    #[test]
    fn test_description_without_content_is_too_short() {
        let html = page(&"t".repeat(45), "x").replace(r#" content="x""#, "");
        let errors = check_html(&html, &MetaTagRules::default());
        assert_eq!(
            errors,
            vec![ValidationError::DescriptionTooShort { length: 0, min: 120 }]
        );
    }

    #[test]
    fn test_og_property_under_name_attribute_does_not_count() {
        let html = page(&"t".repeat(45), &"d".repeat(140)).replace(
            r#"<meta property="og:image""#,
            r#"<meta name="og:image""#,
        );
        let errors = check_html(&html, &MetaTagRules::default());
        assert_eq!(
            errors,
            vec![ValidationError::MissingMetaTag {
                selector: SelectorKind::Property,
                value: "og:image".to_string(),
            }]
        );
    }

    #[test]
    fn test_custom_bounds() {
        let rules = MetaTagRules {
            title_min: 10,
            title_max: 20,
            ..MetaTagRules::default()
        };
        let html = page(&"t".repeat(15), &"d".repeat(140));
        assert!(check_html(&html, &rules).is_empty());
    }
}
