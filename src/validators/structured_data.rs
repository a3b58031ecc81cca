use crate::document::StructuredDataBlock;
use crate::parsers::html;
use crate::results::{SchemaReport, ValidationError, Warning};
use crate::utils::char_len;
use serde_json::{Map, Value};

/// Label used when a block has no string `@type`
pub const UNKNOWN_TYPE: &str = "Unknown";

/// Required fields for the schema types we know about
pub fn required_fields(schema_type: &str) -> Option<&'static [&'static str]> {
    match schema_type {
        "LocalBusiness" => Some(&["@type", "name", "address", "telephone"]),
        "Organization" => Some(&["@type", "name", "url"]),
        "WebSite" => Some(&["@type", "name", "url"]),
        "FAQPage" => Some(&["@type", "mainEntity"]),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaRules {
    /// Emit a warning for types missing from [`required_fields`]
    pub warn_unknown_types: bool,
}

impl Default for SchemaRules {
    fn default() -> Self {
        Self {
            warn_unknown_types: true,
        }
    }
}

/// Result of checking one record against the required-field table
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaCheck {
    /// The type has rules; `errors` lists the absent fields
    Checked {
        schema_type: String,
        errors: Vec<ValidationError>,
    },
    /// No rules exist for this type, so nothing was enforced
    Unrecognized { schema_type: String },
}

impl SchemaCheck {
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            SchemaCheck::Checked { errors, .. } => errors,
            SchemaCheck::Unrecognized { .. } => &[],
        }
    }
}

/// Display label for a record's `@type`
pub fn type_label(record: &Map<String, Value>) -> String {
    match record.get("@type") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => UNKNOWN_TYPE.to_string(),
    }
}

/// Checks a record for the fields its `@type` requires.
///
/// Presence is key presence; a `null` value counts as present.
pub fn validate_record(record: &Map<String, Value>) -> SchemaCheck {
    let schema_type = type_label(record);
    let rules = record
        .get("@type")
        .and_then(Value::as_str)
        .and_then(required_fields);

    match rules {
        Some(fields) => SchemaCheck::Checked {
            errors: fields
                .iter()
                .filter(|field| !record.contains_key(**field))
                .map(|field| ValidationError::MissingField {
                    field: field.to_string(),
                })
                .collect(),
            schema_type,
        },
        None => SchemaCheck::Unrecognized { schema_type },
    }
}

/// Validates every extracted block.
///
/// Returns the per-block reports and the file-level warnings. Blocks that
/// fail to parse, or are not JSON objects, only produce warnings.
pub fn validate_blocks(
    blocks: &[StructuredDataBlock],
    rules: &SchemaRules,
) -> (Vec<SchemaReport>, Vec<Warning>) {
    let mut reports = Vec::new();
    let mut warnings = Vec::new();

    for block in blocks {
        // Only JSON objects are field-checked
        let record = match &block.parsed {
            Err(message) => {
                ::log::debug!(
                    "Skipping JSON-LD block of {} chars: {}",
                    char_len(&block.raw),
                    message
                );
                warnings.push(Warning::InvalidJsonLd {
                    message: message.clone(),
                });
                continue;
            }
            Ok(Value::Object(record)) => record,
            Ok(_) => {
                warnings.push(Warning::NotAnObject);
                continue;
            }
        };

        // Validate fields, warning on types without rules
        let check = validate_record(record);
        let mut block_warnings = Vec::new();
        let schema_type = match &check {
            SchemaCheck::Checked { schema_type, .. } => schema_type.clone(),
            SchemaCheck::Unrecognized { schema_type } => {
                if rules.warn_unknown_types {
                    block_warnings.push(Warning::UnrecognizedSchemaType {
                        schema_type: schema_type.clone(),
                    });
                }
                schema_type.clone()
            }
        };

        reports.push(SchemaReport {
            position: reports.len() + 1,
            schema_type,
            errors: check.errors().to_vec(),
            warnings: block_warnings,
        });
    }

    if reports.is_empty() {
        warnings.push(Warning::NoStructuredData);
    }

    (reports, warnings)
}

/// Extracts and validates the JSON-LD blocks of raw HTML
pub fn check_html(html_text: &str, rules: &SchemaRules) -> (Vec<SchemaReport>, Vec<Warning>) {
    let blocks = html::parse_structured_data(html_text);
    validate_blocks(&blocks, rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    fn missing(field: &str) -> ValidationError {
        ValidationError::MissingField {
            field: field.to_string(),
        }
    }

    #[test]
    fn test_local_business_missing_telephone() {
        let check = validate_record(&record(json!({
            "@context": "https://schema.org",
            "@type": "LocalBusiness",
            "name": "Acme Plumbing",
            "address": {"@type": "PostalAddress", "addressLocality": "Brisbane"}
        })));
        assert_eq!(check.errors(), &[missing("telephone")]);
    }

    #[test]
    fn test_missing_fields_in_table_order() {
        let check = validate_record(&record(json!({"@type": "LocalBusiness"})));
        assert_eq!(
            check.errors(),
            &[missing("name"), missing("address"), missing("telephone")]
        );
    }

    #[test]
    fn test_each_known_type() {
        for (schema_type, fields) in [
            ("Organization", vec!["name", "url"]),
            ("WebSite", vec!["name", "url"]),
            ("FAQPage", vec!["mainEntity"]),
        ] {
            let check = validate_record(&record(json!({ "@type": schema_type })));
            let expected: Vec<_> = fields.into_iter().map(missing).collect();
            assert_eq!(check.errors(), expected.as_slice(), "type {}", schema_type);
        }
    }

    #[test]
    fn test_null_value_counts_as_present() {
        let check = validate_record(&record(json!({
            "@type": "Organization",
            "name": null,
            "url": "https://example.com"
        })));
        assert!(check.errors().is_empty());
    }

    #[test]
    fn test_unrecognized_type_has_no_errors() {
        let check = validate_record(&record(json!({"@type": "Recipe"})));
        assert_eq!(
            check,
            SchemaCheck::Unrecognized {
                schema_type: "Recipe".to_string()
            }
        );
        assert!(check.errors().is_empty());
    }

    #[test]
    fn test_type_labels() {
        assert_eq!(type_label(&record(json!({}))), "Unknown");
        assert_eq!(
            type_label(&record(json!({"@type": ["Organization", "Brand"]}))),
            r#"["Organization","Brand"]"#
        );
    }

    #[test]
    fn test_check_html_mixed_blocks() {
        let html = r#"<html><head>
<script type="application/ld+json">{"@type": "Organization", "name": "Acme"}</script>
<script type="application/ld+json">{"@type": "Recipe"}</script>
<script type="application/ld+json">not json</script>
</head></html>"#;
        let (reports, warnings) = check_html(html, &SchemaRules::default());

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].position, 1);
        assert_eq!(reports[0].schema_type, "Organization");
        assert_eq!(reports[0].errors, vec![missing("url")]);
        assert_eq!(reports[1].schema_type, "Recipe");
        assert!(reports[1].errors.is_empty());
        assert_eq!(
            reports[1].warnings,
            vec![Warning::UnrecognizedSchemaType {
                schema_type: "Recipe".to_string()
            }]
        );

        assert_eq!(warnings.len(), 1);
        assert!(matches!(warnings[0], Warning::InvalidJsonLd { .. }));
    }

    #[test]
    fn test_unknown_type_warning_can_be_disabled() {
        let html = r#"<script type="application/ld+json">{"@type": "Recipe"}</script>"#;
        let rules = SchemaRules {
            warn_unknown_types: false,
        };
        let (reports, warnings) = check_html(html, &rules);
        assert_eq!(reports.len(), 1);
        assert!(reports[0].warnings.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_page_without_blocks_warns() {
        let (reports, warnings) = check_html("<html></html>", &SchemaRules::default());
        assert!(reports.is_empty());
        assert_eq!(warnings, vec![Warning::NoStructuredData]);
    }

    #[test]
    fn test_array_block_is_not_validated() {
        let html = r#"<script type="application/ld+json">[{"@type": "Organization"}]</script>"#;
        let (reports, warnings) = check_html(html, &SchemaRules::default());
        assert!(reports.is_empty());
        assert_eq!(warnings, vec![Warning::NotAnObject, Warning::NoStructuredData]);
    }
}
