use crate::parsers::sitemap::{self, SitemapEntry};
use crate::results::ValidationError;
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Values accepted in `<changefreq>`
pub const VALID_CHANGEFREQS: [&str; 7] = [
    "always", "hourly", "daily", "weekly", "monthly", "yearly", "never",
];

static ISO_8601: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<y>[0-9]{4})-(?P<mo>[0-9]{2})-(?P<d>[0-9]{2})(?:[T ](?P<h>[0-9]{2})(?::(?P<mi>[0-9]{2})(?::(?P<s>[0-9]{2})(?:\.[0-9]{1,9})?)?)?(?:(?P<sign>[+-])(?P<oh>[0-9]{2}):(?P<om>[0-9]{2}))?)?$",
    )
    .expect("ISO 8601 pattern should be valid")
});

/// Result of validating a sitemap document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SitemapOutcome {
    /// Number of `<url>` entries found (0 when the document could not be read)
    pub url_count: usize,
    pub errors: Vec<ValidationError>,
}

impl SitemapOutcome {
    fn fatal(error: ValidationError) -> Self {
        Self {
            url_count: 0,
            errors: vec![error],
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parses an ISO 8601 date or date-time, treating `Z` as `+00:00`.
///
/// The offset is validated but not applied; the local wall-clock time is returned.
pub fn parse_iso8601(text: &str) -> Option<NaiveDateTime> {
    // Match the shape first, then check the numbers against the calendar
    let normalized = text.replace('Z', "+00:00");
    let caps = ISO_8601.captures(&normalized)?;
    let num = |name: &str| caps.name(name).map(|m| m.as_str().parse::<u32>().ok());

    let date = NaiveDate::from_ymd_opt(
        caps["y"].parse().ok()?,
        caps["mo"].parse().ok()?,
        caps["d"].parse().ok()?,
    )?;

    let time = match num("h") {
        None => NaiveTime::from_hms_opt(0, 0, 0)?,
        Some(hour) => NaiveTime::from_hms_opt(
            hour?,
            num("mi").unwrap_or(Some(0))?,
            num("s").unwrap_or(Some(0))?,
        )?,
    };

    if let (Some(oh), Some(om)) = (num("oh"), num("om")) {
        let (oh, om) = (oh?, om?);
        if om >= 60 {
            return None;
        }
        let seconds = (oh * 3600 + om * 60) as i32;
        let seconds = if &caps["sign"] == "-" { -seconds } else { seconds };
        FixedOffset::east_opt(seconds)?;
    }

    Some(date.and_time(time))
}

/// Checks one entry. A missing `<loc>` suppresses every other check.
pub fn validate_entry(entry: &SitemapEntry) -> Vec<ValidationError> {
    let index = entry.index;
    let mut errors = Vec::new();

    let Some(url) = entry.loc.as_deref().filter(|loc| !loc.is_empty()) else {
        errors.push(ValidationError::MissingLocation { index });
        return errors;
    };

    // URL scheme
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        errors.push(ValidationError::InvalidUrlFormat {
            index,
            url: url.to_string(),
        });
    }

    // Optional fields, checked only when present
    if let Some(lastmod) = entry.lastmod.as_deref().filter(|t| !t.is_empty()) {
        if parse_iso8601(lastmod).is_none() {
            errors.push(ValidationError::InvalidDateFormat {
                index,
                value: lastmod.to_string(),
            });
        }
    }

    if let Some(changefreq) = entry.changefreq.as_deref() {
        if !VALID_CHANGEFREQS.contains(&changefreq) {
            errors.push(ValidationError::InvalidChangeFreq {
                index,
                value: changefreq.to_string(),
            });
        }
    }

    if let Some(priority) = entry.priority.as_deref() {
        match priority.trim().parse::<f64>() {
            Ok(value) if !(0.0..=1.0).contains(&value) => {
                errors.push(ValidationError::PriorityOutOfRange { index, value });
            }
            Ok(_) => {}
            Err(_) => errors.push(ValidationError::InvalidPriorityValue {
                index,
                value: priority.to_string(),
            }),
        }
    }

    errors
}

/// Validates a sitemap held in memory
pub fn validate_sitemap_str(xml: &str) -> SitemapOutcome {
    let entries = match sitemap::parse(xml) {
        Ok(entries) => entries,
        Err(e) => {
            return SitemapOutcome::fatal(ValidationError::InvalidXml {
                message: e.to_string(),
            });
        }
    };

    // An empty urlset is fatal
    if entries.is_empty() {
        return SitemapOutcome::fatal(ValidationError::NoUrlsFound);
    }

    SitemapOutcome {
        url_count: entries.len(),
        errors: entries.iter().flat_map(validate_entry).collect(),
    }
}

/// Reads and validates a sitemap file
pub fn validate_sitemap_file(path: &Path) -> SitemapOutcome {
    if !path.exists() {
        return SitemapOutcome::fatal(ValidationError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    match std::fs::read_to_string(path) {
        Ok(xml) => validate_sitemap_str(&xml),
        Err(e) => {
            ::log::warn!("Failed to read {}: {}", path.display(), e);
            SitemapOutcome::fatal(ValidationError::FileUnreadable {
                message: e.to_string(),
            })
        }
    }
}
