use chrono::NaiveDate;
use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

/// Publication-date collaborator. The extraction pipeline only depends on this
/// seam; callers may plug in a richer implementation.
pub trait DateExtract {
    /// A missing document tree is permitted; implementations must tolerate it.
    fn extract(&self, url: &Url, doc: Option<&Html>) -> Option<NaiveDate>;
}

/// Default heuristic: date-like URL path segments first, then common
/// meta/time markup in the document.
pub struct HeuristicDates;

impl DateExtract for HeuristicDates {
    fn extract(&self, url: &Url, doc: Option<&Html>) -> Option<NaiveDate> {
        from_url_path(url.path()).or_else(|| doc.and_then(from_document))
    }
}

fn from_url_path(path: &str) -> Option<NaiveDate> {
    let re = Regex::new(r"(\d{4})[/-](\d{1,2})[/-](\d{1,2})").ok()?;
    let caps = re.captures(path)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

// attribute carrying the date value, per selector
const DOC_DATE_SELECTORS: &[(&str, &str)] = &[
    (r#"meta[property="article:published_time"]"#, "content"),
    (r#"meta[name="date"]"#, "content"),
    (r#"meta[name="dcterms.date"]"#, "content"),
    ("time[datetime]", "datetime"),
];

fn from_document(doc: &Html) -> Option<NaiveDate> {
    for (sel_str, attr) in DOC_DATE_SELECTORS {
        let Ok(sel) = Selector::parse(sel_str) else {
            continue;
        };
        if let Some(value) = doc.select(&sel).next().and_then(|n| n.value().attr(attr)) {
            if let Some(date) = parse_date_value(value.trim()) {
                return Some(date);
            }
        }
    }
    None
}

fn parse_date_value(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(s.get(..10)?, "%Y-%m-%d").ok()
}
