use scraper::{Html, Selector};
use url::Url;

use crate::date::DateExtract;
use crate::domain;
use crate::fetch::resource::{Classification, FetchedResource};
use crate::pdf;

use super::types::WebInfoRecord;

/// Default field-extraction strategy for arbitrary HTML/PDF resources.
/// Every field is answered independently; no field blocks another.
pub fn extract(res: &FetchedResource, dates: &dyn DateExtract) -> WebInfoRecord {
    let doc = res.document();
    WebInfoRecord {
        source_raw: domain::registrable_label(res.url()),
        author_raw: author(doc.as_ref()),
        title: title(res),
        date: dates.extract(res.url(), doc.as_ref()),
        country: country(doc.as_ref()),
        website: domain::website(res.url()),
        url: res.url().as_str().to_string(),
    }
}

fn title(res: &FetchedResource) -> Option<String> {
    match res.classification() {
        Classification::Html { title, .. } => title.clone(),
        Classification::Pdf { staged } => match pdf::detect_title(staged) {
            Ok(title) => Some(title),
            Err(err) => {
                tracing::debug!(error = %err, "pdf title detection failed, using filename");
                file_name_from_url(res.url())
            }
        },
        Classification::Unknown => None,
    }
}

fn file_name_from_url(url: &Url) -> Option<String> {
    url.path_segments()?
        .filter(|seg| !seg.is_empty())
        .last()
        .map(str::to_string)
}

// Two known site markup conventions; first hit wins.
fn country(doc: Option<&Html>) -> Option<String> {
    let doc = doc?;
    select_text(doc, ".primary-country .country a").or_else(|| select_text(doc, ".country"))
}

fn author(doc: Option<&Html>) -> Option<String> {
    select_text(doc?, "footer .meta .source li")
}

/// First match's trimmed text for a CSS selector, or None.
pub(super) fn select_text(doc: &Html, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).ok()?;
    let node = doc.select(&sel).next()?;
    let text = node.text().collect::<String>();
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    struct NoDates;
    impl DateExtract for NoDates {
        fn extract(&self, _url: &Url, _doc: Option<&Html>) -> Option<NaiveDate> {
            None
        }
    }

    struct FixedDate(NaiveDate);
    impl DateExtract for FixedDate {
        fn extract(&self, _url: &Url, _doc: Option<&Html>) -> Option<NaiveDate> {
            Some(self.0)
        }
    }

    fn html_resource(url: &str, raw: &str, title: Option<&str>) -> FetchedResource {
        FetchedResource::new(
            Url::parse(url).unwrap(),
            Classification::Html {
                raw: raw.to_string(),
                title: title.map(str::to_string),
            },
        )
    }

    #[test]
    fn full_record_from_html_resource() {
        let res = html_resource(
            "https://news.example.com/articles/my-story",
            r#"<html><body><div class="country"><a>Colombia</a></div></body></html>"#,
            Some("My Story"),
        );
        let date = NaiveDate::from_ymd_opt(2021, 7, 9).unwrap();
        let record = extract(&res, &FixedDate(date));

        assert_eq!(record.title.as_deref(), Some("My Story"));
        assert_eq!(record.country.as_deref(), Some("Colombia"));
        assert_eq!(record.website, "news.example.com");
        assert_eq!(record.source_raw.as_deref(), Some("example"));
        assert_eq!(record.url, "https://news.example.com/articles/my-story");
        assert_eq!(record.date, Some(date));
        assert_eq!(record.author_raw, None);
    }

    #[test]
    fn primary_country_selector_wins() {
        let res = html_resource(
            "https://example.org/a",
            r#"<html><body>
            <div class="primary-country"><span class="country"><a> Honduras </a></span></div>
            <div class="country"><a>Colombia</a></div>
            </body></html>"#,
            None,
        );
        let record = extract(&res, &NoDates);
        assert_eq!(record.country.as_deref(), Some("Honduras"));
    }

    #[test]
    fn secondary_country_selector_as_fallback() {
        let res = html_resource(
            "https://example.org/a",
            r#"<html><body><div class="country"><a>Colombia</a></div></body></html>"#,
            None,
        );
        let record = extract(&res, &NoDates);
        assert_eq!(record.country.as_deref(), Some("Colombia"));
    }

    #[test]
    fn country_absent_when_no_selector_matches() {
        let res = html_resource(
            "https://example.org/a",
            "<html><body><p>no markup</p></body></html>",
            None,
        );
        let record = extract(&res, &NoDates);
        assert_eq!(record.country, None);
    }

    #[test]
    fn author_from_footer_source_list() {
        let res = html_resource(
            "https://example.org/a",
            r#"<html><body><footer><div class="meta">
            <ul class="source"><li> Agencia EFE </li><li>Other</li></ul>
            </div></footer></body></html>"#,
            None,
        );
        let record = extract(&res, &NoDates);
        assert_eq!(record.author_raw.as_deref(), Some("Agencia EFE"));
    }

    #[test]
    fn pdf_title_failure_falls_back_to_filename() {
        let res = FetchedResource::new(
            Url::parse("https://example.org/docs/report-2021.pdf").unwrap(),
            Classification::Pdf {
                staged: PathBuf::from("/nonexistent/staged.pdf"),
            },
        );
        let record = extract(&res, &NoDates);
        assert_eq!(record.title.as_deref(), Some("report-2021.pdf"));
    }

    #[test]
    fn unknown_classification_degrades_to_url_fields() {
        let res = FetchedResource::new(
            Url::parse("https://news.example.com/articles/my-story").unwrap(),
            Classification::Unknown,
        );
        let record = extract(&res, &NoDates);
        assert_eq!(record.website, "news.example.com");
        assert_eq!(record.source_raw.as_deref(), Some("example"));
        assert_eq!(record.title, None);
        assert_eq!(record.date, None);
        assert_eq!(record.country, None);
        assert_eq!(record.author_raw, None);
    }
}
