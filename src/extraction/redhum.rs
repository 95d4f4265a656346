use crate::date::DateExtract;
use crate::fetch::resource::FetchedResource;

use super::generic;
use super::types::WebInfoRecord;

/// Site-specific strategy for redhum.org. Only the fields whose markup
/// differs from the generic conventions are overridden; everything else
/// inherits the generic behavior.
pub fn extract(res: &FetchedResource, dates: &dyn DateExtract) -> WebInfoRecord {
    let mut record = generic::extract(res, dates);
    if let Some(doc) = res.document() {
        record.country = generic::select_text(&doc, ".page-header .location a").or(record.country);
        record.author_raw = generic::select_text(&doc, ".article-meta .author").or(record.author_raw);
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::resource::Classification;
    use chrono::NaiveDate;
    use scraper::Html;
    use url::Url;

    struct NoDates;
    impl DateExtract for NoDates {
        fn extract(&self, _url: &Url, _doc: Option<&Html>) -> Option<NaiveDate> {
            None
        }
    }

    fn resource(raw: &str) -> FetchedResource {
        FetchedResource::new(
            Url::parse("https://redhum.org/documento/123").unwrap(),
            Classification::Html {
                raw: raw.to_string(),
                title: Some("Informe".to_string()),
            },
        )
    }

    #[test]
    fn overrides_country_and_author() {
        let res = resource(
            r#"<html><body>
            <div class="page-header"><span class="location"><a>Venezuela</a></span></div>
            <div class="article-meta"><span class="author">Redhum</span></div>
            </body></html>"#,
        );
        let record = extract(&res, &NoDates);
        assert_eq!(record.country.as_deref(), Some("Venezuela"));
        assert_eq!(record.author_raw.as_deref(), Some("Redhum"));
        assert_eq!(record.source_raw.as_deref(), Some("redhum"));
        assert_eq!(record.title.as_deref(), Some("Informe"));
    }

    #[test]
    fn falls_back_to_generic_markup() {
        let res = resource(
            r#"<html><body>
            <div class="country"><a>Colombia</a></div>
            <footer><div class="meta"><ul class="source"><li>OCHA</li></ul></div></footer>
            </body></html>"#,
        );
        let record = extract(&res, &NoDates);
        assert_eq!(record.country.as_deref(), Some("Colombia"));
        assert_eq!(record.author_raw.as_deref(), Some("OCHA"));
    }
}
