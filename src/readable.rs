use std::io::Cursor;

use readability::extractor;
use tracing::debug;
use url::Url;

/// Readability collaborator: best-guess short title for an HTML page.
/// Returns None rather than erroring; an unreadable page simply has no title.
pub fn short_title(html: &str, url: &Url) -> Option<String> {
    let mut cursor = Cursor::new(html.as_bytes());
    match extractor::extract(&mut cursor, url) {
        Ok(product) => {
            let title = product.title.trim();
            if title.is_empty() {
                None
            } else {
                Some(title.to_string())
            }
        }
        Err(err) => {
            debug!(error = %err, "readability summary failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_from_simple_document() {
        let html = r#"
        <html><head><title>My Story</title></head>
        <body><article><h1>My Story</h1>
        <p>Some paragraph with enough prose to count as readable content
        for the extraction heuristics to latch onto.</p>
        </article></body></html>
        "#;
        let url = Url::parse("https://news.example.com/articles/my-story").unwrap();
        let got = short_title(html, &url);
        assert_eq!(got.as_deref(), Some("My Story"));
    }
}
