use anyhow::Result;
use reqwest::blocking::Client;
use reqwest::header;
use thiserror::Error;
use tracing::debug;
use url::Url;

pub mod resource;
mod stage;

use resource::{Classification, FetchedResource};

use crate::readable;

// Fixed browser-like identification; some source sites refuse bare clients.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_10_1) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/39.0.2171.95 Safari/537.36";

/// Transport failure on either network call, or a staging failure for PDF
/// bodies. The pipeline maps these to a degraded record; they never escape
/// to the CLI as errors.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("head request failed: {0}")]
    Head(#[source] reqwest::Error),
    #[error("content request failed: {0}")]
    Get(#[source] reqwest::Error),
    #[error("staging pdf body failed: {0}")]
    Stage(#[source] std::io::Error),
}

/// Client used for every extraction. Certificate validation is disabled on
/// purpose: source sites are heterogeneous and frequently misconfigured.
pub fn client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .danger_accept_invalid_certs(true)
        .build()?;
    Ok(client)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContentKind {
    Html,
    Pdf,
    Unknown,
}

// Classification comes from the HEAD probe's declared content type, checked
// in order. Anything unrecognized is an outcome, not an error.
fn classify(content_type: &str) -> ContentKind {
    if content_type.contains("text/html") {
        ContentKind::Html
    } else if content_type.contains("application/pdf") {
        ContentKind::Pdf
    } else {
        ContentKind::Unknown
    }
}

/// Resolve a URL into a `FetchedResource`: a HEAD probe for the content type,
/// then a full GET. At most two outbound calls, sequential and blocking.
pub fn resolve(client: &Client, url: Url) -> Result<FetchedResource, FetchError> {
    let head = client.head(url.clone()).send().map_err(FetchError::Head)?;
    let content_type = head
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let kind = classify(&content_type);
    debug!(url = %url, content_type = %content_type, ?kind, "classified resource");

    let mut resp = client.get(url.clone()).send().map_err(FetchError::Get)?;

    let classification = match kind {
        ContentKind::Html => {
            let raw = resp.text().map_err(FetchError::Get)?;
            let title = readable::short_title(&raw, &url);
            Classification::Html { raw, title }
        }
        ContentKind::Pdf => {
            let staged = stage::stage_body(&mut resp)?;
            Classification::Pdf { staged }
        }
        ContentKind::Unknown => Classification::Unknown,
    };

    Ok(FetchedResource::new(url, classification))
}
