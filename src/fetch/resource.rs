use std::path::PathBuf;

use scraper::Html;
use url::Url;

/// One fetched resource per extraction. Created once by `fetch::resolve`,
/// immutable afterwards, never shared across extractions.
pub struct FetchedResource {
    url: Url,
    classification: Classification,
}

/// Resolved content category of a fetched resource, with its payload.
pub enum Classification {
    Html {
        raw: String,
        /// Readability short title, computed at fetch time.
        title: Option<String>,
    },
    Pdf {
        /// Temp file holding the response body; lifecycle owned by the caller.
        staged: PathBuf,
    },
    Unknown,
}

impl FetchedResource {
    pub fn new(url: Url, classification: Classification) -> Self {
        Self {
            url,
            classification,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    /// Parsed document tree for html resources. Re-parsed per call: the raw
    /// text is the stored form, `scraper::Html` is not `Sync`.
    pub fn document(&self) -> Option<Html> {
        match &self.classification {
            Classification::Html { raw, .. } => Some(Html::parse_document(raw)),
            _ => None,
        }
    }
}
