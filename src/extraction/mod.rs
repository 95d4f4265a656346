use std::io::Write;

use anyhow::Result;
use clap::Args;
use reqwest::blocking::Client;
use tracing::{info, warn};
use url::Url;

mod generic;
mod redhum;
pub mod types;

use crate::date::{self, DateExtract};
use crate::fetch::{self, resource::Classification, resource::FetchedResource};
use types::WebInfoRecord;

/// Closed set of field-extraction strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extractor {
    Generic,
    Redhum,
}

// Exact host match only; subdomain variants of a registered site fall through
// to Generic. Fine at this registry size, revisit if it grows.
const SITE_EXTRACTORS: &[(&str, Extractor)] = &[("redhum.org", Extractor::Redhum)];

/// Pure selection: host → strategy, generic fallback.
pub fn select(host: &str) -> Extractor {
    SITE_EXTRACTORS
        .iter()
        .find(|(site, _)| *site == host)
        .map(|(_, extractor)| *extractor)
        .unwrap_or(Extractor::Generic)
}

impl Extractor {
    pub fn extract(&self, res: &FetchedResource, dates: &dyn DateExtract) -> WebInfoRecord {
        match self {
            Extractor::Generic => generic::extract(res, dates),
            Extractor::Redhum => redhum::extract(res, dates),
        }
    }
}

/// Full pipeline for one URL: select a strategy, fetch, extract.
///
/// Errors only on a malformed URL (caller precondition). A failed fetch
/// degrades to a record carrying the URL-derived fields; the remaining fields
/// resolve to absent.
pub fn extract_url(client: &Client, url: &str, dates: &dyn DateExtract) -> Result<WebInfoRecord> {
    let parsed = Url::parse(url)?;
    let extractor = select(parsed.host_str().unwrap_or_default());

    let resource = match fetch::resolve(client, parsed.clone()) {
        Ok(res) => res,
        Err(err) => {
            warn!(url = %parsed, error = %err, "fetch failed, degrading to url-derived fields");
            FetchedResource::new(parsed, Classification::Unknown)
        }
    };

    Ok(extractor.extract(&resource, dates))
}

#[derive(Args)]
pub struct ExtractCmd {
    /// URL of the page or PDF to extract
    pub url: String,
}

pub fn run(args: ExtractCmd, pretty: bool) -> Result<()> {
    let client = fetch::client()?;
    info!(url = %args.url, "extracting web info");
    let record = extract_url(&client, &args.url, &date::HeuristicDates)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, &record)?;
    } else {
        serde_json::to_writer(&mut out, &record)?;
    }
    writeln!(out)?;
    Ok(())
}
