use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Normalized metadata record for one web resource. Field order is the wire
/// order consumed downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebInfoRecord {
    pub source_raw: Option<String>,
    pub author_raw: Option<String>,
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub country: Option<String>,
    pub website: String,
    pub url: String,
}
