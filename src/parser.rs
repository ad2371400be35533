//! CSV parser for the published location feed.
//!
//! Columns are matched by header name, so the feed may reorder columns
//! freely, but header spelling must match the published sheet exactly.
//! There is no quote or escape handling: a field containing a literal
//! comma shifts the remaining columns, which normally makes the row fail
//! coordinate validation and get dropped.

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::debug;

use crate::imagelink::convert_image_link;
use crate::record::{LocationRecord, parse_accessible};

/// One raw CSV row, keyed by the headers the published sheet uses.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default)]
    name: String,
    #[serde(default)]
    latitude: String,
    #[serde(default)]
    longitude: String,
    #[serde(default)]
    accessible: String,
    #[serde(default, rename = "Image_url")]
    image_url: String,
}

impl RawRow {
    /// Validates coordinates and builds the typed record. Returns `None`
    /// when either coordinate is unparseable or non-finite.
    fn into_record(self) -> Option<LocationRecord> {
        let latitude: f64 = self.latitude.parse().ok().filter(|v: &f64| v.is_finite())?;
        let longitude: f64 = self.longitude.parse().ok().filter(|v: &f64| v.is_finite())?;

        let image_url = if self.image_url.is_empty() {
            None
        } else {
            Some(convert_image_link(&self.image_url))
        };

        Some(LocationRecord {
            name: self.name,
            latitude,
            longitude,
            accessible: parse_accessible(&self.accessible),
            image_url,
        })
    }
}

/// Parses the full CSV text body into an ordered list of valid records.
///
/// The first line is the header row. Rows that fail coordinate validation
/// are dropped silently; a header-only or empty payload yields an empty
/// list. Per-row problems never abort the parse.
pub fn parse_locations(text: &str) -> Vec<LocationRecord> {
    let mut reader = ReaderBuilder::new()
        .quoting(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<RawRow>().enumerate() {
        let raw = match row {
            Ok(raw) => raw,
            Err(e) => {
                debug!(row = index + 1, error = %e, "Skipping unreadable row");
                continue;
            }
        };
        match raw.into_record() {
            Some(record) => records.push(record),
            None => debug!(row = index + 1, "Skipping row with invalid coordinates"),
        }
    }
    records
}
