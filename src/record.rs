use serde::Serialize;

/// One validated point of interest from the location feed.
///
/// Records are ordered by their position in the source CSV and carry no
/// other identity; duplicates are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub accessible: bool,
    /// Direct-view image URL, already normalized. `None` when the source
    /// row had no image.
    pub image_url: Option<String>,
}

impl LocationRecord {
    /// Human-readable accessibility statement shown in the marker popup.
    pub fn accessibility_label(&self) -> &'static str {
        if self.accessible {
            "Wheelchair Accessible"
        } else {
            "Wheelchair Inaccessible"
        }
    }
}

/// Interprets an accessibility field: true iff the trimmed, lower-cased
/// value equals the literal "true". Everything else (including empty) is
/// false.
pub fn parse_accessible(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}
