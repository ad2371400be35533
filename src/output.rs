//! Output formatting for parsed location records.

use anyhow::{Result, bail};
use tracing::info;

use crate::record::LocationRecord;

/// Logs the parsed records using Rust's debug pretty-print format.
///
/// Emitted at info level: this is the `list` command's primary output and
/// must be visible under the default stderr filter.
pub fn print_pretty(records: &[LocationRecord]) {
    info!("{:#?}", records);
}

/// Logs the parsed records as pretty-printed JSON.
pub fn print_json(records: &[LocationRecord]) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}

/// Rejects an empty feed before listing it. An empty result set is an
/// explicit failure state, not a silent no-op.
pub fn require_non_empty(records: &[LocationRecord]) -> Result<()> {
    if records.is_empty() {
        bail!("No location data found.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    fn sample() -> Vec<LocationRecord> {
        vec![LocationRecord {
            name: "Cafe A".to_string(),
            latitude: 42.35,
            longitude: -71.08,
            accessible: true,
            image_url: None,
        }]
    }

    /// Shared in-memory writer for capturing subscriber output.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for SharedBuf {
        type Writer = SharedBuf;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_print_pretty_visible_at_info_level() {
        let buf = SharedBuf::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buf.clone())
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || print_pretty(&sample()));

        // An info-filtered subscriber must still see the record listing.
        assert!(buf.contents().contains("Cafe A"));
    }

    #[test]
    fn test_print_json_does_not_panic() {
        print_json(&sample()).unwrap();
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json[0]["name"], "Cafe A");
        assert_eq!(json[0]["accessible"], true);
        assert!(json[0]["image_url"].is_null());
    }

    #[test]
    fn test_require_non_empty_rejects_empty_feed() {
        let err = require_non_empty(&[]).unwrap_err();
        assert_eq!(err.to_string(), "No location data found.");
    }

    #[test]
    fn test_require_non_empty_accepts_records() {
        assert!(require_non_empty(&sample()).is_ok());
    }
}
