//! Rendering adapter: validated records in, markers and popups out.

mod html;
mod surface;

pub use html::HtmlMap;
pub use surface::{MapSurface, MarkerId, MarkerStyle, PopupContent, PopupId};

use anyhow::{Result, bail};

use crate::record::LocationRecord;

/// Display width, in pixels, for popup images.
pub const IMAGE_DISPLAY_WIDTH: u32 = 200;

/// Places one marker per record on `surface` and wires a click-to-open
/// popup for each. Returns the number of markers placed.
///
/// An empty record list is an explicit failure ("No location data found."),
/// never a silent no-op: with no reference point there is nothing sensible
/// to center a view on.
pub fn render_locations<S: MapSurface>(
    surface: &mut S,
    records: &[LocationRecord],
) -> Result<usize> {
    if records.is_empty() {
        bail!("No location data found.");
    }

    for record in records {
        let style = if record.accessible {
            MarkerStyle::Accessible
        } else {
            MarkerStyle::Inaccessible
        };

        let marker = surface.create_marker(record.latitude, record.longitude, style);
        let popup = surface.create_popup(PopupContent {
            title: record.name.clone(),
            statement: record.accessibility_label().to_string(),
            image_url: record.image_url.clone(),
        });
        surface.attach_click(marker, popup);
    }

    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fake surface that records every call for inspection.
    #[derive(Default)]
    struct RecordingSurface {
        markers: Vec<(f64, f64, MarkerStyle)>,
        popups: Vec<PopupContent>,
        clicks: Vec<(MarkerId, PopupId)>,
    }

    impl MapSurface for RecordingSurface {
        fn create_marker(&mut self, latitude: f64, longitude: f64, style: MarkerStyle) -> MarkerId {
            self.markers.push((latitude, longitude, style));
            self.markers.len() - 1
        }

        fn create_popup(&mut self, content: PopupContent) -> PopupId {
            self.popups.push(content);
            self.popups.len() - 1
        }

        fn attach_click(&mut self, marker: MarkerId, popup: PopupId) {
            self.clicks.push((marker, popup));
        }
    }

    fn record(name: &str, accessible: bool, image_url: Option<&str>) -> LocationRecord {
        LocationRecord {
            name: name.to_string(),
            latitude: 42.35,
            longitude: -71.08,
            accessible,
            image_url: image_url.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_input_is_an_explicit_failure() {
        let mut surface = RecordingSurface::default();
        let err = render_locations(&mut surface, &[]).unwrap_err();
        assert_eq!(err.to_string(), "No location data found.");
        assert!(surface.markers.is_empty());
    }

    #[test]
    fn test_marker_style_keyed_on_accessibility() {
        let mut surface = RecordingSurface::default();
        let records = vec![record("A", true, None), record("B", false, None)];

        let placed = render_locations(&mut surface, &records).unwrap();

        assert_eq!(placed, 2);
        assert_eq!(surface.markers[0].2, MarkerStyle::Accessible);
        assert_eq!(surface.markers[1].2, MarkerStyle::Inaccessible);
    }

    #[test]
    fn test_each_marker_gets_its_own_popup() {
        let mut surface = RecordingSurface::default();
        let records = vec![
            record("A", true, Some("https://example.com/a.jpg")),
            record("B", false, None),
        ];

        render_locations(&mut surface, &records).unwrap();

        assert_eq!(surface.clicks, vec![(0, 0), (1, 1)]);
        assert_eq!(surface.popups[0].title, "A");
        assert_eq!(surface.popups[0].statement, "Wheelchair Accessible");
        assert_eq!(
            surface.popups[0].image_url.as_deref(),
            Some("https://example.com/a.jpg")
        );
        assert_eq!(surface.popups[1].statement, "Wheelchair Inaccessible");
        assert_eq!(surface.popups[1].image_url, None);
    }

    #[test]
    fn test_marker_position_matches_record() {
        let mut surface = RecordingSurface::default();
        let records = vec![record("A", true, None)];

        render_locations(&mut surface, &records).unwrap();

        assert_eq!(surface.markers[0].0, 42.35);
        assert_eq!(surface.markers[0].1, -71.08);
    }
}
