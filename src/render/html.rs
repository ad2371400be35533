//! Self-contained HTML map surface.
//!
//! Emits one standalone document: a Leaflet map over OpenStreetMap tiles
//! with colored marker icons and click-to-open popups. No build step, no
//! API key; the file opens directly in a browser.

use std::fmt::Write;

use chrono::Utc;

use super::surface::{MapSurface, MarkerId, MarkerStyle, PopupContent, PopupId};
use super::IMAGE_DISPLAY_WIDTH;

const ACCESSIBLE_ICON_URL: &str =
    "https://raw.githubusercontent.com/pointhi/leaflet-color-markers/master/img/marker-icon-blue.png";
const INACCESSIBLE_ICON_URL: &str =
    "https://raw.githubusercontent.com/pointhi/leaflet-color-markers/master/img/marker-icon-red.png";

struct Marker {
    latitude: f64,
    longitude: f64,
    style: MarkerStyle,
}

/// Accumulates markers and popups, then renders them into a single HTML
/// document with [`HtmlMap::into_document`].
pub struct HtmlMap {
    title: String,
    markers: Vec<Marker>,
    popups: Vec<PopupContent>,
    bindings: Vec<(MarkerId, PopupId)>,
}

impl HtmlMap {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            markers: Vec::new(),
            popups: Vec::new(),
            bindings: Vec::new(),
        }
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Renders the accumulated surface into a complete HTML document.
    pub fn into_document(self) -> String {
        let mut doc = String::new();

        doc.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\"/>\n");
        let _ = writeln!(doc, "<title>{}</title>", html_escape(&self.title));
        doc.push_str(concat!(
            "<link rel=\"stylesheet\" href=\"https://unpkg.com/leaflet@1.9.4/dist/leaflet.css\"/>\n",
            "<script src=\"https://unpkg.com/leaflet@1.9.4/dist/leaflet.js\"></script>\n",
            "<style>html, body, #map { height: 100%; margin: 0; }</style>\n",
            "</head>\n<body>\n",
        ));
        let _ = writeln!(doc, "<!-- generated {} -->", Utc::now().to_rfc3339());
        doc.push_str("<div id=\"map\"></div>\n<script>\n");
        doc.push_str("const map = L.map(\"map\");\n");
        doc.push_str(concat!(
            "L.tileLayer(\"https://tile.openstreetmap.org/{z}/{x}/{y}.png\", ",
            "{ attribution: \"&copy; OpenStreetMap contributors\" }).addTo(map);\n",
        ));
        let _ = writeln!(doc, "const accessibleIcon = {};", icon_literal(ACCESSIBLE_ICON_URL));
        let _ = writeln!(
            doc,
            "const inaccessibleIcon = {};",
            icon_literal(INACCESSIBLE_ICON_URL)
        );
        doc.push_str("const bounds = [];\n");

        for (i, marker) in self.markers.iter().enumerate() {
            let icon = match marker.style {
                MarkerStyle::Accessible => "accessibleIcon",
                MarkerStyle::Inaccessible => "inaccessibleIcon",
            };
            let _ = writeln!(
                doc,
                "const m{i} = L.marker([{}, {}], {{ icon: {icon} }}).addTo(map);",
                marker.latitude, marker.longitude
            );
            let _ = writeln!(doc, "bounds.push([{}, {}]);", marker.latitude, marker.longitude);
        }

        for (marker, popup) in &self.bindings {
            if let Some(content) = self.popups.get(*popup) {
                let _ = writeln!(
                    doc,
                    "m{marker}.bindPopup(\"{}\");",
                    js_escape(&popup_html(content))
                );
            }
        }

        doc.push_str("map.fitBounds(bounds, { padding: [40, 40] });\n");
        doc.push_str("</script>\n</body>\n</html>\n");
        doc
    }
}

impl MapSurface for HtmlMap {
    fn create_marker(&mut self, latitude: f64, longitude: f64, style: MarkerStyle) -> MarkerId {
        self.markers.push(Marker {
            latitude,
            longitude,
            style,
        });
        self.markers.len() - 1
    }

    fn create_popup(&mut self, content: PopupContent) -> PopupId {
        self.popups.push(content);
        self.popups.len() - 1
    }

    fn attach_click(&mut self, marker: MarkerId, popup: PopupId) {
        self.bindings.push((marker, popup));
    }
}

fn icon_literal(url: &str) -> String {
    format!(
        "L.icon({{ iconUrl: \"{url}\", iconSize: [25, 41], iconAnchor: [12, 41], popupAnchor: [1, -34] }})"
    )
}

fn popup_html(content: &PopupContent) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<div><h3>{}</h3><p>\u{267f} {}</p>",
        html_escape(&content.title),
        html_escape(&content.statement)
    );
    if let Some(url) = &content.image_url {
        let _ = write!(
            html,
            "<img src=\"{}\" width=\"{IMAGE_DISPLAY_WIDTH}\"/>",
            html_escape(url)
        );
    }
    html.push_str("</div>");
    html
}

fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes a string for embedding inside a double-quoted JS literal.
fn js_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}
