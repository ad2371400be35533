//! Capability interface over the map widget.
//!
//! The parsing and adapter logic never touch a real mapping SDK; they only
//! talk to [`MapSurface`], so the whole pipeline is testable with a
//! recording fake.

/// Handle to a marker created on a surface.
pub type MarkerId = usize;

/// Handle to a popup created on a surface.
pub type PopupId = usize;

/// One of exactly two marker styles, keyed on the accessibility flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    Accessible,
    Inaccessible,
}

/// Structured popup content. How it is laid out (HTML, text, ...) is up to
/// the concrete surface.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    pub title: String,
    /// Human-readable accessibility statement.
    pub statement: String,
    /// Direct-view image URL, if the record has one.
    pub image_url: Option<String>,
}

/// Minimal marker/popup surface the rendering adapter draws onto.
pub trait MapSurface {
    fn create_marker(&mut self, latitude: f64, longitude: f64, style: MarkerStyle) -> MarkerId;
    fn create_popup(&mut self, content: PopupContent) -> PopupId;
    /// Arranges for a click on `marker` to open `popup`.
    fn attach_click(&mut self, marker: MarkerId, popup: PopupId);
}
