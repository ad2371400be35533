//! Image link normalization for shared-drive URLs.

use regex::Regex;

/// Rewrites a shared-drive share link (`.../d/<ID>/...`) into its
/// direct-view form. Any other URL passes through unchanged, so the
/// function is idempotent on already-direct links (e.g. raw hosted
/// images).
pub fn convert_image_link(url: &str) -> String {
    let re = Regex::new(r"/d/(.*?)/").expect("share-link pattern is valid");
    match re.captures(url) {
        Some(caps) => format!("https://drive.google.com/uc?export=view&id={}", &caps[1]),
        None => url.to_string(),
    }
}
