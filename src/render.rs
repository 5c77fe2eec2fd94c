//! Shared HTML helpers for the gallery renderers.

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escaped value for an `href`/`src` attribute.
/// Script URLs collapse to empty so a bad record can't inject behaviour.
pub fn url_attr(url: &str) -> String {
    let trimmed = url.trim();
    let scheme = trimmed
        .split(':')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    if trimmed.contains(':') && (scheme == "javascript" || scheme == "vbscript" || scheme == "data")
    {
        log::debug!("Dropping unsafe URL {}", trimmed);
        return String::new();
    }
    html_escape(trimmed)
}
