//! Candidate URL construction for bare site identifiers.

/// Returns `true` if `identifier` already carries an `http://` or `https://`
/// scheme (case-insensitive).
#[must_use]
pub fn has_scheme(identifier: &str) -> bool {
    let lower = identifier.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Lists the URLs to try for `identifier`, in order.
///
/// An identifier with a scheme is tried as-is. Anything else has every
/// `www.` removed and expands to `https://host`, `http://host`,
/// `https://www.host`, `http://www.host`. A blank identifier yields nothing.
#[must_use]
pub fn candidate_urls(identifier: &str) -> Vec<String> {
    let raw = identifier.trim();
    if raw.is_empty() {
        return Vec::new();
    }
    if has_scheme(raw) {
        return vec![raw.to_string()];
    }

    let host = raw.replace("www.", "");
    vec![
        format!("https://{host}"),
        format!("http://{host}"),
        format!("https://www.{host}"),
        format!("http://www.{host}"),
    ]
}
