//! Blocklist filtering.

/// Drop every URL containing any of `patterns` as a plain, case-sensitive
/// substring. Surviving URLs keep their order.
pub fn filter_urls(urls: Vec<String>, patterns: &[String]) -> Vec<String> {
    if patterns.is_empty() {
        return urls;
    }

    urls.into_iter()
        .filter(|url| !is_blocked(url, patterns))
        .collect()
}

/// Check whether a single URL matches any blocklist pattern.
pub fn is_blocked(url: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|p| url.contains(p.as_str()))
}
