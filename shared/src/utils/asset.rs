//! Asset URL helpers

use super::validation::validators;

/// Resolve a media path to an absolute URL
///
/// Absolute URLs are returned untouched. Relative paths are joined onto `base`
/// (scheme + host, no trailing slash required). Without a base the path is
/// returned as-is so the client can resolve it against its own origin.
pub fn full_asset_url(base: Option<&str>, path: &str) -> String {
    if validators::is_valid_url(path) {
        return path.to_string();
    }

    match base {
        Some(base) if validators::not_empty(base) => format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        ),
        _ => path.to_string(),
    }
}
