//! URL scheme allow-listing

/// Schemes that execute code or smuggle attacker-chosen content
const DANGEROUS_SCHEMES: [&str; 4] = ["javascript:", "data:", "vbscript:", "file:"];

/// Prefixes a URL must carry to be accepted
const SAFE_PREFIXES: [&str; 6] = ["http://", "https://", "mailto:", "tel:", "/", "#"];

/// Check whether a URL is safe to use as a link target
///
/// The input is trimmed and lowercased before matching. Anything outside the
/// allow-list is rejected, including protocol-relative `//` URLs, which are
/// absolute URLs to another host rather than local paths.
pub fn is_safe_url(url: &str) -> bool {
    let url = url.trim().to_ascii_lowercase();

    if url.is_empty() {
        return false;
    }

    if DANGEROUS_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        return false;
    }

    if url.starts_with("//") {
        return false;
    }

    SAFE_PREFIXES.iter().any(|prefix| url.starts_with(prefix))
}
