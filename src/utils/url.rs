//! URL and path shape checks shared by the config sections.

use ::url::Url;

/// Parse `s` as an `http`/`https` URL with a non-empty host.
fn parse_http(s: &str) -> Option<Url> {
    let parsed = Url::parse(s).ok()?;
    let has_host = parsed.host_str().is_some_and(|host| !host.is_empty());
    (matches!(parsed.scheme(), "http" | "https") && has_host).then_some(parsed)
}

/// `http://` or `https://` followed by a valid, non-empty host.
pub fn is_absolute_url(s: &str) -> bool {
    parse_http(s).is_some()
}

/// Absolute URL with nothing after the host (a trailing `/` is tolerated).
pub fn is_origin_url(s: &str) -> bool {
    parse_http(s).is_some_and(|parsed| {
        parsed.path() == "/"
            && parsed.query().is_none()
            && parsed.fragment().is_none()
            && parsed.username().is_empty()
            && parsed.password().is_none()
    })
}

/// Lowercased host of an absolute http(s) URL, without the port.
pub fn host(s: &str) -> Option<String> {
    parse_http(s).and_then(|parsed| parsed.host_str().map(str::to_ascii_lowercase))
}

/// Path starting and ending with `/`, without empty segments or whitespace.
///
/// `/` alone is a valid base path.
pub fn is_bounded_path(s: &str) -> bool {
    s.starts_with('/')
        && s.ends_with('/')
        && !s.contains("//")
        && !s.contains(char::is_whitespace)
        && !s.contains(['?', '#'])
}

/// Join an origin URL and a path without doubling or dropping the `/`.
pub fn join(origin: &str, path: &str) -> String {
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
