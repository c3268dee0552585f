// Path helper utilities shared across storage operations

/// Return a new String that guarantees a trailing '/'.
///
/// The remote API disambiguates "file named X" from "directory named X"
/// purely by the trailing separator, so listing normalizes with this.
pub fn ensure_trailing_slash(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    }
}

/// Build the fully qualified resource URL for a zone-scoped path.
/// The caller-supplied path is used verbatim.
pub fn build_resource_url(endpoint: &str, zone: &str, path: &str) -> String {
    format!("{}/{zone}/{path}", endpoint.trim_end_matches('/'))
}
