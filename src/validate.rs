//! Identifier shape validators.
//!
//! Pure predicates over the lexical shapes the remote service issues;
//! no I/O and no state. Only strict client construction consults them,
//! but they are public for callers that want to pre-validate identifiers
//! before handing them to a client.

/// Hyphen-separated hex string whose groups have exactly the given lengths.
fn matches_hex_groups(token: &str, groups: &[usize]) -> bool {
    let parts: Vec<&str> = token.split('-').collect();
    parts.len() == groups.len()
        && parts
            .iter()
            .zip(groups)
            .all(|(part, len)| part.len() == *len && part.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Account-level token: hex groups of lengths 8-4-4-4-20-4-4-4-12.
pub fn is_account_key(token: &str) -> bool {
    matches_hex_groups(token, &[8, 4, 4, 4, 20, 4, 4, 4, 12])
}

/// Storage-level token: hex groups of lengths 8-4-4-12-4-4.
pub fn is_storage_key(token: &str) -> bool {
    matches_hex_groups(token, &[8, 4, 4, 12, 4, 4])
}

/// Either of the two token classes the remote system issues.
pub fn is_access_key(token: &str) -> bool {
    is_account_key(token) || is_storage_key(token)
}

/// Storage zone name: 3-20 characters of letters, digits and hyphen.
pub fn is_storage_zone_name(name: &str) -> bool {
    (3..=20).contains(&name.len())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Delivery zone name: 3-20 characters of letters and digits only.
pub fn is_delivery_zone_name(name: &str) -> bool {
    (3..=20).contains(&name.len()) && name.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Base64 alphabet with at most two trailing `=` padding characters.
pub fn is_base64(value: &str) -> bool {
    let unpadded = value.trim_end_matches('=');
    value.len() - unpadded.len() <= 2
        && unpadded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/')
}
