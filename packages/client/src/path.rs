//! Unified path resolution.
//!
//! The client exposes a single path space that combines the library id and
//! the in-library relative path:
//!
//! - `/` - root, meaning "all libraries"
//! - `/{library-id}` - the root of one library
//! - `/{library-id}/sub/path` - an object inside a library
//!
//! The server addresses everything in two parts (library id + in-library
//! path), so every operation splits its unified path exactly once, through
//! the two functions here. Both are pure: no cache lookups, no network.
//! Trailing slashes are insignificant except for the literal root, and a
//! path consisting only of slashes counts as root.

/// Extract the library id component from a unified path.
///
/// Returns `None` for the empty string and for root.
///
/// # Examples
///
/// ```
/// use seafront_client::path::library_id;
///
/// assert_eq!(library_id("/"), None);
/// assert_eq!(library_id("/lib123"), Some("lib123"));
/// assert_eq!(library_id("/lib123/a/b"), Some("lib123"));
/// ```
pub fn library_id(path: &str) -> Option<&str> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.find('/') {
        Some(idx) => Some(&trimmed[..idx]),
        None => Some(trimmed),
    }
}

/// Strip the library component from a unified path, leaving the in-library
/// path with its leading slash.
///
/// Returns `None` for the empty string and for root. A path holding only a
/// library id resolves to `"/"`, the canonical in-library root marker;
/// every caller treats `"/"` as "library root, no intra-library prefix".
///
/// # Examples
///
/// ```
/// use seafront_client::path::strip_library;
///
/// assert_eq!(strip_library("/"), None);
/// assert_eq!(strip_library("/lib123"), Some("/"));
/// assert_eq!(strip_library("/lib123/a/b"), Some("/a/b"));
/// ```
pub fn strip_library(path: &str) -> Option<&str> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.find('/') {
        Some(idx) => Some(&trimmed[idx..]),
        None => Some("/"),
    }
}
