//! File path normalization for report output

/// Strip `prefix` from the front of `path` when it is a literal prefix.
///
/// An empty prefix, or one that does not match from the first character,
/// leaves the path unchanged.
pub fn normalize<'a>(path: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return path;
    }
    path.strip_prefix(prefix).unwrap_or(path)
}
