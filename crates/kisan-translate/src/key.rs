//! Cache key derivation for translated strings.

use crate::language::Language;

/// Derive the cache key for a (source, target, text) triple.
///
/// The key is `"{source}:{target}:{text}"`. Language codes come from a fixed
/// set and never contain the delimiter, so equal triples always map to the
/// same key and differing triples never collide.
pub fn cache_key(source: Language, target: Language, text: &str) -> String {
    format!("{}:{}:{}", source.code(), target.code(), text)
}
