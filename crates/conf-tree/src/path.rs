//! Composite key resolution
//!
//! Keys are dot-separated: `db.user` addresses the `user` entry of the `db`
//! section. A top-level entry whose name literally contains the dots wins
//! over descent, so a config holding both `{"db.user": "a"}` and
//! `{"db": {"user": "b"}}` resolves `db.user` to `"a"`.
//!
//! # Examples
//!
//! ```
//! use conf_tree::path::resolve;
//! use serde_json::json;
//!
//! let value = json!({"db": {"user": "admin"}, "log.level": "info"});
//! let map = value.as_object().unwrap();
//!
//! assert_eq!(resolve(map, "db.user"), Some(&json!("admin")));
//! assert_eq!(resolve(map, "log.level"), Some(&json!("info")));
//! assert_eq!(resolve(map, "db.password"), None);
//! ```

use serde_json::{Map, Value};

/// Separator between key segments
pub const SEPARATOR: char = '.';

/// Split a composite key into its segments.
///
/// An empty key yields a single empty segment.
pub fn split_key(key: &str) -> Vec<&str> {
    key.split(SEPARATOR).collect()
}

/// Resolve a key against a map.
///
/// The key is first tried literally; on a miss it is split on
/// [`SEPARATOR`] and each segment is looked up in the map reached by the
/// previous one. Only maps are descended into.
pub fn resolve<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    if let Some(value) = map.get(key) {
        return Some(value);
    }

    let segments = split_key(key);
    if segments.len() < 2 {
        return None;
    }

    tracing::trace!(key, depth = segments.len(), "Resolving composite key");
    descend(map, &segments)
}

fn descend<'a>(map: &'a Map<String, Value>, segments: &[&str]) -> Option<&'a Value> {
    let (first, rest) = segments.split_first()?;
    let value = map.get(*first)?;

    if rest.is_empty() {
        return Some(value);
    }

    match value {
        Value::Object(inner) => descend(inner, rest),
        _ => None,
    }
}
