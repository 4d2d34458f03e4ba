//! Typed access to a single resolved value

use std::fmt;

use serde_json::Value;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::iter::Iter;

/// A value read from a [`Config`], by key or through iteration.
///
/// The wrapped node may be absent, in which case every silent accessor
/// returns its zero value and every `must_*` accessor fails with
/// [`Error::NotSet`]. An explicit `null` is treated the same as absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfigValue<'a> {
    value: Option<&'a Value>,
}

impl<'a> ConfigValue<'a> {
    /// Wrap a node found in the tree.
    ///
    /// `Some(&Value::Null)` is folded into unset, so a key explicitly set to
    /// `null` reads exactly like a missing one.
    pub fn new(value: Option<&'a Value>) -> Self {
        Self {
            value: value.filter(|v| !v.is_null()),
        }
    }

    /// A value that was not found
    pub fn unset() -> Self {
        Self { value: None }
    }

    /// True when the key was present with a non-null value
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// True when the value is a list
    pub fn is_slice(&self) -> bool {
        matches!(self.value, Some(Value::Array(_)))
    }

    /// True when the value is a map
    pub fn is_map(&self) -> bool {
        matches!(self.value, Some(Value::Object(_)))
    }

    /// Underlying node without coercion
    pub fn raw(&self) -> Option<&'a Value> {
        self.value
    }

    /// Name of the wrapped value's kind, `"unset"` when absent
    pub fn kind(&self) -> &'static str {
        self.value.map_or("unset", kind_name)
    }

    pub fn int(&self) -> i64 {
        self.as_int().unwrap_or_default()
    }

    pub fn string(&self) -> String {
        self.as_str().unwrap_or_default().to_string()
    }

    pub fn float(&self) -> f64 {
        self.as_float().unwrap_or_default()
    }

    pub fn bool(&self) -> bool {
        self.as_bool().unwrap_or_default()
    }

    pub fn def_int(&self, default: i64) -> i64 {
        self.as_int().unwrap_or(default)
    }

    pub fn def_string(&self, default: &str) -> String {
        self.as_str().unwrap_or(default).to_string()
    }

    pub fn def_float(&self, default: f64) -> f64 {
        self.as_float().unwrap_or(default)
    }

    pub fn def_bool(&self, default: bool) -> bool {
        self.as_bool().unwrap_or(default)
    }

    /// Read the value as an integer, failing if it is unset or not an integer
    pub fn must_int(&self) -> Result<i64> {
        self.must(Self::as_int, "int")
    }

    /// Read the value as a string, failing if it is unset or not a string
    pub fn must_string(&self) -> Result<String> {
        self.must(|v| v.as_str().map(str::to_string), "string")
    }

    /// Read the value as a float, failing if it is unset or not a number
    pub fn must_float(&self) -> Result<f64> {
        self.must(Self::as_float, "float")
    }

    /// Read the value as a bool, failing if it is unset or not a bool
    pub fn must_bool(&self) -> Result<bool> {
        self.must(Self::as_bool, "bool")
    }

    /// Number of elements when the value is a list, 0 otherwise
    pub fn count(&self) -> usize {
        match self.value {
            Some(Value::Array(items)) => items.len(),
            _ => 0,
        }
    }

    /// New [`Config`] rooted at this value.
    ///
    /// Anything other than a map produces an empty config.
    pub fn config(&self) -> Config {
        match self.value {
            Some(Value::Object(map)) => Config::new(map.clone()),
            _ => Config::default(),
        }
    }

    /// Iterate over list elements or map entries.
    ///
    /// ```
    /// use conf_tree::Config;
    ///
    /// let config = Config::from_yaml("servers:\n  - alpha\n  - beta\n").unwrap();
    /// let names: Vec<String> = config
    ///     .get("servers")
    ///     .iterate()
    ///     .map(|entry| entry.value().string())
    ///     .collect();
    /// assert_eq!(names, vec!["alpha", "beta"]);
    /// ```
    pub fn iterate(&self) -> Iter<'a> {
        match self.value {
            Some(Value::Array(items)) => Iter::over_list(items),
            Some(Value::Object(map)) => Iter::over_map(map),
            _ => Iter::Empty,
        }
    }

    fn must<T>(&self, read: impl Fn(&Self) -> Option<T>, expected: &'static str) -> Result<T> {
        if !self.is_set() {
            return Err(Error::NotSet);
        }
        read(self).ok_or_else(|| Error::mismatch(expected, self.kind()))
    }

    fn as_int(&self) -> Option<i64> {
        self.value.and_then(Value::as_i64)
    }

    fn as_float(&self) -> Option<f64> {
        self.value.and_then(Value::as_f64)
    }

    fn as_bool(&self) -> Option<bool> {
        self.value.and_then(Value::as_bool)
    }

    fn as_str(&self) -> Option<&'a str> {
        self.value.and_then(Value::as_str)
    }
}

impl fmt::Display for ConfigValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            None => Ok(()),
            Some(Value::String(s)) => f.write_str(s),
            Some(other) => write!(f, "{other}"),
        }
    }
}

pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(n) if n.is_i64() => "int",
        Value::Number(_) => "uint",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "map",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_defaults() {
        let v = ConfigValue::unset();
        assert!(!v.is_set());
        assert_eq!(v.int(), 0);
        assert_eq!(v.string(), "");
        assert_eq!(v.float(), 0.0);
        assert!(!v.bool());
        assert_eq!(v.count(), 0);
        assert_eq!(v.kind(), "unset");
        assert_eq!(v.to_string(), "");
    }

    #[test]
    fn test_null_is_unset() {
        let null = Value::Null;
        let v = ConfigValue::new(Some(&null));
        assert!(!v.is_set());
        assert!(v.raw().is_none());
        assert!(matches!(v.must_int(), Err(Error::NotSet)));
    }

    #[test]
    fn test_int_rejects_fractions() {
        let n = json!(2.5);
        let v = ConfigValue::new(Some(&n));
        assert_eq!(v.int(), 0);
        assert_eq!(v.def_int(7), 7);
        assert_eq!(v.float(), 2.5);
        assert_eq!(v.kind(), "float");
    }

    #[test]
    fn test_float_widens_integers() {
        let n = json!(3);
        let v = ConfigValue::new(Some(&n));
        assert_eq!(v.float(), 3.0);
        assert_eq!(v.must_float().unwrap(), 3.0);
    }

    #[test]
    fn test_must_reports_found_kind() {
        let s = json!("5");
        let err = ConfigValue::new(Some(&s)).must_int().unwrap_err();
        assert_eq!(err.to_string(), "Value is not int (found string)");
    }

    #[test]
    fn test_int_above_i64_is_uint() {
        let big = json!(u64::MAX);
        let v = ConfigValue::new(Some(&big));
        assert_eq!(v.kind(), "uint");
        assert_eq!(v.int(), 0);
        assert_eq!(
            v.must_int().unwrap_err().to_string(),
            "Value is not int (found uint)"
        );

        let small = json!(i64::MAX);
        assert_eq!(ConfigValue::new(Some(&small)).kind(), "int");
    }

    #[test]
    fn test_display() {
        let s = json!("plain");
        let list = json!([1, "two"]);
        assert_eq!(ConfigValue::new(Some(&s)).to_string(), "plain");
        assert_eq!(ConfigValue::new(Some(&list)).to_string(), r#"[1,"two"]"#);
    }
}
