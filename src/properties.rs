//! Property values and tables

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// A typed property value, coerced once when the config file is parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl PropertyValue {
    /// Coerce raw (already trimmed) value text.
    ///
    /// `true`/`false` in any case become booleans, base-10 numerals become
    /// numbers, anything else stays a string.
    pub fn from_raw(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("true") {
            return Self::Bool(true);
        }
        if raw.eq_ignore_ascii_case("false") {
            return Self::Bool(false);
        }
        if let Ok(n) = raw.parse::<i64>() {
            return Self::Integer(n);
        }
        if is_decimal_literal(raw) {
            if let Ok(f) = raw.parse::<f64>() {
                if f.is_finite() {
                    return Self::Float(f);
                }
            }
        }
        Self::String(raw.to_string())
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

/// Digits with optional sign, fraction and exponent. Excludes `inf`, `nan`
/// and friends, which `f64::from_str` would otherwise accept.
fn is_decimal_literal(raw: &str) -> bool {
    raw.bytes().any(|b| b.is_ascii_digit())
        && raw
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
}

/// Key -> value mapping, keys kept exactly as written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyTable(BTreeMap<String, PropertyValue>);

impl PropertyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Set `key`, replacing any earlier value.
    pub fn insert(&mut self, key: impl Into<String>, value: PropertyValue) {
        self.0.insert(key.into(), value);
    }

    /// Set `key` only if it has no value yet.
    pub fn insert_if_absent(&mut self, key: &str, value: &PropertyValue) {
        if !self.0.contains_key(key) {
            self.0.insert(key.to_string(), value.clone());
        }
    }

    /// Copy every entry of `other` whose key is not yet set.
    pub fn fill_from(&mut self, other: &PropertyTable) {
        for (key, value) in other.iter() {
            self.insert_if_absent(key, value);
        }
    }

    /// Copy every entry of `other`, replacing existing values.
    pub fn overlay(&mut self, other: &PropertyTable) {
        for (key, value) in other.iter() {
            self.0.insert(key.clone(), value.clone());
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<PropertyValue> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, PropertyValue> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a PropertyTable {
    type Item = (&'a String, &'a PropertyValue);
    type IntoIter = btree_map::Iter<'a, String, PropertyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, PropertyValue)> for PropertyTable {
    fn from_iter<I: IntoIterator<Item = (K, PropertyValue)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_booleans_any_case() {
        assert_eq!(PropertyValue::from_raw("true"), PropertyValue::Bool(true));
        assert_eq!(PropertyValue::from_raw("FALSE"), PropertyValue::Bool(false));
        assert_eq!(PropertyValue::from_raw("True"), PropertyValue::Bool(true));
    }

    #[test]
    fn test_coerce_numbers() {
        assert_eq!(PropertyValue::from_raw("4"), PropertyValue::Integer(4));
        assert_eq!(PropertyValue::from_raw("-12"), PropertyValue::Integer(-12));
        assert_eq!(PropertyValue::from_raw("1.5"), PropertyValue::Float(1.5));
        assert_eq!(PropertyValue::from_raw("1e3"), PropertyValue::Float(1000.0));
    }

    #[test]
    fn test_coerce_leaves_words_as_strings() {
        assert_eq!(PropertyValue::from_raw("space"), "space".into());
        assert_eq!(PropertyValue::from_raw("inf"), "inf".into());
        assert_eq!(PropertyValue::from_raw("NaN"), "NaN".into());
        assert_eq!(PropertyValue::from_raw(""), "".into());
        assert_eq!(PropertyValue::from_raw("1.2.3"), "1.2.3".into());
        assert_eq!(PropertyValue::from_raw("yes"), "yes".into());
    }

    #[test]
    fn test_display_round_trips_text() {
        assert_eq!(PropertyValue::from_raw("lf").to_string(), "lf");
        assert_eq!(PropertyValue::from_raw("TRUE").to_string(), "true");
        assert_eq!(PropertyValue::from_raw("8").to_string(), "8");
    }

    #[test]
    fn test_insert_if_absent_keeps_first() {
        let mut table = PropertyTable::new();
        table.insert_if_absent("k", &"first".into());
        table.insert_if_absent("k", &"second".into());
        assert_eq!(table.get("k"), Some(&"first".into()));
    }

    #[test]
    fn test_overlay_replaces() {
        let mut base: PropertyTable = [
            ("a", PropertyValue::Integer(1)),
            ("b", PropertyValue::Integer(2)),
        ]
        .into_iter()
        .collect();
        let top: PropertyTable = [("b", PropertyValue::Integer(3))].into_iter().collect();
        base.overlay(&top);
        assert_eq!(base.get("a"), Some(&PropertyValue::Integer(1)));
        assert_eq!(base.get("b"), Some(&PropertyValue::Integer(3)));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let mut table = PropertyTable::new();
        table.insert("Indent_Style", "tab".into());
        assert!(table.get("indent_style").is_none());
        assert!(table.contains_key("Indent_Style"));
    }
}
