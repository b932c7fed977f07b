//! String-keyed value maps carried as intent extras.
//!
//! A [`Bundle`] keeps its keys in insertion order. Re-inserting a key
//! replaces the value in place, so the original position is kept.

/// A value stored in a [`Bundle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Plain string.
    String(String),
    /// Array of strings.
    StringArray(Vec<String>),
    /// Nested bundle.
    Bundle(Bundle),
    /// List of nested bundles.
    BundleList(Vec<Bundle>),
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Self::StringArray(value)
    }
}

impl From<Bundle> for Value {
    fn from(value: Bundle) -> Self {
        Self::Bundle(value)
    }
}

impl From<Vec<Bundle>> for Value {
    fn from(value: Vec<Bundle>) -> Self {
        Self::BundleList(value)
    }
}

/// Ordered map of string keys to [`Value`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    entries: Vec<(String, Value)>,
}

impl Bundle {
    /// Creates an empty bundle.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a value, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(std::mem::replace(&mut slot.1, value))
        } else {
            self.entries.push((key, value));
            None
        }
    }

    /// Inserts a value and returns the bundle, for chained construction.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Stores a boolean as the literal `"true"` or `"false"`.
    pub fn put_bool(&mut self, key: impl Into<String>, value: bool) {
        self.insert(key, bool_str(value));
    }

    /// Removes a key, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the string under `key`, if it holds one.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns the string array under `key`, if it holds one.
    #[must_use]
    pub fn get_string_array(&self, key: &str) -> Option<&[String]> {
        match self.get(key) {
            Some(Value::StringArray(values)) => Some(values),
            _ => None,
        }
    }

    /// Returns the nested bundle under `key`, if it holds one.
    #[must_use]
    pub fn get_bundle(&self, key: &str) -> Option<&Self> {
        match self.get(key) {
            Some(Value::Bundle(b)) => Some(b),
            _ => None,
        }
    }

    /// Returns the bundle list under `key`, if it holds one.
    #[must_use]
    pub fn get_bundle_list(&self, key: &str) -> Option<&[Self]> {
        match self.get(key) {
            Some(Value::BundleList(list)) => Some(list),
            _ => None,
        }
    }

    /// Renders the value under `key` for display.
    ///
    /// Strings are returned verbatim and string arrays are joined with
    /// newlines. Anything else, including a missing key, renders empty.
    #[must_use]
    pub fn display_value(&self, key: &str) -> String {
        match self.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::StringArray(values)) => values.join("\n"),
            _ => String::new(),
        }
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the bundle has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Bundle {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bundle = Self::new();
        for (key, value) in iter {
            bundle.insert(key, value);
        }
        bundle
    }
}

/// Literal used on the wire for booleans.
#[must_use]
pub const fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
