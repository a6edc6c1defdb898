//! Author-facing style input.

use std::collections::HashMap;
use std::collections::hash_map::Iter;

use serde::{Deserialize, Serialize};

/// A single raw style value: either a number or a string that may carry a unit suffix,
/// a keyword, or a space-separated shorthand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Interpret the value as a well-formed number.
    ///
    /// Finite numbers are returned as-is. Text qualifies when its trimmed content is non-empty
    /// and parses as a finite decimal (`"12"`, `" 1.5 "`, `"1e3"`). Anything carrying a unit or
    /// keyword (`"12px"`, `"auto"`) is not a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => number.is_finite().then_some(*number),
            Self::Text(text) => parse_number_text(text),
        }
    }

    /// Borrow the value as text, if it is a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Number(_) => None,
        }
    }
}

fn parse_number_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

impl From<f64> for RawValue {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for RawValue {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for RawValue {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for RawValue {
    #[inline]
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for RawValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Mapping from property name to raw value.
///
/// The schema is open: keys no pass recognizes are carried along and ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawStyle {
    properties: HashMap<String, RawValue>,
}

impl RawStyle {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, convenient for literal styles.
    #[inline]
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a property, returning the previous value.
    #[inline]
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Option<RawValue> {
        self.properties.insert(key.into(), value.into())
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.properties.get(key)
    }

    /// Text value of `key`, or `None` when absent or numeric.
    #[inline]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(RawValue::as_text)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, String, RawValue> {
        self.properties.iter()
    }
}

impl<'style> IntoIterator for &'style RawStyle {
    type Item = (&'style String, &'style RawValue);
    type IntoIter = Iter<'style, String, RawValue>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for RawStyle
where
    K: Into<String>,
    V: Into<RawValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = Self::new();
        for (key, value) in iter {
            style.insert(key, value);
        }
        style
    }
}
