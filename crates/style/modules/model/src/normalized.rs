//! Engine-facing normalized style output.

use std::collections::BTreeMap;
use std::collections::btree_map::Iter;

use serde::Serialize;

/// Suffix appended to a dimension key when its value is a percentage.
pub const PERCENT_SUFFIX: &str = "_pct";

/// Key under which a percentage magnitude for `key` is stored.
#[inline]
pub fn percent_key(key: &str) -> String {
    format!("{key}{PERCENT_SUFFIX}")
}

/// A strictly-typed style value ready for the rendering engine.
///
/// Serializes untagged, so a normalized style becomes a flat JSON object of numbers and
/// number arrays.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NormalizedValue {
    /// Pixel magnitude.
    Px(f64),
    /// Percentage magnitude (`50` means 50%). Stored under [`percent_key`].
    Percent(f64),
    /// Packed color or bit-packed enum/flag code.
    Packed(u32),
    /// Plain scalar passed through unchanged.
    Number(f64),
    /// Small fixed-length tuple, used for alignment triples.
    Tuple([u32; 3]),
}

/// Mapping from output property name to [`NormalizedValue`].
///
/// Keys are kept ordered so two normalizations of the same input compare and serialize
/// identically.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NormalizedStyle {
    entries: BTreeMap<String, NormalizedValue>,
}

impl NormalizedStyle {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `value` at `key`, overwriting any earlier entry.
    #[inline]
    pub fn insert(&mut self, key: impl Into<String>, value: NormalizedValue) -> Option<NormalizedValue> {
        self.entries.insert(key.into(), value)
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&NormalizedValue> {
        self.entries.get(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, String, NormalizedValue> {
        self.entries.iter()
    }
}

impl<'style> IntoIterator for &'style NormalizedStyle {
    type Item = (&'style String, &'style NormalizedValue);
    type IntoIter = Iter<'style, String, NormalizedValue>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, NormalizedValue)> for NormalizedStyle {
    fn from_iter<I: IntoIterator<Item = (K, NormalizedValue)>>(iter: I) -> Self {
        let mut style = Self::new();
        for (key, value) in iter {
            style.insert(key, value);
        }
        style
    }
}
