use std::collections::HashMap;

use style_color::ColorTransform;
use style_model::{NormalizedStyle, RawStyle};

use crate::Normalizer;

/// Per-property dispatch: maps a property name to the normalizer that handles it.
#[derive(Clone, Debug, Default)]
pub struct PropertyTable {
    handlers: HashMap<&'static str, Normalizer>,
}

impl PropertyTable {
    pub fn new(entries: &[(&'static str, Normalizer)]) -> Self {
        Self {
            handlers: entries.iter().copied().collect(),
        }
    }

    /// Route every color property through `transform` instead of the transform it was
    /// declared with.
    #[must_use]
    pub fn with_color_transform(mut self, transform: ColorTransform) -> Self {
        for normalizer in self.handlers.values_mut() {
            if matches!(normalizer, Normalizer::Color(_)) {
                *normalizer = Normalizer::Color(transform);
            }
        }
        self
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<Normalizer> {
        self.handlers.get(key).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Normalize every property of `style` this table knows; other keys are ignored.
    pub fn apply(&self, style: &RawStyle, result: &mut NormalizedStyle) {
        for (key, value) in style {
            if let Some(normalizer) = self.get(key) {
                normalizer.apply(key, value, result);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use style_color::color_transform;
    use style_model::{NormalizedValue, RawValue};

    fn packed_zero(_: &RawValue) -> Option<u32> {
        Some(0)
    }

    fn table() -> PropertyTable {
        PropertyTable::new(&[
            ("width", Normalizer::PxOrPercent),
            ("color", Normalizer::Color(color_transform)),
        ])
    }

    #[test]
    fn only_known_keys_are_normalized() {
        let style = RawStyle::new()
            .with("width", "10px")
            .with("color", "red")
            .with("unknown", "whatever");
        let mut result = NormalizedStyle::new();
        table().apply(&style, &mut result);
        assert_eq!(result.len(), 2);
        assert_eq!(result.get("width"), Some(&NormalizedValue::Px(10.0)));
        assert_eq!(result.get("color"), Some(&NormalizedValue::Packed(0xFFFF_0000)));
    }

    #[test]
    fn color_transform_override_applies_to_color_entries_only() {
        let style = RawStyle::new().with("width", 3).with("color", "red");
        let mut result = NormalizedStyle::new();
        table().with_color_transform(packed_zero).apply(&style, &mut result);
        assert_eq!(result.get("color"), Some(&NormalizedValue::Packed(0)));
        assert_eq!(result.get("width"), Some(&NormalizedValue::Px(3.0)));
    }
}
