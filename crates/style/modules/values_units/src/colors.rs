//! Packed colors.

use log::trace;
use style_color::ColorTransform;
use style_model::{NormalizedStyle, NormalizedValue, RawValue};

/// Store the packed color produced by `transform` at `key`; invalid colors write nothing.
pub fn normalize_color(
    transform: ColorTransform,
    key: &str,
    value: &RawValue,
    result: &mut NormalizedStyle,
) {
    if let Some(packed) = transform(value) {
        result.insert(key, NormalizedValue::Packed(packed));
    } else {
        trace!(target: "style_values", "dropping {key}: {value:?} is not a color");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use style_color::color_transform;

    fn always_white(_: &RawValue) -> Option<u32> {
        Some(0xFFFF_FFFF)
    }

    #[test]
    fn valid_color_is_packed() {
        let mut result = NormalizedStyle::new();
        normalize_color(color_transform, "color", &RawValue::from("blue"), &mut result);
        assert_eq!(result.get("color"), Some(&NormalizedValue::Packed(0xFF00_00FF)));
    }

    #[test]
    fn invalid_color_is_dropped() {
        let mut result = NormalizedStyle::new();
        normalize_color(color_transform, "color", &RawValue::from("grey-ish"), &mut result);
        assert!(result.is_empty());
    }

    #[test]
    fn transform_is_pluggable() {
        let mut result = NormalizedStyle::new();
        normalize_color(always_white, "color", &RawValue::from("anything"), &mut result);
        assert_eq!(result.get("color"), Some(&NormalizedValue::Packed(0xFFFF_FFFF)));
    }
}
