//! Color transform used by the color normalizer.
//!
//! Colors are packed into a single `u32` laid out as `0xAARRGGBB`.
//! Spec: <https://www.w3.org/TR/css-color-4/>

#![forbid(unsafe_code)]

use csscolorparser::Color;
use log::trace;
use style_model::RawValue;

/// Signature of a color transform: a packed color, or `None` for an invalid input.
pub type ColorTransform = fn(&RawValue) -> Option<u32>;

/// 8-bit RGBA channels.
pub type Rgba8Tuple = (u8, u8, u8, u8);

/// Parse a CSS <color> into 8-bit RGBA channels.
///
/// Supports named colors, hex forms (`#rgb`/`#rgba`/`#rrggbb`/`#rrggbbaa`),
/// and functional notations like `rgb()/rgba()/hsl()`.
///
/// Spec: <https://www.w3.org/TR/css-color-4/#typedef-color>
#[inline]
pub fn parse_css_color(input: &str) -> Option<Rgba8Tuple> {
    let parsed: Color = input.trim().parse().ok()?;
    let [red, green, blue, alpha] = parsed.to_rgba8();
    Some((red, green, blue, alpha))
}

/// Pack RGBA channels as `0xAARRGGBB`.
#[inline]
pub const fn pack_rgba((red, green, blue, alpha): Rgba8Tuple) -> u32 {
    u32::from_be_bytes([alpha, red, green, blue])
}

/// Default color transform.
///
/// Text is parsed as a CSS color and packed. A finite, integral number inside the `u32`
/// range is taken to be an already-packed color. Everything else is invalid.
pub fn color_transform(value: &RawValue) -> Option<u32> {
    let packed = match value {
        RawValue::Text(text) => parse_css_color(text).map(pack_rgba),
        RawValue::Number(number) => packed_from_number(*number),
    };
    if packed.is_none() {
        trace!(target: "style_color", "invalid color {value:?}");
    }
    packed
}

fn packed_from_number(number: f64) -> Option<u32> {
    let in_range = number.is_finite()
        && number.fract() == 0.0
        && (0.0..=f64::from(u32::MAX)).contains(&number);
    in_range.then(|| number as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_and_hex_colors_pack_as_argb() {
        assert_eq!(color_transform(&RawValue::from("red")), Some(0xFFFF_0000));
        assert_eq!(color_transform(&RawValue::from("#00ff00")), Some(0xFF00_FF00));
        assert_eq!(color_transform(&RawValue::from("#0000ff80")), Some(0x8000_00FF));
        assert_eq!(color_transform(&RawValue::from(" blue ")), Some(0xFF00_00FF));
    }

    #[test]
    fn functional_notation_is_accepted() {
        assert_eq!(
            color_transform(&RawValue::from("rgb(10, 20, 30)")),
            Some(0xFF0A_141E)
        );
    }

    #[test]
    fn integral_numbers_are_already_packed() {
        assert_eq!(color_transform(&RawValue::from(0x00FF_00FFu32)), Some(0x00FF_00FF));
        assert_eq!(color_transform(&RawValue::Number(1.5)), None);
        assert_eq!(color_transform(&RawValue::Number(-1.0)), None);
        assert_eq!(color_transform(&RawValue::Number(f64::NAN)), None);
    }

    #[test]
    fn unknown_text_is_invalid() {
        assert_eq!(color_transform(&RawValue::from("not-a-color")), None);
        assert_eq!(color_transform(&RawValue::from("")), None);
    }
}
