//! Pixel magnitudes.

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use style_model::{NormalizedStyle, NormalizedValue, RawValue};

/// Decimal magnitude anchored to the end of the text, with an optional `px` unit.
#[allow(clippy::expect_used, reason = "pattern is a string literal")]
static PX_TAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+\.?[0-9]*)(?:px)?$").expect("valid px pattern"));

/// Extract the trailing pixel magnitude from `text`.
///
/// Matches `12`, `12px`, `12.5px`, and also the tail of `abc12px` (yielding 12). Signs and
/// other units are not part of the pattern, so `-5px` yields 5 and `12em` yields nothing.
pub fn parse_px_tail(text: &str) -> Option<f64> {
    let captures = PX_TAIL.captures(text)?;
    captures.get(1)?.as_str().parse::<f64>().ok()
}

/// Store `value` at `key` as pixels.
///
/// Well-formed numbers are stored verbatim; otherwise the magnitude is extracted with
/// [`parse_px_tail`]. Unparseable values write nothing.
pub fn normalize_px(key: &str, value: &RawValue, result: &mut NormalizedStyle) {
    let pixels = value
        .as_number()
        .or_else(|| value.as_text().and_then(parse_px_tail));
    if let Some(magnitude) = pixels {
        result.insert(key, NormalizedValue::Px(magnitude));
    } else {
        trace!(target: "style_values", "dropping {key}: {value:?} is not a pixel value");
    }
}
