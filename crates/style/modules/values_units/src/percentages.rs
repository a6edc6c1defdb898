//! Dimensions that may be given in pixels or as a percentage.

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use style_model::{NormalizedStyle, NormalizedValue, RawValue, percent_key};

use crate::pixels::parse_px_tail;

#[allow(clippy::expect_used, reason = "pattern is a string literal")]
static PERCENT_TAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+\.?[0-9]*)%?$").expect("valid percent pattern"));

/// Extract the trailing percentage magnitude from `text` (`50%` yields 50).
pub fn parse_percent_tail(text: &str) -> Option<f64> {
    let captures = PERCENT_TAIL.captures(text)?;
    captures.get(1)?.as_str().parse::<f64>().ok()
}

/// Store `value` as pixels at `key`, or as a percentage at `<key>_pct`.
///
/// Precedence: well-formed number, then the pixel pattern, then the percent pattern. The
/// pixel unit is optional, so bare numeric text is pixels; only text that fails the pixel
/// pattern (in practice, text ending in `%`) becomes a percentage.
pub fn normalize_px_or_percent(key: &str, value: &RawValue, result: &mut NormalizedStyle) {
    if let Some(number) = value.as_number() {
        result.insert(key, NormalizedValue::Px(number));
        return;
    }
    let Some(text) = value.as_text() else {
        trace!(target: "style_values", "dropping {key}: {value:?} is not a dimension");
        return;
    };
    if let Some(pixels) = parse_px_tail(text) {
        result.insert(key, NormalizedValue::Px(pixels));
    } else if let Some(percent) = parse_percent_tail(text) {
        result.insert(percent_key(key), NormalizedValue::Percent(percent));
    } else {
        trace!(target: "style_values", "dropping {key}: {text:?} is not a dimension");
    }
}
