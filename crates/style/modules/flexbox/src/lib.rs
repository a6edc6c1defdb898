//! Flex container pass.
//!
//! Lowers `flex-direction`/`flex-wrap` into a packed `flex-flow` code and
//! `justify-content`/`align-items`/`align-content` into a `flex-align` triple.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/>

#![forbid(unsafe_code)]

use log::debug;
use style_model::{NormalizedStyle, NormalizedValue, Pass, RawStyle, RawValue};
use style_values::{KeywordTable, lookup_keyword};

/// Main axis is vertical.
pub const FLOW_COLUMN: u32 = 1 << 0;
/// Items wrap onto multiple lines.
pub const FLOW_WRAP: u32 = 1 << 2;
/// Order is reversed.
pub const FLOW_REVERSE: u32 = 1 << 3;

/// `{flex-direction}_{flex-wrap}` combinations.
///
/// `column_reverse` carries only the reverse bit.
pub const FLEX_FLOW: &KeywordTable = &[
    ("row_nowrap", 0x00),
    ("column_nowrap", FLOW_COLUMN),
    ("row_wrap", FLOW_WRAP),
    ("column_wrap", FLOW_COLUMN | FLOW_WRAP),
    ("row_wrap-reverse", FLOW_WRAP | FLOW_REVERSE),
    ("column_wrap-reverse", FLOW_COLUMN | FLOW_WRAP | FLOW_REVERSE),
    ("row_reverse", FLOW_REVERSE),
    ("column_reverse", FLOW_REVERSE),
];

/// Placement ordinals shared by the main, cross, and track-cross axes.
pub const FLEX_ALIGN: &KeywordTable = &[
    ("flex-start", 0),
    ("flex-end", 1),
    ("center", 2),
    ("space-evenly", 3),
    ("space-around", 4),
    ("space-between", 5),
];

/// Normalizes flex container properties when `display` is `flex`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlexPass;

impl Pass for FlexPass {
    fn name(&self) -> &str {
        "flex"
    }

    fn apply(&self, style: &RawStyle, mut result: NormalizedStyle) -> NormalizedStyle {
        if style.text("display") != Some("flex") {
            return result;
        }

        let flow = keyword_or(style, "flex-direction", "row")
            .zip(keyword_or(style, "flex-wrap", "nowrap"))
            .and_then(|(direction, wrap)| {
                lookup_keyword(FLEX_FLOW, &format!("{direction}_{wrap}"))
            })
            .unwrap_or(0);
        result.insert("flex-flow", NormalizedValue::Packed(flow));

        let place = |key: &str| {
            keyword_or(style, key, "flex-start")
                .and_then(|keyword| lookup_keyword(FLEX_ALIGN, keyword))
                .unwrap_or(0)
        };
        let align = [
            place("justify-content"),
            place("align-items"),
            place("align-content"),
        ];
        result.insert("flex-align", NormalizedValue::Tuple(align));

        if let Some(grow) = style.get("flex-grow").and_then(RawValue::as_number) {
            result.insert("flex-grow", NormalizedValue::Number(grow));
        }
        debug!(target: "style_flexbox", "flex-flow={flow:#06b} flex-align={align:?}");
        result
    }
}

/// Keyword at `key`, or `default` when absent or empty.
///
/// `None` stands for a non-empty number, which matches no keyword.
fn keyword_or<'style>(
    style: &'style RawStyle,
    key: &str,
    default: &'static str,
) -> Option<&'style str> {
    match style.get(key) {
        Some(RawValue::Text(text)) if !text.is_empty() => Some(text.as_str()),
        Some(RawValue::Number(number)) if *number != 0.0 && !number.is_nan() => None,
        Some(RawValue::Text(_) | RawValue::Number(_)) | None => Some(default),
    }
}
