//! Shorthand properties expanded into their longhand sides.

use log::trace;
use style_model::{NormalizedStyle, NormalizedValue, Pass, RawStyle, RawValue};
use style_values::normalize_px;

/// Longhands of `padding`, as `[side0, side1, side2, side3]`.
pub const PADDING_SIDES: [&str; 4] = ["padding-left", "padding-top", "padding-right", "padding-bottom"];

const SHORTHANDS: &[(&str, [&str; 4])] = &[("padding", PADDING_SIDES)];

/// Expands shorthand properties into per-side longhands.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShorthandPass;

impl Pass for ShorthandPass {
    fn name(&self) -> &str {
        "shorthand"
    }

    fn apply(&self, style: &RawStyle, mut result: NormalizedStyle) -> NormalizedStyle {
        for (shorthand, sides) in SHORTHANDS {
            if let Some(value) = style.get(shorthand) {
                expand_sides(sides, value, &mut result);
            }
        }
        result
    }
}

/// Expand one shorthand value onto `sides`.
///
/// A number is broadcast to all four sides. Text is split on every whitespace character
/// (empty tokens included) and dispatched on the token count:
///
/// - 4 tokens: `side0..side3` in order.
/// - 3 tokens: first to `side1`, second to `side0` and `side2`, third to `side3`.
/// - 2 tokens: second to `side0` and `side2`, first to `side1` and `side3`; then the 4-token
///   and 3-token assignments are replayed against the same two tokens, skipping reads past
///   the end. With two pixel tokens the replay rewrites the same values; when one token does
///   not parse, the replay can fill a side the 2-token assignment left unset (`"1 auto"`
///   sets `side0` to 1).
///
/// Any other count writes nothing. A token that is not a pixel value writes nothing itself.
fn expand_sides(sides: &[&str; 4], value: &RawValue, result: &mut NormalizedStyle) {
    let [side0, side1, side2, side3] = *sides;
    match value {
        RawValue::Number(number) if number.is_finite() => {
            for side in sides {
                result.insert(*side, NormalizedValue::Px(*number));
            }
        }
        RawValue::Number(_) => {
            trace!(target: "style_orchestrator", "dropping non-finite shorthand {value:?}");
        }
        RawValue::Text(text) => {
            let tokens: Vec<&str> = text.split(char::is_whitespace).collect();
            let four = |target: &mut NormalizedStyle| {
                assign(target, side0, &tokens, 0);
                assign(target, side1, &tokens, 1);
                assign(target, side2, &tokens, 2);
                assign(target, side3, &tokens, 3);
            };
            let three = |target: &mut NormalizedStyle| {
                assign(target, side1, &tokens, 0);
                assign(target, side0, &tokens, 1);
                assign(target, side2, &tokens, 1);
                assign(target, side3, &tokens, 2);
            };
            match tokens.len() {
                2 => {
                    assign(result, side0, &tokens, 1);
                    assign(result, side2, &tokens, 1);
                    assign(result, side1, &tokens, 0);
                    assign(result, side3, &tokens, 0);
                    four(result);
                    three(result);
                }
                4 => four(result),
                3 => three(result),
                count => {
                    trace!(target: "style_orchestrator", "dropping shorthand with {count} tokens: {text:?}");
                }
            }
        }
    }
}

fn assign(result: &mut NormalizedStyle, side: &str, tokens: &[&str], index: usize) {
    if let Some(token) = tokens.get(index) {
        normalize_px(side, &RawValue::from(*token), result);
    }
}
