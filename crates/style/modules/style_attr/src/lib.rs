//! Inline style declarations (`"width: 10px; padding: 4"`) parsed into a [`RawStyle`].
//! Spec: <https://www.w3.org/TR/css-style-attr/>

#![forbid(unsafe_code)]

use log::trace;
use style_model::{RawStyle, RawValue};

/// A single `property: value` declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Property name, ASCII-lowercased.
    pub property: String,
    /// Value trimmed of surrounding ASCII whitespace. May contain inner spaces.
    pub value: String,
}

/// Iterate the well-formed declarations of an inline list, in source order.
///
/// Items are separated by `;` and split on their first `:`. Both halves are trimmed of ASCII
/// whitespace; the property is lowercased. Items that are empty, lack a colon, or have an
/// empty property or value are skipped. There is no `!important`, comment, or escape handling.
///
/// Spec: <https://www.w3.org/TR/css-style-attr/#interpreting>
pub fn declarations(input: &str) -> impl Iterator<Item = Declaration> + '_ {
    input
        .split(';')
        .map(|item| item.trim_matches(is_ascii_whitespace))
        .filter(|item| !item.is_empty())
        .filter_map(split_declaration)
}

fn split_declaration(item: &str) -> Option<Declaration> {
    let Some((name, text)) = item.split_once(':') else {
        trace!(target: "style_attr", "skipping declaration without colon: {item:?}");
        return None;
    };
    let property = name.trim_matches(is_ascii_whitespace);
    let value = text.trim_matches(is_ascii_whitespace);
    if property.is_empty() || value.is_empty() {
        trace!(target: "style_attr", "skipping empty declaration: {item:?}");
        return None;
    }
    Some(Declaration {
        property: property.to_ascii_lowercase(),
        value: value.to_owned(),
    })
}

/// Collect [`declarations`] into a list.
pub fn parse_style_attribute(input: &str) -> Vec<Declaration> {
    declarations(input).collect()
}

/// Parse an inline declaration list into a [`RawStyle`]; the last duplicate wins.
///
/// Values that are plain decimal numbers become [`RawValue::Number`], so `padding: 4`
/// behaves the same as a numeric `padding` supplied programmatically. Everything else stays
/// text for the normalizers to interpret.
pub fn parse_raw_style(input: &str) -> RawStyle {
    declarations(input)
        .map(|declaration| (declaration.property, raw_value_of(declaration.value)))
        .collect()
}

fn raw_value_of(text: String) -> RawValue {
    let is_plain_number = text
        .chars()
        .all(|character| character.is_ascii_digit() || matches!(character, '.' | '-' | '+'));
    match text.parse::<f64>() {
        Ok(number) if is_plain_number && number.is_finite() => RawValue::Number(number),
        _ => RawValue::Text(text),
    }
}

/// ASCII whitespace per CSS Syntax (TAB, LF, FF, CR, SPACE).
///
/// Spec: <https://www.w3.org/TR/css-syntax-3/#whitespace>
const fn is_ascii_whitespace(character: char) -> bool {
    matches!(
        character,
        '\u{0009}' | '\u{000A}' | '\u{000C}' | '\u{000D}' | '\u{0020}'
    )
}
