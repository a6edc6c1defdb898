//! Enumerated keywords mapped to numeric codes or bit flags.

use log::trace;
use style_model::{NormalizedStyle, NormalizedValue, RawValue};

/// Fixed `keyword -> code` lookup table.
pub type KeywordTable = [(&'static str, u32)];

/// Find the code for an exact keyword.
#[inline]
pub fn lookup_keyword(table: &KeywordTable, keyword: &str) -> Option<u32> {
    table
        .iter()
        .find(|(name, _)| *name == keyword)
        .map(|&(_, code)| code)
}

/// Store the code of `value` at `key` when `value` is exactly one of the table's keywords.
///
/// Compound values such as `right-bottom` are not split into their parts; unless the
/// compound is itself a table entry it writes nothing.
pub fn normalize_keyword(
    table: &KeywordTable,
    key: &str,
    value: &RawValue,
    result: &mut NormalizedStyle,
) {
    match value.as_text().and_then(|keyword| lookup_keyword(table, keyword)) {
        Some(code) => {
            result.insert(key, NormalizedValue::Packed(code));
        }
        None => trace!(target: "style_values", "dropping {key}: unknown keyword {value:?}"),
    }
}
