//! Value normalizers: single-value conversions from [`RawValue`] to [`NormalizedValue`].
//!
//! Every normalizer follows the same policy: a value it cannot interpret contributes nothing.
//! Nothing here returns an error; dropped values are reported at `trace` level.
//!
//! [`NormalizedValue`]: style_model::NormalizedValue

#![forbid(unsafe_code)]

pub mod colors;
pub mod keywords;
pub mod percentages;
pub mod pixels;
mod table;

pub use colors::normalize_color;
pub use keywords::{KeywordTable, lookup_keyword, normalize_keyword};
pub use percentages::{normalize_px_or_percent, parse_percent_tail};
pub use pixels::{normalize_px, parse_px_tail};
pub use table::PropertyTable;

use style_color::ColorTransform;
use style_model::{NormalizedStyle, RawValue};

/// A normalizer variant, stored in per-property dispatch tables.
#[derive(Clone, Copy, Debug)]
pub enum Normalizer {
    /// Pixel magnitude (see [`normalize_px`]).
    Px,
    /// Pixel magnitude, or percentage under the `_pct` key (see [`normalize_px_or_percent`]).
    PxOrPercent,
    /// Exact keyword lookup (see [`normalize_keyword`]).
    Keyword(&'static KeywordTable),
    /// Packed color through a color transform (see [`normalize_color`]).
    Color(ColorTransform),
}

impl Normalizer {
    /// Normalize `value` for `key`, writing at most one entry into `result`.
    #[inline]
    pub fn apply(self, key: &str, value: &RawValue, result: &mut NormalizedStyle) {
        match self {
            Self::Px => normalize_px(key, value, result),
            Self::PxOrPercent => normalize_px_or_percent(key, value, result),
            Self::Keyword(table) => normalize_keyword(table, key, value, result),
            Self::Color(transform) => normalize_color(transform, key, value, result),
        }
    }
}
