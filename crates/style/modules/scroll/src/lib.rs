//! Scroll behavior pass.

#![forbid(unsafe_code)]

use log::trace;
use style_model::{NormalizedStyle, Pass, RawStyle};
use style_values::{KeywordTable, Normalizer};

/// When the scrollbar is shown.
pub const SCROLLBAR_MODE: &KeywordTable = &[("off", 0), ("on", 1), ("active", 2), ("auto", 3)];

/// Direction flags; `horizontal`, `vertical`, and `all` are unions of the single sides.
pub const SCROLL_DIR: &KeywordTable = &[
    ("none", 0b0000),
    ("left", 0b0001),
    ("right", 0b0010),
    ("top", 0b0100),
    ("bottom", 0b1000),
    ("horizontal", 0b0011),
    ("vertical", 0b1100),
    ("all", 0b1111),
];

pub const SCROLL_SNAP: &KeywordTable = &[("none", 0), ("start", 1), ("end", 2), ("center", 3)];

/// `(input key, output key, normalizer)`.
const SCROLL_PROPERTIES: &[(&str, &str, Normalizer)] = &[
    ("overflow-scroll", "scrollbar-mode", Normalizer::Keyword(SCROLLBAR_MODE)),
    ("scroll-dir", "scroll-dir", Normalizer::Keyword(SCROLL_DIR)),
    ("scroll-snap-x", "scroll-snap-x", Normalizer::Keyword(SCROLL_SNAP)),
    ("scroll-snap-y", "scroll-snap-y", Normalizer::Keyword(SCROLL_SNAP)),
];

#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollPass;

impl Pass for ScrollPass {
    fn name(&self) -> &str {
        "scroll"
    }

    fn apply(&self, style: &RawStyle, mut result: NormalizedStyle) -> NormalizedStyle {
        for &(input, output, normalizer) in SCROLL_PROPERTIES {
            if let Some(value) = style.get(input) {
                trace!(target: "style_scroll", "{input} -> {output}");
                normalizer.apply(output, value, &mut result);
            }
        }
        result
    }
}
