//! Text and font pass.
//!
//! `font-size` and `color` belong to the base pass; this pass covers the text layout
//! properties that only label-like widgets consume.

#![forbid(unsafe_code)]

use style_model::{NormalizedStyle, Pass, RawStyle};
use style_values::{KeywordTable, Normalizer, PropertyTable};

pub const TEXT_ALIGN: &KeywordTable = &[("auto", 0), ("left", 1), ("center", 2), ("right", 3)];

pub const TEXT_DECORATION: &KeywordTable =
    &[("none", 0), ("underline", 1), ("line-through", 2)];

/// How text longer than its box is handled.
pub const TEXT_OVERFLOW: &KeywordTable = &[
    ("wrap", 0),
    ("dot", 1),
    ("scroll", 2),
    ("scroll-circular", 3),
    ("clip", 4),
];

const FONT_PROPERTIES: &[(&str, Normalizer)] = &[
    ("text-align", Normalizer::Keyword(TEXT_ALIGN)),
    ("text-decoration", Normalizer::Keyword(TEXT_DECORATION)),
    ("text-overflow", Normalizer::Keyword(TEXT_OVERFLOW)),
    ("letter-spacing", Normalizer::Px),
    ("line-spacing", Normalizer::Px),
];

#[derive(Clone, Debug)]
pub struct FontPass {
    properties: PropertyTable,
}

impl Default for FontPass {
    fn default() -> Self {
        Self::new()
    }
}

impl FontPass {
    pub fn new() -> Self {
        Self {
            properties: PropertyTable::new(FONT_PROPERTIES),
        }
    }
}

impl Pass for FontPass {
    fn name(&self) -> &str {
        "font"
    }

    fn apply(&self, style: &RawStyle, mut result: NormalizedStyle) -> NormalizedStyle {
        self.properties.apply(style, &mut result);
        result
    }
}
