//! Base longhand properties: dimensions, paddings, borders, outlines, and colors.

use style_color::{ColorTransform, color_transform};
use style_model::{NormalizedStyle, Pass, RawStyle};
use style_values::{KeywordTable, Normalizer, PropertyTable};

/// Border side flags. Each side is its own bit so sides can be OR-ed; `full` is all four.
///
/// Lookup is by exact keyword only, so `right-bottom` is not recognized.
pub const BORDER_SIDE: &KeywordTable = &[
    ("left", 0x04),
    ("right", 0x08),
    ("full", 0x0F),
    ("top", 0x02),
    ("bottom", 0x01),
];

const BASE_PROPERTIES: &[(&str, Normalizer)] = &[
    ("height", Normalizer::PxOrPercent),
    ("width", Normalizer::PxOrPercent),
    ("left", Normalizer::PxOrPercent),
    ("top", Normalizer::PxOrPercent),
    ("background-color", Normalizer::Color(color_transform)),
    ("padding-left", Normalizer::Px),
    ("padding-right", Normalizer::Px),
    ("padding-top", Normalizer::Px),
    ("padding-bottom", Normalizer::Px),
    ("border-radius", Normalizer::Px),
    ("border-width", Normalizer::Px),
    ("border-opacity", Normalizer::Px),
    ("border-color", Normalizer::Color(color_transform)),
    ("border-side", Normalizer::Keyword(BORDER_SIDE)),
    ("outline-width", Normalizer::Px),
    ("outline-opacity", Normalizer::Px),
    ("outline-color", Normalizer::Color(color_transform)),
    ("font-size", Normalizer::Px),
    ("color", Normalizer::Color(color_transform)),
];

/// Normalizes the fixed set of base longhand properties; every other key is ignored.
#[derive(Clone, Debug)]
pub struct BasePass {
    properties: PropertyTable,
}

impl Default for BasePass {
    fn default() -> Self {
        Self::new()
    }
}

impl BasePass {
    pub fn new() -> Self {
        Self {
            properties: PropertyTable::new(BASE_PROPERTIES),
        }
    }

    /// Use `transform` for every color property instead of the CSS color parser.
    pub fn with_color_transform(transform: ColorTransform) -> Self {
        Self {
            properties: PropertyTable::new(BASE_PROPERTIES).with_color_transform(transform),
        }
    }
}

impl Pass for BasePass {
    fn name(&self) -> &str {
        "base"
    }

    fn apply(&self, style: &RawStyle, mut result: NormalizedStyle) -> NormalizedStyle {
        self.properties.apply(style, &mut result);
        result
    }
}
