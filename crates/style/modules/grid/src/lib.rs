//! Grid container pass.
//! Spec: <https://www.w3.org/TR/css-grid-2/>
//!
//! Grid properties are not lowered yet: the pass leaves the accumulator untouched and is
//! not part of the default pipeline. It exists so configurations can already name it.

#![forbid(unsafe_code)]

use log::trace;
use style_model::{NormalizedStyle, Pass, RawStyle};

#[derive(Clone, Copy, Debug, Default)]
pub struct GridPass;

impl Pass for GridPass {
    fn name(&self) -> &str {
        "grid"
    }

    fn apply(&self, style: &RawStyle, result: NormalizedStyle) -> NormalizedStyle {
        if style.text("display") == Some("grid") {
            trace!(target: "style_grid", "grid container properties are not normalized");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use style_model::NormalizedValue;

    #[test]
    fn leaves_accumulator_unchanged() {
        let style = RawStyle::new()
            .with("display", "grid")
            .with("grid-template-columns", "1fr 1fr");
        let mut seeded = NormalizedStyle::new();
        seeded.insert("width", NormalizedValue::Px(10.0));
        assert_eq!(GridPass.apply(&style, seeded.clone()), seeded);
    }
}
