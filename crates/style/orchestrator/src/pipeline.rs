use core::fmt;

use log::trace;
use style_attr::parse_raw_style;
use style_model::{NormalizedStyle, Pass, RawStyle};

use crate::config::PipelineConfig;

/// An ordered list of passes folded over a fresh accumulator per call.
///
/// Later passes overwrite entries written by earlier ones; there is no conflict detection,
/// so the order of the list is the precedence policy.
pub struct Pipeline {
    passes: Vec<Box<dyn Pass>>,
}

impl Default for Pipeline {
    /// Base, shorthand, flex, font, and scroll passes, in that order.
    fn default() -> Self {
        PipelineConfig::default().build()
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Pipeline")
            .field("passes", &self.pass_names())
            .finish()
    }
}

impl Pipeline {
    #[inline]
    pub fn new(passes: Vec<Box<dyn Pass>>) -> Self {
        Self { passes }
    }

    /// A pipeline without passes; it normalizes every style to an empty one.
    #[inline]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Append `pass` after the existing passes.
    #[must_use]
    pub fn with_pass(mut self, pass: impl Pass + 'static) -> Self {
        self.passes.push(Box::new(pass));
        self
    }

    /// Run every pass in order over `style`, starting from an empty accumulator.
    pub fn normalize(&self, style: &RawStyle) -> NormalizedStyle {
        self.passes
            .iter()
            .fold(NormalizedStyle::new(), |result, pass| {
                let applied = pass.apply(style, result);
                trace!(target: "style_orchestrator", "after {} pass: {} entries", pass.name(), applied.len());
                applied
            })
    }

    /// Parse an inline declaration list (`"width: 10px; padding: 4"`) and normalize it.
    pub fn normalize_inline(&self, declarations: &str) -> NormalizedStyle {
        self.normalize(&parse_raw_style(declarations))
    }

    pub fn pass_names(&self) -> Vec<&str> {
        self.passes.iter().map(|pass| pass.name()).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.passes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }
}
