use crate::{NormalizedStyle, RawStyle};

/// One whole-style transformation step of the normalization pipeline.
///
/// A pass reads the original [`RawStyle`] and the accumulator produced by the passes before
/// it, and returns the updated accumulator. Passes only add or overwrite entries.
pub trait Pass: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &str {
        "anonymous"
    }

    fn apply(&self, style: &RawStyle, result: NormalizedStyle) -> NormalizedStyle;
}

impl<F> Pass for F
where
    F: Fn(&RawStyle, NormalizedStyle) -> NormalizedStyle + Send + Sync,
{
    #[inline]
    fn apply(&self, style: &RawStyle, result: NormalizedStyle) -> NormalizedStyle {
        self(style, result)
    }
}
