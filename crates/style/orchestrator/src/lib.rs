//! Style normalization pipeline.
//!
//! Lowers a loosely-typed, CSS-like [`RawStyle`] into the strictly-typed
//! [`NormalizedStyle`] consumed by the rendering engine:
//!
//! ```text
//! RawStyle -> base -> shorthand -> flex -> font -> scroll -> NormalizedStyle
//! ```
//!
//! Every pass reads the original raw style and the accumulator left by the passes before
//! it. Normalization never fails; values that cannot be interpreted are dropped.

#![forbid(unsafe_code)]

mod config;
pub mod passes;
mod pipeline;
mod stylesheet;

pub use config::{PassKind, PipelineConfig};
pub use pipeline::Pipeline;
pub use stylesheet::StyleSheet;

pub use style_model::{NormalizedStyle, NormalizedValue, Pass, RawStyle, RawValue};
