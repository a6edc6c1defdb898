//! Style data model shared by every normalization crate.
//!
//! A [`RawStyle`] is the loosely-typed author input (numbers or strings keyed by property
//! name). A [`NormalizedStyle`] is the strictly-typed output handed to the rendering engine.
//! A [`Pass`] turns one into (part of) the other.

#![forbid(unsafe_code)]

mod normalized;
mod pass;
mod raw;

pub use normalized::{NormalizedStyle, NormalizedValue, PERCENT_SUFFIX, percent_key};
pub use pass::Pass;
pub use raw::{RawStyle, RawValue};
