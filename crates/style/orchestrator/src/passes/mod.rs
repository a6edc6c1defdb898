//! Passes owned by the orchestrator.
//!
//! Container-specific passes live in their own module crates (`style_flexbox`,
//! `style_fonts`, `style_scroll`, `style_grid`).

pub mod base;
pub mod shorthand;

pub use base::{BORDER_SIDE, BasePass};
pub use shorthand::{PADDING_SIDES, ShorthandPass};
