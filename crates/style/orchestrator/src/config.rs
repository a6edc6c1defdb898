//! Declarative pipeline configuration.
//!
//! ```json
//! { "passes": ["base", "shorthand", "flex", "font", "scroll"] }
//! ```

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use style_flexbox::FlexPass;
use style_fonts::FontPass;
use style_grid::GridPass;
use style_model::Pass;
use style_scroll::ScrollPass;

use crate::passes::{BasePass, ShorthandPass};
use crate::pipeline::Pipeline;

/// A built-in pass, named in configuration files in kebab-case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PassKind {
    Base,
    Shorthand,
    Flex,
    Font,
    Scroll,
    /// Not part of the default order.
    Grid,
}

impl PassKind {
    pub fn instantiate(self) -> Box<dyn Pass> {
        match self {
            Self::Base => Box::new(BasePass::new()),
            Self::Shorthand => Box::new(ShorthandPass),
            Self::Flex => Box::new(FlexPass),
            Self::Font => Box::new(FontPass::new()),
            Self::Scroll => Box::new(ScrollPass),
            Self::Grid => Box::new(GridPass),
        }
    }
}

fn default_passes() -> Vec<PassKind> {
    vec![
        PassKind::Base,
        PassKind::Shorthand,
        PassKind::Flex,
        PassKind::Font,
        PassKind::Scroll,
    ]
}

/// Ordered list of built-in passes to run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    #[serde(default = "default_passes")]
    pub passes: Vec<PassKind>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            passes: default_passes(),
        }
    }
}

impl PipelineConfig {
    /// Parse a configuration from JSON. A missing `passes` field means the default order.
    ///
    /// # Errors
    /// Returns an error if the input is not valid JSON, has unknown fields, or names a pass
    /// that does not exist.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).context("invalid style pipeline configuration")
    }

    pub fn build(&self) -> Pipeline {
        Pipeline::new(
            self.passes
                .iter()
                .copied()
                .map(PassKind::instantiate)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_explicit_order() -> Result<()> {
        let config = PipelineConfig::from_json(r#"{ "passes": ["shorthand", "base", "grid"] }"#)?;
        assert_eq!(
            config.passes,
            vec![PassKind::Shorthand, PassKind::Base, PassKind::Grid]
        );
        assert_eq!(config.build().pass_names(), vec!["shorthand", "base", "grid"]);
        Ok(())
    }

    #[test]
    fn missing_passes_means_default() -> Result<()> {
        assert_eq!(PipelineConfig::from_json("{}")?, PipelineConfig::default());
        Ok(())
    }

    #[test]
    fn empty_list_is_allowed() -> Result<()> {
        let config = PipelineConfig::from_json(r#"{ "passes": [] }"#)?;
        assert!(config.build().is_empty());
        Ok(())
    }

    #[test]
    fn unknown_pass_or_field_is_rejected() {
        assert!(PipelineConfig::from_json(r#"{ "passes": ["table"] }"#).is_err());
        assert!(PipelineConfig::from_json(r#"{ "pases": [] }"#).is_err());
        assert!(PipelineConfig::from_json("not json").is_err());
    }

    #[test]
    fn serializes_kebab_case() -> Result<()> {
        let json = serde_json::to_string(&PipelineConfig::default())?;
        assert_eq!(
            json,
            r#"{"passes":["base","shorthand","flex","font","scroll"]}"#
        );
        Ok(())
    }
}
