//! Process-wide pipeline slot: configure once at startup, transform many times.

use std::sync::{Arc, RwLock};

use anyhow::{Result, anyhow};
use log::debug;
use style_model::{NormalizedStyle, Pass, RawStyle};

use crate::config::PipelineConfig;
use crate::pipeline::Pipeline;

static ACTIVE: RwLock<Option<Arc<Pipeline>>> = RwLock::new(None);

/// Global facade over a [`Pipeline`].
///
/// Hosts that can thread a `Pipeline` through their own state should call
/// [`Pipeline::normalize`] directly; this facade serves callers that only have a style in
/// hand.
pub struct StyleSheet;

impl StyleSheet {
    /// Install `pipeline` for the whole process, replacing any previous one.
    ///
    /// # Errors
    /// Returns an error if the configuration lock is poisoned.
    pub fn configure(pipeline: Pipeline) -> Result<()> {
        let mut slot = ACTIVE
            .write()
            .map_err(|_| anyhow!("style pipeline lock poisoned"))?;
        debug!(target: "style_orchestrator", "configuring style pipeline {:?}", pipeline.pass_names());
        *slot = Some(Arc::new(pipeline));
        Ok(())
    }

    /// Install a pipeline made of `passes`, in order.
    ///
    /// # Errors
    /// Returns an error if the configuration lock is poisoned.
    pub fn pipeline(passes: Vec<Box<dyn Pass>>) -> Result<()> {
        Self::configure(Pipeline::new(passes))
    }

    /// Install the pipeline described by `config`.
    ///
    /// # Errors
    /// Returns an error if the configuration lock is poisoned.
    pub fn configure_from(config: &PipelineConfig) -> Result<()> {
        Self::configure(config.build())
    }

    pub fn is_configured() -> bool {
        ACTIVE.read().is_ok_and(|slot| slot.is_some())
    }

    /// Normalize `style` with the installed pipeline.
    ///
    /// # Errors
    /// Returns an error if no pipeline has been configured yet, or if the configuration
    /// lock is poisoned.
    pub fn transform(style: &RawStyle) -> Result<NormalizedStyle> {
        Ok(Self::active()?.normalize(style))
    }

    /// Parse and normalize an inline declaration list with the installed pipeline.
    ///
    /// # Errors
    /// Same as [`StyleSheet::transform`].
    pub fn transform_inline(declarations: &str) -> Result<NormalizedStyle> {
        Ok(Self::active()?.normalize_inline(declarations))
    }

    fn active() -> Result<Arc<Pipeline>> {
        let slot = ACTIVE
            .read()
            .map_err(|_| anyhow!("style pipeline lock poisoned"))?;
        slot.as_ref()
            .map(Arc::clone)
            .ok_or_else(|| anyhow!("style pipeline used before StyleSheet::configure"))
    }
}
