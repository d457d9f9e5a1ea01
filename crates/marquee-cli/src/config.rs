use std::fs;
use std::path::Path;

use marquee_core::{ErrorInfo, MarqueeError};
use marquee_ingest::ReaderOptions;
use marquee_rank::{from_yaml_slice, AnalysisOptions};
use serde::{Deserialize, Serialize};

/// YAML-configurable settings for a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarqueeConfig {
    /// Decoder settings.
    #[serde(default)]
    pub ingest: ReaderOptions,
    /// View tunables.
    #[serde(default)]
    pub analysis: AnalysisOptions,
}

impl MarqueeConfig {
    /// Loads a config file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, MarqueeError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let bytes = fs::read(path).map_err(|err| {
            MarqueeError::Config(
                ErrorInfo::new("marquee.config.read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        let config: Self = from_yaml_slice(&bytes)?;
        config.analysis.validate()?;
        Ok(config)
    }
}
