use marquee_core::{ErrorInfo, MarqueeError};
use serde::{Deserialize, Serialize};

/// Tunables for the derived views, loadable from the `analysis` section of
/// a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Inclusive minimum duration (minutes) for the patience view.
    #[serde(default = "default_patience_min_duration")]
    pub patience_min_duration: f64,
    /// Director whose movies are summed, compared case-insensitively.
    #[serde(default = "default_director")]
    pub director: String,
    /// Length of every actor ranking.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_patience_min_duration() -> f64 {
    220.0
}

fn default_director() -> String {
    "Steven Spielberg".to_string()
}

fn default_top_n() -> usize {
    10
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            patience_min_duration: default_patience_min_duration(),
            director: default_director(),
            top_n: default_top_n(),
        }
    }
}

impl AnalysisOptions {
    /// Rejects option values no view can work with.
    pub fn validate(&self) -> Result<(), MarqueeError> {
        if self.top_n == 0 {
            return Err(MarqueeError::Config(
                ErrorInfo::new("marquee.config.top_n", "top_n must be at least 1")
                    .with_context("top_n", "0"),
            ));
        }
        if !self.patience_min_duration.is_finite() {
            return Err(MarqueeError::Config(
                ErrorInfo::new(
                    "marquee.config.patience_min_duration",
                    "patience threshold must be a finite number of minutes",
                )
                .with_context("value", self.patience_min_duration.to_string()),
            ));
        }
        Ok(())
    }
}
