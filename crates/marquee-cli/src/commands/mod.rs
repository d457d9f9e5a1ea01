pub mod analyze;
pub mod digest;
pub mod validate;

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use marquee_core::MarqueeError;
use marquee_ingest::{read_path, FormatChoice, LoadedInput};

use crate::config::MarqueeConfig;

/// Decoder override accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for FormatChoice {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => FormatChoice::Csv,
            FormatArg::Json => FormatChoice::Json,
        }
    }
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// CSV or JSON table of movies.
    #[arg(long)]
    pub input: PathBuf,
    /// Optional YAML configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Force a decoder instead of using the file extension.
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

impl InputArgs {
    /// Loads the config file and applies the command line overrides.
    pub fn config(&self) -> Result<MarqueeConfig, MarqueeError> {
        let mut config = MarqueeConfig::load(self.config.as_deref())?;
        if let Some(format) = self.format {
            config.ingest.format = format.into();
        }
        Ok(config)
    }

    /// Reads and decodes the input file.
    pub fn load(&self, config: &MarqueeConfig) -> Result<LoadedInput, MarqueeError> {
        read_path(&self.input, &config.ingest)
    }
}
