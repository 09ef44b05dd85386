use epd_dither::{Converter, Palette, ACEP_7COLOR, DEFAULT_GAMMA};
use serde::Deserialize;
use std::path::Path;

use crate::error::AppError;
use crate::models::DisplaySpec;
use crate::rendering::c_source::DEFAULT_SYMBOL_SUFFIX;

/// Application configuration loaded from config.yaml
///
/// Every field has a default, so an empty file (or no file) yields the
/// reference 800x480 ACeP setup.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Target width in pixels
    pub width: u32,

    /// Target height in pixels
    pub height: u32,

    /// Gamma pre-correction exponent
    pub gamma: f64,

    /// Exactly eight hex colors; position is the nibble code
    pub palette: Vec<String>,

    /// Input file extensions to convert (case-insensitive, no dot)
    pub extensions: Vec<String>,

    /// Appended to the file stem to form the C array name
    pub symbol_suffix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let spec = DisplaySpec::EPD_7IN3F;
        Self {
            width: spec.width,
            height: spec.height,
            gamma: DEFAULT_GAMMA,
            palette: ACEP_7COLOR.iter().map(|c| c.to_string()).collect(),
            extensions: vec!["png".to_string(), "jpg".to_string(), "jpeg".to_string()],
            symbol_suffix: DEFAULT_SYMBOL_SUFFIX.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        tracing::info!(
            path = %path.display(),
            width = config.width,
            height = config.height,
            gamma = config.gamma,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load configuration if a path is given, falling back to defaults when
    /// the file cannot be read or parsed
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => match Self::load(path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), %e, "Failed to load config, using defaults");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// Build the palette from the configured hex strings
    pub fn palette(&self) -> Result<Palette, AppError> {
        Palette::from_hex(self.palette.as_slice())
            .map_err(|e| AppError::Convert(e.into()))
    }

    /// Frame geometry for the configured dimensions
    pub fn display_spec(&self) -> Result<DisplaySpec, AppError> {
        DisplaySpec::from_dimensions(self.width, self.height)
    }

    /// Check every setting before any file is touched
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(epd_dither::ConvertError::InvalidGamma(self.gamma).into());
        }
        self.display_spec()?;
        self.palette()?;
        if self.extensions.is_empty() {
            return Err(AppError::Config("no input extensions configured".to_string()));
        }
        if self.symbol_suffix.is_empty() {
            return Err(AppError::Config("symbol_suffix cannot be empty".to_string()));
        }
        Ok(())
    }

    /// A validated converter for this configuration
    pub fn converter(&self) -> Result<Converter, AppError> {
        self.validate()?;
        Ok(Converter::new(self.palette()?).gamma(self.gamma))
    }
}
