use anyhow::{anyhow, Context, Result};
use log::{warn, LevelFilter};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;
use crate::renderer::RenderOptions;
use crate::style::{Canvas, DEFAULT_PRESET};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Output canvas size
    #[serde(default)]
    pub canvas: Canvas,

    /// Distance of top/bottom anchors from the canvas edge
    #[serde(default = "default_edge_margin")]
    pub edge_margin: u32,

    /// Preset used when neither the CLI nor the style names one
    #[serde(default = "default_preset")]
    pub default_preset: String,

    /// Fixed random seed; unset means a fresh layout on every run
    #[serde(default)]
    pub seed: Option<u64>,

    /// Extension of generated subtitle files
    #[serde(default = "default_output_extension")]
    pub output_extension: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            edge_margin: default_edge_margin(),
            default_preset: default_preset(),
            seed: None,
            output_extension: default_output_extension(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    // @validates: Canvas geometry and output naming
    pub fn validate(&self) -> Result<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(anyhow!(
                "Canvas must have a non-zero size, got {}x{}",
                self.canvas.width, self.canvas.height
            ));
        }

        if self.edge_margin >= self.canvas.height {
            return Err(anyhow!(
                "Edge margin {} places the anchor outside a canvas {} pixels high",
                self.edge_margin, self.canvas.height
            ));
        }

        if self.output_extension.trim().is_empty() {
            return Err(anyhow!("Output extension must not be empty"));
        }

        Ok(())
    }

    // @returns: Engine options derived from this config
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            canvas: self.canvas,
            edge_margin: self.edge_margin,
            seed: self.seed,
        }
    }

    /// Load the config at `path`, writing a default one if it does not exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to open config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            return Ok(config);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write default config to file: {}", path.display()))?;

        Ok(config)
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

fn default_edge_margin() -> u32 {
    150
}

fn default_preset() -> String {
    DEFAULT_PRESET.to_string()
}

fn default_output_extension() -> String {
    "ass".to_string()
}
