// SPDX-License-Identifier: GPL-3.0-only

use crate::colormap::RangeMode;
use crate::constants::{DEFAULT_LOG_FILTER, DEFAULT_MAX_RANGE, DISPARITY_MESSAGE_TYPE};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Viewer configuration, read from an optional JSON file.
///
/// Missing fields take their default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Message types offered for selection
    pub message_types: Vec<String>,
    /// Scale colours by the bounds carried in each frame
    pub dynamic_range: bool,
    /// Upper disparity bound used when `dynamic_range` is off
    pub max_range: f32,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            message_types: vec![DISPARITY_MESSAGE_TYPE.to_string()],
            dynamic_range: true,
            max_range: DEFAULT_MAX_RANGE,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load from `path`, validating the result.
    ///
    /// Runs before logging is set up, so it does not log; callers report
    /// the loaded file once their subscriber is installed.
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_json(text: &str) -> AppResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.message_types.is_empty() {
            return Err(AppError::Config("message_types must not be empty".into()));
        }
        if !self.max_range.is_finite() || self.max_range <= 0.0 {
            return Err(AppError::Config(format!(
                "max_range must be a positive number, got {}",
                self.max_range
            )));
        }
        Ok(())
    }

    /// Colour scale selection derived from the range settings
    pub fn range_mode(&self) -> RangeMode {
        if self.dynamic_range {
            RangeMode::Dynamic
        } else {
            RangeMode::Fixed {
                max_range: self.max_range,
            }
        }
    }
}
