//! Game configuration
//!
//! Tunable scoring and speed rules. Defaults reproduce the classic
//! constants; any subset can be overridden from JSON:
//!
//! ```
//! use blockfall_core::GameConfig;
//!
//! let config = GameConfig::from_json_str(r#"{ "lines_per_level": 5 }"#).unwrap();
//! assert_eq!(config.lines_per_level, 5);
//! assert_eq!(config.base_fall_interval_ms, 800);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::scoring::{fall_interval, line_clear_points};
use crate::types::{
    BASE_FALL_INTERVAL_MS, FALL_INTERVAL_STEP_MS, HARD_DROP_POINTS_PER_ROW, LINES_PER_LEVEL,
    LINE_SCORES, MIN_FALL_INTERVAL_MS,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Base points indexed by lines cleared in one placement
    pub line_scores: [u32; 5],
    pub lines_per_level: u32,
    pub base_fall_interval_ms: u32,
    pub fall_interval_step_ms: u32,
    pub min_fall_interval_ms: u32,
    pub hard_drop_points_per_row: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            line_scores: LINE_SCORES,
            lines_per_level: LINES_PER_LEVEL,
            base_fall_interval_ms: BASE_FALL_INTERVAL_MS,
            fall_interval_step_ms: FALL_INTERVAL_STEP_MS,
            min_fall_interval_ms: MIN_FALL_INTERVAL_MS,
            hard_drop_points_per_row: HARD_DROP_POINTS_PER_ROW,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lines_per_level == 0 {
            return Err(ConfigError::Invalid {
                field: "lines_per_level",
                reason: "must be at least 1",
            });
        }
        if self.min_fall_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "min_fall_interval_ms",
                reason: "must be at least 1",
            });
        }
        if self.min_fall_interval_ms > self.base_fall_interval_ms {
            return Err(ConfigError::Invalid {
                field: "min_fall_interval_ms",
                reason: "must not exceed base_fall_interval_ms",
            });
        }
        if self.line_scores[0] != 0 {
            return Err(ConfigError::Invalid {
                field: "line_scores",
                reason: "a placement that clears no lines must score 0",
            });
        }
        Ok(())
    }

    pub fn score_for_clear(&self, lines: usize, level: u32) -> u32 {
        line_clear_points(&self.line_scores, lines, level)
    }

    pub fn level_for_lines(&self, total_lines: u32) -> u32 {
        total_lines / self.lines_per_level.max(1)
    }

    pub fn fall_interval_ms(&self, level: u32) -> u32 {
        fall_interval(
            self.base_fall_interval_ms,
            self.fall_interval_step_ms,
            self.min_fall_interval_ms,
            level,
        )
    }

    pub fn hard_drop_score(&self, rows: u32) -> u32 {
        rows.saturating_mul(self.hard_drop_points_per_row)
    }
}
