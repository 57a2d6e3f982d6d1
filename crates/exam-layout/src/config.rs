//! Configuration types for the exam layout engine.
//!
//! This module provides configuration structures that control preview
//! generation and grading. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining engine and grading settings.
//! - [`EngineConfig`] - Controls the preview seed.
//! - [`GradingConfig`] - Controls short-answer comparison.
//!
//! Attempt seeds are not configurable; they are always derived from the
//! attempt and participant ids.
//!
//! # Example
//!
//! ```
//! # use exam_layout::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.engine().preview_seed(), 12345);
//! assert_eq!(config.grading().max_edit_distance(), 2);
//! ```

use serde::Deserialize;

use crate::layout::PREVIEW_SEED;

/// Top-level configuration combining engine and grading settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Engine configuration section.
    #[serde(default)]
    engine: EngineConfig,

    /// Grading configuration section.
    #[serde(default)]
    grading: GradingConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified engine and grading configurations.
    ///
    /// # Arguments
    ///
    /// * `engine` - Layout engine settings.
    /// * `grading` - Short-answer grading settings.
    pub fn new(engine: EngineConfig, grading: GradingConfig) -> Self {
        Self { engine, grading }
    }

    /// Returns the engine configuration.
    pub fn engine(&self) -> &EngineConfig {
        &self.engine
    }

    /// Returns the grading configuration.
    pub fn grading(&self) -> &GradingConfig {
        &self.grading
    }
}

/// Layout engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Seed used for authoring previews.
    #[serde(default = "default_preview_seed")]
    preview_seed: u64,
}

fn default_preview_seed() -> u64 {
    PREVIEW_SEED
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            preview_seed: PREVIEW_SEED,
        }
    }
}

impl EngineConfig {
    /// Creates an [`EngineConfig`] previewing with `preview_seed`.
    pub fn new(preview_seed: u64) -> Self {
        Self { preview_seed }
    }

    /// Returns the seed used for previews.
    pub fn preview_seed(&self) -> u64 {
        self.preview_seed
    }
}

/// Short-answer grading configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GradingConfig {
    /// Compare short answers case-sensitively.
    #[serde(default)]
    case_sensitive: bool,

    /// Upper bound on the typo tolerance of any accepted answer.
    #[serde(default = "default_max_edit_distance")]
    max_edit_distance: usize,
}

fn default_max_edit_distance() -> usize {
    2
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            max_edit_distance: default_max_edit_distance(),
        }
    }
}

impl GradingConfig {
    /// Creates a new [`GradingConfig`].
    ///
    /// # Arguments
    ///
    /// * `case_sensitive` - Whether letter case must match.
    /// * `max_edit_distance` - Cap on accepted typos; `0` requires exact matches.
    pub fn new(case_sensitive: bool, max_edit_distance: usize) -> Self {
        Self {
            case_sensitive,
            max_edit_distance,
        }
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn max_edit_distance(&self) -> usize {
        self.max_edit_distance
    }
}
