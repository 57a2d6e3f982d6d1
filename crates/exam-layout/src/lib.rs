//! Exam Layout - deterministic exam randomization and replay.
//!
//! Shuffles the question order and answer choices of a test version per
//! attempt, replays a stored shuffle whenever the attempt is rendered or
//! resumed, maps the student's responses back to canonical order, and grades
//! them.
//!
//! Every operation is a pure function of its inputs. Nothing here reads the
//! clock, touches storage, or keeps state between calls.

pub mod config;
pub mod grading;
pub mod layout;
pub mod random;
pub mod remap;
pub mod seed;

mod error;

pub use exam_layout_core::{LayoutError, identifier, question, response, version};
pub use exam_layout_core::layout::{IndexPair, Layout};

pub use error::ExamLayoutError;

use log::{debug, info};

use exam_layout_core::{response::Responses, version::Version};

use config::AppConfig;
use grading::GradeReport;

/// Entry point for generating, applying, and grading exam layouts.
///
/// # Examples
///
/// ```rust
/// use exam_layout::{LayoutEngine, config::AppConfig};
/// use exam_layout::version::Version;
///
/// let version: Version = serde_json::from_str(r#"{
///     "id": "placement-a",
///     "options": { "shuffleQuestions": true },
///     "sections": [{ "questions": [
///         { "id": "q1", "type": "writing" },
///         { "id": "q2", "type": "writing" }
///     ]}]
/// }"#).expect("valid version");
///
/// let engine = LayoutEngine::new(AppConfig::default());
///
/// // At attempt start: derive and store the layout
/// let layout = engine.generate_layout(&version, "attempt-1", "student-1");
///
/// // On every render or resume: replay it
/// let view = engine.apply_layout(&version, layout.as_ref());
/// assert_eq!(view.sections()[0].questions().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct LayoutEngine {
    config: AppConfig,
}

impl LayoutEngine {
    /// Create a new layout engine with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Preview and grading settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the engine's configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Generate the layout of an attempt.
    ///
    /// The seed is derived from `attempt_id` and `participant_id`, so calling
    /// this again for the same attempt yields the same layout. Returns `None`
    /// when the version shuffles nothing.
    ///
    /// # Arguments
    ///
    /// * `version` - The test version being attempted
    /// * `attempt_id` - Identifier of the attempt
    /// * `participant_id` - Identifier of the student
    pub fn generate_layout(
        &self,
        version: &Version,
        attempt_id: &str,
        participant_id: &str,
    ) -> Option<Layout> {
        let seed = seed::derive_seed(attempt_id, participant_id);
        info!(attempt_id, participant_id, seed; "Generating attempt layout");
        layout::generate_layout(version, seed)
    }

    /// Reorder `version` for display under an attempt's layout.
    ///
    /// With no layout the version is returned unchanged.
    pub fn apply_layout(&self, version: &Version, layout: Option<&Layout>) -> Version {
        layout::apply_layout(version, layout)
    }

    /// Validate a stored layout against `version`, then apply it.
    ///
    /// # Errors
    ///
    /// Returns [`ExamLayoutError::Layout`] if the layout does not fit the
    /// version.
    pub fn apply_stored_layout(
        &self,
        version: &Version,
        layout: Option<&Layout>,
    ) -> Result<Version, ExamLayoutError> {
        if let Some(layout) = layout {
            layout.validate(version)?;
        }
        Ok(layout::apply_layout(version, layout))
    }

    /// Render the authoring preview of `version` with the configured preview seed.
    ///
    /// The preview is not tied to any attempt and must not be stored as one.
    pub fn generate_preview(&self, version: &Version) -> Version {
        layout::generate_preview(version, self.config.engine().preview_seed())
    }

    /// Convert a response sheet to canonical choice indices.
    pub fn remap_responses(&self, layout: Option<&Layout>, responses: Responses) -> Responses {
        remap::remap_responses(layout, responses)
    }

    /// Grade an attempt's responses.
    ///
    /// Display-order sheets are remapped through `layout` before scoring.
    pub fn grade(
        &self,
        version: &Version,
        layout: Option<&Layout>,
        responses: Responses,
    ) -> GradeReport {
        let canonical = remap::remap_responses(layout, responses);
        debug!(responses = canonical.len(); "Responses in canonical order");
        grading::grade(version, &canonical, self.config.grading())
    }
}
