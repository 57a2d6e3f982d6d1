//! CLI logic for the exam layout tool.
//!
//! Each subcommand reads JSON files, runs one [`LayoutEngine`] operation, and
//! writes pretty-printed JSON to the output file or stdout.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command};

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use log::{debug, info};
use serde::{Serialize, de::DeserializeOwned};

use exam_layout::{ExamLayoutError, Layout, LayoutEngine, response::Responses, version::Version};

/// Run the exam layout CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ExamLayoutError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed JSON input
/// - Stored layouts that do not fit their version
pub fn run(args: &Args) -> Result<(), ExamLayoutError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let engine = LayoutEngine::new(app_config);

    match &args.command {
        Command::Generate {
            version,
            attempt,
            participant,
            output,
        } => {
            info!(version_path = version, attempt, participant; "Generating layout");
            let version: Version = read_json(version)?;
            let layout = engine.generate_layout(&version, attempt, participant);
            if layout.is_none() {
                info!("Version shuffles nothing; no layout generated");
            }
            write_json(output.as_deref(), &layout)
        }
        Command::Apply {
            version,
            layout,
            output,
        } => {
            info!(version_path = version, layout_path:? = layout; "Applying layout");
            let version: Version = read_json(version)?;
            let layout = read_layout(layout.as_deref())?;
            let view = engine.apply_stored_layout(&version, layout.as_ref())?;
            write_json(output.as_deref(), &view)
        }
        Command::Preview { version, output } => {
            info!(
                version_path = version,
                preview_seed = engine.config().engine().preview_seed();
                "Generating preview"
            );
            let version: Version = read_json(version)?;
            let preview = engine.generate_preview(&version);
            write_json(output.as_deref(), &preview)
        }
        Command::Grade {
            version,
            layout,
            responses,
            output,
        } => {
            info!(version_path = version, responses_path = responses; "Grading responses");
            let version: Version = read_json(version)?;
            let layout = read_layout(layout.as_deref())?;
            if let Some(layout) = &layout {
                layout.validate(&version)?;
            }
            let responses: Responses = read_json(responses)?;
            let report = engine.grade(&version, layout.as_ref(), responses);
            info!(
                score = report.score(),
                max_score = report.max_score(),
                pending_points = report.pending_points();
                "Graded"
            );
            write_json(output.as_deref(), &report)
        }
    }
}

/// Read a stored layout. A missing path and a file holding `null` both mean
/// the attempt has no layout.
fn read_layout(path: Option<&str>) -> Result<Option<Layout>, ExamLayoutError> {
    match path {
        Some(path) => read_json(path),
        None => Ok(None),
    }
}

fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ExamLayoutError> {
    let path = path.as_ref();
    debug!(path = path.display().to_string(); "Reading JSON input");
    let source = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&source)?)
}

fn write_json<T: Serialize>(output: Option<&str>, value: &T) -> Result<(), ExamLayoutError> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');

    match output {
        Some(path) => {
            fs::write(path, json)?;
            info!(output_file = path; "Output written");
        }
        None => io::stdout().lock().write_all(json.as_bytes())?,
    }

    Ok(())
}
