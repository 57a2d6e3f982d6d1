//! Error adapter for converting ExamLayoutError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use exam_layout::ExamLayoutError;
use exam_layout_core::LayoutError;

/// Adapter for [`ExamLayoutError`].
///
/// None of the errors carry source spans, so the adapter only supplies a
/// code and, for stored layouts that do not fit their version, a hint.
pub struct ErrorAdapter<'a>(pub &'a ExamLayoutError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ExamLayoutError::Io(_) => "exam_layout::io",
            ExamLayoutError::Json(_) => "exam_layout::json",
            ExamLayoutError::Layout(_) => "exam_layout::layout",
            ExamLayoutError::Config(_) => "exam_layout::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            ExamLayoutError::Layout(err) => layout_help(err),
            ExamLayoutError::Json(_) => {
                "check that the file is a version, layout, or response sheet in JSON"
            }
            ExamLayoutError::Io(_) | ExamLayoutError::Config(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

fn layout_help(err: &LayoutError) -> &'static str {
    match err {
        LayoutError::UnknownSection { .. } | LayoutError::SectionSizeMismatch { .. } => {
            "the version changed after the attempt started; replay it against the original version"
        }
        LayoutError::UnknownQuestion(_) | LayoutError::NotMultipleChoice(_) => {
            "the layout belongs to a different version"
        }
        LayoutError::InvalidQuestionOrder { .. } | LayoutError::InvalidChoiceOrder { .. } => {
            "the stored layout is corrupt; regenerate it from the attempt and participant ids"
        }
    }
}

/// Wrap an [`ExamLayoutError`] for rendering by miette.
pub fn to_reportable(err: &ExamLayoutError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_error_has_code_and_help() {
        let err = ExamLayoutError::Layout(LayoutError::SectionSizeMismatch {
            section_index: 0,
            expected: 4,
            found: 3,
        });

        let reportable = to_reportable(&err);

        assert_eq!(
            reportable.to_string(),
            "Invalid layout: section 0 has 4 questions, but the layout orders 3"
        );
        assert_eq!(reportable.code().unwrap().to_string(), "exam_layout::layout");
        assert!(reportable.help().unwrap().to_string().contains("changed"));
    }

    #[test]
    fn test_config_error_has_no_help() {
        let err = ExamLayoutError::Config("bad".to_string());

        let reportable = to_reportable(&err);

        assert_eq!(reportable.to_string(), "Configuration error: bad");
        assert_eq!(reportable.code().unwrap().to_string(), "exam_layout::config");
        assert!(reportable.help().is_none());
        assert!(reportable.labels().is_none());
    }

    #[test]
    fn test_report_renders() {
        let err = ExamLayoutError::Layout(LayoutError::UnknownQuestion("q9".into()));
        let reporter = miette::GraphicalReportHandler::new();

        let mut writer = String::new();
        reporter
            .render_report(&mut writer, &to_reportable(&err))
            .unwrap();

        assert!(writer.contains("q9"));
        assert!(writer.contains("exam_layout::layout"));
    }
}
