//! miette rendering of [`LineageError`].
//!
//! A parse failure becomes a report with the source attached, so the
//! offending range is underlined. Every other failure is a one-line report
//! with a `lineage::<kind>` code.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceCode};

use lineage::LineageError;
use lineage_parser::error::{Diagnostic, Label};

/// A [`LineageError`] viewed as a miette diagnostic.
#[derive(Debug)]
pub enum Report<'a> {
    Source { diag: &'a Diagnostic, src: &'a str },
    Plain(&'a LineageError),
}

impl<'a> Report<'a> {
    pub fn new(err: &'a LineageError) -> Self {
        match err {
            LineageError::Parse { err, src } => Report::Source {
                diag: err.diagnostic(),
                src,
            },
            _ => Report::Plain(err),
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Source { diag, .. } => f.write_str(diag.message()),
            Report::Plain(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Report<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Report::Plain(LineageError::Io(err)) => Some(err),
            _ => None,
        }
    }
}

impl MietteDiagnostic for Report<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code: Box<dyn fmt::Display> = match self {
            Report::Source { diag, .. } => Box::new(diag.code()),
            Report::Plain(LineageError::Io(_)) => Box::new("lineage::io"),
            Report::Plain(LineageError::Anchor { .. }) => Box::new("lineage::anchor"),
            Report::Plain(LineageError::Config(_)) => Box::new("lineage::config"),
            Report::Plain(LineageError::Parse { .. }) => return None,
        };
        Some(code)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Report::Source { diag, .. } => diag
                .help()
                .map(|help| Box::new(help) as Box<dyn fmt::Display + 'a>),
            Report::Plain(LineageError::Anchor { .. }) => Some(Box::new(
                "`[generation] anchor` must name a person declared in the input",
            )),
            Report::Plain(_) => None,
        }
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        match self {
            Report::Source { src, .. } => Some(src as &dyn SourceCode),
            Report::Plain(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let Report::Source { diag, .. } = self else {
            return None;
        };
        let primary = labeled(diag.label(), true);
        let context = diag.context().map(|label| labeled(label, false));
        Some(Box::new(std::iter::once(primary).chain(context)))
    }
}

fn labeled(label: &Label, primary: bool) -> LabeledSpan {
    let span = label.span();
    let text = Some(label.message().to_string());
    let range = (span.start(), span.len());
    if primary {
        LabeledSpan::new_primary_with_span(text, range)
    } else {
        LabeledSpan::new_with_span(text, range)
    }
}

#[cfg(test)]
mod tests {
    use lineage_parser::{Span, error::ErrorCode};

    use super::*;

    fn parse_error(source: &str) -> LineageError {
        let err = lineage_parser::parse(source).unwrap_err();
        LineageError::new_parse_error(err, source)
    }

    #[test]
    fn test_parse_error_carries_source() {
        let err = parse_error("family_tree { Jean(01/01/1900-); Jean->Marie; }");
        let report = Report::new(&err);

        assert_eq!(report.to_string(), "person `Marie` is not declared");
        assert_eq!(report.code().unwrap().to_string(), "E200");
        assert!(report.help().is_some());
        assert!(report.source_code().is_some());

        let labels: Vec<_> = report.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert!(labels[0].primary());
        assert_eq!(labels[0].offset(), 39);
        assert_eq!(labels[0].len(), 5);
        assert_eq!(labels[0].label(), Some("undeclared person"));
    }

    #[test]
    fn test_duplicate_points_at_both_declarations() {
        let err = parse_error("family_tree { Jean(01/01/1900-); Jean(01/01/1901-); }");
        let report = Report::new(&err);

        let labels: Vec<_> = report.labels().unwrap().collect();
        assert_eq!(labels.len(), 2);
        assert!(labels[0].primary());
        assert_eq!(labels[0].offset(), 33);
        assert!(!labels[1].primary());
        assert_eq!(labels[1].offset(), 14);
        assert_eq!(labels[1].label(), Some("first declared here"));
    }

    #[test]
    fn test_anchor_error() {
        let err = LineageError::Anchor {
            name: "Louis".to_string(),
        };
        let report = Report::new(&err);

        assert_eq!(report.to_string(), "generation anchor `Louis` is not declared");
        assert_eq!(report.code().unwrap().to_string(), "lineage::anchor");
        assert!(report.help().is_some());
        assert!(report.labels().is_none());
        assert!(report.source_code().is_none());
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = LineageError::Io(std::io::Error::other("disk on fire"));
        let report = Report::new(&err);

        assert_eq!(report.code().unwrap().to_string(), "lineage::io");
        assert!(std::error::Error::source(&report).is_some());
    }

    #[test]
    fn test_hand_built_diagnostic() {
        let diag = Diagnostic::new(ErrorCode::E203, "`Paul` already has two parents", Span::new(4..8));
        let err = LineageError::new_parse_error(diag.into(), "Jean->Paul;");
        let report = Report::new(&err);

        let labels: Vec<_> = report.labels().unwrap().collect();
        assert_eq!(labels[0].label(), Some("too many parents"));
        assert!(report.help().is_none());
    }
}
