//! User-facing descriptions of libpolymat errors.

use crate::common::Span;
use crate::errors::{MathError, ParseErrorKind};
use crate::reader::{Expected, ReadError};

/// The kind of a polymat diagnostic.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DiagnosticKind {
    /// An error diagnostic. Every error ends the current command.
    Error,
    /// A note diagnostic is a generic annotation expanding on a primary error.
    Note,
    /// A help diagnostic instructs the user how their input can be changed to work correctly.
    Help,
}

/// A secondary message attached to a primary [Diagnostic].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AssociatedDiagnostic {
    pub kind: DiagnosticKind,
    pub msg: String,
}

/// A diagnostic for a polymat command.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// The span of input text the diagnostic points to, if it concerns the input text.
    pub span: Option<Span>,
    pub title: String,
    pub msg: Option<String>,
    pub associated_diagnostics: Vec<AssociatedDiagnostic>,
}

impl Diagnostic {
    /// Creates an error diagnostic at a span.
    pub fn span_err<S, M, N>(span: S, title: M, err: N) -> Diagnostic
    where
        S: Into<Span>,
        M: Into<String>,
        N: Into<Option<String>>,
    {
        Diagnostic {
            kind: DiagnosticKind::Error,
            span: Some(span.into()),
            title: title.into(),
            msg: err.into(),
            associated_diagnostics: Vec::with_capacity(1),
        }
    }

    /// Creates an error diagnostic unrelated to any input text.
    pub fn err<M>(title: M) -> Diagnostic
    where
        M: Into<String>,
    {
        Diagnostic {
            kind: DiagnosticKind::Error,
            span: None,
            title: title.into(),
            msg: None,
            associated_diagnostics: Vec::with_capacity(1),
        }
    }

    /// Adds a note to the diagnostic.
    pub fn with_note<M>(mut self, note: M) -> Diagnostic
    where
        M: Into<String>,
    {
        self.associated_diagnostics.push(AssociatedDiagnostic {
            kind: DiagnosticKind::Note,
            msg: note.into(),
        });
        self
    }

    /// Adds a help message to the diagnostic.
    pub fn with_help<M>(mut self, help: M) -> Diagnostic
    where
        M: Into<String>,
    {
        self.associated_diagnostics.push(AssociatedDiagnostic {
            kind: DiagnosticKind::Help,
            msg: help.into(),
        });
        self
    }
}

impl From<&ReadError> for Diagnostic {
    fn from(err: &ReadError) -> Self {
        match err {
            ReadError::UnexpectedEof { expected, span } => {
                let msg = format!("expected {}", expected);
                let diag = Diagnostic::span_err(*span, err.to_string(), msg);
                match expected {
                    Expected::Dimensions => {
                        diag.with_help("a matrix starts with its row and column counts, like `2 2`")
                    }
                    Expected::Element { .. } => {
                        diag.with_note("a matrix needs one element for every row and column")
                    }
                }
            }
            ReadError::InvalidDimension { span, .. } => Diagnostic::span_err(
                *span,
                err.to_string(),
                "expected a positive integer".to_owned(),
            ),
            ReadError::InvalidElement { error, .. } => {
                let msg = error.kind.to_string();
                let diag = Diagnostic::span_err(error.span, err.to_string(), msg);
                match error.kind {
                    ParseErrorKind::UnexpectedChar(c) if c.is_whitespace() => {
                        diag.with_help("elements cannot contain whitespace")
                    }
                    ParseErrorKind::UnexpectedChar(_) | ParseErrorKind::Empty => diag.with_help(
                        "elements are polynomials in `x`, like `3x^2+1/2x-5`",
                    ),
                    ParseErrorKind::NumberOverflow => {
                        diag.with_note("numbers must fit in a signed 64-bit integer")
                    }
                    ParseErrorKind::ExpectedDigits | ParseErrorKind::ZeroDenominator => diag,
                }
            }
        }
    }
}

impl From<&MathError> for Diagnostic {
    fn from(err: &MathError) -> Self {
        let diag = Diagnostic::err(err.to_string());
        match err {
            MathError::NonConstantDivision { .. } => diag.with_note(
                "inverting a matrix divides by its pivots, which must be constants",
            ),
            MathError::LatexUnsupported { .. } => {
                diag.with_help("emit the result without `--latex` instead")
            }
            MathError::Singular => diag.with_note("the determinant of the matrix is 0"),
            _ => diag,
        }
    }
}
