//! User-facing polymat diagnostics.
//!
//! The diagnostics module demarshalls [libpolymat diagnostics][libpolymat::diagnostics] into a
//! form pleasant for standard error.

use libpolymat::common::Span;
use libpolymat::diagnostics::{AssociatedDiagnostic, Diagnostic, DiagnosticKind};

use annotate_snippets::{
    display_list::{DisplayList, FormatOptions},
    snippet::{Annotation, AnnotationType, Slice, Snippet, SourceAnnotation},
};

pub fn sanitize_source_for_diagnostics(source: &str) -> String {
    let source = source.to_owned();
    source + " " // we might emit an EOF diagnostic, so add extra space.
}

pub fn emit_polymat_diagnostics(source: &str, diagnostics: &[Diagnostic], color: bool) -> String {
    if diagnostics.is_empty() {
        return String::new();
    }

    let last_i = diagnostics.len() - 1;
    let mut emitted_diagnostics = String::new();

    for (i, diagnostic) in diagnostics.iter().enumerate() {
        let main_annotation_type = convert_diagnostic_kind(&diagnostic.kind);
        let label = diagnostic.msg.clone().unwrap_or_default();

        // Only diagnostics about the input text get a source slice; the rest are title-only.
        let slices = match diagnostic.span {
            Some(span) => {
                let range = char_range(source, span);
                vec![Slice {
                    source,
                    line_start: 1,
                    origin: Some("<stdin>"),
                    fold: true,
                    annotations: vec![SourceAnnotation {
                        label: &label,
                        annotation_type: main_annotation_type,
                        range,
                    }],
                }]
            }
            None => vec![],
        };

        let footer = diagnostic
            .associated_diagnostics
            .iter()
            .map(convert_associated_diagnostic)
            .collect();

        let snippet = Snippet {
            title: Some(Annotation {
                label: Some(&diagnostic.title),
                id: None,
                annotation_type: main_annotation_type,
            }),
            footer,
            slices,
            opt: FormatOptions {
                color,
                ..Default::default()
            },
        };
        let suffix = if i != last_i { "\n" } else { "" };
        emitted_diagnostics.push_str(&format!("{}\n{}", DisplayList::from(snippet), suffix));
    }
    emitted_diagnostics
}

/// Converts a byte span of `source` to the char range annotate-snippets expects.
///
/// EOF spans are empty, so they are widened to cover the padding added by
/// `sanitize_source_for_diagnostics`.
fn char_range(source: &str, span: Span) -> (usize, usize) {
    let chars_before = |byte: usize| {
        source
            .get(..byte)
            .map_or_else(|| source.chars().count(), |prefix| prefix.chars().count())
    };
    let lo = chars_before(span.lo);
    let hi = chars_before(span.hi);
    (lo, hi.max(lo + 1))
}

/// Converts a polymat AssociatedDiagnostic to a footer Annotation.
fn convert_associated_diagnostic(diagnostic: &AssociatedDiagnostic) -> Annotation {
    Annotation {
        label: Some(&diagnostic.msg),
        id: None,
        annotation_type: convert_diagnostic_kind(&diagnostic.kind),
    }
}

/// Converts a polymat DiagnosticKind to an AnnotationType.
fn convert_diagnostic_kind(diagnostic_kind: &DiagnosticKind) -> AnnotationType {
    match diagnostic_kind {
        DiagnosticKind::Error => AnnotationType::Error,
        DiagnosticKind::Note => AnnotationType::Note,
        DiagnosticKind::Help => AnnotationType::Help,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_diagnostics() {
        assert_eq!(emit_polymat_diagnostics("1 1\n1 ", &[], false), "");
    }

    #[test]
    fn spanned_diagnostic_shows_source() {
        let source = sanitize_source_for_diagnostics("1 1\n3y");
        let diag = Diagnostic::span_err(
            (5, 6),
            "invalid element (1, 1)",
            "unexpected character".to_owned(),
        )
        .with_help("elements are polynomials in `x`");
        let emitted = emit_polymat_diagnostics(&source, &[diag], false);
        assert!(emitted.starts_with("error: invalid element (1, 1)"));
        assert!(emitted.contains("3y"));
        assert!(emitted.contains("unexpected character"));
        assert!(emitted.contains("help: elements are polynomials in `x`"));
    }

    #[test]
    fn byte_spans_become_char_ranges() {
        let source = sanitize_source_for_diagnostics("1 1\n\u{e9}");
        assert_eq!(char_range(&source, (4, 6).into()), (4, 5));
        assert_eq!(char_range(&source, (6, 6).into()), (5, 6));
        assert_eq!(char_range(&source, (0, 1).into()), (0, 1));

        let source = sanitize_source_for_diagnostics("1 2\u{3000}\u{3000}5");
        assert_eq!(char_range(&source, (2, 10).into()), (2, 6));
    }

    #[test]
    fn multibyte_source_renders() {
        let source = sanitize_source_for_diagnostics("1 2\u{3000}\u{3000}\u{3000}\u{3000}5");
        let diag = Diagnostic::span_err(
            (2, 16),
            "bad dimension",
            "expected a positive integer".to_owned(),
        );
        let emitted = emit_polymat_diagnostics(&source, &[diag], false);
        assert!(emitted.starts_with("error: bad dimension"));
        assert!(emitted.contains("expected a positive integer"));
    }

    #[test]
    fn unspanned_diagnostic_has_no_source() {
        let diag = Diagnostic::err("cannot invert a singular matrix").with_note("determinant is 0");
        let emitted = emit_polymat_diagnostics("2 2\n1 2\n2 4 ", &[diag], false);
        assert!(emitted.starts_with("error: cannot invert a singular matrix"));
        assert!(emitted.contains("note: determinant is 0"));
        assert!(!emitted.contains("1 2"));
    }
}
