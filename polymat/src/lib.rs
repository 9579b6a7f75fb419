//! The polymat app. For the arithmetic itself, see [libpolymat's documentation](libpolymat).

#![deny(missing_docs)]

mod diagnostics;
use diagnostics::{emit_polymat_diagnostics, sanitize_source_for_diagnostics};

use libpolymat::diagnostics::Diagnostic;
use libpolymat::{Emit, EmitFormat, MathError, Matrix, MatrixReader};

use std::str::FromStr;

/// An operation polymat performs on the matrices it reads.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Action {
    /// Inverts one matrix.
    Invert,
    /// Computes the determinant of one matrix.
    Determinant,
    /// Adds two matrices.
    Add,
    /// Subtracts the second matrix from the first.
    Sub,
    /// Multiplies two matrices.
    Multiply,
}

impl Action {
    const NAMES: [(&'static str, Action); 5] = [
        ("INVERT", Action::Invert),
        ("DETERMINANT", Action::Determinant),
        ("ADD", Action::Add),
        ("SUB", Action::Sub),
        ("MULTIPLY", Action::Multiply),
    ];

    /// The number of matrices the action reads.
    pub fn arity(self) -> usize {
        match self {
            Action::Invert | Action::Determinant => 1,
            Action::Add | Action::Sub | Action::Multiply => 2,
        }
    }
}

impl FromStr for Action {
    type Err = String;

    /// Parses an action by its name or the first letter of its name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        Self::NAMES
            .iter()
            .find(|(name, _)| *name == upper || (upper.len() == 1 && name.starts_with(&upper)))
            .map(|(_, action)| *action)
            .ok_or_else(|| {
                format!(
                    "unknown action `{}`; expected one of: {}",
                    s,
                    Self::NAMES
                        .iter()
                        .map(|(name, _)| *name)
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

/// Options to run polymat with.
pub struct Opts {
    /// The operation to perform.
    pub action: Action,
    /// When true, results are emitted as LaTeX.
    pub latex: bool,
    /// When true, diagnostics will be colored.
    pub color: bool,
}

/// Parses [Opts](self::Opts) from the command line or given a parser that acts on the clap
/// [App](clap::App).
pub fn get_opts<P>(parser: P, color: bool) -> Result<Opts, clap::Error>
where
    P: for<'a> FnOnce(clap::App<'a, '_>) -> Result<clap::ArgMatches<'a>, clap::Error>,
{
    let matches = clap::App::new(clap::crate_name!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .after_help(
            "Matrices are read from standard input as their height and width followed by their \
            elements. Elements are polynomials in x written without spaces, with fractions \
            written as N/D, like 3x^2+1/2x-5.\n\n\
            Set POLYMAT_LOG=debug to trace the computation.",
        )
        .arg(
            clap::Arg::with_name("action")
                .short("a")
                .long("action")
                .next_line_help(true)
                .help(
                    "Operation to perform. Possible values:\n\
                    \tINVERT:      Invert a matrix.\n\
                    \tDETERMINANT: Compute the determinant of a matrix.\n\
                    \tADD:         Add two matrices.\n\
                    \tSUB:         Subtract the second matrix from the first.\n\
                    \tMULTIPLY:    Multiply two matrices.\n\
                    ",
                )
                .required(true)
                .takes_value(true)
                .validator(|s| s.parse::<Action>().map(|_| ())),
        )
        .arg(
            clap::Arg::with_name("latex")
                .short("l")
                .long("latex")
                .help("Emit the result as LaTeX."),
        );
    let matches = parser(matches)?;

    Ok(Opts {
        // clap has validated the action.
        action: matches
            .value_of("action")
            .and_then(|a| a.parse().ok())
            .unwrap_or(Action::Determinant),
        latex: matches.is_present("latex"),
        color,
    })
}

/// Output of a polymat execution.
#[derive(Default, Debug)]
pub struct PolymatResult {
    /// Exit code
    pub code: i32,
    /// Emit for stdout
    pub stdout: String,
    /// Emit for stderr
    pub stderr: String,
}

/// Builds a [PolymatResult](self::PolymatResult).
struct PolymatResultBuilder {
    /// Input text sanitized for diagnostic emission.
    sanitized_input: String,
    emit_format: EmitFormat,
    color: bool,
    stdout: String,
    stderr: String,
}

impl PolymatResultBuilder {
    fn new(input: &str, emit_format: EmitFormat, color: bool) -> Self {
        Self {
            sanitized_input: sanitize_source_for_diagnostics(input),
            emit_format,
            color,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    fn emit(&mut self, obj: &dyn Emit) -> Result<(), MathError> {
        let emitted = obj.emit(self.emit_format)?;
        self.stdout.push_str(&emitted);
        Ok(())
    }

    fn err(&mut self, diagnostics: &[Diagnostic]) {
        self.stderr.push_str(&emit_polymat_diagnostics(
            &self.sanitized_input,
            diagnostics,
            self.color,
        ));
    }

    fn ok(self) -> PolymatResult {
        PolymatResult {
            code: 0,
            stdout: self.stdout,
            stderr: self.stderr,
        }
    }

    fn failed(self) -> PolymatResult {
        PolymatResult {
            code: 1,
            stdout: self.stdout,
            stderr: self.stderr,
        }
    }
}

/// Runs polymat end-to-end on the matrices written in `input`.
pub fn run_polymat(opts: Opts, input: &str) -> PolymatResult {
    let emit_format = if opts.latex {
        EmitFormat::Latex
    } else {
        EmitFormat::Pretty
    };
    let mut result = PolymatResultBuilder::new(input, emit_format, opts.color);
    log::info!("running {:?} with {:?} emit", opts.action, emit_format);

    let mut reader = MatrixReader::new(input);
    let mut operands = Vec::with_capacity(opts.action.arity());
    for _ in 0..opts.action.arity() {
        match reader.read_matrix() {
            Ok(matrix) => operands.push(matrix),
            Err(err) => {
                result.err(&[Diagnostic::from(&err)]);
                return result.failed();
            }
        }
    }

    match apply(opts.action, &operands, &mut result) {
        Ok(()) => result.ok(),
        Err(err) => {
            result.err(&[Diagnostic::from(&err)]);
            result.failed()
        }
    }
}

/// Applies `action` to its `operands`, emitting the result.
fn apply(
    action: Action,
    operands: &[Matrix],
    result: &mut PolymatResultBuilder,
) -> Result<(), MathError> {
    let lhs = &operands[0];
    let matrix = match action {
        Action::Determinant => return result.emit(&lhs.determinant()),
        Action::Invert => lhs.inverted()?,
        Action::Add => lhs.add(&operands[1])?,
        Action::Sub => lhs.sub(&operands[1])?,
        Action::Multiply => lhs.mul(&operands[1])?,
    };
    result.emit(&matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(action: Action, latex: bool, input: &str) -> PolymatResult {
        let opts = Opts {
            action,
            latex,
            color: false,
        };
        run_polymat(opts, input)
    }

    #[test]
    fn parse_action() {
        assert_eq!("INVERT".parse::<Action>(), Ok(Action::Invert));
        assert_eq!("determinant".parse::<Action>(), Ok(Action::Determinant));
        assert_eq!("m".parse::<Action>(), Ok(Action::Multiply));
        assert_eq!("S".parse::<Action>(), Ok(Action::Sub));
        assert!("SUBTRACT".parse::<Action>().is_err());
        assert!("".parse::<Action>().is_err());
    }

    #[test]
    fn get_opts_from_args() {
        let parse = |args: Vec<&'static str>| {
            get_opts(move |app| app.get_matches_from_safe(args), false)
        };

        let opts = parse(vec!["polymat", "-a", "ADD", "--latex"]).unwrap();
        assert_eq!(opts.action, Action::Add);
        assert!(opts.latex);

        let opts = parse(vec!["polymat", "--action=i"]).unwrap();
        assert_eq!(opts.action, Action::Invert);
        assert!(!opts.latex);

        assert!(parse(vec!["polymat", "--action", "FOO"]).is_err());
        assert!(parse(vec!["polymat"]).is_err());
    }

    #[test]
    fn determinant_of_unit() {
        let res = run(Action::Determinant, false, "2 2\n1 0\n0 1\n");
        assert_eq!(res.code, 0);
        assert_eq!(res.stdout, "1");
        assert!(res.stderr.is_empty());
    }

    #[test]
    fn invert() {
        let res = run(Action::Invert, false, "2 2\n2 0\n0 2\n");
        assert_eq!(res.stdout, "1/2 0\n0 1/2");

        let res = run(Action::Invert, true, "2 2\n2 0\n0 2\n");
        assert_eq!(
            res.stdout,
            "\\begin{pmatrix}\n\\frac{1}{2} & 0 \\\\\n0 & \\frac{1}{2} \\\\\n\\end{pmatrix}"
        );
    }

    #[test]
    fn add_with_variables() {
        let res = run(Action::Add, false, "2 2\n1 2\n3 4\n2 2\nx 0\n0 x\n");
        assert_eq!(res.code, 0);
        assert_eq!(res.stdout, "1x + 1 2\n3 1x + 4");
    }

    #[test]
    fn singular_inverse_fails() {
        let res = run(Action::Invert, false, "2 2\n1 2\n2 4\n");
        assert_eq!(res.code, 1);
        assert!(res.stdout.is_empty());
        assert!(res.stderr.contains("cannot invert a singular matrix"));
    }

    #[test]
    fn latex_with_variables_fails() {
        let res = run(Action::Multiply, true, "1 1\nx\n1 1\n2\n");
        assert_eq!(res.code, 1);
        assert!(res.stderr.contains("cannot emit `2x` as LaTeX"));
    }

    #[test]
    fn multibyte_input_gets_a_diagnostic() {
        let res = run(Action::Determinant, false, "1 2\u{3000}\u{3000}\u{3000}\u{3000}5");
        assert_eq!(res.code, 1);
        assert!(res.stderr.contains("is not a positive matrix dimension"));

        let res = run(Action::Determinant, false, "1 1\n\u{e9}");
        assert_eq!(res.code, 1);
        assert!(res.stderr.contains("unexpected character"));
    }

    #[test]
    fn huge_dimensions_get_a_diagnostic() {
        let res = run(Action::Determinant, false, "1 100000000000000\n1");
        assert_eq!(res.code, 1);
        assert!(res.stderr.contains("expected element (1, 2), found end of input"));
    }

    #[test]
    fn malformed_input_fails() {
        let res = run(Action::Sub, false, "1 1\n1\n1 1\n");
        assert_eq!(res.code, 1);
        assert!(res.stderr.contains("expected element (1, 1), found end of input"));
    }
}
