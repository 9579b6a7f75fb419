//! Errors raised by libpolymat.
//!
//! Every failure of the numeric stack is one variant of [MathError]. Text that cannot be read as a
//! polynomial produces a [ParseError], and text that cannot be read as a matrix produces a
//! [ReadError](crate::reader::ReadError).

use crate::common::Span;

use thiserror::Error;

/// The operation a [MathError::ShapeMismatch] was raised by.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MatrixOp {
    Add,
    Sub,
    Mul,
}

impl std::fmt::Display for MatrixOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = match self {
            Self::Add => "add",
            Self::Sub => "subtract",
            Self::Mul => "multiply",
        };
        f.write_str(verb)
    }
}

/// A `rows x cols` matrix shape.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum MathError {
    /// A fraction was constructed with, or divided by, a zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Polynomial division was attempted with a non-constant operand.
    #[error("only constant polynomials can be divided, got `{dividend}` / `{divisor}`")]
    NonConstantDivision { dividend: String, divisor: String },

    /// Matrix shapes are incompatible with the requested operation.
    #[error("cannot {op} a {lhs} matrix and a {rhs} matrix")]
    ShapeMismatch {
        op: MatrixOp,
        lhs: Shape,
        rhs: Shape,
    },

    /// A matrix grid is empty, or its rows differ in length.
    #[error("matrix rows must be non-empty and of equal length")]
    NotRectangular,

    #[error("cannot invert a non-square {0} matrix")]
    NonSquare(Shape),

    #[error("cannot invert a singular matrix")]
    Singular,

    /// LaTeX emit was requested for an element with a free variable.
    #[error("cannot emit `{element}` as LaTeX; only constant elements are supported")]
    LatexUnsupported { element: String },
}

/// The reason a polynomial failed to parse.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ParseErrorKind {
    /// The text, or one of its terms, is empty.
    Empty,
    /// A character that has no place in the term grammar.
    UnexpectedChar(char),
    /// Digits were required, but none were found.
    ExpectedDigits,
    /// A number does not fit in 64 bits.
    NumberOverflow,
    /// A coefficient was written with a zero denominator.
    ZeroDenominator,
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str("expected a term"),
            Self::UnexpectedChar(c) => write!(f, "unexpected character `{}`", c),
            Self::ExpectedDigits => f.write_str("expected digits"),
            Self::NumberOverflow => f.write_str("number is too large"),
            Self::ZeroDenominator => f.write_str("denominator is zero"),
        }
    }
}

/// A polynomial parsing failure, positioned in the parsed text.
#[derive(Error, Copy, Clone, PartialEq, Eq, Debug)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, span: impl Into<Span>) -> Self {
        Self {
            kind,
            span: span.into(),
        }
    }
}
