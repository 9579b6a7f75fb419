//! Reads matrices from whitespace-delimited text.
//!
//! A matrix is written as its row and column counts followed by its elements in row-major order,
//! each element a [polynomial][crate::parse_poly]:
//!
//! ```text
//! 2 2
//! x 1/2
//! 0 -x^2+1
//! ```

use crate::common::Span;
use crate::errors::ParseError;
use crate::math::{Matrix, Poly};

use thiserror::Error;

/// A whitespace-delimited token and its span in the read text.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Token<'a> {
    pub text: &'a str,
    pub span: Span,
}

/// What a [MatrixReader] expected when the text ran out.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Expected {
    Dimensions,
    Element { row: usize, col: usize },
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dimensions => f.write_str("matrix dimensions"),
            Self::Element { row, col } => write!(f, "element ({}, {})", row + 1, col + 1),
        }
    }
}

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum ReadError {
    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: Expected, span: Span },

    #[error("`{text}` is not a positive matrix dimension")]
    InvalidDimension { text: String, span: Span },

    /// An element failed to parse. `error.span` is relative to the whole text.
    #[error("invalid element ({}, {}): {error}", .row + 1, .col + 1)]
    InvalidElement {
        row: usize,
        col: usize,
        error: ParseError,
    },
}

impl ReadError {
    /// The span of the text this error points to.
    pub fn span(&self) -> Span {
        match self {
            Self::UnexpectedEof { span, .. } | Self::InvalidDimension { span, .. } => *span,
            Self::InvalidElement { error, .. } => error.span,
        }
    }
}

/// Reads a sequence of matrices from a text.
pub struct MatrixReader<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> MatrixReader<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Reads the next token, if any. Only ASCII whitespace separates tokens.
    fn next_token(&mut self) -> Option<Token<'a>> {
        let rest = &self.text[self.pos..];
        let lo = self.pos + (rest.len() - rest.trim_start_matches(is_separator).len());
        let len = self.text[lo..]
            .find(is_separator)
            .unwrap_or(self.text.len() - lo);
        if len == 0 {
            self.pos = self.text.len();
            return None;
        }
        self.pos = lo + len;
        Some(Token {
            text: &self.text[lo..self.pos],
            span: (lo, self.pos).into(),
        })
    }

    fn expect_token(&mut self, expected: Expected) -> Result<Token<'a>, ReadError> {
        self.next_token().ok_or(ReadError::UnexpectedEof {
            expected,
            span: (self.text.len(), self.text.len()).into(),
        })
    }

    fn dimension(&mut self) -> Result<usize, ReadError> {
        let token = self.expect_token(Expected::Dimensions)?;
        match token.text.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ReadError::InvalidDimension {
                text: token.text.to_owned(),
                span: token.span,
            }),
        }
    }

    /// Reads the next matrix.
    pub fn read_matrix(&mut self) -> Result<Matrix, ReadError> {
        let rows = self.dimension()?;
        let cols = self.dimension()?;
        log::debug!("reading a {}x{} matrix", rows, cols);

        // Dimensions are untrusted; storage only grows with the elements actually read.
        let mut data = Vec::new();
        for row in 0..rows {
            let mut line = Vec::new();
            for col in 0..cols {
                let token = self.expect_token(Expected::Element { row, col })?;
                let elem = Poly::parse(token.text).map_err(|error| ReadError::InvalidElement {
                    row,
                    col,
                    error: ParseError {
                        span: error.span.offset(token.span.lo),
                        ..error
                    },
                })?;
                line.push(elem);
            }
            data.push(line);
        }
        Ok(Matrix::from_grid(data))
    }
}

fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace()
}
