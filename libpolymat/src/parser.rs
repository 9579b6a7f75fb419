//! Parses the text form of a [Poly].
//!
//! The grammar is a sequence of terms, each optionally preceded by a sign:
//!
//! ```text
//! poly  := [sign] term (sign term)*
//! term  := coeff ['/' digits] ['x' ['^' digits]]
//!        | 'x' ['^' digits]
//! coeff := digits
//! sign  := '+' | '-'
//! ```
//!
//! A term without a coefficient has the coefficient 1, a term without `x` is a constant, and an
//! `x` without an exponent has the exponent 1. No whitespace is allowed.

use crate::common::Span;
use crate::errors::{ParseError, ParseErrorKind};
use crate::math::{Fraction, Poly};

use std::str::FromStr;

/// Parses a polynomial like `3x^2+1/2x-5`.
///
/// Terms with the same exponent are summed; terms with a zero coefficient are dropped.
pub fn parse_poly(text: &str) -> Result<Poly, ParseError> {
    if text.is_empty() {
        return Err(ParseError::new(ParseErrorKind::Empty, (0, 0)));
    }
    let mut parser = Parser { text, pos: 0 };
    let mut poly = Poly::zero();
    loop {
        let (exp, coeff) = parser.term()?;
        poly += &Poly::monomial(coeff, exp);
        match parser.peek() {
            None => return Ok(poly),
            Some('+') | Some('-') => continue,
            Some(c) => return Err(parser.unexpected(c)),
        }
    }
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn unexpected(&self, c: char) -> ParseError {
        ParseError::new(
            ParseErrorKind::UnexpectedChar(c),
            (self.pos, self.pos + c.len_utf8()),
        )
    }

    /// Parses one signed term, returning its exponent and coefficient.
    fn term(&mut self) -> Result<(u64, Fraction), ParseError> {
        let start = self.pos;
        let negative = if self.eat('-') {
            true
        } else {
            self.eat('+');
            false
        };

        let num = self.number::<i64>()?;
        let den = match num {
            Some(_) if self.eat('/') => {
                let den_start = self.pos;
                match self.number::<i64>()? {
                    Some(0) => {
                        return Err(ParseError::new(
                            ParseErrorKind::ZeroDenominator,
                            (den_start, self.pos),
                        ))
                    }
                    Some(den) => den,
                    None => return Err(self.expected_digits()),
                }
            }
            _ => 1,
        };

        let exp = if self.eat('x') {
            if self.eat('^') {
                match self.number::<u64>()? {
                    Some(exp) => exp,
                    None => return Err(self.expected_digits()),
                }
            } else {
                1
            }
        } else if num.is_none() {
            return Err(match self.peek() {
                Some(c) if c != '+' && c != '-' => self.unexpected(c),
                _ => ParseError::new(ParseErrorKind::Empty, (start, self.pos)),
            });
        } else {
            0
        };

        let num = num.unwrap_or(1);
        // The denominator was checked to be nonzero above.
        let coeff = Fraction::new(num, den)
            .map_err(|_| ParseError::new(ParseErrorKind::ZeroDenominator, (start, self.pos)))?;
        Ok((exp, if negative { -coeff } else { coeff }))
    }

    /// Parses a run of ASCII digits, if there is one.
    fn number<N: FromStr>(&mut self) -> Result<Option<N>, ParseError> {
        let start = self.pos;
        let len = self.text[start..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if len == 0 {
            return Ok(None);
        }
        self.pos += len;
        // Only digits were consumed, so overflow is the only way this can fail.
        self.text[start..self.pos]
            .parse()
            .map(Some)
            .map_err(|_| ParseError::new(ParseErrorKind::NumberOverflow, (start, self.pos)))
    }

    fn expected_digits(&self) -> ParseError {
        let span: Span = match self.peek() {
            Some(c) => (self.pos, self.pos + c.len_utf8()).into(),
            None => (self.pos, self.pos).into(),
        };
        ParseError::new(ParseErrorKind::ExpectedDigits, span)
    }
}
