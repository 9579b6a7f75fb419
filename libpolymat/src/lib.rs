//! Exact arithmetic on matrices of polynomials.
//!
//! libpolymat layers three value types:
//!
//! - [Fraction], a rational number in lowest terms,
//! - [Poly], a sparse univariate polynomial with [Fraction] coefficients, and
//! - [Matrix], a grid of [Poly] elements supporting addition, multiplication, determinants and
//!   inversion.
//!
//! Text enters through the [polynomial parser](parser::parse_poly) and the
//! [matrix reader](reader::MatrixReader), and leaves through [Emit].

pub mod common;
pub mod diagnostics;
pub mod errors;
pub use errors::{MathError, ParseError, ParseErrorKind};

mod parser;
pub use parser::parse_poly;

pub mod reader;
pub use reader::MatrixReader;

mod emit;
pub use emit::{Emit, EmitFormat};

mod math;
pub use math::{Fraction, Matrix, Poly, Terms};

#[cfg(feature = "benchmark-internals")]
pub use math::{_binary_gcd, _euclidean_gcd};
