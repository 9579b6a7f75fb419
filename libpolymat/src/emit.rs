//! Emit strategies for libpolymat values.

use crate::errors::MathError;
use crate::math::{Fraction, Matrix, Poly};

use core::fmt;

/// The format in which a value should be emitted.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EmitFormat {
    /// Canonical, human-readable form.
    /// For example, the polynomial `3x^2+1/2x-5` is output as `3x^2 + 1/2x - 5`.
    Pretty,
    /// LaTeX math mode code.
    /// For example, `1/2` is output as `\frac{1}{2}`. Only constants can be emitted as LaTeX.
    Latex,
}

impl Default for EmitFormat {
    fn default() -> Self {
        Self::Pretty
    }
}

/// Implements the emission of a type in an [EmitFormat][EmitFormat].
pub trait Emit
where
    Self: fmt::Display,
{
    /// Emit `self` with the given [EmitFormat][EmitFormat].
    fn emit(&self, form: EmitFormat) -> Result<String, MathError> {
        match form {
            EmitFormat::Pretty => Ok(self.emit_pretty()),
            EmitFormat::Latex => self.emit_latex(),
        }
    }

    /// Emit `self` with the [pretty emit format][EmitFormat::Pretty]
    fn emit_pretty(&self) -> String {
        self.to_string()
    }

    /// Emit `self` with the [LaTeX emit format][EmitFormat::Latex]
    fn emit_latex(&self) -> Result<String, MathError>;
}

impl Emit for Fraction {
    fn emit_latex(&self) -> Result<String, MathError> {
        if self.is_integer() {
            Ok(self.numer().to_string())
        } else {
            Ok(format!("\\frac{{{}}}{{{}}}", self.numer(), self.denom()))
        }
    }
}

impl Emit for Poly {
    fn emit_latex(&self) -> Result<String, MathError> {
        if !self.is_constant() {
            return Err(MathError::LatexUnsupported {
                element: self.to_string(),
            });
        }
        self.coeff(0).emit_latex()
    }
}

impl Emit for Matrix {
    fn emit_pretty(&self) -> String {
        self.data()
            .iter()
            .map(|row| {
                row.iter()
                    .map(Poly::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn emit_latex(&self) -> Result<String, MathError> {
        let mut latex = String::from("\\begin{pmatrix}\n");
        for row in self.data() {
            let elems = row
                .iter()
                .map(Emit::emit_latex)
                .collect::<Result<Vec<_>, _>>()?;
            latex.push_str(&elems.join(" & "));
            latex.push_str(" \\\\\n");
        }
        latex.push_str("\\end{pmatrix}");
        Ok(latex)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.emit_pretty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly;

    fn frac(num: i64, den: i64) -> Fraction {
        Fraction::new(num, den).unwrap()
    }

    #[test]
    fn fraction_latex() {
        assert_eq!(frac(3, 1).emit(EmitFormat::Latex).unwrap(), "3");
        assert_eq!(frac(-1, 2).emit(EmitFormat::Latex).unwrap(), "\\frac{-1}{2}");
        assert_eq!(frac(-1, 2).emit(EmitFormat::Pretty).unwrap(), "-1/2");
    }

    #[test]
    fn poly_latex() {
        assert_eq!(poly![].emit_latex().unwrap(), "0");
        assert_eq!(poly![frac(5, 7)].emit_latex().unwrap(), "\\frac{5}{7}");
        assert_eq!(
            poly![1, 1].emit_latex(),
            Err(MathError::LatexUnsupported {
                element: "1x + 1".into()
            })
        );
    }

    #[test]
    fn matrix_pretty() {
        let m = Matrix::new(vec![
            vec![poly![frac(1, 2)], poly![]],
            vec![poly![-1, 1], poly![frac(1, 2)]],
        ])
        .unwrap();
        assert_eq!(m.emit(EmitFormat::Pretty).unwrap(), "1/2 0\n1x - 1 1/2");
        assert_eq!(m.to_string(), m.emit_pretty());
    }

    #[test]
    fn matrix_latex() {
        let m = Matrix::new(vec![
            vec![poly![frac(1, 2)], poly![]],
            vec![poly![-3], poly![frac(1, 2)]],
        ])
        .unwrap();
        assert_eq!(
            m.emit(EmitFormat::Latex).unwrap(),
            "\\begin{pmatrix}\n\
             \\frac{1}{2} & 0 \\\\\n\
             -3 & \\frac{1}{2} \\\\\n\
             \\end{pmatrix}"
        );
    }

    #[test]
    fn matrix_latex_rejects_variables() {
        let m = Matrix::new(vec![vec![poly![1], poly![0, 0, 2]]]).unwrap();
        assert!(matches!(
            m.emit(EmitFormat::Latex),
            Err(MathError::LatexUnsupported { .. })
        ));
    }
}
