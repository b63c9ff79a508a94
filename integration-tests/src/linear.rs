//! A minimal symbolic backend for affine right-hand sides.
//!
//! Understands sums of terms like `-2*y`, `0.5*x`, `y`, `-x` and `3`, with no
//! parentheses or exponents. That is enough to exercise the parse and
//! closed-form paths of the comparison engine without a real algebra system.

use std::convert::Infallible;

use odelab_compare::{ClosedForm, Symbolic, SymbolicError};
use odelab_core::Rhs;

/// `f(x, y) = a * y + b * x + c`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Rhs for Affine {
    type Error = Infallible;

    fn eval(&self, x: f64, y: f64) -> Result<f64, Self::Error> {
        Ok(self.a * y + self.b * x + self.c)
    }
}

/// Parses [`Affine`] expressions and solves them when `f` does not depend on
/// the independent variable.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearBackend;

impl Symbolic for LinearBackend {
    type Rhs = Affine;

    fn parse(&self, expression: &str, variables: [&str; 2]) -> Result<Affine, SymbolicError> {
        let [x_name, y_name] = variables;
        let normalized: String = expression
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .replace('-', "+-");

        let mut affine = Affine::default();
        for term in normalized.split('+').filter(|term| !term.is_empty()) {
            let (coefficient, symbol) = match term.split_once('*') {
                Some((coefficient, symbol)) => (number(coefficient)?, symbol),
                None => match term.strip_prefix('-') {
                    Some(symbol) if symbol == x_name || symbol == y_name => (-1.0, symbol),
                    _ if term == x_name || term == y_name => (1.0, term),
                    _ => {
                        affine.c += number(term)?;
                        continue;
                    }
                },
            };

            if symbol == y_name {
                affine.a += coefficient;
            } else if symbol == x_name {
                affine.b += coefficient;
            } else {
                return Err(SymbolicError::Parse(format!("unknown symbol `{symbol}`")));
            }
        }
        Ok(affine)
    }

    fn try_solve_closed_form(&self, rhs: &Affine, x0: f64, y0: f64) -> Option<ClosedForm> {
        let Affine { a, b, c } = *rhs;
        if b != 0.0 {
            return None;
        }

        if a == 0.0 {
            return Some(ClosedForm::new(format!("{y0}+{c}*(x-{x0})"), move |x| {
                y0 + c * (x - x0)
            }));
        }

        let shift = c / a;
        Some(ClosedForm::new(
            format!("({y0}+{shift})*exp({a}*(x-{x0}))-{shift}"),
            move |x| (y0 + shift) * (a * (x - x0)).exp() - shift,
        ))
    }
}

fn number(token: &str) -> Result<f64, SymbolicError> {
    token
        .parse()
        .map_err(|_| SymbolicError::Parse(format!("expected a number, found `{token}`")))
}
