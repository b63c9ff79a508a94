//! The seam to an external symbolic-math backend.
//!
//! The comparison engine never parses or solves expressions itself. It asks a
//! [`Symbolic`] implementation for a numeric right-hand side and, when an
//! analytic reference is wanted, for a closed-form solution. "No closed form"
//! is an ordinary outcome expressed as `None`, distinct from a parse failure.

use std::error::Error as StdError;
use std::fmt;

use odelab_core::Rhs;

/// Errors reported by a symbolic backend while parsing.
#[derive(Debug, thiserror::Error)]
pub enum SymbolicError {
    /// The expression is malformed or uses symbols other than the two
    /// recognized variables.
    #[error("{0}")]
    Parse(String),

    /// The backend failed for a reason unrelated to the expression.
    #[error("symbolic backend failure")]
    Backend(#[source] Box<dyn StdError + Send + Sync>),
}

/// A closed-form solution `y(x)` together with its textual form.
pub struct ClosedForm {
    expression: String,
    eval: Box<dyn Fn(f64) -> f64 + Send + Sync>,
}

impl ClosedForm {
    /// Wraps a numeric solution and the expression it was derived from.
    pub fn new<F>(expression: impl Into<String>, eval: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            expression: expression.into(),
            eval: Box::new(eval),
        }
    }

    /// Returns the textual form of the solution.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Evaluates the solution at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        (self.eval)(x)
    }
}

impl fmt::Debug for ClosedForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosedForm")
            .field("expression", &self.expression)
            .finish_non_exhaustive()
    }
}

/// An external symbolic-math collaborator.
pub trait Symbolic {
    /// The numeric right-hand side produced by parsing.
    type Rhs: Rhs;

    /// Parses `expression` as `f(x, y)`, where `variables` names the
    /// independent and dependent variable in that order.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolicError::Parse`] for invalid syntax or unknown
    /// symbols, and [`SymbolicError::Backend`] for anything else.
    fn parse(&self, expression: &str, variables: [&str; 2]) -> Result<Self::Rhs, SymbolicError>;

    /// Attempts to solve `y' = rhs`, `y(x0) = y0` in closed form.
    ///
    /// Returns `None` when no closed form is found.
    fn try_solve_closed_form(&self, rhs: &Self::Rhs, x0: f64, y0: f64) -> Option<ClosedForm>;
}

/// A collaborator with no symbolic capabilities.
///
/// Every custom expression is rejected with a parse error and no closed form
/// is ever offered. Useful when only predefined equations are served.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSymbolic;

impl Symbolic for NoSymbolic {
    type Rhs = fn(f64, f64) -> f64;

    fn parse(&self, _expression: &str, _variables: [&str; 2]) -> Result<Self::Rhs, SymbolicError> {
        Err(SymbolicError::Parse(
            "custom expressions are not supported by this service".into(),
        ))
    }

    fn try_solve_closed_form(&self, _rhs: &Self::Rhs, _x0: f64, _y0: f64) -> Option<ClosedForm> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_form_evaluates() {
        let solution = ClosedForm::new("2*x", |x| 2.0 * x);

        assert_eq!(solution.expression(), "2*x");
        assert_eq!(solution.eval(1.5), 3.0);
        assert!(format!("{solution:?}").contains("2*x"));
    }

    #[test]
    fn no_symbolic_rejects_everything() {
        let backend = NoSymbolic;

        assert!(matches!(
            backend.parse("x*y", ["x", "y"]),
            Err(SymbolicError::Parse(_))
        ));

        let f: fn(f64, f64) -> f64 = |_, y| y;
        assert!(backend.try_solve_closed_form(&f, 0.0, 1.0).is_none());
    }
}
