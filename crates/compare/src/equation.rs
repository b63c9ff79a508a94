use std::collections::BTreeMap;
use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use odelab_core::Rhs;

use crate::{ClosedForm, Error, Symbolic, SymbolicError};

/// Describes the ODE to solve.
///
/// Predefined equations come from a built-in catalog and always carry a
/// closed-form solution. Custom equations are parsed by a [`Symbolic`]
/// collaborator and never have a reference in comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Equation {
    Predefined {
        id: String,
        #[serde(default)]
        params: BTreeMap<String, f64>,
    },
    Custom {
        expression: String,
        #[serde(default = "default_variables")]
        variables: Vec<String>,
    },
}

fn default_variables() -> Vec<String> {
    vec!["x".into(), "y".into()]
}

impl Equation {
    /// Returns `"predefined"` or `"custom"`.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Predefined { .. } => "predefined",
            Self::Custom { .. } => "custom",
        }
    }

    /// Returns the catalog id of a predefined equation.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Predefined { id, .. } => Some(id),
            Self::Custom { .. } => None,
        }
    }

    /// Returns the expression of a custom equation.
    #[must_use]
    pub fn expression(&self) -> Option<&str> {
        match self {
            Self::Predefined { .. } => None,
            Self::Custom { expression, .. } => Some(expression),
        }
    }
}

/// An equation from the built-in catalog, with its parameters resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PredefinedEquation {
    /// `y' = λ y`.
    ExpGrowth { lambda: f64 },
}

impl PredefinedEquation {
    /// Resolves a catalog id and its parameters.
    ///
    /// Missing parameters take their catalog defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEquation`] if `id` is not in the catalog, or
    /// [`Error::InvalidEquation`] if a parameter is not finite.
    pub fn from_id(id: &str, params: &BTreeMap<String, f64>) -> Result<Self, Error> {
        match id {
            "exp_growth" => {
                let lambda = params.get("lambda").copied().unwrap_or(-1.0);
                if !lambda.is_finite() {
                    return Err(Error::InvalidEquation {
                        reason: format!("lambda must be finite, got {lambda}"),
                    });
                }
                Ok(Self::ExpGrowth { lambda })
            }
            _ => Err(Error::UnknownEquation { id: id.to_owned() }),
        }
    }

    /// Returns the catalog id.
    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            Self::ExpGrowth { .. } => "exp_growth",
        }
    }

    /// Returns the exact solution through `(x0, y0)`.
    #[must_use]
    pub fn closed_form(&self, x0: f64, y0: f64) -> ClosedForm {
        match *self {
            Self::ExpGrowth { lambda } => ClosedForm::new(
                format!("{y0}*exp({lambda}*(x-{x0}))"),
                move |x| y0 * (lambda * (x - x0)).exp(),
            ),
        }
    }
}

impl Rhs for PredefinedEquation {
    type Error = Infallible;

    fn eval(&self, _t: f64, y: f64) -> Result<f64, Self::Error> {
        match *self {
            Self::ExpGrowth { lambda } => Ok(lambda * y),
        }
    }
}

/// The right-hand side acquired for one request.
#[derive(Debug)]
pub enum EquationRhs<R> {
    Predefined(PredefinedEquation),
    Custom(R),
}

impl<R: Rhs> Rhs for EquationRhs<R> {
    type Error = R::Error;

    fn eval(&self, t: f64, y: f64) -> Result<f64, Self::Error> {
        match self {
            Self::Predefined(equation) => match equation.eval(t, y) {
                Ok(value) => Ok(value),
                Err(never) => match never {},
            },
            Self::Custom(rhs) => rhs.eval(t, y),
        }
    }
}

/// A right-hand side plus, for predefined equations, its exact solution.
pub(crate) struct Acquired<R> {
    pub rhs: EquationRhs<R>,
    pub closed_form: Option<ClosedForm>,
}

/// Derives `f` (and the exact solution where the catalog has one).
pub(crate) fn acquire<S: Symbolic>(
    equation: &Equation,
    x0: f64,
    y0: f64,
    symbolic: &S,
) -> Result<Acquired<S::Rhs>, Error> {
    match equation {
        Equation::Predefined { id, params } => {
            let predefined = PredefinedEquation::from_id(id, params)?;
            Ok(Acquired {
                rhs: EquationRhs::Predefined(predefined),
                closed_form: Some(predefined.closed_form(x0, y0)),
            })
        }
        Equation::Custom {
            expression,
            variables,
        } => {
            let [x_name, y_name] = variables.as_slice() else {
                return Err(Error::InvalidEquation {
                    reason: format!(
                        "exactly two variables are required, got {}",
                        variables.len()
                    ),
                });
            };
            let rhs = parse(symbolic, expression, [x_name.as_str(), y_name.as_str()])?;
            Ok(Acquired {
                rhs: EquationRhs::Custom(rhs),
                closed_form: None,
            })
        }
    }
}

/// Parses through the collaborator, mapping its failures to [`Error`].
pub(crate) fn parse<S: Symbolic>(
    symbolic: &S,
    expression: &str,
    variables: [&str; 2],
) -> Result<S::Rhs, Error> {
    if expression.trim().is_empty() {
        return Err(Error::InvalidEquation {
            reason: "custom equations require a non-empty expression".into(),
        });
    }
    symbolic
        .parse(expression, variables)
        .map_err(|err| match err {
            SymbolicError::Parse(message) => Error::Parse { message },
            SymbolicError::Backend(source) => Error::Internal(source),
        })
}
