//! Static descriptions of the supported methods and example problems.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{Domain, InitialCondition, MethodKind};

/// A supported method and its declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodInfo {
    pub name: &'static str,
    pub order: u32,
}

/// A ready-to-run example problem from the predefined catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExampleProblem {
    pub id: &'static str,
    pub name: &'static str,
    pub equation_display: &'static str,
    pub default_params: BTreeMap<String, f64>,
    pub default_initial_condition: InitialCondition,
    pub default_domain: Domain,
    pub suggested_step: f64,
}

/// Lists the supported methods.
#[must_use]
pub fn methods() -> Vec<MethodInfo> {
    MethodKind::ALL
        .into_iter()
        .map(|kind| MethodInfo {
            name: kind.name(),
            order: kind.order(),
        })
        .collect()
}

/// Lists the example problems.
#[must_use]
pub fn examples() -> Vec<ExampleProblem> {
    vec![ExampleProblem {
        id: "exp_growth",
        name: "Exponential growth / decay",
        equation_display: "y' = λ y",
        default_params: BTreeMap::from([("lambda".to_owned(), -2.0)]),
        default_initial_condition: InitialCondition { x0: 0.0, y0: 1.0 },
        default_domain: Domain { x_end: 5.0 },
        suggested_step: 0.1,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::PredefinedEquation;

    #[test]
    fn lists_both_methods_in_order() {
        let methods = methods();

        assert_eq!(
            methods,
            vec![
                MethodInfo {
                    name: "Euler",
                    order: 1
                },
                MethodInfo {
                    name: "RK4",
                    order: 4
                },
            ]
        );
    }

    #[test]
    fn examples_resolve_against_the_catalog() {
        for example in examples() {
            let equation = PredefinedEquation::from_id(example.id, &example.default_params);
            assert!(equation.is_ok(), "example {} does not resolve", example.id);
        }
    }
}
