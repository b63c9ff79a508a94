use approx::assert_relative_eq;
use serde_json::json;

use integration_tests::linear::LinearBackend;
use odelab_compare::{AnalyticStatus, Config, ErrorAnalysisRequest, ErrorKind, analyze_errors};

fn request(f: &str) -> ErrorAnalysisRequest {
    serde_json::from_value(json!({ "f": f, "t0": 0.0, "y0": 1.0, "T": 1.0, "h": 0.1 }))
        .expect("well-formed request")
}

#[test]
fn solvable_expression_reports_errors() {
    let analysis = analyze_errors(&request("-y + 1"), &LinearBackend, &Config::default()).unwrap();

    assert_eq!(analysis.meta.analytic_status, AnalyticStatus::Ok);
    assert!(analysis.meta.exact_solution.is_some());

    // y' = 1 - y with y(0) = 1 is constant, so both methods are exact.
    for errors in [&analysis.errors.euler, &analysis.errors.rk4] {
        let errors = errors.as_ref().unwrap();
        assert_eq!(errors.len(), 11);
        assert!(errors.iter().all(|&e| e < 1e-12));
    }
}

#[test]
fn unsolvable_expression_still_integrates() {
    let analysis = analyze_errors(&request("t"), &LinearBackend, &Config::default()).unwrap();

    assert_eq!(analysis.meta.analytic_status, AnalyticStatus::Unavailable);
    assert!(analysis.exact.is_none());
    assert_relative_eq!(*analysis.rk4.last().unwrap(), 1.5, epsilon = 1e-12);
}

#[test]
fn serializes_with_null_for_missing_fields() {
    let analysis = analyze_errors(&request("t - y"), &LinearBackend, &Config::default()).unwrap();

    let output = serde_json::to_value(&analysis).unwrap();

    assert_eq!(output["meta"]["analytic_status"], "unavailable");
    assert!(output["exact"].is_null());
    assert!(output["errors"]["euler"].is_null());
    assert_eq!(output["meta"]["convergence_order_euler"], 1);
    assert_eq!(output["meta"]["convergence_order_rk4"], 4);
    assert_eq!(output["grid"].as_array().unwrap().len(), 11);
}

#[test]
fn parse_failures_are_client_errors() {
    let err = analyze_errors(&request("y**2"), &LinearBackend, &Config::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Client);
}
