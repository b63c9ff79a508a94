//! Drives the integrators directly with right-hand sides from the fixture
//! backend.

use approx::assert_relative_eq;

use integration_tests::linear::LinearBackend;
use odelab_compare::Symbolic;
use odelab_core::{GridConfig, TimeGrid};
use odelab_solvers::explicit::{Action, Event, Status, euler, rk4};

#[test]
fn parsed_rhs_integrates_toward_closed_form() {
    let rhs = LinearBackend.parse("-y + 2", ["x", "y"]).unwrap();
    let exact = LinearBackend.try_solve_closed_form(&rhs, 0.0, 0.0).unwrap();
    let grid = TimeGrid::build(0.0, 3.0, 0.1, &GridConfig::default()).unwrap();

    let solution = rk4::solve_unobserved(&rhs, &grid, 0.0).unwrap();

    assert_eq!(solution.status, Status::Complete);
    for (&x, &y) in grid.points().iter().zip(solution.trajectory.values()) {
        assert_relative_eq!(y, exact.eval(x), epsilon = 1e-6);
    }
}

#[test]
fn observer_stops_when_the_solution_crosses_a_threshold() {
    // y' = 1 from y(0) = 0 crosses 0.5 at x = 0.5.
    let rhs = LinearBackend.parse("1", ["x", "y"]).unwrap();
    let grid = TimeGrid::build(0.0, 2.0, 0.125, &GridConfig::default()).unwrap();
    let mut seen = Vec::new();

    let solution = euler::solve(&rhs, &grid, 0.0, |event: &Event| {
        seen.push(event.t);
        (event.y >= 0.5).then_some(Action::StopEarly)
    })
    .unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps, 4);
    assert_eq!(seen, grid.points()[..5].to_vec());
    assert_relative_eq!(solution.trajectory.last().unwrap(), 0.5);
}

#[test]
fn both_methods_share_one_grid() {
    let rhs = LinearBackend.parse("x - y", ["x", "y"]).unwrap();
    let grid = TimeGrid::build(0.0, 1.0, 0.3, &GridConfig::default()).unwrap();

    let euler = euler::solve_unobserved(&rhs, &grid, 1.0).unwrap();
    let rk4 = rk4::solve_unobserved(&rhs, &grid, 1.0).unwrap();

    assert_eq!(euler.trajectory.len(), grid.len());
    assert_eq!(rk4.trajectory.len(), grid.len());
    assert_eq!(euler.steps, rk4.steps);
}
