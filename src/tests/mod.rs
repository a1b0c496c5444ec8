//! # Integration tests that require a look inside the crate.
//!
//! Convention per problem module:
//!
//! * `fn standard_form()` builds the problem fixture
//! * tests assert the terminal status, the pivot count and the solution values

use crate::algorithm::{OptimizationResult, Solve};
use crate::algorithm::revised_simplex::SolveOptions;

/// Capture the solver's log output in test runs.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn solve_entry_point_uses_default_rule() {
    init_logging();
    let problem = problem_1::standard_form();

    match problem.solve(&SolveOptions::default()) {
        OptimizationResult::FiniteOptimum(solution) => {
            // The default rule is Dantzig's, which takes three pivots on this problem.
            assert_eq!(solution.iterations(), 3);
        },
        other => panic!("expected a finite optimum, got {}", other),
    }
}

#[test]
fn solving_is_deterministic() {
    init_logging();
    let problem = problem_1::standard_form();
    let options = SolveOptions::default();

    let first = problem.solve(&options);
    let second = problem.solve(&options);
    assert_eq!(first, second);
}
