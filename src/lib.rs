//! Tableau (Gauss-Jordan) primal simplex for problems of the form
//!
//! ```text
//!    min_x c'x
//!    st    A x <= b
//!            x >= 0,   b >= 0
//! ```
//!
//! The all-slack basis is feasible from the start, so a single phase suffices.
//!
//! # Example
//! ```
//! use tabsimplex::{
//!     config::Config,
//!     problem::Problem,
//!     solver::{Solver, SolverTryNew},
//!     solvers::tableau_simplex::TableauSolver,
//! };
//!
//! let mut problem = Problem::new(vec![-3.0, -5.0]);
//! problem.add_constraint([1.0, 0.0], 4.0);
//! problem.add_constraint([0.0, 2.0], 12.0);
//! problem.add_constraint([3.0, 2.0], 18.0);
//!
//! let config = Config::default().with_seed(42);
//! let mut solver = TableauSolver::try_new(&problem, config).unwrap();
//! let solution = solver.solve().unwrap();
//!
//! assert!(solution.is_solved());
//! assert_eq!(solution.objective_value(), -36.0);
//! assert_eq!(solution.values(), &[2.0, 6.0]);
//! ```

pub mod config;
pub mod helpers;
pub mod problem;
pub mod solution;
pub mod solver;
pub mod solvers;
