mod basis;
pub mod pivot;
pub mod tableau;
mod termination;

use log::debug;
use stopwatch::Stopwatch;

use crate::{
    config::Config,
    problem::{OptimizationDirection, Problem},
    solution::Solution,
    solver::{Error, Solver, SolverTryNew},
};

use self::{
    basis::Basis,
    pivot::{randomized_ratio::RandomizedRatio, PivotChooser},
    tableau::Tableau,
    termination::TerminationChecker,
};

pub use self::termination::Status;

/// One performed pivot, kept so callers can replay or report the run.
#[derive(Clone, Debug, PartialEq)]
pub struct PivotStep {
    pub iteration: usize,
    pub entering_col: usize,
    pub leaving_row: usize,
    pub ratio: f64,
    /// All rows tied at the minimum ratio; `leaving_row` was drawn from these.
    pub candidates: Vec<usize>,
}

/// Primal simplex on a dense tableau, starting from the all-slack basis.
///
/// The solver owns its tableau for its whole lifetime and lends it out read-only.
#[derive(Debug)]
pub struct TableauSolver<P: PivotChooser = RandomizedRatio> {
    direction: OptimizationDirection,
    verbose: bool,

    tableau: Tableau,
    chooser: P,
    termination: TerminationChecker,

    iteration: usize,
    solved: bool,
    unbounded: bool,
    status: Status,

    steps: Vec<PivotStep>,
}

impl SolverTryNew<TableauSolver> for TableauSolver {
    fn try_new(problem: &Problem, config: Config) -> Result<TableauSolver, Error> {
        let chooser = RandomizedRatio::seeded(config.seed);
        TableauSolver::with_chooser(problem, config, chooser)
    }
}

impl<P: PivotChooser> TableauSolver<P> {
    pub fn with_chooser(problem: &Problem, config: Config, chooser: P) -> Result<Self, Error> {
        config.validate()?;

        let objective = match config.direction {
            OptimizationDirection::Minimize => problem.objective.clone(),
            OptimizationDirection::Maximize => problem.objective.iter().map(|c| -c).collect(),
        };
        let tableau = Tableau::build(&objective, &problem.constraints, &problem.rhs)?;
        let solved = tableau.is_optimal();

        debug!(
            "initialized solver: vars: {}, constraints: {}, max iterations: {}, seed: {}, optimal at start: {}",
            tableau.num_vars(),
            tableau.num_constraints(),
            config.max_iterations,
            config.seed,
            solved,
        );

        Ok(TableauSolver {
            direction: config.direction,
            verbose: config.verbose,
            tableau,
            chooser,
            termination: TerminationChecker::new(config.max_iterations),
            iteration: 1,
            solved,
            unbounded: false,
            status: Status::Iterating,
            steps: vec![],
        })
    }

    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn is_unbounded(&self) -> bool {
        self.unbounded
    }

    /// Every pivot performed so far, in order.
    pub fn steps(&self) -> &[PivotStep] {
        &self.steps
    }

    /// Runs one round: the termination check, then at most one pivot.
    ///
    /// Returns the status after the check. Once a terminal status is reached further
    /// calls return it again without touching the tableau.
    pub fn step(&mut self) -> Result<Status, Error> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }

        self.status = self
            .termination
            .check(self.iteration, self.solved, self.unbounded);
        if self.status.is_terminal() {
            debug!(
                "halted at iteration {}: {}",
                self.iteration, self.status
            );
            return Ok(self.status);
        }

        if self.verbose {
            debug!("iteration {}, tableau:\n{}", self.iteration, self.tableau);
        }

        // Not solved, so some reduced cost is negative.
        let entering_col = match self.chooser.choose_pivot_col(&self.tableau) {
            Some(col) => col,
            None => {
                self.solved = true;
                return Ok(self.status);
            }
        };

        let choice = match self.chooser.choose_pivot_row(&self.tableau, entering_col) {
            Some(choice) => choice,
            None => {
                debug!(
                    "no positive ratio in column {}: problem is unbounded",
                    entering_col + 1
                );
                self.unbounded = true;
                return Ok(self.status);
            }
        };

        debug!(
            "pivot on ({}, {}), ratio {}, chosen from rows {:?}",
            choice.row + 1,
            entering_col + 1,
            choice.ratio,
            choice.candidates.iter().map(|row| row + 1).collect::<Vec<_>>(),
        );
        self.tableau.reduce(choice.row, entering_col)?;

        self.steps.push(PivotStep {
            iteration: self.iteration,
            entering_col,
            leaving_row: choice.row,
            ratio: choice.ratio,
            candidates: choice.candidates,
        });
        self.iteration += 1;
        self.solved = self.tableau.is_optimal();

        Ok(self.status)
    }

    fn extract_solution(&self) -> Solution {
        let basis = Basis::detect(&self.tableau);
        Solution::new(
            self.direction,
            self.status,
            self.solved,
            self.unbounded,
            self.iteration,
            self.tableau.objective_cell(),
            basis.primal_values(&self.tableau),
            basis.is_basic(),
        )
    }
}

impl<P: PivotChooser> Solver for TableauSolver<P> {
    fn solve(&mut self) -> Result<Solution, Error> {
        let sw = Stopwatch::start_new();
        while !self.step()?.is_terminal() {}

        if self.verbose {
            debug!("final tableau:\n{}", self.tableau);
        }
        debug!(
            "{} after {} pivots in {} ms, objective cell: {}",
            self.status,
            self.steps.len(),
            sw.elapsed_ms(),
            self.tableau.objective_cell(),
        );

        Ok(self.extract_solution())
    }
}
