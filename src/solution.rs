use crate::{
    helpers::format::linear_expr, problem::OptimizationDirection,
    solvers::tableau_simplex::Status,
};

/// Final state of a run: the primal values and the objective read off the last tableau.
///
/// Values are meaningful as an optimum only when [`Solution::is_solved`] holds.
#[derive(Clone, Debug)]
pub struct Solution {
    direction: OptimizationDirection,
    status: Status,
    solved: bool,
    unbounded: bool,
    iterations: usize,
    objective_cell: f64,
    optimal_vars: Vec<f64>,
    basic: Vec<bool>,
}

impl Solution {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        direction: OptimizationDirection,
        status: Status,
        solved: bool,
        unbounded: bool,
        iterations: usize,
        objective_cell: f64,
        optimal_vars: Vec<f64>,
        basic: Vec<bool>,
    ) -> Self {
        Solution {
            direction,
            status,
            solved,
            unbounded,
            iterations,
            objective_cell,
            optimal_vars,
            basic,
        }
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

    pub fn is_iteration_limited(&self) -> bool {
        self.status == Status::MaxIterationsReached
    }

    /// Value of the iteration counter when the loop halted. It starts at 1.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Raw bottom-right tableau cell.
    pub fn objective_cell(&self) -> f64 {
        self.objective_cell
    }

    /// Objective function evaluated at [`Solution::values`], in the caller's direction.
    pub fn objective_value(&self) -> f64 {
        // The minimized objective is the negated bottom-right cell.
        match self.direction {
            OptimizationDirection::Minimize => -self.objective_cell,
            OptimizationDirection::Maximize => self.objective_cell,
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.optimal_vars
    }

    pub fn var_value(&self, var: usize) -> f64 {
        assert!(var < self.optimal_vars.len());
        self.optimal_vars[var]
    }

    /// Basic flags for the structural then slack columns.
    pub fn basic(&self) -> &[bool] {
        &self.basic
    }

    /// The point as a linear expression, e.g. `2 x1 + 6 x2`.
    pub fn to_expr(&self) -> String {
        linear_expr(&self.optimal_vars)
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.solved {
            return write!(f, "Not solved: {}", self.status);
        }
        let terms: Vec<String> = self
            .optimal_vars
            .iter()
            .enumerate()
            .map(|(idx, val)| format!("x{} = {}", idx + 1, val))
            .collect();
        write!(f, "{}; objective = {}", terms.join(", "), self.objective_value())
    }
}
