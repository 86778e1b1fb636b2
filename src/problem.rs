use crate::{helpers::format::linear_expr, solver::ConfigError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptimizationDirection {
    /// Minimize the objective function.
    Minimize,
    /// Maximize the objective function.
    Maximize,
}

/// A linear program `min c'x  st  A x <= b, x >= 0`.
///
/// Every constraint is a `<=` inequality with a non-negative right-hand side, so the
/// all-slack basis is feasible. Nothing here transforms `>=` constraints or free variables.
#[derive(Clone)]
pub struct Problem {
    pub objective: Vec<f64>,
    pub constraints: Vec<Vec<f64>>,
    pub rhs: Vec<f64>,
}

impl std::fmt::Debug for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Only printing lengths here because actual data may be large.
        f.debug_struct("Problem")
            .field("num_vars", &self.objective.len())
            .field("num_constraints", &self.constraints.len())
            .finish()
    }
}

impl Problem {
    /// Create a problem with the given objective coefficients and no constraints.
    pub fn new(objective: Vec<f64>) -> Self {
        Problem {
            objective,
            constraints: vec![],
            rhs: vec![],
        }
    }

    /// Add a `coeffs * x <= rhs` constraint.
    pub fn add_constraint(&mut self, coeffs: impl Into<Vec<f64>>, rhs: f64) {
        self.constraints.push(coeffs.into());
        self.rhs.push(rhs);
    }

    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_dimensions(&self.objective, &self.constraints, &self.rhs)
    }
}

/// Checks that the objective, constraint rows and right-hand side agree in size and
/// that every value is usable by the tableau.
///
/// Rows are reported 0-based; the objective is reported as row `m`.
pub(crate) fn validate_dimensions(
    objective: &[f64],
    constraints: &[Vec<f64>],
    rhs: &[f64],
) -> Result<(), ConfigError> {
    let num_vars = objective.len();
    if num_vars == 0 {
        return Err(ConfigError::NoVariables);
    }
    if rhs.len() != constraints.len() {
        return Err(ConfigError::RhsLength {
            expected: constraints.len(),
            found: rhs.len(),
        });
    }

    for (row, coeffs) in constraints.iter().enumerate() {
        if coeffs.len() != num_vars {
            return Err(ConfigError::ConstraintWidth {
                row,
                expected: num_vars,
                found: coeffs.len(),
            });
        }
        if let Some(col) = coeffs.iter().position(|val| !val.is_finite()) {
            return Err(ConfigError::NonFinite { row, col });
        }
        let b = rhs[row];
        if !b.is_finite() {
            return Err(ConfigError::NonFinite { row, col: num_vars });
        }
        if b < 0.0 {
            return Err(ConfigError::NegativeRhs { row, value: b });
        }
    }

    if let Some(col) = objective.iter().position(|val| !val.is_finite()) {
        return Err(ConfigError::NonFinite {
            row: constraints.len(),
            col,
        });
    }

    Ok(())
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Objective function: {}", linear_expr(&self.objective))?;
        writeln!(f, "Constraints:")?;
        for (coeffs, rhs) in self.constraints.iter().zip(&self.rhs) {
            writeln!(f, "{} <= {}", linear_expr(coeffs), rhs)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> Problem {
        let mut problem = Problem::new(vec![-3.0, -5.0]);
        problem.add_constraint([1.0, 0.0], 4.0);
        problem.add_constraint([0.0, 2.0], 12.0);
        problem.add_constraint([3.0, 2.0], 18.0);
        problem
    }

    #[test]
    fn problem_basic() {
        let problem = example();
        assert_eq!(problem.num_vars(), 2);
        assert_eq!(problem.num_constraints(), 3);
        assert_eq!(problem.rhs, vec![4.0, 12.0, 18.0]);
        assert!(problem.validate().is_ok());
    }

    #[test]
    fn no_constraints_is_valid() {
        assert!(Problem::new(vec![1.0]).validate().is_ok());
    }

    #[test]
    fn empty_objective() {
        assert_eq!(
            Problem::new(vec![]).validate(),
            Err(ConfigError::NoVariables)
        );
    }

    #[test]
    fn constraint_width_mismatch() {
        let mut problem = example();
        problem.add_constraint([1.0, 2.0, 3.0], 1.0);
        assert_eq!(
            problem.validate(),
            Err(ConfigError::ConstraintWidth {
                row: 3,
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn rhs_length_mismatch() {
        let mut problem = example();
        problem.rhs.pop();
        assert_eq!(
            problem.validate(),
            Err(ConfigError::RhsLength {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn negative_rhs() {
        let mut problem = example();
        problem.add_constraint([1.0, 1.0], -1.0);
        assert_eq!(
            problem.validate(),
            Err(ConfigError::NegativeRhs {
                row: 3,
                value: -1.0
            })
        );
    }

    #[test]
    fn non_finite_values() {
        let mut problem = example();
        problem.constraints[1][0] = f64::NAN;
        assert_eq!(
            problem.validate(),
            Err(ConfigError::NonFinite { row: 1, col: 0 })
        );

        let mut problem = example();
        problem.objective[1] = f64::INFINITY;
        assert_eq!(
            problem.validate(),
            Err(ConfigError::NonFinite { row: 3, col: 1 })
        );
    }

    #[test]
    fn summary() {
        let text = example().to_string();
        assert_eq!(
            text,
            "Objective function: -3 x1 - 5 x2\n\
             Constraints:\n\
             x1 <= 4\n\
             2 x2 <= 12\n\
             3 x1 + 2 x2 <= 18\n"
        );
    }
}
