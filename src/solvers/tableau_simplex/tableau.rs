use log::trace;
use ndarray::{s, Array2, ArrayView1, ArrayView2};

use crate::{
    problem::validate_dimensions,
    solver::{ConfigError, Error},
};

/// Dense simplex tableau.
///
/// Layout for `n` variables and `m` constraints, `(m + 1) x (n + m + 2)`:
///
/// ```text
///          x1 .. xn | s1 .. sm | z | b
/// row 0      A      |    I     | 0 | b
///  ..               |          |   |
/// row m      c      |    0     | 1 | 0
/// ```
///
/// The last row is the objective row. Columns `n..=n + m` start out as an identity block.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau {
    cells: Array2<f64>,
    num_vars: usize,
    num_constraints: usize,
}

impl Tableau {
    pub fn build(
        objective: &[f64],
        constraints: &[Vec<f64>],
        rhs: &[f64],
    ) -> Result<Tableau, ConfigError> {
        validate_dimensions(objective, constraints, rhs)?;

        let num_vars = objective.len();
        let num_constraints = constraints.len();
        let mut cells =
            Array2::<f64>::zeros((num_constraints + 1, num_vars + num_constraints + 2));

        for (r, coeffs) in constraints.iter().enumerate() {
            for (c, &coeff) in coeffs.iter().enumerate() {
                cells[[r, c]] = coeff;
            }
            cells[[r, num_vars + num_constraints + 1]] = rhs[r];
        }
        for (c, &coeff) in objective.iter().enumerate() {
            cells[[num_constraints, c]] = coeff;
        }
        for r in 0..=num_constraints {
            cells[[r, num_vars + r]] = 1.0;
        }

        Ok(Tableau {
            cells,
            num_vars,
            num_constraints,
        })
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn num_constraints(&self) -> usize {
        self.num_constraints
    }

    pub fn num_rows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn num_cols(&self) -> usize {
        self.cells.ncols()
    }

    pub fn cells(&self) -> ArrayView2<f64> {
        self.cells.view()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.cells[[row, col]]
    }

    pub fn rhs_col(&self) -> usize {
        self.cells.ncols() - 1
    }

    pub fn rhs(&self, row: usize) -> f64 {
        self.cells[[row, self.rhs_col()]]
    }

    /// The objective row, RHS cell included.
    pub fn objective_row(&self) -> ArrayView1<f64> {
        self.cells.row(self.num_constraints)
    }

    /// The objective row without its RHS cell.
    pub fn reduced_costs(&self) -> ArrayView1<f64> {
        self.cells.slice(s![self.num_constraints, ..self.rhs_col()])
    }

    /// Bottom-right cell. Holds the negated objective value of the current basis.
    pub fn objective_cell(&self) -> f64 {
        self.cells[[self.num_constraints, self.rhs_col()]]
    }

    /// No reduced cost is negative: the current basis is optimal.
    pub fn is_optimal(&self) -> bool {
        self.reduced_costs().iter().all(|&val| val >= 0.0)
    }

    /// One Gauss-Jordan elimination step around `(row, col)`.
    ///
    /// The pivot row is scaled so the pivot becomes 1, then `col` is eliminated from
    /// every other row, the objective row included. On a zero pivot the tableau is
    /// left untouched.
    pub fn reduce(&mut self, row: usize, col: usize) -> Result<(), Error> {
        let pivot = self.cells[[row, col]];
        if pivot == 0.0 {
            return Err(Error::DegeneratePivot { row, col });
        }

        self.cells.row_mut(row).mapv_inplace(|val| val / pivot);
        let pivot_row = self.cells.row(row).to_owned();

        for r in 0..self.cells.nrows() {
            if r == row {
                continue;
            }
            let multiplier = self.cells[[r, col]];
            if multiplier == 0.0 {
                continue;
            }
            trace!(
                "row {} = row {} - {} * row {}",
                r + 1,
                r + 1,
                multiplier,
                row + 1
            );
            self.cells.row_mut(r).scaled_add(-multiplier, &pivot_row);
        }

        Ok(())
    }
}

impl std::fmt::Display for Tableau {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut headers = vec![];
        headers.extend((1..=self.num_vars).map(|i| format!("x{}", i)));
        headers.extend((1..=self.num_constraints).map(|i| format!("s{}", i)));
        headers.push("z".to_string());
        headers.push("b".to_string());

        let rows: Vec<Vec<String>> = self
            .cells
            .outer_iter()
            .map(|row| row.iter().map(|val| format!("{:.4}", val)).collect())
            .collect();

        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(c, header)| {
                rows.iter()
                    .map(|row| row[c].len())
                    .chain(std::iter::once(header.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "|")?;
        for (header, &width) in headers.iter().zip(&widths) {
            write!(f, " {:>width$} |", header, width = width)?;
        }
        writeln!(f)?;
        write!(f, "|")?;
        for &width in &widths {
            write!(f, "{}:|", "-".repeat(width + 1))?;
        }
        writeln!(f)?;
        for row in &rows {
            write!(f, "|")?;
            for (cell, &width) in row.iter().zip(&widths) {
                write!(f, " {:>width$} |", cell, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
