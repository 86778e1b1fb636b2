use super::tableau::Tableau;

pub mod randomized_ratio;

/// Outcome of the ratio test for one entering column.
#[derive(Clone, Debug, PartialEq)]
pub struct RowChoice {
    pub row: usize,
    pub ratio: f64,
    /// Every row attaining the minimum ratio, `row` included.
    pub candidates: Vec<usize>,
}

pub trait PivotChooser {
    /// Entering column, or `None` when the objective row has no negative entry.
    fn choose_pivot_col(&self, tableau: &Tableau) -> Option<usize>;
    /// Leaving row for `entering_col`, or `None` when the column is unbounded.
    fn choose_pivot_row(&mut self, tableau: &Tableau, entering_col: usize) -> Option<RowChoice>;
}

/// Most negative reduced cost, lowest index on ties.
pub(crate) fn most_negative_col(tableau: &Tableau) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (col, &val) in tableau.reduced_costs().iter().enumerate() {
        if val >= 0.0 {
            continue;
        }
        match best {
            Some((_, best_val)) if best_val <= val => {}
            _ => best = Some((col, val)),
        }
    }
    best.map(|(col, _)| col)
}

/// Minimum-ratio test over the constraint rows.
///
/// Rows with a zero entry in `col` are skipped, as are ratios that are not strictly
/// positive and finite. Returns the minimum ratio and every row attaining it exactly.
pub(crate) fn min_ratio_rows(tableau: &Tableau, col: usize) -> Option<(f64, Vec<usize>)> {
    let mut best: Option<(f64, Vec<usize>)> = None;
    for row in 0..tableau.num_constraints() {
        let coeff = tableau.get(row, col);
        if coeff == 0.0 {
            continue;
        }
        let ratio = tableau.rhs(row) / coeff;
        if !(ratio > 0.0 && ratio.is_finite()) {
            continue;
        }

        match best.as_mut() {
            Some((best_ratio, rows)) if ratio == *best_ratio => {
                rows.push(row);
                continue;
            }
            Some((best_ratio, _)) if ratio > *best_ratio => continue,
            _ => {}
        }
        best = Some((ratio, vec![row]));
    }
    best
}
