use rand::{seq::SliceRandom, SeedableRng};
use rand_pcg::Pcg64;

use super::{min_ratio_rows, most_negative_col, PivotChooser, RowChoice};
use crate::solvers::tableau_simplex::tableau::Tableau;

/// Dantzig entering rule with a minimum-ratio leaving rule whose ties are broken
/// uniformly at random.
///
/// Randomizing among tied rows does not rule out cycling on every degenerate problem;
/// the iteration bound is what ends such runs.
#[derive(Clone, Debug)]
pub struct RandomizedRatio {
    rng: Pcg64,
}

impl RandomizedRatio {
    pub fn seeded(seed: u64) -> Self {
        RandomizedRatio {
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl PivotChooser for RandomizedRatio {
    fn choose_pivot_col(&self, tableau: &Tableau) -> Option<usize> {
        most_negative_col(tableau)
    }

    fn choose_pivot_row(&mut self, tableau: &Tableau, entering_col: usize) -> Option<RowChoice> {
        let (ratio, candidates) = min_ratio_rows(tableau, entering_col)?;
        let row = *candidates.choose(&mut self.rng)?;
        Some(RowChoice {
            row,
            ratio,
            candidates,
        })
    }
}
