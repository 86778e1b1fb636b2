use super::tableau::Tableau;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ColState {
    /// Basic, with its only nonzero constraint-row entry in the given row.
    Basic(usize),
    NonBasic,
}

/// Basic/non-basic classification of the structural and slack columns.
#[derive(Clone, Debug)]
pub(crate) struct Basis {
    col_states: Vec<ColState>,
}

impl Basis {
    /// A column is basic iff exactly one of its constraint-row entries is nonzero.
    pub fn detect(tableau: &Tableau) -> Basis {
        let num_cols = tableau.num_vars() + tableau.num_constraints();
        let col_states = (0..num_cols)
            .map(|col| {
                let mut nonzero_rows =
                    (0..tableau.num_constraints()).filter(|&row| tableau.get(row, col) != 0.0);
                match (nonzero_rows.next(), nonzero_rows.next()) {
                    (Some(row), None) => ColState::Basic(row),
                    _ => ColState::NonBasic,
                }
            })
            .collect();
        Basis { col_states }
    }

    pub fn is_basic(&self) -> Vec<bool> {
        self.col_states
            .iter()
            .map(|state| matches!(state, ColState::Basic(_)))
            .collect()
    }

    /// Values of the structural variables: the row's right-hand side when basic, else 0.
    pub fn primal_values(&self, tableau: &Tableau) -> Vec<f64> {
        self.col_states[..tableau.num_vars()]
            .iter()
            .map(|state| match *state {
                ColState::Basic(row) => tableau.rhs(row),
                ColState::NonBasic => 0.0,
            })
            .collect()
    }
}
