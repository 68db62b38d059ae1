use super::*;

/// Equal mass on each of the four moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformPolicy;

impl Policy for UniformPolicy {
    fn probability(&self, _s: State, _a: Action) -> Continous {
        1. / Action::ALL.len() as Continous
    }
}

/// Wraps any `(state, action) -> probability` closure.
pub struct FnPolicy<F>(pub F);

impl<F> Policy for FnPolicy<F>
where
    F: Fn(State, Action) -> Continous,
{
    fn probability(&self, s: State, a: Action) -> Continous {
        (self.0)(s, a)
    }
}

/// Explicit per-state distribution, one row per state in [`Action::ALL`] order.
/// States past the end of the table get no mass.
#[derive(Debug, Clone)]
pub struct TabularPolicy {
    table: Vec<[Continous; 4]>,
}

impl TabularPolicy {
    pub fn from_rows(rows: Vec<Vec<Continous>>) -> Result<Self> {
        let table = rows
            .into_iter()
            .enumerate()
            .map(|(state, row)| {
                <[Continous; 4]>::try_from(row.as_slice()).map_err(|_| {
                    GridError::PolicyShapeMismatch {
                        state,
                        expected: Action::ALL.len(),
                        actual: row.len(),
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { table })
    }

    pub fn n_s(&self) -> usize {
        self.table.len()
    }
}

impl Policy for TabularPolicy {
    fn probability(&self, s: State, a: Action) -> Continous {
        self.table.get(s).map_or(0., |row| row[a.index()])
    }
}
