//----------------------------------------
// table mod types
//----------------------------------------
use serde::Serialize;

use crate::power::types::DesignType;

/// Required sample sizes over a grid of effect sizes (rows) and
/// significance levels (columns). A `None` cell could not reach the target
/// power within `upper_bound` subjects.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct SampleSizeTable {
    pub effect_sizes: Vec<f64>,
    pub alphas: Vec<f64>,
    pub power: f64,
    pub design: DesignType,
    pub upper_bound: usize,
    pub cells: Vec<Vec<Option<usize>>>,
}

impl SampleSizeTable {
    pub fn n_rows(&self) -> usize {
        self.effect_sizes.len()
    }

    pub fn n_cols(&self) -> usize {
        self.alphas.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    /// Rows paired with their effect size, in input order
    pub fn rows(&self) -> impl Iterator<Item = (f64, &[Option<usize>])> {
        self.effect_sizes
            .iter()
            .copied()
            .zip(self.cells.iter().map(Vec::as_slice))
    }
}
