use rayon::prelude::*;
use tracing::{debug, info};

use crate::distribution::types::{StatrsT, TDistribution};
use crate::error::NumSubjErr;
use crate::power::types::DesignType;
use crate::sample_size::solve::solve_within;
use crate::sample_size::types::SearchBounds;
use crate::table::types::SampleSizeTable;
use crate::validation::{check_effect_size, check_open_unit};

pub const DEFAULT_ALPHAS: [f64; 8] = [0.05, 0.01, 0.005, 0.001, 0.0005, 0.0001, 0.00005, 0.00001];

/// 0.2, 0.3, ..., 2.4
pub fn default_effect_sizes() -> Vec<f64> {
    (2..=24).map(|i| i as f64 / 10.0).collect()
}

pub fn default_alphas() -> Vec<f64> {
    DEFAULT_ALPHAS.to_vec()
}

pub fn generate_table(
    d_values: &[f64],
    alpha_values: &[f64],
    target_power: f64,
    design: DesignType,
) -> Result<SampleSizeTable, NumSubjErr> {
    generate_table_with(
        &StatrsT,
        d_values,
        alpha_values,
        target_power,
        design,
        SearchBounds::default(),
    )
}

/// Solves every (effect size, alpha) cell independently and in parallel.
/// Row and column order follow `d_values` and `alpha_values`.
pub fn generate_table_with<D>(
    dist: &D,
    d_values: &[f64],
    alpha_values: &[f64],
    target_power: f64,
    design: DesignType,
    bounds: SearchBounds,
) -> Result<SampleSizeTable, NumSubjErr>
where
    D: TDistribution + Sync + ?Sized,
{
    check_open_unit("target power", target_power)?;
    for &d in d_values {
        check_effect_size(d)?;
    }
    for &alpha in alpha_values {
        check_open_unit("alpha", alpha)?;
    }
    let bounds = bounds.validated()?;

    let cells = d_values
        .par_iter()
        .map(|&d| {
            alpha_values
                .par_iter()
                .map(|&alpha| {
                    match solve_within(dist, d, alpha, target_power, design, bounds) {
                        Ok(n) => Ok(Some(n)),
                        Err(NumSubjErr::SampleSizeUnattainable(err)) => {
                            debug!(d, alpha, %err, "cell left empty");
                            Ok(None)
                        }
                        Err(err) => Err(err),
                    }
                })
                .collect::<Result<Vec<_>, NumSubjErr>>()
        })
        .collect::<Result<Vec<_>, NumSubjErr>>()?;

    info!(
        rows = d_values.len(),
        cols = alpha_values.len(),
        %design,
        "generated sample size table"
    );
    Ok(SampleSizeTable {
        effect_sizes: d_values.to_vec(),
        alphas: alpha_values.to_vec(),
        power: target_power,
        design,
        upper_bound: bounds.upper,
        cells,
    })
}
