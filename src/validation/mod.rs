//----------------------------------------
// validation mod
//----------------------------------------
//! Entry checks shared by every engine component. All of them fail fast,
//! before any distribution function is evaluated.
pub mod error;

use crate::error::NumSubjErr;
use crate::validation::error::ParameterErr;

/// Minimum sample size for which the t-statistic has positive degrees of
/// freedom under both designs
pub const MIN_SAMPLE_SIZE: usize = 2;

/// Checks that `value` lies in the open interval (0, 1)
pub fn check_open_unit(name: &'static str, value: f64) -> Result<f64, NumSubjErr> {
    if value > 0.0 && value < 1.0 {
        Ok(value)
    } else {
        Err(ParameterErr::ProbabilityOutOfRange { name, value }.into())
    }
}

pub fn check_sample_size(n: usize) -> Result<usize, NumSubjErr> {
    if n < MIN_SAMPLE_SIZE {
        return Err(ParameterErr::SampleSizeTooSmall(n).into());
    }
    Ok(n)
}

pub fn check_effect_size(d: f64) -> Result<f64, NumSubjErr> {
    if !d.is_finite() {
        return Err(ParameterErr::NonFiniteEffectSize(d).into());
    }
    Ok(d)
}

pub fn check_stdev(stdev: f64) -> Result<f64, NumSubjErr> {
    // NaN fails the comparison as well
    if !(stdev > 0.0 && stdev.is_finite()) {
        return Err(ParameterErr::NonPositiveStdev(stdev).into());
    }
    Ok(stdev)
}

pub fn check_comparisons(num_comparisons: usize) -> Result<usize, NumSubjErr> {
    if num_comparisons < 1 {
        return Err(ParameterErr::TooFewComparisons(num_comparisons).into());
    }
    Ok(num_comparisons)
}

pub fn check_degrees_of_freedom(df: f64) -> Result<f64, NumSubjErr> {
    if !(df > 0.0) {
        return Err(ParameterErr::NonPositiveDegreesOfFreedom(df).into());
    }
    Ok(df)
}
