use crate::distribution::checked_probability;
use crate::distribution::types::{StatrsT, TDistribution};
use crate::error::NumSubjErr;
use crate::power::types::DesignType;
use crate::validation::{check_effect_size, check_open_unit, check_sample_size};

/// Power of a two-tailed t-test with `n` subjects (per group for the
/// independent design), effect size `d` and significance level `alpha`
pub fn power(n: usize, d: f64, alpha: f64, design: DesignType) -> Result<f64, NumSubjErr> {
    power_with(&StatrsT, n, d, alpha, design)
}

/// Same as [`power`], with the distribution functions supplied by `dist`.
///
/// The critical value comes from the central t with the design's degrees of
/// freedom; power is the mass the non-central t puts beyond +/- that value.
pub fn power_with<D>(
    dist: &D,
    n: usize,
    d: f64,
    alpha: f64,
    design: DesignType,
) -> Result<f64, NumSubjErr>
where
    D: TDistribution + ?Sized,
{
    check_sample_size(n)?;
    check_open_unit("alpha", alpha)?;
    check_effect_size(d)?;

    let df = design.degrees_of_freedom(n);
    let ncp = design.noncentrality(n, d);
    let t_crit = dist.central_t_quantile(1.0 - alpha / 2.0, df)?;

    let cdf_upper = dist.noncentral_t_cdf(t_crit, df, ncp)?;
    let cdf_upper = checked_probability("noncentral_t_cdf", cdf_upper)?;
    let cdf_lower = dist.noncentral_t_cdf(-t_crit, df, ncp)?;
    let cdf_lower = checked_probability("noncentral_t_cdf", cdf_lower)?;

    checked_probability("power", (1.0 - cdf_upper) + cdf_lower)
}
