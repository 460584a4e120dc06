//----------------------------------------
// distribution mod types
//----------------------------------------
use crate::distribution::central_t::central_t_quantile;
use crate::distribution::noncentral_t::noncentral_t_cdf;
use crate::error::NumSubjErr;

/// The special functions the power calculation relies on. Implementations
/// must be pure so table cells can be evaluated concurrently.
pub trait TDistribution {
    /// Quantile of the central Student's t distribution
    fn central_t_quantile(&self, p: f64, df: f64) -> Result<f64, NumSubjErr>;

    /// CDF of the non-central Student's t distribution
    fn noncentral_t_cdf(&self, x: f64, df: f64, ncp: f64) -> Result<f64, NumSubjErr>;
}

/// Central t from statrs, non-central t from the AS 243 series
#[derive(Debug, Default, Clone, Copy)]
pub struct StatrsT;

impl TDistribution for StatrsT {
    fn central_t_quantile(&self, p: f64, df: f64) -> Result<f64, NumSubjErr> {
        central_t_quantile(p, df)
    }

    fn noncentral_t_cdf(&self, x: f64, df: f64, ncp: f64) -> Result<f64, NumSubjErr> {
        noncentral_t_cdf(x, df, ncp)
    }
}
