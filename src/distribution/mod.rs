//----------------------------------------
// distribution mod
//----------------------------------------
pub mod central_t;
pub mod error;
pub mod noncentral_t;
pub(crate) mod std_normal;
pub mod types;

use crate::distribution::error::DistributionErr;
use crate::error::NumSubjErr;

// Slack allowed for rounding noise before a probability is rejected
const PROBABILITY_SLACK: f64 = 1e-9;

/// Checks that a value returned by a distribution function is a probability,
/// clamping rounding noise just outside of [0, 1]
pub fn checked_probability(function: &'static str, value: f64) -> Result<f64, NumSubjErr> {
    if value.is_nan() {
        return Err(DistributionErr::NonFinite { function, value }.into());
    }
    if !(-PROBABILITY_SLACK..=1.0 + PROBABILITY_SLACK).contains(&value) {
        return Err(DistributionErr::OutOfRange { function, value }.into());
    }
    Ok(value.clamp(0.0, 1.0))
}
