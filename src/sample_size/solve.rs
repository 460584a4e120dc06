use tracing::debug;

use crate::distribution::types::{StatrsT, TDistribution};
use crate::error::NumSubjErr;
use crate::power::power_fcn::power_with;
use crate::power::types::DesignType;
use crate::sample_size::error::SampleSizeErr;
use crate::sample_size::types::SearchBounds;
use crate::util::root_find::root_find_monotonic;
use crate::validation::{check_effect_size, check_open_unit};

/// Smallest sample size in [2, 10000] whose two-tailed t-test reaches
/// `target_power` for effect size `d` at level `alpha`
pub fn solve(
    d: f64,
    alpha: f64,
    target_power: f64,
    design: DesignType,
) -> Result<usize, NumSubjErr> {
    solve_within(&StatrsT, d, alpha, target_power, design, SearchBounds::default())
}

/// Binary search for the smallest n in `bounds` with power(n) >= target.
///
/// Power is symmetric in the sign of `d`, so the search runs on |d|, where
/// power is taken to be non-decreasing in n. Both ends of the range are
/// checked first: if even `bounds.upper` falls short the call fails with
/// `SampleSizeUnattainable`, and if `bounds.lower` already suffices it is
/// returned as is.
pub fn solve_within<D>(
    dist: &D,
    d: f64,
    alpha: f64,
    target_power: f64,
    design: DesignType,
    bounds: SearchBounds,
) -> Result<usize, NumSubjErr>
where
    D: TDistribution + ?Sized,
{
    check_open_unit("target power", target_power)?;
    check_open_unit("alpha", alpha)?;
    let d = check_effect_size(d)?.abs();
    let bounds = bounds.validated()?;

    let power_at = |n: usize| power_with(dist, n, d, alpha, design);

    let achieved_power = power_at(bounds.upper)?;
    if achieved_power < target_power {
        return Err(SampleSizeErr::Unattainable {
            target_power,
            achieved_power,
            upper_bound: bounds.upper,
        }
        .into());
    }

    let n = root_find_monotonic(power_at, bounds.lower, bounds.upper, target_power)?;
    debug!(d, alpha, target_power, %design, n, "solved sample size");
    Ok(n)
}
