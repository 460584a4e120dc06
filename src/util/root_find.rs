use tracing::trace;

use crate::error::NumSubjErr;

/// Given a non-decreasing function f(n) on the integers in
/// [lower_bound, upper_bound], finds the smallest n with f(n) >= target.
///
/// Assumes f(upper_bound) >= target; callers check that themselves, since
/// what to do when the target is out of reach depends on the caller.
pub fn root_find_monotonic<F>(
    f: F,
    lower_bound: usize,
    upper_bound: usize,
    target: f64,
) -> Result<usize, NumSubjErr>
where
    F: Fn(usize) -> Result<f64, NumSubjErr>,
{
    if f(lower_bound)? >= target {
        return Ok(lower_bound);
    }

    // f(lo) < target <= f(hi) from here on
    let mut lo = lower_bound;
    let mut hi = upper_bound;
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        let y = f(mid)?;
        trace!(lo, hi, mid, y, "bisection step");
        if y < target {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Ok(hi)
}
