use statrs::distribution::{Continuous, ContinuousCDF, StudentsT};

use crate::error::NumSubjErr;
use crate::validation::check_degrees_of_freedom;
use crate::validation::error::ParameterErr;

fn students_t(df: f64) -> Result<StudentsT, NumSubjErr> {
    let df = check_degrees_of_freedom(df)?;
    StudentsT::new(0.0, 1.0, df)
        .map_err(|_| NumSubjErr::from(ParameterErr::NonPositiveDegreesOfFreedom(df)))
}

const NEWTON_STEPS: usize = 3;

/// Value t such that P(T <= t) = p for a central Student's t with `df`
/// degrees of freedom. The statrs inverse is polished with a few Newton
/// steps on the CDF.
pub fn central_t_quantile(p: f64, df: f64) -> Result<f64, NumSubjErr> {
    if !(p > 0.0 && p < 1.0) {
        return Err(ParameterErr::ProbabilityOutOfRange {
            name: "quantile probability",
            value: p,
        }
        .into());
    }
    let dist = students_t(df)?;
    let mut t = dist.inverse_cdf(p);
    for _ in 0..NEWTON_STEPS {
        let density = dist.pdf(t);
        if !(density > 0.0) {
            break;
        }
        let step = (dist.cdf(t) - p) / density;
        if !step.is_finite() || step == 0.0 {
            break;
        }
        t -= step;
    }
    Ok(t)
}

pub fn central_t_cdf(x: f64, df: f64) -> Result<f64, NumSubjErr> {
    Ok(students_t(df)?.cdf(x))
}
