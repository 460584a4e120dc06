//----------------------------------------
// parameter errors
//----------------------------------------
use crate::error::NumSubjErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterErr {
    #[error("standard deviation should be positive and finite; got {0}")]
    NonPositiveStdev(f64),
    #[error("MOS difference should be finite; got {0}")]
    NonFiniteMosDiff(f64),
    #[error("number of comparisons should be at least 1; got {0}")]
    TooFewComparisons(usize),
    #[error("{name} should be in (0, 1); got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },
    #[error("sample size should be at least 2; got {0}")]
    SampleSizeTooSmall(usize),
    #[error("effect size should be finite; got {0}")]
    NonFiniteEffectSize(f64),
    #[error("degrees of freedom should be positive; got {0}")]
    NonPositiveDegreesOfFreedom(f64),
    #[error("search bounds should satisfy 2 <= lower < upper; got [{lower}, {upper}]")]
    BadSearchBounds { lower: usize, upper: usize },
    #[error("unknown test type {0:?}; expected paired or independent")]
    UnknownDesign(String),
}

impl From<ParameterErr> for NumSubjErr {
    fn from(err: ParameterErr) -> NumSubjErr {
        NumSubjErr::InvalidParameter(err)
    }
}
